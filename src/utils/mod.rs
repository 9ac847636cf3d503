//! Utility functions and helpers.
//!
//! This module contains small helpers used by the post list rendering.

pub mod text;
