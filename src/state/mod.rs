//! Application state management module.
//!
//! This module contains the state shared between the UI and network threads:
//! - Main `State` struct that holds all application data
//! - Navigation (view stack and focus subscriptions)
//! - Toast notifications
//! - State error handling

mod error;
mod navigation;
mod state_impl;
mod toast;

pub use error::StateError;
pub use navigation::{FocusSubscription, Navigate, Navigator, View};
pub use state_impl::State;
pub use toast::{Icon, IconPosition, Notification, NotificationKind, Notify, Toast, Toasts};
