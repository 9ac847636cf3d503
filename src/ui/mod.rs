//! User interface module.
//!
//! This module handles all UI rendering using the `ratatui` library, including:
//! - Terminal layout and the log pane
//! - Theme management
//! - Widget components (spinner, styling)
//! - View rendering (post list, add-post form, toasts)

type Frame<'a> = ratatui::Frame<'a>;

mod render;
mod theme;
mod widgets;

pub const SPINNER_FRAME_COUNT: usize = widgets::spinner::FRAMES.len();

pub use render::render;
pub use theme::Theme;
