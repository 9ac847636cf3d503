//! Screens that own their own state.
//!
//! - `add_post`: the draft post form and its submission lifecycle
//! - `image_picker`: file based image selection used by the form

mod add_post;
mod error;
mod image_picker;

pub use add_post::{post_created_notification, AddPostScreen, FormField, SubmitOutcome};
pub use image_picker::PickedImage;
