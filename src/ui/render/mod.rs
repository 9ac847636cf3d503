mod add_post;
mod all;
mod all_posts;
mod footer;
mod log;
mod toast;

use super::*;

pub use all::all as render;
