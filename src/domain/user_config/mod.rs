//! User configuration domain

mod entity;
mod status;

pub use entity::{is_truthy, UserConfig, UserId};
pub use status::ActiveStatusParse;
