//! User configuration infrastructure module

mod service;

pub use service::{CreateUserConfigRequest, UserConfigService, UserConfigSettings, USER_NOT_FOUND};
