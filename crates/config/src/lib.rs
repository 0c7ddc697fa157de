#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

#[macro_use]
mod macros;

pub mod platform;
pub mod version;

pub use platform::{PLATFORM_NAME, Platform, platform_name};
pub use version::{APP_VERSION, AppVersion, app_version};
