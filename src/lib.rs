pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{http::HttpSkipSource, storage::LocalStorage};
pub use config::{toml_config::TomlConfig, DisplaySettings};
pub use core::{engine::SkipEngine, page::SkipPage, transform::transform_skips};
pub use utils::error::{Result, SkipError};
