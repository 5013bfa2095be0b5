pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::storage::LocalStorage;
pub use config::{toml_config::TomlConfig, DisplaySettings};
pub use core::{
    engine::RenderEngine,
    formatter::BlogListFormatter,
    pipeline::{BlogPagePipeline, PageBuilder},
};
pub use utils::error::{Result, StorefrontError};
