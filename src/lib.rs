pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, LogFormat};

pub use adapters::HeadlessViewport;
pub use config::storage::LocalStorage;
pub use config::toml_config::SiteConfig;
pub use crate::core::{
    pipeline::StaticSitePipeline, replay::ScrollReplay, session::PageSession, site::SiteEngine,
};
pub use utils::error::{Result, SiteError};
