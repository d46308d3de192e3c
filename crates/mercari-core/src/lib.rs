pub mod app_config;
pub mod brands;
pub mod config;
pub mod items;

pub use app_config::AppConfig;
pub use brands::{BrandImage, BrandItem};
pub use config::{load_app_config, load_app_config_from_env};
pub use items::{ItemImage, ItemRecord};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
