pub mod app_config;
pub mod category;
pub mod config;
pub mod products;

pub use app_config::{AppConfig, Environment};
pub use category::{Category, CATEGORY_KEYWORDS, DEFAULT_CATEGORY};
pub use config::{load_app_config, load_app_config_from_env};
pub use products::{Platform, ProductRecord, RawProductFields};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
