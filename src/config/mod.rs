//! Application configuration: TOML file with sane defaults, API keys
//! resolved from the environment at client construction time.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, ImageServiceConfig, StorageConfig, WordServiceConfig};
