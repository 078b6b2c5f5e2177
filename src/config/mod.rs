//! TOML configuration for the sample apps.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, CounterConfig, FinderConfig, UiConfig};
