//! Configuration: parse behaviour and logging, loaded from TOML.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, LogConfig, ParseConfig};
