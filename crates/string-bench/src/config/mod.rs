//! Configuration management
//!
//! Supports configuration loading with precedence: CLI > file > defaults.
//! `RUST_LOG`, when set, takes over the log filter.

mod builder;
mod file;

pub use builder::{Config, ConfigBuilder, LoggingConfig};

use crate::Result;

/// Load configuration from a specific file path
pub fn load_config_from_path(path: &std::path::Path) -> Result<ConfigBuilder> {
    file::load_from_file(path, ConfigBuilder::new())
}
