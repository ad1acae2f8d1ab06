//! Configuration file loading for afdstats
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `AFDSTATS_*` environment variables (`__` separates sections)
//! 2. `--config <path>` specified file
//! 3. Project root: `./afdstats.toml` or `./.afdstats.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/afdstats/config.toml`
//! 5. Fallback: `~/.config/afdstats/config.toml`
//! 6. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileAnalysisConfig, FileConfig, FileOutputConfig, FileOutputFormat,
    FileWikiConfig,
};
pub use loader::ConfigLoader;
