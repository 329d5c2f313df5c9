//! Configuration file loading for neuroform
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `NEUROFORM_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./neuroform.toml` or `./.neuroform.toml`
//! 4. Global: `$XDG_CONFIG_HOME/neuroform/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileAnalyzerConfig, FileConfig, FileLoggingConfig, FileOutputConfig,
    FileRankingConfig, FileSentimentConfig, SentimentBackendKind,
};
pub use loader::ConfigLoader;
