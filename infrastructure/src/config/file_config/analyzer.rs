//! Text analyzer configuration from TOML (`[analyzer]` section)

use serde::{Deserialize, Serialize};

/// Raw analyzer configuration from TOML
///
/// ```toml
/// [analyzer]
/// extra_stop_words = ["please", "kindly"]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAnalyzerConfig {
    /// Words excluded from keywords on top of the built-in list
    pub extra_stop_words: Vec<String>,
}
