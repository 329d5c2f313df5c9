//! Layered config discovery: defaults, global file, project file, explicit
//! file, environment.

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

/// Project-level config file names, checked in order
const PROJECT_FILES: [&str; 2] = ["neuroform.toml", ".neuroform.toml"];

/// Prefix of environment overrides; `__` separates section and key
/// (`NEUROFORM_RANKING__CONFIDENCE_THRESHOLD=0.7`)
const ENV_PREFIX: &str = "NEUROFORM_";

/// Finds config files and merges them into one [`FileConfig`]
pub struct ConfigLoader;

impl ConfigLoader {
    /// Merge every available source into a [`FileConfig`]
    ///
    /// Later sources win; listed here from strongest to weakest:
    /// 1. `NEUROFORM_*` environment variables
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./neuroform.toml` or `./.neuroform.toml`
    /// 4. Global: `$XDG_CONFIG_HOME/neuroform/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, Box<figment::Error>> {
        Self::figment(config_path).extract().map_err(Box::new)
    }

    fn figment(config_path: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(&global_path));
            }
        }

        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(&path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Built-in defaults, ignoring every file and variable (`--no-config`)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Per-user config file
    ///
    /// `$XDG_CONFIG_HOME/neuroform/config.toml` when set, otherwise the
    /// platform config directory.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("neuroform").join("config.toml"))
    }

    /// First project config file present in the working directory
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// List each source and whether it was found (`--show-config`)
    pub fn print_config_sources(config_path: Option<&Path>) {
        println!("Configuration sources (in priority order):");

        println!("  [ENV  ] Environment: {}*", ENV_PREFIX);

        if let Some(path) = config_path {
            let mark = if path.exists() { "FOUND" } else { "MISS " };
            println!("  [{}] Explicit: {}", mark, path.display());
        }

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./neuroform.toml or ./.neuroform.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}
