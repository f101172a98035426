//! Application configuration for categorytree.
//!
//! User config lives at `~/.categorytree/categorytree.toml`.
//! CLI flags override config file values, which override defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{CategoryTreeError, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "categorytree.toml";

/// Default config directory name under the user's home.
const CONFIG_DIR_NAME: &str = ".categorytree";

/// Up to this many top-level categories are all shown on the home page.
pub const MAX_CATEGORIES_TO_SHOW: usize = 5;

/// Number of leading categories shown when none is flagged explicitly.
pub const DEFAULT_CATEGORIES_TO_SHOW: usize = 3;

// ---------------------------------------------------------------------------
// Config structs (matching categorytree.toml schema)
// ---------------------------------------------------------------------------

/// Top-level application config, deserialized from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Content API settings.
    #[serde(default)]
    pub api: ApiConfig,

    /// Home-page selection thresholds.
    #[serde(default)]
    pub home: HomeConfig,
}

/// `[api]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Categories endpoint. Unset means a source must be given on the command line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// HTTP request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            url: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    10
}

impl ApiConfig {
    /// Parse the configured endpoint, if any.
    pub fn endpoint(&self) -> Result<Option<Url>> {
        self.url
            .as_deref()
            .map(|raw| {
                Url::parse(raw).map_err(|e| {
                    CategoryTreeError::config(format!("invalid [api] url '{raw}': {e}"))
                })
            })
            .transpose()
    }
}

/// `[home]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeConfig {
    /// Sibling lists at or below this length are shown in full.
    #[serde(default = "default_max_categories_to_show")]
    pub max_categories_to_show: usize,

    /// How many leading categories to show when nothing is flagged.
    #[serde(default = "default_default_categories_to_show")]
    pub default_categories_to_show: usize,
}

impl Default for HomeConfig {
    fn default() -> Self {
        Self {
            max_categories_to_show: default_max_categories_to_show(),
            default_categories_to_show: default_default_categories_to_show(),
        }
    }
}

fn default_max_categories_to_show() -> usize {
    MAX_CATEGORIES_TO_SHOW
}
fn default_default_categories_to_show() -> usize {
    DEFAULT_CATEGORIES_TO_SHOW
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Get the path to the config directory (`~/.categorytree/`).
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| CategoryTreeError::config("could not determine home directory"))?;
    Ok(home.join(CONFIG_DIR_NAME))
}

/// Get the path to the config file (`~/.categorytree/categorytree.toml`).
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Load the application config from disk. Returns defaults if the file does not exist.
pub fn load_config() -> Result<AppConfig> {
    let path = config_file_path()?;

    if !path.exists() {
        tracing::debug!(?path, "config file not found, using defaults");
        return Ok(AppConfig::default());
    }

    load_config_from(&path)
}

/// Load the application config from a specific file path.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| CategoryTreeError::io(path, e))?;

    let config: AppConfig = toml::from_str(&content).map_err(|e| {
        CategoryTreeError::config(format!("failed to parse {}: {e}", path.display()))
    })?;

    validate_home_config(&config.home)?;
    Ok(config)
}

/// Create the config directory and write a default config file.
/// Returns the path to the created file.
pub fn init_config() -> Result<PathBuf> {
    let dir = config_dir()?;
    std::fs::create_dir_all(&dir).map_err(|e| CategoryTreeError::io(&dir, e))?;

    let path = dir.join(CONFIG_FILE_NAME);
    let config = AppConfig::default();
    let content =
        toml::to_string_pretty(&config).map_err(|e| CategoryTreeError::config(e.to_string()))?;

    std::fs::write(&path, content).map_err(|e| CategoryTreeError::io(&path, e))?;
    tracing::info!(?path, "created default config file");

    Ok(path)
}

/// Reject thresholds where the fallback selection exceeds the show-all limit.
pub fn validate_home_config(home: &HomeConfig) -> Result<()> {
    if home.default_categories_to_show > home.max_categories_to_show {
        return Err(CategoryTreeError::config(format!(
            "default_categories_to_show ({}) must not exceed max_categories_to_show ({})",
            home.default_categories_to_show, home.max_categories_to_show
        )));
    }
    Ok(())
}
