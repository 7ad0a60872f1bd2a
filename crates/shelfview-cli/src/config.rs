use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use shelfview_client::{DEFAULT_BASE_URL, HttpSourceConfig};
use shelfview_types::{PageSize, PageSizeChoices};
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_ENV: &str = "SHELFVIEW_CONFIG";

/// Resolve the config file path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. SHELFVIEW_CONFIG environment variable (with tilde expansion)
/// 3. Platform config directory (`~/.config/shelfview/config.toml` on Linux)
/// 4. ~/.shelfview/config.toml (fallback without a config directory)
pub fn resolve_config_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV) {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join("shelfview").join("config.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        return Ok(home.join(".shelfview").join("config.toml"));
    }

    Err(anyhow!(
        "Could not determine config path: no HOME or config directory found"
    ))
}

/// Directory for the interactive dashboard's log file
pub fn data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("shelfview"))
        .or_else(|| dirs::home_dir().map(|home| home.join(".shelfview")))
        .unwrap_or_else(|| PathBuf::from(".shelfview"))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    #[serde(default = "default_page_sizes")]
    pub page_sizes: Vec<usize>,

    #[serde(default = "default_currency")]
    pub currency: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            page_sizes: default_page_sizes(),
            currency: default_currency(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_page_size() -> usize {
    5
}

fn default_page_sizes() -> Vec<usize> {
    vec![5, 10, 20, 50]
}

fn default_currency() -> String {
    "VND".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub display: DisplayConfig,
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;
        Ok(())
    }

    /// Default page size and the selector choices (which always include it)
    pub fn pagination(&self) -> Result<(PageSize, PageSizeChoices)> {
        let page_size = PageSize::new(self.display.page_size).context("display.page_size")?;
        let choices = PageSizeChoices::new(&self.display.page_sizes)
            .context("display.page_sizes")?
            .including(page_size);
        Ok((page_size, choices))
    }

    /// HTTP source settings, with `api_url` taking precedence over the file
    pub fn http_source(&self, api_url: Option<&str>) -> HttpSourceConfig {
        let defaults = HttpSourceConfig::default();
        HttpSourceConfig {
            base_url: api_url.unwrap_or(&self.api.base_url).to_string(),
            timeout: Duration::from_secs(self.api.timeout_secs),
            user_agent: self.api.user_agent.clone().unwrap_or(defaults.user_agent),
        }
    }
}
