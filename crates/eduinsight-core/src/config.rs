use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Scraping service the form posts to.
pub const DEFAULT_ENDPOINT: &str = "https://aitmeduinsight.up.railway.app/";

/// Name the returned workbook is saved under.
pub const DEFAULT_OUTPUT_FILENAME: &str = "VTU_Results.xlsx";

const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 30;

fn default_output_filename() -> String {
    DEFAULT_OUTPUT_FILENAME.to_string()
}

fn default_connect_timeout_secs() -> u64 {
    DEFAULT_CONNECT_TIMEOUT_SECS
}

/// Global configuration loaded from `~/.config/eduinsight/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsightConfig {
    /// URL of the scraping service.
    pub endpoint: String,
    /// File name for the saved spreadsheet (no directories).
    #[serde(default = "default_output_filename")]
    pub output_filename: String,
    /// Seconds allowed for establishing the connection.
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    /// Overall request limit in seconds. Scrapes of large ranges take minutes,
    /// so the default is to wait for the service indefinitely.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    /// Optional User-Agent override.
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl Default for InsightConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            output_filename: default_output_filename(),
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            timeout_secs: None,
            user_agent: None,
        }
    }
}

impl InsightConfig {
    /// Rejects endpoints that are not http(s) URLs and output names with directories.
    pub fn validate(&self) -> Result<()> {
        let endpoint = url::Url::parse(&self.endpoint)
            .with_context(|| format!("invalid endpoint URL: {}", self.endpoint))?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            anyhow::bail!(
                "endpoint must use http or https, got {}: {}",
                endpoint.scheme(),
                self.endpoint
            );
        }

        let name = Path::new(&self.output_filename);
        if self.output_filename.is_empty()
            || name.file_name() != Some(name.as_os_str())
            || self.output_filename == ".."
        {
            anyhow::bail!(
                "output_filename must be a plain file name, got {:?}",
                self.output_filename
            );
        }
        Ok(())
    }

    pub fn user_agent(&self) -> String {
        self.user_agent
            .clone()
            .unwrap_or_else(|| format!("eduinsight/{}", env!("CARGO_PKG_VERSION")))
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("eduinsight")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<InsightConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = InsightConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from(&path)
}

/// Load and validate configuration from `path`.
pub fn load_from(path: &Path) -> Result<InsightConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: InsightConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("config {}", path.display()))?;
    Ok(cfg)
}
