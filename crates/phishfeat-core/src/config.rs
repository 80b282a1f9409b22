use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// WHOIS client parameters (optional section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WhoisConfig {
    /// How many referrals to follow after the first server answers.
    pub follow: u16,
    /// Optional JSON server table replacing the built-in one.
    #[serde(default)]
    pub servers_path: Option<PathBuf>,
}

impl Default for WhoisConfig {
    fn default() -> Self {
        Self {
            follow: 1,
            servers_path: None,
        }
    }
}

/// Global configuration loaded from `~/.config/phishfeat/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhishfeatConfig {
    /// Number of URLs extracted concurrently.
    pub workers: usize,
    /// Per-call timeout in seconds for each WHOIS query and HTTP request.
    pub timeout_secs: u64,
    /// Default input CSV (must have a `URL` column).
    pub input_path: PathBuf,
    /// Default output CSV.
    pub output_path: PathBuf,
    /// Traffic-rank endpoint; the URL under test is appended percent-encoded.
    pub traffic_endpoint: String,
    /// User-Agent sent with page and traffic requests.
    pub user_agent: String,
    /// Optional WHOIS settings; if missing, built-in defaults are used.
    #[serde(default)]
    pub whois: Option<WhoisConfig>,
}

impl Default for PhishfeatConfig {
    fn default() -> Self {
        Self {
            workers: 10,
            timeout_secs: 5,
            input_path: PathBuf::from("dataset3.csv"),
            output_path: PathBuf::from("extracted3.csv"),
            traffic_endpoint: "http://data.alexa.com/data?cli=10&dat=s&url=".to_string(),
            user_agent: concat!("phishfeat/", env!("CARGO_PKG_VERSION")).to_string(),
            whois: None,
        }
    }
}

impl PhishfeatConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }

    pub fn whois_or_default(&self) -> WhoisConfig {
        self.whois.clone().unwrap_or_default()
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("phishfeat")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<PhishfeatConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = PhishfeatConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: PhishfeatConfig = toml::from_str(&data)?;
    Ok(cfg)
}
