use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// The demo key Neynar publishes for trying the hub out. Real deployments
/// set their own key in the config file.
const DEFAULT_API_KEY: &str = "NEYNAR_FROG_FM";
const DEFAULT_BASE_URL: &str = "https://hub-api.neynar.com";
const DEFAULT_PAGE_SIZE: u32 = 1000;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub hub: HubConfig,
    pub gallery: GalleryConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HubConfig {
    pub api_key: String,
    pub base_url: String,
    pub page_size: u32,
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            api_key: DEFAULT_API_KEY.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    pub output: PathBuf,
    pub title: String,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from("gallery.html"),
            title: "Cast Image Gallery".to_string(),
        }
    }
}

/// Load the configuration. An explicitly given path must exist and parse;
/// without one, the default location is tried and a missing file falls
/// back to the built-in defaults.
pub fn load(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => read_config(path),
        None => match default_path() {
            Some(path) if path.exists() => read_config(&path),
            _ => Ok(Config::default()),
        },
    }
}

fn read_config(path: &Path) -> Result<Config> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config: Config =
        toml::from_str(&raw).with_context(|| format!("malformed config {}", path.display()))?;
    Ok(config)
}

fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("castgallery").join("config.toml"))
}
