use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

/// Site config embedded at build time
const SITE_YAML: &str = include_str!("../site.yaml");

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid site config: {0}")]
    Parse(#[from] serde_yaml::Error),
}

fn default_true() -> bool {
    true
}

/// `site.yaml` structure
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SiteConfig {
    pub title: String,
    #[serde(default)]
    pub tagline: Option<String>,
    /// Show tag chips above the illustrations gallery
    #[serde(default = "default_true")]
    pub show_tag_filter: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Portfolio".to_string(),
            tagline: None,
            show_tag_filter: true,
        }
    }
}

impl SiteConfig {
    pub fn from_yaml(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(source)?)
    }

    /// Load the embedded config, falling back to defaults if it doesn't parse.
    pub fn load() -> Self {
        match Self::from_yaml(SITE_YAML) {
            Ok(config) => config,
            Err(e) => {
                warn!("{e}, using default site config");
                Self::default()
            }
        }
    }
}
