//! Site configuration.
//!
//! A flat TOML file supplies the site name, URL, template root and theme:
//!
//! ```toml
//! site_name = "My Gallery"
//! site_url = "https://gallery.example"
//! templates_root = "/srv/gallery/templates"
//! theme = "dark"
//! ```

use serde::Deserialize;
use shutter_template::ThemeStore;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading site configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Site-wide configuration: theme name and site paths.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    /// Display name of the gallery site.
    pub site_name: String,

    /// Base URL of the site, used by handlers when building links.
    #[serde(default)]
    pub site_url: String,

    /// Directory containing one subdirectory per theme.
    pub templates_root: PathBuf,

    /// Theme subdirectory to load templates from.
    #[serde(default = "default_theme")]
    pub theme: String,

    /// File extension for template names given without one.
    #[serde(default = "default_template_ext")]
    pub template_ext: String,
}

fn default_theme() -> String {
    "default".to_string()
}

fn default_template_ext() -> String {
    "html".to_string()
}

impl SiteConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&text)?)
    }

    /// Build the template store for the configured theme.
    pub fn store(&self) -> ThemeStore {
        ThemeStore::new(self.templates_root.clone(), self.theme.clone())
            .with_extension(self.template_ext.clone())
    }
}
