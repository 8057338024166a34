//! # Configuration Module
//!
//! Provides the site configuration consumed by the footer: the base URL the
//! site is served under, the optional docs sub-path, the copyright notice and
//! the site title. Configuration can be assembled from a TOML (or JSON) file,
//! environment variables and programmatic overrides.
//!
//! ## Example
//!
//! ```rust,no_run
//! use sitefooter::core::config::ConfigBuilder;
//!
//! let config = ConfigBuilder::new()
//!     .with_file("siteConfig.toml")
//!     .with_env_prefix("SITEFOOTER_")
//!     .with_override("docs_url", "docs")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.docs_url.as_deref(), Some("docs"));
//! ```

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use toml::Value as TomlValue;

use crate::{Result, SiteFooterError};

/// Site name shown on the footer's home link when none is configured.
pub const DEFAULT_TITLE: &str = "CaseApp";

/// Keys accepted by environment and programmatic overrides.
const CONFIG_KEYS: &[&str] = &[
    "base_url",
    "baseurl",
    "docs_url",
    "docsurl",
    "copyright",
    "title",
];

/// Site configuration supplied by the site-assembly pipeline.
///
/// The footer only ever reads this value. Keys are snake_case, with the
/// camelCase spellings (`baseUrl`, `docsUrl`) accepted as aliases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Root path or origin the site is served under, usually ending in `/`.
    #[serde(default, alias = "baseUrl")]
    pub base_url: String,

    /// Optional path segment under which documentation pages live.
    #[serde(default, alias = "docsUrl")]
    pub docs_url: Option<String>,

    /// Copyright notice rendered verbatim at the bottom of the footer.
    #[serde(default)]
    pub copyright: Option<String>,

    /// Site name used as the label of the home link.
    #[serde(default = "default_title")]
    pub title: String,
}

impl SiteConfig {
    /// Creates a configuration with the given base URL and no optional parts.
    pub fn new<S: Into<String>>(base_url: S) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Sets the docs sub-path.
    pub fn with_docs_url<S: Into<String>>(mut self, docs_url: S) -> Self {
        self.docs_url = Some(docs_url.into());
        self
    }

    /// Sets the copyright notice.
    pub fn with_copyright<S: Into<String>>(mut self, copyright: S) -> Self {
        self.copyright = Some(copyright.into());
        self
    }

    /// Sets the site title.
    pub fn with_title<S: Into<String>>(mut self, title: S) -> Self {
        self.title = title.into();
        self
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            docs_url: None,
            copyright: None,
            title: default_title(),
        }
    }
}

/// Builds a `SiteConfig` from a file, environment variables and overrides.
///
/// Layers are applied in that order, so overrides win over environment
/// variables, which win over the file.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config_file: Option<PathBuf>,
    env_prefix: Option<String>,
    overrides: Vec<(String, TomlValue)>,
}

impl ConfigBuilder {
    /// Initialises a new `ConfigBuilder` with no sources.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a configuration file. Files ending in `.json` are parsed as JSON,
    /// anything else as TOML.
    pub fn with_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Adds a prefix for environment variables overriding configuration
    /// values, e.g. `SITEFOOTER_` for `SITEFOOTER_BASE_URL`.
    pub fn with_env_prefix<S: Into<String>>(
        mut self,
        prefix: S,
    ) -> Self {
        self.env_prefix = Some(prefix.into());
        self
    }

    /// Adds a key-value pair overriding a configuration value.
    pub fn with_override<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<TomlValue>,
    {
        self.overrides.push((key.into(), value.into()));
        self
    }

    /// Builds the final configuration by applying every layer in order.
    pub fn build(self) -> Result<SiteConfig> {
        let mut config = match &self.config_file {
            Some(path) => load_from_file(path)?,
            None => SiteConfig::default(),
        };

        if let Some(prefix) = &self.env_prefix {
            apply_env_overrides(&mut config, prefix)?;
        }

        for (key, value) in &self.overrides {
            apply_config_value(&mut config, key, value)?;
        }

        if config.base_url.is_empty() {
            warn!("No base URL configured; footer links will be relative to the current page");
        }
        debug!("Loaded site configuration: {:?}", config);

        Ok(config)
    }
}

// Internal helper functions

fn load_from_file(path: &Path) -> Result<SiteConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        SiteFooterError::config_error(
            format!("Failed to read config file: {}", e),
            Some(path.to_path_buf()),
        )
    })?;

    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map_or(false, |ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        serde_json::from_str(&content).map_err(|e| {
            SiteFooterError::config_error(
                format!("Failed to parse config file: {}", e),
                Some(path.to_path_buf()),
            )
        })
    } else {
        toml::from_str(&content).map_err(|e| {
            SiteFooterError::config_error(
                format!("Failed to parse config file: {}", e),
                Some(path.to_path_buf()),
            )
        })
    }
}

fn apply_env_overrides(config: &mut SiteConfig, prefix: &str) -> Result<()> {
    for (key, value) in env::vars() {
        if let Some(stripped) = key.strip_prefix(prefix) {
            let config_key =
                stripped.trim_start_matches('_').to_lowercase();
            if !is_config_key(&config_key) {
                warn!("Ignoring unknown environment override {}", key);
                continue;
            }
            apply_config_value(
                config,
                &config_key,
                &TomlValue::String(value),
            )?;
        }
    }
    Ok(())
}

fn is_config_key(key: &str) -> bool {
    CONFIG_KEYS.contains(&key)
}

fn apply_config_value(
    config: &mut SiteConfig,
    key: &str,
    value: &TomlValue,
) -> Result<()> {
    let value = match value {
        TomlValue::String(s) => s.clone(),
        other => other.to_string(),
    };
    match key {
        "base_url" | "baseurl" => config.base_url = value,
        "docs_url" | "docsurl" => config.docs_url = Some(value),
        "copyright" => config.copyright = Some(value),
        "title" => config.title = value,
        _ => {
            return Err(SiteFooterError::config_error(
                format!("Unknown configuration key: {}", key),
                None,
            ));
        }
    }
    Ok(())
}

// Default value functions
fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}
