//! Optional TOML configuration.
//!
//! ```toml
//! [source]
//! base_url = "http://localhost:3000"
//! timeout_secs = 30
//!
//! [chart]
//! title = "Total ETP Recovery & Total ETP RO Recovery %"
//! width = 1000
//! height = 600
//! locale = "en"
//! ```
//!
//! Every key is optional.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::api::{Client, DEFAULT_BASE_URL};
use crate::chart::DEFAULT_TITLE;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    pub source: SourceConfig,
    pub chart: ChartConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SourceConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub locale: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            width: 1000,
            height: 600,
            locale: "en".to_string(),
        }
    }
}

impl ReportConfig {
    /// Read and parse a config file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("parse config {}", path.display()))
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Config file if given, defaults otherwise.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    /// HTTP client for the configured source.
    pub fn client(&self) -> Client {
        Client::with_timeout(
            self.source.base_url.clone(),
            Duration::from_secs(self.source.timeout_secs),
        )
    }
}
