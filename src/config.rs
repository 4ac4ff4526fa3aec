//! Spider configuration, read from TOML.
//!
//! ```toml
//! name = "queens-cb2"
//! title = "Queens CB2"
//! start_urls = ["http://www.nyc.gov/html/qnscb2/includes/scripts/calendar.js"]
//! timezone = "US/Eastern"
//! ```
//!
//! Every key is optional and falls back to the Queens CB2 feed.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::LINE_PREFIX;
use crate::parser::ParserOptions;
use crate::types::DEFAULT_TIMEZONE;

pub const DEFAULT_NAME: &str = "queens-cb2";
pub const DEFAULT_TITLE: &str = "Queens CB2";
pub const DEFAULT_START_URL: &str = "http://www.nyc.gov/html/qnscb2/includes/scripts/calendar.js";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid config: {0} must not be empty")]
    Empty(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SpiderConfig {
    /// Machine name of the spider
    pub name: String,
    /// Human readable name of the calendar's owner
    pub title: String,
    /// Feed locations, fetched by the crawler and handed over as bodies
    pub start_urls: Vec<String>,
    /// IANA zone of the times in event summaries
    pub timezone: chrono_tz::Tz,
    pub line_prefix: String,
}

impl Default for SpiderConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_owned(),
            title: DEFAULT_TITLE.to_owned(),
            start_urls: vec![DEFAULT_START_URL.to_owned()],
            timezone: DEFAULT_TIMEZONE,
            line_prefix: LINE_PREFIX.to_owned(),
        }
    }
}

impl SpiderConfig {
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml(&fs::read_to_string(path)?)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.name.is_empty() {
            return Err(ConfigError::Empty("name"));
        }
        if self.start_urls.is_empty() {
            return Err(ConfigError::Empty("start_urls"));
        }
        if self.line_prefix.is_empty() {
            return Err(ConfigError::Empty("line_prefix"));
        }
        Ok(())
    }

    pub fn parser_options(&self) -> ParserOptions {
        ParserOptions {
            timezone: self.timezone,
            line_prefix: self.line_prefix.clone(),
        }
    }
}
