//! Application configuration loading and validation.
//!
//! Configuration is loaded from a TOML file; every section has defaults so
//! an empty file (or no file at all) yields a working widget.

use chrono::NaiveDate;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing_subscriber::{fmt, EnvFilter};
use url::Url;

use crate::domain::SelectionPolicy;
use crate::error::{ConfigError, Result};
use crate::widget::{Background, WidgetStyle};

/// Selection policy names accepted in `[rotation] policy`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PolicyKind {
    #[default]
    NoRepeatRandom,
    DayIndexed,
    SeededRandom,
}

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub rotation: RotationConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub widget: WidgetConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Remote catalog source settings.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    /// HTTP endpoint returning a JSON array of quotes.
    #[serde(default = "default_catalog_url")]
    pub url: String,
    /// Fetch timeout; expiry is treated as a cache-miss.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Cached catalog copies older than this are refetched.
    #[serde(default = "default_cache_ttl_hours")]
    pub cache_ttl_hours: u64,
}

fn default_catalog_url() -> String {
    "https://raw.githubusercontent.com/dcivera/quotes/main/quotes.json".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_cache_ttl_hours() -> u64 {
    24
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            url: default_catalog_url(),
            timeout_secs: default_timeout_secs(),
            cache_ttl_hours: default_cache_ttl_hours(),
        }
    }
}

impl CatalogConfig {
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    #[must_use]
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_hours * 3600)
    }
}

/// Selection policy settings.
#[derive(Debug, Clone, Deserialize)]
pub struct RotationConfig {
    #[serde(default)]
    pub policy: PolicyKind,
    /// Day-indexed rotation counts days from this date.
    #[serde(default = "default_epoch")]
    pub epoch: NaiveDate,
    /// Prime stride for the day-indexed policy.
    #[serde(default = "default_multiplier")]
    pub multiplier: u32,
}

fn default_epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 1, 1).expect("valid fixed epoch")
}

fn default_multiplier() -> u32 {
    31
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            policy: PolicyKind::default(),
            epoch: default_epoch(),
            multiplier: default_multiplier(),
        }
    }
}

impl RotationConfig {
    /// Build the engine policy this configuration names.
    #[must_use]
    pub fn selection_policy(&self) -> SelectionPolicy {
        match self.policy {
            PolicyKind::NoRepeatRandom => SelectionPolicy::NoRepeatRandom,
            PolicyKind::DayIndexed => SelectionPolicy::DayIndexed {
                epoch: self.epoch,
                multiplier: self.multiplier,
            },
            PolicyKind::SeededRandom => SelectionPolicy::SeededRandom,
        }
    }
}

/// Local persistence settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StoreConfig {
    /// Directory holding the three state files. Defaults to the platform
    /// data directory.
    pub dir: Option<PathBuf>,
}

impl StoreConfig {
    #[must_use]
    pub fn data_dir(&self) -> PathBuf {
        self.dir.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("quotidian")
        })
    }
}

/// Widget appearance settings.
#[derive(Debug, Clone, Deserialize)]
pub struct WidgetConfig {
    /// Solid background; takes precedence over the gradient when set.
    pub background_color: Option<String>,
    #[serde(default = "default_gradient_start")]
    pub gradient_start: String,
    #[serde(default = "default_gradient_end")]
    pub gradient_end: String,
    #[serde(default = "default_text_color")]
    pub text_color: String,
    #[serde(default = "default_font")]
    pub font: String,
    #[serde(default = "default_quote_size")]
    pub quote_size: u32,
    #[serde(default = "default_attribution_size")]
    pub attribution_size: u32,
    #[serde(default = "default_spacer")]
    pub spacer: u32,
}

fn default_gradient_start() -> String {
    "#EE9C4D".to_string()
}

fn default_gradient_end() -> String {
    "#E68438".to_string()
}

fn default_text_color() -> String {
    "#E4E4E4".to_string()
}

fn default_font() -> String {
    "Avenir-Medium".to_string()
}

fn default_quote_size() -> u32 {
    25
}

fn default_attribution_size() -> u32 {
    18
}

fn default_spacer() -> u32 {
    6
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            background_color: None,
            gradient_start: default_gradient_start(),
            gradient_end: default_gradient_end(),
            text_color: default_text_color(),
            font: default_font(),
            quote_size: default_quote_size(),
            attribution_size: default_attribution_size(),
            spacer: default_spacer(),
        }
    }
}

impl WidgetConfig {
    #[must_use]
    pub fn style(&self) -> WidgetStyle {
        let background = match &self.background_color {
            Some(color) => Background::Solid { color: color.clone() },
            None => Background::Gradient {
                start: self.gradient_start.clone(),
                end: self.gradient_end.clone(),
            },
        };
        WidgetStyle {
            background,
            text_color: self.text_color.clone(),
            quote_font: self.font.clone(),
            quote_size: self.quote_size,
            attribution_font: self.font.clone(),
            attribution_size: self.attribution_size,
            spacer: self.spacer,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load from a TOML file. A missing file yields the defaults so the
    /// widget works out of the box.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            let config = Self::default();
            config.validate()?;
            return Ok(config);
        }

        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let config: Config = toml::from_str(&content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        Url::parse(&self.catalog.url).map_err(|e| ConfigError::InvalidValue {
            field: "catalog.url",
            reason: e.to_string(),
        })?;
        if self.catalog.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "catalog.timeout_secs",
                reason: "timeout must be at least one second".to_string(),
            }
            .into());
        }
        if self.rotation.multiplier == 0 {
            return Err(ConfigError::InvalidValue {
                field: "rotation.multiplier",
                reason: "multiplier must be nonzero".to_string(),
            }
            .into());
        }
        match self.logging.format.as_str() {
            "pretty" | "json" => {}
            other => {
                return Err(ConfigError::InvalidValue {
                    field: "logging.format",
                    reason: format!("expected \"pretty\" or \"json\", got \"{other}\""),
                }
                .into());
            }
        }
        Ok(())
    }

    pub fn init_logging(&self) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&self.logging.level));

        match self.logging.format.as_str() {
            "json" => {
                fmt().json().with_env_filter(filter).init();
            }
            _ => {
                fmt().with_env_filter(filter).init();
            }
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog: CatalogConfig::default(),
            rotation: RotationConfig::default(),
            store: StoreConfig::default(),
            widget: WidgetConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}
