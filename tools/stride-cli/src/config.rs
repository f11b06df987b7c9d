//! CLI configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use stride_catalog::{Currency, ReleaseWindow, SortOrder};
use stride_observability::{LogFormat, LogLevel, StructuredLogger};

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Store settings.
    #[serde(default)]
    pub store: StoreConfig,

    /// New-release settings.
    #[serde(default)]
    pub release: ReleaseConfig,

    /// Page rendering settings.
    #[serde(default)]
    pub render: RenderConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Check every setting, returning the first problem.
    pub fn validate(&self) -> Result<()> {
        self.currency()?;
        self.sort_order()?;
        self.release_window()?;
        self.log_level()?;
        self.log_format()?;
        Ok(())
    }

    /// Configured currency.
    pub fn currency(&self) -> Result<Currency> {
        Ok(Currency::from_code(&self.store.currency)?)
    }

    /// Configured default sort order.
    pub fn sort_order(&self) -> Result<SortOrder> {
        Ok(SortOrder::from_str(&self.render.sort)?)
    }

    /// Recency window, measured against the current time.
    pub fn release_window(&self) -> Result<ReleaseWindow> {
        ReleaseWindow::try_days(self.release.window_days)
            .with_context(|| format!("release.window_days = {}", self.release.window_days))
    }

    pub fn log_level(&self) -> Result<LogLevel> {
        Ok(self.logging.level.parse::<LogLevel>()?)
    }

    pub fn log_format(&self) -> Result<LogFormat> {
        Ok(self.logging.format.parse::<LogFormat>()?)
    }

    /// Build a logger; `verbose` lowers the threshold to debug.
    pub fn logger(&self, component: &str, verbose: bool) -> Result<StructuredLogger> {
        let level = if verbose {
            LogLevel::Debug
        } else {
            self.log_level()?
        };

        Ok(StructuredLogger::new()
            .with_component(component)
            .with_min_level(level)
            .with_format(self.log_format()?))
    }
}

/// Store settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Store name, used in page titles.
    #[serde(default = "default_store_name")]
    pub name: String,

    /// ISO currency code for prices.
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_store_name() -> String {
    "Stride".to_string()
}

fn default_currency() -> String {
    "USD".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            name: default_store_name(),
            currency: default_currency(),
        }
    }
}

/// New-release settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReleaseConfig {
    /// Days a shoe counts as newly released.
    #[serde(default = "default_window_days")]
    pub window_days: i64,
}

fn default_window_days() -> i64 {
    stride_catalog::release::DEFAULT_WINDOW_DAYS
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        Self {
            window_days: default_window_days(),
        }
    }
}

/// Page rendering settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Page title; defaults to the store name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Default grid order.
    #[serde(default = "default_sort")]
    pub sort: String,
}

fn default_sort() -> String {
    "featured".to_string()
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            title: None,
            sort: default_sort(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,

    /// `human` or `json`.
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_level() -> String {
    "info".to_string()
}

fn default_format() -> String {
    "human".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: default_format(),
        }
    }
}

/// Generate a default config file with comments.
pub fn generate_default_config() -> String {
    r#"# Stride configuration

[store]
name = "Stride"
# ISO currency code: USD, EUR, GBP, JPY, CAD, AUD
currency = "USD"

[release]
# Shoes released within this many days get the "Just Released!" badge
window_days = 30

[render]
# title = "All Shoes"
# featured, newest, price-low-high, price-high-low, name
sort = "featured"

[logging]
# trace, debug, info, warn, error
level = "info"
# human or json
format = "human"
"#
    .to_string()
}
