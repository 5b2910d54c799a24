//! # CLI Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Command-line flags (highest priority, --format only)               │
//! │                                                                         │
//! │  2. Environment Variables                                              │
//! │     DVD_STANDARD_PRICE=20                                              │
//! │     DVD_SPECIAL_PRICE=15                                               │
//! │     DVD_CURRENCY=EUR                                                   │
//! │     DVD_CURRENCY_SYMBOL=€                                              │
//! │                                                                         │
//! │  3. TOML Config File                                                   │
//! │     --config <path>, or ./dvd-shop.toml when present                   │
//! │                                                                         │
//! │  4. Default Values (lowest priority)                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [pricing]
//! standard_price = 20
//! special_price = 15
//! currency = "EUR"
//!
//! [display]
//! currency_symbol = "€"
//! decimal_separator = ","
//! format = "receipt"  # receipt | simple | json
//! ```

use clap::ValueEnum;
use dvd_core::{Money, PricingConfig};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::{AppError, AppResult};

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "dvd-shop.toml";

// =============================================================================
// Output Format
// =============================================================================

/// How a priced cart is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Boxed receipt with a per-category breakdown.
    #[default]
    Receipt,
    /// One line with the total.
    Simple,
    /// JSON view for other programs.
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Receipt => write!(f, "receipt"),
            OutputFormat::Simple => write!(f, "simple"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

// =============================================================================
// Display Settings
// =============================================================================

/// Presentation settings. None of these affect the computed prices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    #[serde(default = "default_decimal_separator")]
    pub decimal_separator: char,

    #[serde(default)]
    pub format: OutputFormat,
}

fn default_currency_symbol() -> String {
    "€".to_string()
}

fn default_decimal_separator() -> char {
    ','
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            currency_symbol: default_currency_symbol(),
            decimal_separator: default_decimal_separator(),
            format: OutputFormat::default(),
        }
    }
}

// =============================================================================
// App Configuration
// =============================================================================

/// Complete CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub pricing: PricingConfig,

    #[serde(default)]
    pub display: DisplayConfig,
}

impl AppConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (explicit path must exist; the default one is optional)
    /// 3. Environment variables
    pub fn load(config_path: Option<&Path>) -> AppResult<Self> {
        let mut config = match config_path {
            Some(path) if !path.exists() => {
                return Err(AppError::ConfigNotFound(path.display().to_string()));
            }
            Some(path) => Self::from_file(path)?,
            None => {
                let path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    Self::from_file(&path)?
                } else {
                    debug!(?path, "Config file not found, using defaults");
                    Self::default()
                }
            }
        };

        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;

        Ok(config)
    }

    /// Reads a TOML config file.
    pub fn from_file(path: &Path) -> AppResult<Self> {
        info!(?path, "Loading config from file");
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Applies `DVD_*` overrides from `lookup` (the environment in production).
    pub fn apply_overrides<F>(&mut self, lookup: F) -> AppResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup("DVD_STANDARD_PRICE") {
            self.pricing.standard_price = parse_price("DVD_STANDARD_PRICE", &value)?;
            debug!(price = %self.pricing.standard_price, "Overriding standard price from env");
        }

        if let Some(value) = lookup("DVD_SPECIAL_PRICE") {
            self.pricing.special_price = parse_price("DVD_SPECIAL_PRICE", &value)?;
            debug!(price = %self.pricing.special_price, "Overriding special price from env");
        }

        if let Some(currency) = lookup("DVD_CURRENCY") {
            self.pricing.currency = currency.trim().to_uppercase();
        }

        if let Some(symbol) = lookup("DVD_CURRENCY_SYMBOL") {
            self.display.currency_symbol = symbol;
        }

        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> AppResult<()> {
        self.pricing.validate()?;

        if self.display.decimal_separator.is_ascii_digit() {
            return Err(AppError::Config(format!(
                "decimal_separator cannot be a digit, got '{}'",
                self.display.decimal_separator
            )));
        }

        Ok(())
    }
}

fn parse_price(key: &str, value: &str) -> AppResult<Money> {
    value.parse().map_err(|_| {
        AppError::Config(format!("{key} must be a price like 15 or 15.99, got '{value}'"))
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
