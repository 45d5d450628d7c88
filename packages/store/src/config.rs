//! # Client configuration: `client.toml`
//!
//! Defines the TOML document bundled with the web client
//! (filename: [`ClientConfig::filename`] = `"client.toml"`). It is parsed once at
//! start-up and tells the client where the REST backend lives, how prices and
//! dates are displayed, and how verbose logging is.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = ""                          # empty = same origin as the page
//! properties_path = "/api/v1/properties"
//! customers_path = "/api/v1/customers"
//!
//! [display]
//! currency_symbol = "Rp"
//! thousands_separator = "."
//! decimal_separator = ","
//! fraction_digits = 2
//! date_format = "%d/%m/%Y"
//!
//! [log]
//! level = "info"
//! ```
//!
//! Every section and field has a default, so an empty file equals
//! [`ClientConfig::default`].

use serde::{Deserialize, Serialize};

use crate::models::EntityKind;

/// Top-level configuration stored in `client.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub log: LogConfig,
}

/// Location of the REST backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Scheme and host of the backend. Empty means "same origin as the page";
    /// the web entry point fills it in from `window.location`.
    #[serde(default)]
    pub base_url: String,
    #[serde(default = "default_properties_path")]
    pub properties_path: String,
    #[serde(default = "default_customers_path")]
    pub customers_path: String,
}

fn default_properties_path() -> String {
    "/api/v1/properties".to_string()
}

fn default_customers_path() -> String {
    "/api/v1/customers".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            properties_path: default_properties_path(),
            customers_path: default_customers_path(),
        }
    }
}

impl ApiConfig {
    /// Path of the collection endpoint for `kind`, without the base URL.
    pub fn collection_path(&self, kind: EntityKind) -> &str {
        match kind {
            EntityKind::Properties => &self.properties_path,
            EntityKind::Customers => &self.customers_path,
        }
    }

    /// Path of a single record, e.g. `/api/v1/customers/42`.
    pub fn item_path(&self, kind: EntityKind, id: i64) -> String {
        format!("{}/{id}", self.collection_path(kind).trim_end_matches('/'))
    }

    /// Join the base URL and a path without doubling the slash.
    pub fn url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        if path.starts_with('/') {
            format!("{base}{path}")
        } else {
            format!("{base}/{path}")
        }
    }
}

/// How prices and dates are rendered. Defaults follow the `id-ID` locale with
/// Indonesian Rupiah.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    #[serde(default = "default_thousands_separator")]
    pub thousands_separator: String,
    #[serde(default = "default_decimal_separator")]
    pub decimal_separator: String,
    #[serde(default = "default_fraction_digits")]
    pub fraction_digits: usize,
    /// `chrono` strftime pattern for record dates.
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_currency_symbol() -> String {
    "Rp".to_string()
}

fn default_thousands_separator() -> String {
    ".".to_string()
}

fn default_decimal_separator() -> String {
    ",".to_string()
}

fn default_fraction_digits() -> usize {
    2
}

fn default_date_format() -> String {
    "%d/%m/%Y".to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
            thousands_separator: default_thousands_separator(),
            decimal_separator: default_decimal_separator(),
            fraction_digits: default_fraction_digits(),
            date_format: default_date_format(),
        }
    }
}

/// Logging configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    /// One of `trace`, `debug`, `info`, `warn`, `error`.
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl ClientConfig {
    /// Builder method to point the client at a backend.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = base_url.into();
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "client.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
