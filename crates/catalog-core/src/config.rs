//! Configuration types for catalog-search.
//!
//! [`Config::load`] layers, in order: the embedded defaults, an optional TOML
//! file, and `CATALOG_SEARCH__*` environment variables. [`Config::defaults`]
//! returns the embedded defaults alone (useful in tests).

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::search::{SearchLimits, DEFAULT_RESULT_CAP, DEFAULT_SCAN_LIMIT};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[catalog]
size = 100000

[search]
scan_limit = 100
result_cap = 20

[server]
bind = "0.0.0.0:8080"
"#;

/// Prefix for environment overrides, e.g. `CATALOG_SEARCH__SEARCH__SCAN_LIMIT`.
pub const ENV_PREFIX: &str = "CATALOG_SEARCH";

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level service configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

/// `[catalog]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    /// Number of products to generate. Zero or negative means an empty
    /// catalog.
    #[serde(default = "default_catalog_size")]
    pub size: i64,
}

fn default_catalog_size() -> i64 { 100_000 }

impl Default for CatalogConfig {
    fn default() -> Self {
        Self { size: default_catalog_size() }
    }
}

impl CatalogConfig {
    /// `size` clamped to a valid record count.
    pub fn record_count(&self) -> usize {
        usize::try_from(self.size).unwrap_or(0)
    }
}

/// `[search]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    #[serde(default = "default_scan_limit")]
    pub scan_limit: usize,
    #[serde(default = "default_result_cap")]
    pub result_cap: usize,
    /// Per-query deadline in milliseconds. Unset means no deadline.
    #[serde(default)]
    pub timeout_ms: Option<u64>,
}

fn default_scan_limit() -> usize { DEFAULT_SCAN_LIMIT }
fn default_result_cap() -> usize { DEFAULT_RESULT_CAP }

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            scan_limit: default_scan_limit(),
            result_cap: default_result_cap(),
            timeout_ms: None,
        }
    }
}

impl SearchConfig {
    pub fn limits(&self) -> SearchLimits {
        SearchLimits {
            scan_limit: self.scan_limit,
            result_cap: self.result_cap,
            deadline: self.timeout_ms.map(Duration::from_millis),
        }
    }
}

/// `[server]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

fn default_bind() -> String { "0.0.0.0:8080".to_string() }

impl Default for ServerConfig {
    fn default() -> Self {
        Self { bind: default_bind() }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load the embedded defaults, then `path` (if given, it must exist),
    /// then environment overrides.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut builder = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml));

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem or
    /// environment.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
