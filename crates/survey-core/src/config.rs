//! Configuration types for survey-intake.
//!
//! [`Config::load`] layers, lowest to highest precedence: the embedded
//! defaults, a TOML file (the `--config` path, or `./survey-intake.toml` if it
//! exists), and `SURVEY_*` environment variables such as `SURVEY_STORE__URI`.
//! [`Config::defaults`] returns the embedded defaults without touching the
//! filesystem or environment (useful in tests).

use serde::Deserialize;
use std::path::Path;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[server]
bind = "127.0.0.1"
port = 5001

[store]
backend                     = "mongodb"
uri                         = "mongodb://localhost:27017/"
database                    = "StudentHealthDB"
collection                  = "user_data"
server_selection_timeout_ms = 5000
fail_on_startup_ping        = false
"#;

/// Config file picked up from the working directory when no path is given.
pub const LOCAL_CONFIG_FILE: &str = "survey-intake.toml";

/// Prefix for environment overrides. Nested keys use `__`.
pub const ENV_PREFIX: &str = "SURVEY";

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level service configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub store: StoreConfig,
}

/// `[server]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_bind() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 5001 }

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            port: default_port(),
        }
    }
}

/// Which [`SurveyStore`](crate::store::SurveyStore) implementation to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    #[default]
    Mongodb,
    /// Documents are kept in process memory and lost on exit.
    /// Unbounded; meant for local runs and tests only.
    Memory,
}

/// `[store]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    #[serde(default)]
    pub backend: StoreBackend,
    #[serde(default = "default_uri")]
    pub uri: String,
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_collection")]
    pub collection: String,
    #[serde(default = "default_server_selection_timeout_ms")]
    pub server_selection_timeout_ms: u64,
    /// Abort startup when the initial ping fails instead of only logging it.
    #[serde(default)]
    pub fail_on_startup_ping: bool,
}

fn default_uri() -> String { "mongodb://localhost:27017/".to_string() }
fn default_database() -> String { "StudentHealthDB".to_string() }
fn default_collection() -> String { "user_data".to_string() }
fn default_server_selection_timeout_ms() -> u64 { 5_000 }

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::default(),
            uri: default_uri(),
            database: default_database(),
            collection: default_collection(),
            server_selection_timeout_ms: default_server_selection_timeout_ms(),
            fail_on_startup_ping: false,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load the layered configuration.
    ///
    /// An explicit `path` must exist; the implicit `./survey-intake.toml` is
    /// optional.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::from(Path::new(LOCAL_CONFIG_FILE)).required(false),
        };

        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(file)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
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
