use anyhow::{Context, Result};
use serde::Deserialize;

use crate::server::ServerConfig;

/// Prefix for environment overrides, e.g. `YT_TRANSCRIPT__SERVICE__HTTP__PORT=8080`
pub const ENV_PREFIX: &str = "YT_TRANSCRIPT";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub service: ServiceConfig,
    pub youtube: YouTubeConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub name: String,
    pub http: HttpConfig,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            name: "yt-transcript".to_string(),
            http: HttpConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub bind: String,
    pub port: u16,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0".to_string(),
            port: 3001,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct YouTubeConfig {
    /// Caption track language (a single language, no fallback list)
    pub language: String,

    /// Request timeout for each upstream call, in seconds
    pub timeout_secs: u64,

    /// Innertube client identity sent with player requests
    pub client_name: String,
    pub client_version: String,

    /// Base URL of the video platform (overridable for local stubs)
    pub base_url: String,
}

impl Default for YouTubeConfig {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            timeout_secs: 30,
            client_name: "ANDROID".to_string(),
            client_version: "20.10.38".to_string(),
            base_url: "https://www.youtube.com".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from an optional file, then apply environment overrides.
    ///
    /// A missing file is not an error; every field has a default.
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("Failed to read config from {}", path))?;

        settings
            .try_deserialize()
            .context("Invalid configuration")
    }

    pub fn server_config(&self) -> ServerConfig {
        self.service.http.clone().into()
    }
}
