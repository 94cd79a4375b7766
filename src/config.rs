use std::env;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};

/// Path segment the shipment routes live under, relative to the context path.
pub const SHIPMENTS_PATH: &str = "/envios";

const ENV_PREFIX: &str = "ENVIOS";

/// Top-level application configuration loaded from file + environment.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub api_doc: ApiDocSection,
    pub logging: LoggingSection,
}

impl AppConfig {
    /// Load configuration from disk and environment.
    ///
    /// The file is taken from `ENVIOS_CONFIG` (default `config.toml`) and is
    /// optional. Environment variables use `__` between nested keys, e.g.
    /// `ENVIOS_SERVER__CONTEXT_PATH`.
    pub fn load() -> Result<Self> {
        let config_path =
            env::var("ENVIOS_CONFIG").unwrap_or_else(|_| "config.toml".to_string());
        Self::load_from(Path::new(&config_path), ENV_PREFIX)
    }

    /// Load from an explicit file path and environment prefix.
    pub fn load_from(config_path: &Path, env_prefix: &str) -> Result<Self> {
        let mut builder = config::Config::builder();

        if config_path.exists() {
            builder = builder.add_source(config::File::from(PathBuf::from(config_path)));
        }

        builder = builder.add_source(
            config::Environment::with_prefix(env_prefix)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder.build()?;
        let mut config: Self = settings.try_deserialize()?;
        config.normalize()?;

        Ok(config)
    }

    /// Normalize paths and reject values the router cannot mount.
    pub fn normalize(&mut self) -> Result<()> {
        if self.server.host.trim().is_empty() {
            return Err(Error::invalid_config("server.host must be specified"));
        }

        self.server.context_path = normalize_path(&self.server.context_path);
        self.api_doc.path = normalize_path(&self.api_doc.path);

        if self.api_doc.path.is_empty() {
            return Err(Error::invalid_config(
                "api_doc.path must not be the context root",
            ));
        }
        if self.api_doc.path == SHIPMENTS_PATH
            || self.api_doc.path.starts_with(&format!("{SHIPMENTS_PATH}/"))
        {
            return Err(Error::invalid_config(format!(
                "api_doc.path '{}' collides with the shipment routes",
                self.api_doc.path
            )));
        }

        if self.logging.level.trim().is_empty() {
            self.logging.level = "info".to_string();
        }

        Ok(())
    }

    /// Full path of the shipments collection, e.g. `/api/envios`.
    pub fn shipments_url(&self) -> String {
        format!("{}{}", self.server.context_path, SHIPMENTS_PATH)
    }

    /// Full path of the API document, e.g. `/api/api-doc`.
    pub fn api_doc_url(&self) -> String {
        format!("{}{}", self.server.context_path, self.api_doc.path)
    }
}

/// Leading slash, no trailing slash. Root collapses to the empty string.
fn normalize_path(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub context_path: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            context_path: "/api".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiDocSection {
    pub path: String,
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Default for ApiDocSection {
    fn default() -> Self {
        Self {
            path: "/api-doc".to_string(),
            title: "API de Envíos".to_string(),
            version: "1.0.0".to_string(),
            description: "API REST para registrar y consultar envíos".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Json,
    Text,
}
