//! Application configuration.
//!
//! Settings come from an optional `ticket-label.toml` in the working
//! directory, overridden by `TICKET_LABEL__*` environment variables
//! (e.g. `TICKET_LABEL__SERVER__PORT=8080`). CLI flags override both.

use std::path::PathBuf;

use serde::Deserialize;

use crate::error::Result;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub data: DataConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Directory holding the ticket and label files.
    pub dir: PathBuf,
    /// Optional directory of frontend assets to serve on unmatched routes.
    pub static_dir: Option<PathBuf>,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("data"),
            static_dir: None,
        }
    }
}

impl Config {
    /// Loads configuration, falling back to defaults when no file exists.
    pub fn load_or_default() -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("ticket-label").required(false))
            .add_source(
                config::Environment::with_prefix("TICKET_LABEL")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?;
        Ok(settings.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.data.dir, PathBuf::from("data"));
        assert!(config.data.static_dir.is_none());
    }
}
