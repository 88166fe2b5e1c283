use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main application configuration with strongly-typed sections.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Core server configuration.
    pub server: ServerConfig,
    /// Key-value table names.
    #[serde(default)]
    pub storage: StorageConfig,
    /// Logging configuration (optional, uses defaults if None).
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Table names for the backing key-value store. The gateway addresses two
/// tables: league-year records and user records.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    pub league_table: String,
    pub users_table: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    pub console_level: String, // "trace", "debug", "info", "warn", "error", "off"
    #[serde(default)]
    pub file: Option<String>, // "logs/cpffl.log"
    #[serde(default = "default_file_level")]
    pub file_level: String,
}

fn default_file_level() -> String {
    "debug".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8087,
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            league_table: "cpffl".to_string(),
            users_table: "users".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            console_level: "info".to_string(),
            file: None,
            file_level: default_file_level(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            storage: StorageConfig::default(),
            logging: Some(LoggingConfig::default()),
        }
    }
}

impl AppConfig {
    /// Load configuration with layered loading: defaults → YAML file → environment variables.
    pub fn load_layered<P: AsRef<Path>>(config_path: P) -> Result<Self> {
        use figment::{
            providers::{Env, Format, Serialized, Yaml},
            Figment,
        };

        // Start from a minimal base where optional sections are None, so they
        // remain None unless explicitly provided by YAML/ENV.
        let base = AppConfig {
            server: ServerConfig::default(),
            storage: StorageConfig::default(),
            logging: None,
        };

        let figment = Figment::new()
            .merge(Serialized::defaults(base))
            .merge(Yaml::file(config_path.as_ref()))
            // Example: CPFFL__SERVER__PORT=8087 maps to server.port
            .merge(Env::prefixed("CPFFL__").split("__"));

        let config: AppConfig = figment
            .extract()
            .with_context(|| "Failed to extract config from figment".to_string())?;

        Ok(config)
    }

    /// Load configuration from file or create with default values.
    pub fn load_or_default<P: AsRef<Path>>(config_path: Option<P>) -> Result<Self> {
        match config_path {
            Some(path) => Self::load_layered(path),
            None => Ok(Self::default()),
        }
    }

    /// Serialize configuration to YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize config to YAML")
    }

    /// Apply overrides from command line arguments.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(port) = args.port {
            self.server.port = port;
        }

        let logging = self.logging.get_or_insert_with(LoggingConfig::default);
        logging.console_level = match args.verbose {
            0 => logging.console_level.clone(), // keep
            1 => "debug".to_string(),
            _ => "trace".to_string(),
        };
    }
}

/// Command line arguments structure.
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    pub config: Option<String>,
    pub port: Option<u16>,
    pub print_config: bool,
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_are_usable() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8087);
        assert_eq!(config.storage.league_table, "cpffl");
        assert_eq!(config.storage.users_table, "users");
        assert!(config.logging.is_some());
    }

    #[test]
    fn yaml_layer_overrides_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "server:\n  host: 0.0.0.0\n  port: 9000\nstorage:\n  league_table: league\n  users_table: owners"
        )
        .unwrap();

        let config = AppConfig::load_layered(file.path()).unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.storage.league_table, "league");
        assert_eq!(config.storage.users_table, "owners");
        // Logging stays None unless explicitly provided.
        assert!(config.logging.is_none());
    }

    #[test]
    fn cli_overrides_win() {
        let mut config = AppConfig::default();
        let args = CliArgs {
            port: Some(1234),
            verbose: 2,
            ..Default::default()
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config.server.port, 1234);
        assert_eq!(config.logging.unwrap().console_level, "trace");
    }

    #[test]
    fn config_round_trips_through_yaml() {
        let config = AppConfig::default();
        let yaml = config.to_yaml().unwrap();
        let parsed: AppConfig = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed.server.port, config.server.port);
    }
}
