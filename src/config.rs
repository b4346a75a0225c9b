//! Configuration for the lineshot binaries.
//!
//! The server supports both command-line arguments and a TOML configuration
//! file; CLI arguments take precedence over config file values. The client
//! is configured entirely on the command line.

use clap::Parser;
use serde::Deserialize;
use std::path::PathBuf;

/// Default server host, matching a local-only deployment.
pub const DEFAULT_HOST: &str = "localhost";

/// Default port for the exchange.
pub const DEFAULT_PORT: u16 = 25565;

/// Default message the client sends when none is given.
pub const DEFAULT_MESSAGE: &str = "Hello, this is the Client!";

/// Command-line arguments for the server
#[derive(Parser, Debug)]
#[command(name = "lineshot-server")]
#[command(version = "0.1.0")]
#[command(about = "Accepts one connection at a time and acknowledges one line per connection", long_about = None)]
pub struct ServerCli {
    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Host to bind to (e.g., 127.0.0.1)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

/// Command-line arguments for the client
#[derive(Parser, Debug)]
#[command(name = "lineshot-client")]
#[command(version = "0.1.0")]
#[command(about = "Sends one line to the server and prints the one-line reply", long_about = None)]
pub struct ClientCli {
    /// Host of the server to connect to
    #[arg(long, default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port of the server to connect to
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Message to send (a single line, no embedded newline)
    #[arg(short, long, default_value = DEFAULT_MESSAGE)]
    pub message: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

/// TOML configuration file structure
#[derive(Debug, Deserialize, Default)]
pub struct TomlConfig {
    #[serde(default)]
    pub server: ServerSection,
    #[serde(default)]
    pub logging: LoggingSection,
}

/// Server-related configuration
#[derive(Debug, Deserialize)]
pub struct ServerSection {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Deserialize)]
pub struct LoggingSection {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Final resolved server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub log_level: String,
}

impl ServerConfig {
    /// Load configuration from CLI args and optional TOML file.
    /// CLI arguments take precedence over TOML file values.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_cli(ServerCli::parse())
    }

    fn from_cli(cli: ServerCli) -> Result<Self, ConfigError> {
        // Load TOML config if specified
        let toml_config = if let Some(ref config_path) = cli.config {
            let contents = std::fs::read_to_string(config_path)
                .map_err(|e| ConfigError::FileRead(config_path.clone(), e))?;
            toml::from_str(&contents)
                .map_err(|e| ConfigError::TomlParse(config_path.clone(), e))?
        } else {
            TomlConfig::default()
        };

        // Merge CLI args with TOML config (CLI takes precedence)
        Ok(ServerConfig {
            host: cli.host.unwrap_or(toml_config.server.host),
            port: cli.port.unwrap_or(toml_config.server.port),
            log_level: if cli.log_level != "info" {
                cli.log_level
            } else {
                toml_config.logging.level
            },
        })
    }

    /// Listen address in `host:port` form.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Final resolved client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub host: String,
    pub port: u16,
    pub message: String,
    pub log_level: String,
}

impl ClientConfig {
    /// Load configuration from CLI args.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_cli(ClientCli::parse())
    }

    fn from_cli(cli: ClientCli) -> Result<Self, ConfigError> {
        // Line termination on the wire is solely the newline character, so
        // the message itself must not contain one.
        if cli.message.contains('\n') {
            return Err(ConfigError::MultilineMessage);
        }

        Ok(ClientConfig {
            host: cli.host,
            port: cli.port,
            message: cli.message,
            log_level: cli.log_level,
        })
    }

    /// Server address in `host:port` form.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Configuration loading errors
#[derive(Debug)]
pub enum ConfigError {
    FileRead(PathBuf, std::io::Error),
    TomlParse(PathBuf, toml::de::Error),
    MultilineMessage,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::FileRead(path, e) => {
                write!(f, "Failed to read config file '{}': {}", path.display(), e)
            }
            ConfigError::TomlParse(path, e) => {
                write!(f, "Failed to parse config file '{}': {}", path.display(), e)
            }
            ConfigError::MultilineMessage => {
                write!(f, "Message must be a single line without embedded newlines")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TomlConfig::default();
        assert_eq!(config.server.host, "localhost");
        assert_eq!(config.server.port, 25565);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_toml_parsing() {
        let toml_str = r#"
            [server]
            host = "0.0.0.0"
            port = 9000

            [logging]
            level = "debug"
        "#;

        let config: TomlConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_server_cli_overrides_defaults() {
        let cli = ServerCli::parse_from(["lineshot-server", "--host", "127.0.0.1", "-p", "9000"]);
        let config = ServerConfig::from_cli(cli).unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 9000);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_server_defaults_without_file() {
        let cli = ServerCli::parse_from(["lineshot-server"]);
        let config = ServerConfig::from_cli(cli).unwrap();
        assert_eq!(config.addr(), "localhost:25565");
    }

    #[test]
    fn test_client_defaults() {
        let cli = ClientCli::parse_from(["lineshot-client"]);
        let config = ClientConfig::from_cli(cli).unwrap();
        assert_eq!(config.addr(), "localhost:25565");
        assert_eq!(config.message, "Hello, this is the Client!");
    }

    #[test]
    fn test_client_rejects_multiline_message() {
        let cli = ClientCli::parse_from(["lineshot-client", "--message", "two\nlines"]);
        let err = ClientConfig::from_cli(cli).unwrap_err();
        assert!(matches!(err, ConfigError::MultilineMessage));
    }
}
