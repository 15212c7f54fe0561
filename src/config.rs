use std::{env, net::IpAddr, str::FromStr};

use dotenvy::dotenv;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors::ConfigError;
use crate::store::ShortenerSettings;

// Server-specific configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub workers: usize,
}

// Application-specific configuration
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub name: String,
    pub version: String,
    pub environment: Environment,
    pub log_level: String,
}

// Environment enum for different deployment environments
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Testing,
    Production,
}

// Implement FromStr trait for Environment enum to enable parsing from string
impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "testing" | "test" => Ok(Environment::Testing),
            "production" | "prod" => Ok(Environment::Production),
            _ => Err(format!(
                "Invalid environment: {}. Must be one of: development, testing, production",
                s
            )),
        }
    }
}

// Result type for configuration functions
type ConfigResult<T> = Result<T, ConfigError>;

/// Limits and defaults of the shortening session
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct ShortenerConfig {
    #[validate(range(min = 1, max = 100, message = "Pending input cap must be between 1 and 100"))]
    pub max_pending_inputs: usize,

    #[validate(range(min = 1, message = "Default validity must be at least 1 minute"))]
    pub default_validity_minutes: i64,

    #[validate(range(min = 1, max = 10, message = "Shortcode length must be between 1 and 10"))]
    pub shortcode_length: usize,

    /// Prefix of the display link shown for every shortcode
    #[validate(url(message = "Public base URL must be a valid URL"))]
    pub public_base_url: String,
}

impl ShortenerConfig {
    pub fn settings(&self) -> ShortenerSettings {
        ShortenerSettings {
            max_pending_inputs: self.max_pending_inputs,
            default_validity_minutes: self.default_validity_minutes,
            shortcode_length: self.shortcode_length,
        }
    }
}

// Config struct that matches our environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub app: AppConfig,
    pub shortener: ShortenerConfig,
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> ConfigResult<Self> {
        // Load .env file if it exists
        match dotenv() {
            Ok(_) => debug!(".env file loaded successfully"),
            Err(e) => warn!("Could not load .env file: {}", e),
        }

        let server = ServerConfig {
            host: get_env_or_default("SERVER_HOST", "127.0.0.1")?,
            port: get_env_or_default("SERVER_PORT", "3000")?,
            workers: get_env_or_default("SERVER_WORKERS", "4")?,
        };

        // Get version from Cargo.toml or environment
        let version = option_env!("CARGO_PKG_VERSION")
            .unwrap_or("0.1.0")
            .to_string();

        let app = AppConfig {
            name: get_env_or_default("APP_NAME", "link-session")?,
            version: env::var("APP_VERSION").unwrap_or(version),
            environment: get_env_or_default("APP_ENVIRONMENT", "development")?,
            log_level: get_env_or_default("RUST_LOG", "info")?,
        };

        let shortener = ShortenerConfig {
            max_pending_inputs: get_env_or_default("SHORTENER_MAX_PENDING_INPUTS", "5")?,
            default_validity_minutes: get_env_or_default(
                "SHORTENER_DEFAULT_VALIDITY_MINUTES",
                "30",
            )?,
            shortcode_length: get_env_or_default("SHORTENER_CODE_LENGTH", "6")?,
            public_base_url: get_env_or_default(
                "SHORTENER_PUBLIC_BASE_URL",
                "http://localhost:3000",
            )?,
        };
        shortener.validate()?;

        let config = Config {
            server,
            app,
            shortener,
        };
        info!("Configuration loaded successfully");
        debug!("Loaded config: {:?}", config);

        Ok(config)
    }
}

/// Helper function to get an env variable with a default value
fn get_env_or_default<T: FromStr>(key: &str, default: &str) -> ConfigResult<T>
where
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(val) => parse_value(key, &val),
        Err(env::VarError::NotPresent) => {
            debug!("{} not set, using default: {}", key, default);
            parse_value(key, default)
        }
        Err(e) => Err(ConfigError::EnvVarError(e)),
    }
}

fn parse_value<T: FromStr>(key: &str, raw: &str) -> ConfigResult<T>
where
    T::Err: std::fmt::Display,
{
    raw.parse::<T>()
        .map_err(|e| ConfigError::ParseError(format!("Could not parse {}: {}", key, e)))
}
