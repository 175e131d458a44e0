//! Application configuration settings
//!
//! Defines all configuration structures and loading logic

use crate::models::ModelId;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Server configuration
    pub server: ServerConfig,
    /// Remote generator configuration
    pub generator: GeneratorConfig,
    /// Quota configuration
    pub quota: QuotaConfig,
    /// Security configuration
    pub security: SecurityConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Listen host
    pub host: String,
    /// Listen port
    pub port: u16,
}

/// Remote generation endpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Endpoint URL of the generation function
    pub endpoint: String,
    /// API key sent in the x-api-key header
    pub api_key: String,
    /// Request timeout in seconds
    pub timeout: u64,
}

/// Free-generation quota configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuotaConfig {
    /// Free generations per session for GPT-3.5
    pub gpt35_uses: u32,
    /// Free generations per session for GPT-4
    pub gpt4_uses: u32,
    /// Total requests allowed per session, across models
    pub session_request_limit: u32,
}

impl QuotaConfig {
    /// Initial quota for a model
    pub fn initial_uses(&self, model: ModelId) -> u32 {
        match model {
            ModelId::Gpt35 => self.gpt35_uses,
            ModelId::Gpt4 => self.gpt4_uses,
        }
    }
}

/// Security configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    /// Whether CORS is enabled
    pub cors_enabled: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    pub level: String,
    /// Log format (text/json)
    pub format: String,
}

impl Settings {
    /// Create a new configuration instance from the environment
    pub fn new() -> Result<Self> {
        // Load .env file if it exists
        dotenv::dotenv().ok();

        let settings = Self {
            server: ServerConfig {
                host: get_env_or_default("SERVER_HOST", "0.0.0.0"),
                port: get_env_or_default("SERVER_PORT", "8080")
                    .parse()
                    .context("Invalid port number")?,
            },
            generator: GeneratorConfig {
                endpoint: env::var("GENERATOR_ENDPOINT")
                    .context("GENERATOR_ENDPOINT environment variable not set")?,
                api_key: env::var("GENERATOR_API_KEY")
                    .context("GENERATOR_API_KEY environment variable not set")?,
                timeout: get_env_or_default("GENERATOR_TIMEOUT", "60")
                    .parse()
                    .context("Invalid timeout value")?,
            },
            quota: QuotaConfig {
                gpt35_uses: get_env_or_default("GPT35_FREE_USES", "3")
                    .parse()
                    .context("Invalid GPT-3.5 quota")?,
                gpt4_uses: get_env_or_default("GPT4_FREE_USES", "1")
                    .parse()
                    .context("Invalid GPT-4 quota")?,
                session_request_limit: get_env_or_default("SESSION_REQUEST_LIMIT", "5")
                    .parse()
                    .context("Invalid session request limit")?,
            },
            security: SecurityConfig {
                cors_enabled: get_env_or_default("CORS_ENABLED", "true")
                    .parse()
                    .context("Invalid CORS enabled flag")?,
            },
            logging: LoggingConfig {
                level: get_env_or_default("RUST_LOG", "info"),
                format: get_env_or_default("LOG_FORMAT", "text"),
            },
        };

        // Validate configuration
        settings.validate()?;

        Ok(settings)
    }

    /// Validate configuration validity
    fn validate(&self) -> Result<()> {
        // Validate port range
        if self.server.port == 0 {
            anyhow::bail!("Port number cannot be 0");
        }

        // Validate endpoint URL format
        if !self.generator.endpoint.starts_with("http") {
            anyhow::bail!("Invalid generator endpoint format, should start with 'http'");
        }

        // Validate API key
        if self.generator.api_key.is_empty() {
            anyhow::bail!("Generator API key cannot be empty");
        }

        if self.generator.api_key.contains(char::is_whitespace) {
            anyhow::bail!("Generator API key cannot contain whitespace characters");
        }

        // Validate timeout value
        if self.generator.timeout == 0 {
            anyhow::bail!("Timeout value cannot be 0");
        }

        // Validate session request ceiling
        if self.quota.session_request_limit == 0 {
            anyhow::bail!("Session request limit cannot be 0");
        }

        // Validate log level
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            anyhow::bail!("Invalid log level: {}", self.logging.level);
        }

        // Validate log format
        let valid_formats = ["text", "json"];
        if !valid_formats.contains(&self.logging.format.as_str()) {
            anyhow::bail!("Invalid log format: {}", self.logging.format);
        }

        Ok(())
    }
}

/// Get environment variable or default value
fn get_env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
