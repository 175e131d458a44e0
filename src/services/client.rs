//! Remote generation client
//!
//! Encapsulates HTTP communication with the generation function endpoint.
//! The coordinator only depends on the `GenerateClient` trait, which tests
//! replace with stubs.

use crate::config::GeneratorConfig;
use crate::models::ModelId;
use crate::utils::error::{AppError, AppResult};
use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Remote call that produces learning material for a technology
#[async_trait]
pub trait GenerateClient: Send + Sync {
    /// Fetch raw (unsanitized) learning material text
    async fn generate(&self, technology: &str, model: ModelId) -> AppResult<String>;
}

/// Request payload sent to the generation function
#[derive(Debug, Serialize)]
struct GenerateFnRequest<'a> {
    technology: &'a str,
    model: ModelId,
}

/// Response payload returned by the generation function
#[derive(Debug, Deserialize)]
struct GenerateFnResponse {
    learning_material: String,
}

/// HTTP client for the serverless generation function
#[derive(Debug, Clone)]
pub struct LambdaClient {
    client: Client,
    config: GeneratorConfig,
}

impl LambdaClient {
    /// Create a new client instance
    pub fn new(config: GeneratorConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, config })
    }
}

#[async_trait]
impl GenerateClient for LambdaClient {
    async fn generate(&self, technology: &str, model: ModelId) -> AppResult<String> {
        debug!("Starting generation request for {} with {}", technology, model);
        let start_time = Instant::now();

        let payload = GenerateFnRequest { technology, model };

        let response = self
            .client
            .post(&self.config.endpoint)
            .header("x-api-key", &self.config.api_key)
            .header("Content-Type", "application/json")
            .json(&payload)
            .send()
            .await
            .map_err(|e| AppError::GenerationFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::GenerationFailed(format!(
                "Generation endpoint returned {}: {}",
                status, error_text
            )));
        }

        let body: GenerateFnResponse = response
            .json()
            .await
            .map_err(|e| AppError::GenerationFailed(format!("Invalid response payload: {}", e)))?;

        info!(
            "Finished generation request for {}, took {:.2} seconds",
            technology,
            start_time.elapsed().as_secs_f64()
        );

        Ok(body.learning_material)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_construction() {
        let config = GeneratorConfig {
            endpoint: "https://example.com/generate".to_string(),
            api_key: "test-key".to_string(),
            timeout: 30,
        };
        assert!(LambdaClient::new(config).is_ok());
    }

    #[test]
    fn test_request_payload_shape() {
        let payload = GenerateFnRequest {
            technology: "Rust",
            model: ModelId::Gpt4,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["technology"], "Rust");
        assert_eq!(json["model"], "gpt-4");
    }

    #[test]
    fn test_response_payload_parsing() {
        let body: GenerateFnResponse =
            serde_json::from_str(r##"{"learning_material": "# Rust\n..."}"##).unwrap();
        assert_eq!(body.learning_material, "# Rust\n...");
    }
}
