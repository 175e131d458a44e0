//! Remote generation client tests
//!
//! Exercise the HTTP client against a mock generation endpoint

use flashgen::config::settings::GeneratorConfig;
use flashgen::{AppError, GenerateClient, LambdaClient, ModelId};
use httpmock::prelude::*;

fn client_for(server: &MockServer) -> LambdaClient {
    LambdaClient::new(GeneratorConfig {
        endpoint: server.url("/generate"),
        api_key: "test-api-key".to_string(),
        timeout: 5,
    })
    .expect("Failed to create client")
}

#[tokio::test]
async fn test_successful_generation() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/generate")
            .header("x-api-key", "test-api-key")
            .json_body(serde_json::json!({
                "technology": "Rust",
                "model": "gpt-3.5",
            }));
        then.status(200)
            .header("content-type", "application/json")
            .json_body(serde_json::json!({
                "learning_material": "# Rust\n\n## Onboarding\n..."
            }));
    });

    let client = client_for(&server);
    let material = client.generate("Rust", ModelId::Gpt35).await.unwrap();

    mock.assert();
    assert_eq!(material, "# Rust\n\n## Onboarding\n...");
}

#[tokio::test]
async fn test_server_error_maps_to_generation_failed() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/generate");
        then.status(500).body("internal failure");
    });

    let client = client_for(&server);
    let err = client.generate("Rust", ModelId::Gpt4).await.unwrap_err();

    match err {
        AppError::GenerationFailed(message) => {
            assert!(message.contains("500"));
        }
        other => panic!("Expected GenerationFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_body_maps_to_generation_failed() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/generate");
        then.status(200)
            .header("content-type", "application/json")
            .body("{\"unexpected\": true}");
    });

    let client = client_for(&server);
    let err = client.generate("Rust", ModelId::Gpt35).await.unwrap_err();
    assert!(matches!(err, AppError::GenerationFailed(_)));
}

#[tokio::test]
async fn test_connection_refused_maps_to_generation_failed() {
    // Nothing listens on this port
    let client = LambdaClient::new(GeneratorConfig {
        endpoint: "http://127.0.0.1:9".to_string(),
        api_key: "test-api-key".to_string(),
        timeout: 1,
    })
    .unwrap();

    let err = client.generate("Rust", ModelId::Gpt35).await.unwrap_err();
    assert!(matches!(err, AppError::GenerationFailed(_)));
}
