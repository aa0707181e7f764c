use gloo_net::http::Request;
use postgen::app::{GeneratePayload, GenerateRequest};

/// API client error type
#[derive(Debug, Clone)]
pub enum ApiClientError {
    Network(String),
    Status(u16),
    Deserialization(String),
}

impl std::fmt::Display for ApiClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiClientError::Network(msg) => write!(f, "Network error: {}", msg),
            ApiClientError::Status(status) => write!(f, "Server answered {}", status),
            ApiClientError::Deserialization(msg) => write!(f, "Deserialization error: {}", msg),
        }
    }
}

/// `POST {url}` with `{"prompt": ...}`
pub async fn generate(url: &str, prompt: &str) -> Result<GeneratePayload, ApiClientError> {
    let body = GenerateRequest {
        prompt: prompt.to_string(),
    };
    let response = Request::post(url)
        .json(&body)
        .map_err(|e| ApiClientError::Deserialization(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiClientError::Network(e.to_string()))?;

    if response.ok() {
        response
            .json::<GeneratePayload>()
            .await
            .map_err(|e| ApiClientError::Deserialization(e.to_string()))
    } else {
        Err(ApiClientError::Status(response.status()))
    }
}
