//! HTTP client for the generation backend.

mod error;

pub use error::{FailureReason, GenerateError, GenerateResult};

use reqwest::{Client, Response};
use tracing::debug;

use crate::app::{GeneratePayload, GenerateRequest};
use crate::config::Config;

/// Anything that can turn a prompt into a [`GeneratePayload`].
///
/// Implemented by [`GenerateClient`]; tests drive the controller with
/// in-memory implementations.
pub trait Generator: Send + Sync + 'static {
    fn generate(
        &self,
        prompt: &str,
    ) -> impl Future<Output = GenerateResult<GeneratePayload>> + Send;
}

/// Install the ring crypto provider for rustls. Safe to call repeatedly.
pub fn install_crypto_provider() {
    let _ = rustls::crypto::ring::default_provider().install_default();
}

/// Client bound to one backend base URL
pub struct GenerateClient {
    config: Config,
    client: Client,
}

impl GenerateClient {
    /// Create a client for the given configuration.
    ///
    /// No timeout is set; requests wait as long as the transport allows.
    pub fn new(config: Config) -> Self {
        install_crypto_provider();
        debug!(api_url = %config.api_url, "Using backend base URL");

        Self {
            config,
            client: Client::new(),
        }
    }

    /// Get the base URL being used
    pub fn base_url(&self) -> &str {
        &self.config.api_url
    }

    /// URL the generate request is sent to
    pub fn endpoint(&self) -> String {
        self.config.generate_url()
    }

    /// Map a response to a payload, treating anything but 2xx JSON as failure.
    async fn handle_response(response: Response) -> Result<GeneratePayload, FailureReason> {
        if response.status().is_success() {
            response
                .json()
                .await
                .map_err(|e| FailureReason::Malformed(e.to_string()))
        } else {
            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            Err(FailureReason::Status { status, body })
        }
    }
}

impl Generator for GenerateClient {
    /// `POST {base}/generate` with `{"prompt": ...}`.
    ///
    /// The prompt is sent as given; callers validate it.
    async fn generate(&self, prompt: &str) -> GenerateResult<GeneratePayload> {
        let url = self.endpoint();
        debug!(%url, "Dispatching generate request");
        let body = GenerateRequest {
            prompt: prompt.to_string(),
        };

        let outcome = match self.client.post(&url).json(&body).send().await {
            Ok(response) => Self::handle_response(response).await,
            Err(e) => Err(FailureReason::Transport(e)),
        };

        outcome.map_err(|reason| GenerateError::RequestFailed { url, reason })
    }
}
