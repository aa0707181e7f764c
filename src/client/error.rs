use miette::Diagnostic;
use thiserror::Error;

/// The single failure kind of the request client.
///
/// Callers treat every failure the same way; the [`FailureReason`] is kept
/// for logs only.
#[derive(Error, Diagnostic, Debug)]
pub enum GenerateError {
    #[error("Request to {url} failed")]
    #[diagnostic(
        code(postgen::client::request_failed),
        help(
            "Is the generation backend running? Set POSTGEN_API_URL or pass --api-url to point at it."
        )
    )]
    RequestFailed {
        url: String,
        #[source]
        reason: FailureReason,
    },
}

impl GenerateError {
    pub fn reason(&self) -> &FailureReason {
        match self {
            GenerateError::RequestFailed { reason, .. } => reason,
        }
    }
}

#[derive(Error, Debug)]
pub enum FailureReason {
    #[error("could not reach the backend: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("backend answered {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed response body: {0}")]
    Malformed(String),
}

pub type GenerateResult<T> = Result<T, GenerateError>;
