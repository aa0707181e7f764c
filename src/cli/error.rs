use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum CliError {
    #[error("Prompt is empty")]
    #[diagnostic(
        code(postgen::cli::empty_prompt),
        help("Pass a topic to write about, e.g. postgen generate \"electric bikes\"")
    )]
    EmptyPrompt,

    #[error("{message}")]
    #[diagnostic(
        code(postgen::cli::generation_failed),
        help(
            "The cause is logged above. Check that the backend at --api-url (or POSTGEN_API_URL) is reachable."
        )
    )]
    GenerationFailed { message: String },

    #[error("Generate task stopped unexpectedly: {message}")]
    #[diagnostic(code(postgen::cli::task_failed))]
    TaskFailed { message: String },

    #[error("Terminal I/O failed")]
    #[diagnostic(code(postgen::cli::io))]
    Io(#[from] std::io::Error),

    #[error("Failed to format output: {message}")]
    #[diagnostic(code(postgen::cli::format))]
    Format { message: String },
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Format {
            message: e.to_string(),
        }
    }
}

impl From<tokio::task::JoinError> for CliError {
    fn from(e: tokio::task::JoinError) -> Self {
        CliError::TaskFailed {
            message: e.to_string(),
        }
    }
}

pub type CliResult<T> = Result<T, CliError>;
