use clap::ValueEnum;

use crate::app::render;
use crate::cli::error::{CliError, CliResult};
use crate::cli::render::format_view;
use crate::client::Generator;
use crate::controller::Controller;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Rendered summary and drafts
    Text,
    /// The payload as returned by the backend
    Json,
}

/// Generate posts for one prompt and return the output to print.
pub async fn generate<G: Generator>(
    controller: &Controller<G>,
    prompt: &str,
    format: OutputFormat,
) -> CliResult<String> {
    controller.set_prompt(prompt);
    let task = controller.submit().ok_or(CliError::EmptyPrompt)?;
    task.await?;

    let state = controller.snapshot();
    if let Some(message) = state.error() {
        return Err(CliError::GenerationFailed {
            message: message.to_string(),
        });
    }

    match (format, state.result()) {
        (OutputFormat::Json, Some(payload)) => Ok(serde_json::to_string_pretty(payload)?),
        _ => Ok(format_view(&render(&state))),
    }
}
