mod commands;
pub mod error;
pub mod render;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::commands::generate::OutputFormat;
use crate::client::GenerateClient;
use crate::config::Config;
use crate::controller::Controller;

#[derive(Parser)]
#[command(name = "postgen")]
#[command(author, version, about = "Social media post generator", long_about = None)]
pub struct Cli {
    /// Override the API URL (default: POSTGEN_API_URL env or http://localhost:5000/api)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a summary and per-platform drafts for one prompt
    Generate {
        /// Topic or prompt to write about
        prompt: String,
        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Enter prompts line by line
    Interactive,
}

/// Initialize tracing subscriber with env filter.
///
/// Logs go to stderr so rendered output on stdout stays clean.
fn init_tracing(verbosity: u8) {
    let default_filter = match verbosity {
        0 => "postgen=warn",
        1 => "postgen=info",
        _ => "postgen=debug",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

pub async fn run() -> miette::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::resolve(cli.api_url);
    let controller = Controller::new(GenerateClient::new(config));

    match cli.command {
        Some(Commands::Generate { prompt, format }) => {
            let output = commands::generate::generate(&controller, &prompt, format).await?;
            println!("{}", output);
        }
        Some(Commands::Interactive) => {
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            commands::interactive::interactive(&controller, stdin, tokio::io::stdout()).await?;
        }
        None => {
            // Show help when no command provided
            let _ = Cli::parse_from(["postgen", "--help"]);
        }
    }

    Ok(())
}
