mod analyzer;
mod api_types;
mod config;
mod fetch;
mod llm;
mod models;
mod orchestrator;
mod prompts;
mod render;
mod rules;
mod templates;

use anyhow::Result;
use clap::Parser;
use tracing::info;

/// Trend Vibes - trending-topics product-idea report generator
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Number of trending topics to analyze
    #[arg(short = 'n', long, default_value_t = 10)]
    number: usize,

    /// Write the rendered report to this path as well as stdout
    #[arg(short, long)]
    output: Option<String>,

    /// Use the model-backed analyzer when a generation key is configured
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    use_llm: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_thread_ids(false)
        .with_line_number(true)
        .init();

    info!("Starting trend_vibes");

    let args = Args::parse();
    let cfg = config::Config::from_env()?;

    orchestrator::run(&cfg, args.number, args.use_llm, args.output.as_deref()).await
}
