use clap::Parser;
use dbadvisor_agent::advisor::provider::{build_client, ProviderKind};
use dbadvisor_agent::{analyze_project, validator, AdvisorConfig, AdvisorGateway};
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Run one database analysis from a JSON project file and print the result
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a JSON file with project_name, project_description and requirements
    #[arg(short, long)]
    project: PathBuf,

    /// AI provider (gemini or openai)
    #[arg(long, default_value = "gemini")]
    provider: ProviderKind,

    /// Override the provider's default model
    #[arg(long)]
    model: Option<String>,

    /// Provider call timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(true)
                .with_target(false),
        )
        .init();

    let args = Args::parse();

    let payload: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&args.project)?)?;
    let project = validator::parse_project(payload)?;

    let api_key = std::env::var(args.provider.api_key_env()).ok();
    let client = match build_client(args.provider, api_key.as_deref(), args.model.as_deref()) {
        Ok(client) => client,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to create AI provider client");
            None
        }
    };

    let config = AdvisorConfig {
        timeout: Duration::from_secs(args.timeout_secs),
        ..Default::default()
    };
    let gateway = AdvisorGateway::connect(client, config).await;

    let response = analyze_project(&project, &gateway).await;

    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}
