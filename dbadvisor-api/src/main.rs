use actix_cors::Cors;
use actix_web::{http::header, web, App, HttpServer};
use clap::Parser;
use dbadvisor_agent::{AdvisorGateway, AdvisorMode};
use dbadvisor_api::config::ApiConfig;
use dbadvisor_api::{configure_routes, helpers};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Database architecture advisor HTTP API
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the config file (defaults to <config_dir>/dbadvisor/api.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the bind host
    #[arg(long)]
    host: Option<String>,

    /// Override the bind port
    #[arg(short, long)]
    port: Option<u16>,

    /// Never call an AI provider
    #[arg(long)]
    simulate: bool,
}

fn init_logging(log_directory: Option<&Path>) -> Option<WorkerGuard> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let (file_layer, guard) = match log_directory {
        Some(directory) => {
            let appender = tracing_appender::rolling::daily(directory, "dbadvisor-api.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer())
        .with(file_layer)
        .init();

    guard
}

fn build_cors(allowed_origins: &[String]) -> Cors {
    let cors = Cors::default()
        .allowed_methods(vec!["GET", "POST"])
        .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
        .max_age(3600);

    if allowed_origins.iter().any(|origin| origin == "*") {
        return cors.allow_any_origin();
    }

    allowed_origins
        .iter()
        .fold(cors, |cors, origin| cors.allowed_origin(origin))
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let (mut config, config_path) = ApiConfig::load(args.config.as_deref())?;
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    let _log_guard = init_logging(config.log_directory());
    info!(path = %config_path.display(), "Loaded configuration");

    let advisor_config = config.advisor_config();
    let gateway = if args.simulate {
        info!("Simulation mode forced from the command line");
        AdvisorGateway::simulated(advisor_config)
    } else {
        let client = match helpers::llm::create_llm_client(&config) {
            Ok(client) => client,
            Err(e) => {
                warn!(error = %e, provider = config.llm.provider.as_str(), "Failed to create AI provider client");
                None
            }
        };
        AdvisorGateway::connect(client, advisor_config).await
    };

    let mode = match gateway.mode() {
        AdvisorMode::Real => "real",
        AdvisorMode::Simulated => "simulated",
    };
    info!(mode, "Advisor ready");

    let gateway = web::Data::new(gateway);
    let allowed_origins = config.allowed_origins().to_vec();
    let bind_addr = format!("{}:{}", config.server.host, config.server.port);
    info!("Starting dbadvisor-api server at http://{}", bind_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(build_cors(&allowed_origins))
            .app_data(gateway.clone())
            .configure(configure_routes)
    })
    .bind(&bind_addr)?
    .run()
    .await?;

    Ok(())
}
