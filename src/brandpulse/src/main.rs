//! BrandPulse — marketing-operations backend for agencies.
//!
//! Main entry point that wires the stores, the rollout simulator, the
//! generative backend, and the REST surface.

use std::sync::Arc;

use brandpulse_api::{ApiServer, AppState};
use brandpulse_campaigns::{CampaignStore, ClientStore, RolloutSimulator};
use brandpulse_content::{GenerativeBackend, TrendCatalog};
use brandpulse_core::config::AppConfig;
use clap::Parser;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "brandpulse")]
#[command(about = "Marketing-operations backend: brand profiles, trends, content, rollouts")]
#[command(version)]
struct Cli {
    /// HTTP port (overrides config)
    #[arg(long, env = "BRANDPULSE__API__HTTP_PORT")]
    http_port: Option<u16>,

    /// Generative backend API key (overrides config)
    #[arg(long, env = "BRANDPULSE__CONTENT__API_KEY")]
    api_key: Option<String>,

    /// Skip seeding the demo clients, campaigns, and trends
    #[arg(long, default_value_t = false)]
    no_seed: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "brandpulse=info,tower_http=info".into()),
        )
        .json()
        .init();

    let cli = Cli::parse();

    info!("BrandPulse starting up");

    // Load configuration
    let mut config = AppConfig::load().unwrap_or_else(|e| {
        warn!(error = %e, "Failed to load config, using defaults");
        AppConfig::default()
    });

    // Apply CLI overrides
    if let Some(port) = cli.http_port {
        config.api.http_port = port;
    }
    if let Some(api_key) = cli.api_key {
        config.content.api_key = api_key;
    }

    info!(
        http_port = config.api.http_port,
        tick_interval_ms = config.rollout.tick_interval_ms,
        test_ticks = config.rollout.test_ticks,
        "Configuration loaded"
    );

    // Wire the stores and engines
    let clients = Arc::new(ClientStore::new());
    let campaigns = Arc::new(CampaignStore::new());
    let trends = Arc::new(TrendCatalog::new());
    if !cli.no_seed {
        let profiles = clients.seed_demo_clients();
        campaigns.seed_demo_campaigns(&profiles);
        trends.seed_demo_trends();
    }

    let simulator = Arc::new(RolloutSimulator::new(
        Arc::clone(&campaigns),
        config.rollout.clone(),
    ));
    let backend = Arc::new(GenerativeBackend::new(config.content.clone()));

    let state = AppState {
        clients,
        campaigns,
        simulator,
        backend,
        trends,
    };

    let server = ApiServer::new(config, state);
    server.start_metrics().await?;
    server.start_http().await?;

    Ok(())
}
