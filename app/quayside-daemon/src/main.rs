use anyhow::{Context, Result};
use clap::Parser;
use quayside_api::{ApiServer, ServerConfig};
use quayside_core::{
    Config, FileProjectStore, ImageSelector, InMemoryInventory, StaticRegistry,
};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "quaysided")]
#[command(author, version, about, long_about = None)]
pub struct DaemonArgs {
    /// Configuration file path (default: ~/.config/quayside/config.toml).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Listen address for the HTTP API.
    #[arg(long)]
    pub listen: Option<SocketAddr>,

    /// Data directory for quayside.
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Registry host override.
    #[arg(long)]
    pub registry_host: Option<String>,

    /// Registry group override.
    #[arg(long)]
    pub registry_group: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "quayside=info,quaysided=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    run(DaemonArgs::parse()).await
}

async fn run(args: DaemonArgs) -> Result<()> {
    info!("Starting quayside daemon...");

    let mut config = match args.config {
        Some(ref path) => Config::load_from(path).context("Failed to load configuration")?,
        None => Config::load().context("Failed to load configuration")?,
    };
    if let Some(data_dir) = args.data_dir {
        config.data_dir = data_dir;
    }
    if let Some(listen) = args.listen {
        config.api.listen = listen.to_string();
    }
    if let Some(host) = args.registry_host {
        config.registry.host = host;
    }
    if let Some(group) = args.registry_group {
        config.registry.group = group;
    }

    std::fs::create_dir_all(&config.data_dir).context("Failed to create data directory")?;

    let listen: SocketAddr = config
        .api
        .listen
        .parse()
        .context("Invalid listen address")?;

    let registry = StaticRegistry::new(&config.registry.host, &config.registry.group);

    // A snapshot file in the data dir seeds the inventory; without one the
    // inventory starts empty until a feeder replaces it.
    let snapshot_path = config.image_snapshot_path();
    let inventory = if snapshot_path.exists() {
        InMemoryInventory::from_snapshot_file(&snapshot_path)
            .context("Failed to load image snapshot")?
    } else {
        warn!(
            path = %snapshot_path.display(),
            "no image snapshot found, starting with an empty inventory"
        );
        InMemoryInventory::default()
    };

    let projects = FileProjectStore::new(config.projects_dir());

    let selector = Arc::new(ImageSelector::new(
        Arc::new(registry),
        Arc::new(inventory),
        Arc::new(projects),
    ));

    info!(
        data_dir = %config.data_dir.display(),
        registry = %format!("{}/{}", config.registry.host, config.registry.group),
        "Collaborators wired"
    );

    let server = ApiServer::new(ServerConfig { listen }, selector);
    let server_handle = tokio::spawn(async move {
        if let Err(e) = server.run().await {
            tracing::error!("API server error: {}", e);
        }
    });

    println!("quayside daemon started");
    println!("  API:  http://{listen}");
    println!("  Data: {}", config.data_dir.display());
    println!();
    println!("Press Ctrl+C to stop.");

    shutdown_signal().await;
    info!("Shutdown signal received");

    server_handle.abort();
    info!("quayside daemon stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
