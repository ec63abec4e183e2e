/// Tunebox Server - song catalog for the Tunebox player
use clap::{Parser, Subcommand};
use std::{path::PathBuf, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tunebox_server::{create_router, AppState, CatalogProvider, ServerConfig};

#[derive(Parser)]
#[command(name = "tunebox-server")]
#[command(about = "Tunebox song catalog server", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Print the catalog the server would serve
    ListSongs {
        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config } => {
            let config = load_config(config.as_deref())?;
            init_tracing(&config);
            serve(config).await?;
        }
        Commands::ListSongs { config } => {
            let config = load_config(config.as_deref())?;
            list_songs(&config)?;
        }
    }

    Ok(())
}

fn load_config(path: Option<&std::path::Path>) -> anyhow::Result<ServerConfig> {
    let config = ServerConfig::load(path)?;
    config.validate()?;
    Ok(config)
}

fn init_tracing(config: &ServerConfig) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn build_catalog(config: &ServerConfig) -> anyhow::Result<CatalogProvider> {
    Ok(match &config.catalog.file {
        Some(path) => CatalogProvider::from_json_file(path)?,
        None => CatalogProvider::builtin(),
    })
}

async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    tracing::info!("Starting Tunebox Server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    let catalog = build_catalog(&config)?;
    tracing::info!(songs = catalog.len(), "Catalog ready");

    let app = create_router(AppState::new(Arc::new(catalog)), config.cors.enabled);

    let addr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server is running on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

fn list_songs(config: &ServerConfig) -> anyhow::Result<()> {
    let catalog = build_catalog(config)?;

    println!("Songs:");
    for song in catalog.list_tracks() {
        println!("  {} - {} ({})", song.id, song.name, song.preview_url);
    }

    Ok(())
}
