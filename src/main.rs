//! Shopping list - a small in-memory shopping list HTTP service

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shopping_list::api::{self, AppState};
use shopping_list::config::Config;
use shopping_list::store::ItemStore;

#[derive(Parser)]
#[command(name = "shopping-list")]
#[command(about = "Small in-memory shopping list HTTP service")]
#[command(version)]
struct Cli {
    /// Path to config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Address to bind to
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// Start with an empty list instead of the default items
        #[arg(long)]
        empty: bool,

        /// Disable /docs and /openapi.json
        #[arg(long)]
        no_docs: bool,
    },

    /// Write a config file with default settings
    Init {
        /// Where to write the config (defaults to the user config directory)
        path: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            format!("shopping_list={},tower_http=debug", log_level).into()
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment
    let _ = dotenvy::dotenv();

    // Load config
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match cli.command {
        Commands::Serve { host, port, empty, no_docs } => {
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(port) = port {
                config.port = port;
            }
            if empty {
                config.seed_defaults = false;
            }
            if no_docs {
                config.enable_docs = false;
            }

            let store = if config.seed_defaults {
                ItemStore::seeded()
            } else {
                ItemStore::new()
            };
            tracing::info!("Starting with {} items", store.len().await);

            let router = api::create_router_with_config(AppState::new(store), &config);

            let addr = config.bind_addr()?;
            let listener = tokio::net::TcpListener::bind(addr).await?;
            tracing::info!("Listening on {}", addr);

            println!("Shopping list server running at http://{}", addr);
            println!("  API:      http://{}/shopping_list/", addr);
            if config.enable_docs {
                println!("  API Docs: http://{}/docs", addr);
            }

            axum::serve(listener, router)
                .with_graceful_shutdown(shutdown_signal())
                .await?;
        }

        Commands::Init { path } => {
            let path = path
                .or_else(Config::config_path)
                .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

            tracing::info!("Writing config to {:?}", path);
            config.save(&path)?;

            println!("✓ Config written to {}", path.display());
        }
    }

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
