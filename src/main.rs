//! Minimal Wiki Server
//!
//! Serves wiki pages over HTTP: view, edit, and save, with `[Word]` tokens
//! auto-linked to other pages. Persistence is a flat-file directory or a
//! single-table SQLite database, selected by configuration.
//!
//! ```text
//!   request ──▶ router (path → action, title) ──▶ handler
//!                                                    │
//!                              ┌─────────────────────┤
//!                              ▼                     ▼
//!                          page store          link rewriter
//!                        (file | sqlite)      (view only)
//!                              │                     │
//!                              └────────┬────────────┘
//!                                       ▼
//!                                  templates ──▶ response
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wiki_server::config::{load_config, StoreBackend, WikiConfig};
use wiki_server::http::bind_listener;
use wiki_server::store::{FileStore, PageStore, SqliteStore};
use wiki_server::WikiServer;

#[derive(Parser)]
#[command(name = "wiki-server")]
#[command(about = "A minimal wiki served over HTTP", long_about = None)]
struct Args {
    /// Path to a TOML config file; defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Bind an OS-assigned loopback port and write it to the port file.
    #[arg(long)]
    addr: bool,

    /// Override the configured storage backend.
    #[arg(long, value_enum)]
    backend: Option<BackendArg>,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum BackendArg {
    File,
    Sqlite,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wiki_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => WikiConfig::default(),
    };
    if args.addr {
        config.listener.ephemeral = true;
    }
    if let Some(backend) = args.backend {
        config.store.backend = match backend {
            BackendArg::File => StoreBackend::File,
            BackendArg::Sqlite => StoreBackend::Sqlite,
        };
    }

    tracing::info!(
        backend = ?config.store.backend,
        ephemeral = config.listener.ephemeral,
        fallback_title = %config.wiki.fallback_title,
        "wiki-server v0.1.0 starting"
    );

    let store: Arc<dyn PageStore> = match config.store.backend {
        StoreBackend::File => Arc::new(FileStore::open(&config.store.data_dir).await?),
        StoreBackend::Sqlite => Arc::new(SqliteStore::open(&config.store.db_path).await?),
    };

    let listener = bind_listener(&config.listener).await?;

    let server = WikiServer::new(config, store);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
