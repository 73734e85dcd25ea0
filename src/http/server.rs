//! HTTP server setup.
//!
//! # Responsibilities
//! - Create the Axum router with the wiki routes
//! - Wire up middleware (tracing, request timeout)
//! - Bind the listener in fixed or ephemeral mode
//! - Serve with graceful shutdown
//!
//! # Design Decisions
//! - A single catch-all route feeds one dispatch handler; the route
//!   resolver decides what a path means, including the fallback quirk
//! - All shared objects (store, resolver, rewriter, templates) live in
//!   `AppState`, constructed once at startup, never globals

use std::sync::Arc;
use std::time::Duration;

use axum::{routing::any, Router};
use tokio::net::TcpListener;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::{ListenerConfig, WikiConfig};
use crate::http::handlers::dispatch;
use crate::http::templates::TemplateSet;
use crate::links::LinkRewriter;
use crate::routing::RouteResolver;
use crate::store::PageStore;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn PageStore>,
    pub resolver: Arc<RouteResolver>,
    pub rewriter: Arc<LinkRewriter>,
    pub templates: Arc<TemplateSet>,
}

/// HTTP server for the wiki.
pub struct WikiServer {
    router: Router,
    config: WikiConfig,
}

impl WikiServer {
    /// Create a new server over the given store.
    pub fn new(config: WikiConfig, store: Arc<dyn PageStore>) -> Self {
        let state = AppState {
            store,
            resolver: Arc::new(RouteResolver::new(config.wiki.fallback_title.clone())),
            rewriter: Arc::new(LinkRewriter::new()),
            templates: Arc::new(TemplateSet::new()),
        };

        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &WikiConfig, state: AppState) -> Router {
        Router::new()
            .route("/{*path}", any(dispatch))
            .route("/", any(dispatch))
            // Paths the wildcard cannot match (e.g. empty segments) still
            // belong to the wiki's fallback behavior, never a 404.
            .fallback(dispatch)
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.listener.request_timeout_secs,
            )))
            .layer(TraceLayer::new_for_http())
    }

    /// The assembled router. Useful for in-process tests.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &WikiConfig {
        &self.config
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Bind the listener described by the config.
///
/// In ephemeral mode an OS-assigned loopback port is bound and the resulting
/// address is written to the port file before the listener is returned, so
/// an external harness can discover the live port.
pub async fn bind_listener(config: &ListenerConfig) -> Result<TcpListener, std::io::Error> {
    if config.ephemeral {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let local_addr = listener.local_addr()?;
        tokio::fs::write(&config.port_file, local_addr.to_string()).await?;
        tracing::info!(
            address = %local_addr,
            port_file = %config.port_file,
            "ephemeral listener bound"
        );
        Ok(listener)
    } else {
        let listener = TcpListener::bind(&config.bind_address).await?;
        tracing::info!(address = %listener.local_addr()?, "listener bound");
        Ok(listener)
    }
}


/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to install Ctrl+C handler");
        return;
    }
    tracing::info!("Shutdown signal received");
}
