//! ServerBuilder for fluent API to build HTTP servers

use super::AppState;
use super::router::build_router;
use crate::config::AppConfig;
use crate::core::{SharedClock, system_clock};
use crate::queries::posts::DEFAULT_RECENT_LIMIT;
use crate::storage::EntityStore;
use anyhow::Result;
use axum::Router;
use tokio::net::TcpListener;

/// Builder for the HTTP application
///
/// # Example
///
/// ```ignore
/// let store = EntityStore::in_memory();
/// fixtures.seed(&store).await?;
///
/// ServerBuilder::new()
///     .with_store(store)
///     .with_config(&config)
///     .serve(&config.server.address())
///     .await?;
/// ```
pub struct ServerBuilder {
    store: Option<EntityStore>,
    clock: Option<SharedClock>,
    recent_limit: usize,
    custom_routes: Vec<Router>,
}

impl ServerBuilder {
    /// Create a new ServerBuilder
    pub fn new() -> Self {
        Self {
            store: None,
            clock: None,
            recent_limit: DEFAULT_RECENT_LIMIT,
            custom_routes: Vec::new(),
        }
    }

    /// Serve records from `store`
    ///
    /// Without a store the builder creates an empty in-memory one.
    pub fn with_store(mut self, store: EntityStore) -> Self {
        self.store = Some(store);
        self
    }

    /// Use `clock` for time-window queries
    ///
    /// Pass the same clock the store was built with so record timestamps and
    /// query windows agree.
    pub fn with_clock(mut self, clock: SharedClock) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Apply the endpoint settings from `config`
    pub fn with_config(mut self, config: &AppConfig) -> Self {
        self.recent_limit = config.posts.recent_limit;
        self
    }

    /// Size of the recent-published-posts listing
    pub fn with_recent_limit(mut self, limit: usize) -> Self {
        self.recent_limit = limit;
        self
    }

    /// Add custom routes to the server
    pub fn with_custom_routes(mut self, routes: Router) -> Self {
        self.custom_routes.push(routes);
        self
    }

    /// Build the handler state
    pub fn build_state(&mut self) -> Result<AppState> {
        if self.recent_limit == 0 {
            anyhow::bail!("recent post limit must be at least 1");
        }

        let clock = self.clock.take().unwrap_or_else(system_clock);
        let store = self
            .store
            .take()
            .unwrap_or_else(|| EntityStore::in_memory_with_clock(clock.clone()));

        Ok(AppState {
            store,
            clock,
            recent_limit: self.recent_limit,
        })
    }

    /// Build the final router
    pub fn build(mut self) -> Result<Router> {
        let state = self.build_state()?;
        let custom_routes = std::mem::take(&mut self.custom_routes);
        Ok(build_router(state, custom_routes))
    }

    /// Serve the application with graceful shutdown
    ///
    /// This will:
    /// - Bind to the provided address
    /// - Start serving requests
    /// - Handle SIGTERM and SIGINT (Ctrl+C) for graceful shutdown
    pub async fn serve(self, addr: &str) -> Result<()> {
        let app = self.build()?;
        let listener = TcpListener::bind(addr).await?;

        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Wait for SIGTERM or Ctrl+C
///
/// A signal handler that cannot be installed never fires; the other one
/// still can.
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!("failed to install SIGTERM handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
