//! Service lifecycle: bind on start, release on stop.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use crate::config::Config;
use crate::error::ServiceError;
use crate::routes::AppState;

/// The status service, constructed once with its configuration.
#[derive(Debug)]
pub struct StatusService {
    config: Config,
}

impl StatusService {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Builds the router without binding a socket.
    pub fn router(&self) -> Router {
        crate::create_app(Arc::new(AppState::new(self.config.clone())))
    }

    /// Binds the configured address and starts serving in a background task.
    pub async fn start(self) -> Result<RunningService, ServiceError> {
        let addr = self.config.addr();
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|source| ServiceError::Bind {
                addr: addr.clone(),
                source,
            })?;
        let local_addr = listener.local_addr().map_err(ServiceError::Serve)?;

        let app = self.router();
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        tracing::info!(
            %local_addr,
            environment = %self.config.environment,
            "status service listening"
        );
        tracing::info!(
            "health check: http://localhost:{}/health",
            local_addr.port()
        );
        tracing::info!(
            "api status: http://localhost:{}/api/status",
            local_addr.port()
        );

        let task = tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    // A dropped sender also shuts the server down.
                    let _ = shutdown_rx.await;
                })
                .await
        });

        Ok(RunningService {
            local_addr,
            shutdown: shutdown_tx,
            task,
        })
    }
}

/// Handle to a started [`StatusService`].
///
/// Dropping the handle without calling [`RunningService::stop`] still triggers
/// shutdown, but nothing waits for the socket to be released.
#[derive(Debug)]
pub struct RunningService {
    local_addr: SocketAddr,
    shutdown: oneshot::Sender<()>,
    task: JoinHandle<std::io::Result<()>>,
}

impl RunningService {
    /// Address the listener is actually bound to.
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Stops accepting connections and waits for the server task to exit.
    pub async fn stop(self) -> Result<(), ServiceError> {
        // Err means the server already exited; the join below reports why.
        let _ = self.shutdown.send(());
        self.task.await?.map_err(ServiceError::Serve)?;
        tracing::info!(local_addr = %self.local_addr, "status service stopped");
        Ok(())
    }
}
