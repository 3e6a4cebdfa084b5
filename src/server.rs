//! HTTP server lifecycle
//!
//! Binding, serving and shutdown are explicit steps:
//! - `TranscriptServer::bind` claims the listening socket
//! - `TranscriptServer::start` spawns the accept loop and returns a `ServerHandle`
//! - `ServerHandle::stop` shuts the server down gracefully

use crate::config::HttpConfig;
use crate::http::{create_router, AppState};
use anyhow::{Context, Result};
use axum::Router;
use std::future::Future;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::info;

/// Listening address for the HTTP server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        HttpConfig::default().into()
    }
}

impl From<HttpConfig> for ServerConfig {
    fn from(http: HttpConfig) -> Self {
        Self {
            host: http.bind,
            port: http.port,
        }
    }
}

impl ServerConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// A bound, not yet serving, HTTP server
pub struct TranscriptServer {
    listener: TcpListener,
    router: Router,
    local_addr: SocketAddr,
}

impl TranscriptServer {
    /// Bind the listening socket. Port 0 picks a free port.
    pub async fn bind(config: &ServerConfig, state: AppState) -> Result<Self> {
        let address = config.address();

        let listener = TcpListener::bind(&address)
            .await
            .with_context(|| format!("Failed to bind {}", address))?;
        let local_addr = listener.local_addr()?;

        info!("HTTP server bound to {}", local_addr);

        Ok(Self {
            listener,
            router: create_router(state),
            local_addr,
        })
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Serve in the current task until `signal` resolves, then drain and return.
    pub async fn run_until<F>(self, signal: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        info!("Serving on {}", self.local_addr);

        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(signal)
            .await
            .context("HTTP server error")?;

        info!("HTTP server on {} stopped", self.local_addr);
        Ok(())
    }

    /// Serve in a background task.
    pub fn start(self) -> ServerHandle {
        let local_addr = self.local_addr;
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        let task = tokio::spawn(self.run_until(async move {
            // A dropped sender also stops the server
            let _ = shutdown_rx.await;
        }));

        ServerHandle {
            local_addr,
            shutdown_tx,
            task,
        }
    }
}

/// Handle to a server started with [`TranscriptServer::start`]
pub struct ServerHandle {
    local_addr: SocketAddr,
    shutdown_tx: oneshot::Sender<()>,
    task: JoinHandle<Result<()>>,
}

impl ServerHandle {
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Signal graceful shutdown and wait for in-flight requests to finish.
    pub async fn stop(self) -> Result<()> {
        info!("Stopping HTTP server on {}", self.local_addr);

        // Err means the server already exited
        let _ = self.shutdown_tx.send(());

        self.task.await.context("HTTP server task panicked")?
    }
}
