//! Running the gateway: in the foreground until Ctrl+C, or in a background
//! task that tests and embedders can stop.

use std::net::SocketAddr;

use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::config::GatewayConfig;
use crate::error::GatewayError;
use crate::routes::{router, AppState};

async fn bind(addr: &str) -> Result<TcpListener, GatewayError> {
    TcpListener::bind(addr)
        .await
        .map_err(|source| GatewayError::Bind {
            addr: addr.to_string(),
            source,
        })
}

/// Serve until Ctrl+C.
pub async fn serve(config: &GatewayConfig, state: AppState) -> Result<(), GatewayError> {
    let listener = bind(&config.bind_addr).await?;
    info!(addr = %config.bind_addr, "agent brain gateway listening");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(GatewayError::Serve)
}

/// Resolves on Ctrl+C. Never resolves if the handler cannot be installed.
async fn shutdown_signal() {
    wait_for_shutdown(tokio::signal::ctrl_c()).await
}

async fn wait_for_shutdown<F>(signal: F)
where
    F: std::future::Future<Output = std::io::Result<()>>,
{
    match signal.await {
        Ok(()) => info!("shutdown requested"),
        Err(err) => {
            warn!(error = %err, "failed to listen for Ctrl+C, serving until killed");
            std::future::pending::<()>().await;
        }
    }
}

/// A gateway serving from a background task.
pub struct RunningGateway {
    local_addr: SocketAddr,
    shutdown: oneshot::Sender<()>,
    task: JoinHandle<std::io::Result<()>>,
}

impl RunningGateway {
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Base URL for the client wrappers, e.g. `http://127.0.0.1:8787`.
    pub fn base_url(&self) -> String {
        format!("http://{}", self.local_addr)
    }

    /// Stop accepting connections and wait for in-flight requests.
    pub async fn stop(self) -> Result<(), GatewayError> {
        // the receiver is gone only if the server already exited
        let _ = self.shutdown.send(());
        self.task.await?.map_err(GatewayError::Serve)
    }
}

/// Bind `addr` and serve from a background task. Port 0 picks a free port.
pub async fn spawn(addr: &str, state: AppState) -> Result<RunningGateway, GatewayError> {
    let listener = bind(addr).await?;
    let local_addr = listener.local_addr().map_err(|source| GatewayError::Bind {
        addr: addr.to_string(),
        source,
    })?;

    let (shutdown, signal) = oneshot::channel::<()>();
    let task = tokio::spawn(async move {
        axum::serve(listener, router(state))
            .with_graceful_shutdown(async {
                let _ = signal.await;
            })
            .await
    });

    info!(%local_addr, "agent brain gateway spawned");
    Ok(RunningGateway {
        local_addr,
        shutdown,
        task,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_failed_signal_handler_keeps_serving() {
        let failing = async { Err(std::io::Error::other("no signal support")) };

        let outcome = tokio::time::timeout(Duration::from_millis(50), wait_for_shutdown(failing)).await;

        assert!(outcome.is_err(), "shutdown fired without a signal");
    }

    #[tokio::test]
    async fn test_signal_triggers_shutdown() {
        let outcome = tokio::time::timeout(Duration::from_millis(50), wait_for_shutdown(async { Ok(()) })).await;

        assert!(outcome.is_ok());
    }
}
