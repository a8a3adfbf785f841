//! Cooperative cancellation for demo flows
//!
//! This module provides the [`ShutdownToken`] passed to every blocking or
//! iterative operation, plus the wiring that cancels it on system signals
//! (CTRL-C, SIGTERM). Tokens are cheap to clone; once cancelled they stay
//! cancelled, and late subscribers observe the cancellation immediately.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::signal;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tracing::info;

/// Cloneable cancellation token shared between the CLI and its demo flows
#[derive(Debug, Clone)]
pub struct ShutdownToken {
    cancelled: Arc<AtomicBool>,
    notify: broadcast::Sender<()>,
}

impl ShutdownToken {
    /// Create a fresh, un-cancelled token
    pub fn new() -> Self {
        let (notify, _) = broadcast::channel(1);
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
            notify,
        }
    }

    /// Request cancellation, waking every waiter
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
        // No receivers is fine: is_cancelled() already reflects the state.
        let _ = self.notify.send(());
    }

    /// Check whether cancellation has been requested
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Wait until cancellation is requested
    ///
    /// Returns immediately if the token is already cancelled. Subscribe
    /// before re-checking the flag so a cancel landing in between is not
    /// missed.
    pub async fn cancelled(&self) {
        let mut rx = self.notify.subscribe();
        if self.is_cancelled() {
            return;
        }
        let _ = rx.recv().await;
    }
}

impl Default for ShutdownToken {
    fn default() -> Self {
        Self::new()
    }
}

/// Cancel the given token when the process receives CTRL-C or SIGTERM
///
/// Returns a handle to the background task that monitors for signals.
pub fn install_signal_handler(token: &ShutdownToken) -> JoinHandle<()> {
    let token = token.clone();

    tokio::spawn(async move {
        let ctrl_c = async {
            signal::ctrl_c()
                .await
                .expect("Failed to install Ctrl+C handler");
        };

        #[cfg(unix)]
        let terminate = async {
            signal::unix::signal(signal::unix::SignalKind::terminate())
                .expect("Failed to install signal handler")
                .recv()
                .await;
        };

        #[cfg(not(unix))]
        let terminate = std::future::pending::<()>();

        tokio::select! {
            _ = ctrl_c => {
                info!("Received Ctrl+C, cancelling");
            },
            _ = terminate => {
                info!("Received terminate signal, cancelling");
            },
        }

        token.cancel();
    })
}
