//! Errors that abort the relay before any bytes move.
//!
//! Everything that can go wrong after the child is running (transport
//! failures, an unreadable exit status) is absorbed into the shutdown path
//! instead of surfacing here.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RelayError {
    /// The platform refused to hand out a terminal pair.
    #[error("Failed to allocate pseudo-terminal: {0}")]
    Allocate(#[source] anyhow::Error),

    #[error("Failed to put terminal into raw mode: {0}")]
    RawMode(#[source] std::io::Error),

    #[error("Failed to spawn '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: anyhow::Error,
    },

    /// Duplicating or cloning the master side for the relay workers failed.
    #[error("Failed to open terminal master: {0}")]
    Master(#[source] std::io::Error),

    #[error("Failed to start {worker} worker: {source}")]
    Worker {
        worker: &'static str,
        #[source]
        source: std::io::Error,
    },
}
