use portable_pty::{native_pty_system, PtyPair, PtySystem};

use crate::config::TerminalGeometry;
use crate::error::RelayError;

/// Hands out master/subordinate terminal pairs of a fixed size.
pub struct PtyAllocator {
    system: Box<dyn PtySystem + Send>,
}

impl PtyAllocator {
    pub fn native() -> Self {
        Self::with_system(native_pty_system())
    }

    /// Use a specific PTY backend (tests substitute one that refuses).
    pub fn with_system(system: Box<dyn PtySystem + Send>) -> Self {
        Self { system }
    }

    /// Open a pair and size it to `geometry` (TIOCSWINSZ on unix).
    pub fn allocate(&self, geometry: TerminalGeometry) -> Result<PtyPair, RelayError> {
        let pair = self
            .system
            .openpty(geometry.to_pty_size())
            .map_err(RelayError::Allocate)?;
        tracing::debug!(rows = geometry.rows, cols = geometry.columns, "allocated pty");
        Ok(pair)
    }
}

impl Default for PtyAllocator {
    fn default() -> Self {
        Self::native()
    }
}
