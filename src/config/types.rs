use std::time::Duration;

use portable_pty::PtySize;

/// Character-grid size applied to the terminal once, before the child starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalGeometry {
    pub rows: u16,
    pub columns: u16,
}

impl TerminalGeometry {
    pub const DEFAULT_ROWS: u16 = 24;
    pub const DEFAULT_COLUMNS: u16 = 80;

    pub fn new(rows: u16, columns: u16) -> Self {
        Self { rows, columns }
    }

    pub fn to_pty_size(self) -> PtySize {
        PtySize {
            rows: self.rows,
            cols: self.columns,
            pixel_width: 0,
            pixel_height: 0,
        }
    }
}

impl Default for TerminalGeometry {
    fn default() -> Self {
        Self::new(Self::DEFAULT_ROWS, Self::DEFAULT_COLUMNS)
    }
}

/// Runtime settings for one relay session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub geometry: TerminalGeometry,
    /// Upper bound on how long shutdown waits for the outbound worker
    /// after the child has exited.
    pub grace_period: Duration,
    /// Value exported to the child as `TERM`.
    pub term: String,
}

impl RelayConfig {
    pub const DEFAULT_GRACE_MS: u64 = 200;
    pub const DEFAULT_TERM: &'static str = "xterm-256color";

    pub fn with_geometry(mut self, geometry: TerminalGeometry) -> Self {
        self.geometry = geometry;
        self
    }

    pub fn with_grace_period(mut self, grace_period: Duration) -> Self {
        self.grace_period = grace_period;
        self
    }
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            geometry: TerminalGeometry::default(),
            grace_period: Duration::from_millis(Self::DEFAULT_GRACE_MS),
            term: Self::DEFAULT_TERM.to_string(),
        }
    }
}
