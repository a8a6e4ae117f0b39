mod loader;
mod types;

pub use loader::{COLUMNS_VAR, GRACE_MS_VAR, ROWS_VAR};
pub use types::{RelayConfig, TerminalGeometry};
