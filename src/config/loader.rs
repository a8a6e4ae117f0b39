use std::str::FromStr;
use std::time::Duration;

use crate::config::types::{RelayConfig, TerminalGeometry};

pub const ROWS_VAR: &str = "PTY_ROWS";
pub const COLUMNS_VAR: &str = "PTY_COLS";
pub const GRACE_MS_VAR: &str = "PTY_GRACE_MS";

impl RelayConfig {
    /// Loads settings from the process environment.
    ///
    /// Never fails: absent or unparsable values fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads settings through an arbitrary variable lookup.
    ///
    /// - `PTY_ROWS` / `PTY_COLS`: positive integers, default 24 / 80.
    /// - `PTY_GRACE_MS`: non-negative integer milliseconds, default 200.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let rows = positive_or(&lookup, ROWS_VAR, TerminalGeometry::DEFAULT_ROWS);
        let columns = positive_or(&lookup, COLUMNS_VAR, TerminalGeometry::DEFAULT_COLUMNS);
        let grace_ms = parse_or(&lookup, GRACE_MS_VAR, Self::DEFAULT_GRACE_MS);

        Self::default()
            .with_geometry(TerminalGeometry::new(rows, columns))
            .with_grace_period(Duration::from_millis(grace_ms))
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + Copy + std::fmt::Display,
{
    let Some(raw) = lookup(key) else {
        return default;
    };
    match raw.trim().parse::<T>() {
        Ok(value) => value,
        Err(_) => {
            tracing::warn!("Ignoring {}={:?}: not a valid number, using {}", key, raw, default);
            default
        }
    }
}

fn positive_or<F>(lookup: &F, key: &str, default: u16) -> u16
where
    F: Fn(&str) -> Option<String>,
{
    match parse_or(lookup, key, default) {
        0 => {
            tracing::warn!("Ignoring {}=0: must be positive, using {}", key, default);
            default
        }
        value => value,
    }
}

