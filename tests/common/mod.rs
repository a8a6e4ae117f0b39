//! Shared helpers for driving a relay session in-process.

#![allow(dead_code)]

use parking_lot::Mutex;
use pty_relay::config::{RelayConfig, TerminalGeometry};
use pty_relay::error::RelayError;
use pty_relay::pty::{PtySession, PtySpawnConfig};
use std::ffi::OsString;
use std::io::{self, Read, Write};
use std::sync::Arc;
use std::time::Duration;

/// Host output sink that tests can inspect after the session returns.
#[derive(Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn contents(&self) -> Vec<u8> {
        self.0.lock().clone()
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.contents()).into_owned()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Host input that hands out at most `piece` bytes per read.
pub struct PiecewiseInput {
    data: Vec<u8>,
    pos: usize,
    piece: usize,
}

impl PiecewiseInput {
    pub fn new(data: &[u8], piece: usize) -> Self {
        Self {
            data: data.to_vec(),
            pos: 0,
            piece,
        }
    }
}

impl Read for PiecewiseInput {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let end = (self.pos + self.piece.min(buf.len())).min(self.data.len());
        let n = end - self.pos;
        buf[..n].copy_from_slice(&self.data[self.pos..end]);
        self.pos = end;
        Ok(n)
    }
}

pub fn sh(script: &str) -> PtySpawnConfig {
    command(&["sh", "-c", script])
}

pub fn command(argv: &[&str]) -> PtySpawnConfig {
    PtySpawnConfig::new(
        argv.iter().map(OsString::from).collect(),
        RelayConfig::DEFAULT_TERM,
    )
    .expect("non-empty argv")
}

pub fn config(rows: u16, columns: u16) -> RelayConfig {
    RelayConfig::default()
        .with_geometry(TerminalGeometry::new(rows, columns))
        .with_grace_period(Duration::from_millis(200))
}

/// Run `spawn` with the given host input and collect host output.
pub fn run_with_input<I>(
    config: RelayConfig,
    spawn: &PtySpawnConfig,
    input: I,
) -> Result<(i32, SharedBuffer), RelayError>
where
    I: Read + Send + 'static,
{
    let output = SharedBuffer::default();
    let code = PtySession::new(config).run(spawn, input, output.clone())?;
    Ok((code, output))
}

pub fn run(spawn: &PtySpawnConfig) -> Result<(i32, SharedBuffer), RelayError> {
    run_with_input(RelayConfig::default(), spawn, io::empty())
}
