use std::io::{self, Read, Write};

use parking_lot::Mutex;
use scopeguard::defer;

use crate::relay::state::RelayState;

/// Largest chunk moved from the terminal to the host in one read.
pub const OUTBOUND_CHUNK: usize = 16 * 1024;
/// Largest chunk moved from the host to the terminal in one read.
pub const INBOUND_CHUNK: usize = 4 * 1024;

/// Why a copy loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum End {
    /// The shared flag said stop before the next read.
    Halted,
    /// The source returned end-of-stream or a read error.
    SourceClosed,
    /// The destination refused a write.
    SinkFailed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transfer {
    pub bytes: u64,
    pub end: End,
}

/// Copy chunks from `reader` into `forward` while `keep_going` holds.
///
/// `Interrupted` reads are retried; any other read error counts as
/// end-of-stream.
pub fn pump<R, K, F>(reader: &mut R, chunk: usize, keep_going: K, mut forward: F) -> Transfer
where
    R: Read + ?Sized,
    K: Fn() -> bool,
    F: FnMut(&[u8]) -> io::Result<()>,
{
    let mut buf = vec![0u8; chunk];
    let mut bytes = 0u64;
    loop {
        if !keep_going() {
            return Transfer { bytes, end: End::Halted };
        }
        let count = match reader.read(&mut buf) {
            Ok(0) => return Transfer { bytes, end: End::SourceClosed },
            Ok(count) => count,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => {
                tracing::trace!("read ended: {}", e);
                return Transfer { bytes, end: End::SourceClosed };
            }
        };
        if let Err(e) = forward(&buf[..count]) {
            tracing::trace!("write ended: {}", e);
            return Transfer { bytes, end: End::SinkFailed };
        }
        bytes += count as u64;
    }
}

/// Write a whole chunk, retrying short writes, then flush.
pub fn write_chunk<W: Write + ?Sized>(writer: &mut W, chunk: &[u8]) -> io::Result<()> {
    writer.write_all(chunk)?;
    writer.flush()
}

/// Terminal to host. Any ending stops the whole relay.
pub fn run_outbound<R, W>(mut reader: R, output: &Mutex<W>, state: &RelayState) -> Transfer
where
    R: Read,
    W: Write,
{
    defer! {
        state.stop();
    }
    let transfer = pump(
        &mut reader,
        OUTBOUND_CHUNK,
        || state.is_alive(),
        |chunk| write_chunk(&mut *output.lock(), chunk),
    );
    tracing::debug!(bytes = transfer.bytes, end = ?transfer.end, "outbound relay finished");
    transfer
}

/// Host to terminal. End of host input closes only this direction; a
/// failed write to the terminal stops the whole relay.
pub fn run_inbound<R, W>(mut input: R, mut master: W, state: &RelayState) -> Transfer
where
    R: Read,
    W: Write,
{
    defer! {
        state.close_input();
    }
    let transfer = pump(
        &mut input,
        INBOUND_CHUNK,
        || state.is_alive(),
        |chunk| write_chunk(&mut master, chunk),
    );
    if transfer.end == End::SinkFailed {
        state.stop();
    }
    tracing::debug!(bytes = transfer.bytes, end = ?transfer.end, "inbound relay finished");
    transfer
}

/// Forward whatever `reader` still yields until it runs dry.
pub fn drain<R, W>(reader: &mut R, output: &mut W) -> u64
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    pump(reader, OUTBOUND_CHUNK, || true, |chunk| write_chunk(output, chunk)).bytes
}
