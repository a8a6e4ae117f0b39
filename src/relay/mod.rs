mod state;
mod worker;

pub use state::RelayState;
pub use worker::{
    drain, pump, run_inbound, run_outbound, write_chunk, End, Transfer, INBOUND_CHUNK,
    OUTBOUND_CHUNK,
};

use std::io::{Read, Write};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

use crate::error::RelayError;

const JOIN_POLL: Duration = Duration::from_millis(5);

/// The two running copy loops.
pub struct Relay {
    outbound: thread::JoinHandle<Transfer>,
    inbound: thread::JoinHandle<Transfer>,
}

impl Relay {
    /// Start both directions on their own threads.
    pub fn start<R, I, M, W>(
        master_reader: R,
        master_writer: M,
        input: I,
        output: Arc<Mutex<W>>,
        state: Arc<RelayState>,
    ) -> Result<Self, RelayError>
    where
        R: Read + Send + 'static,
        M: Write + Send + 'static,
        I: Read + Send + 'static,
        W: Write + Send + 'static,
    {
        let outbound_state = Arc::clone(&state);
        let outbound = thread::Builder::new()
            .name("pty-outbound".to_string())
            .spawn(move || run_outbound(master_reader, &output, &outbound_state))
            .map_err(|source| RelayError::Worker {
                worker: "outbound",
                source,
            })?;

        let inbound_state = Arc::clone(&state);
        let inbound = thread::Builder::new()
            .name("pty-inbound".to_string())
            .spawn(move || run_inbound(input, master_writer, &inbound_state));
        let inbound = match inbound {
            Ok(handle) => handle,
            Err(source) => {
                // Let the outbound thread wind down on its own.
                state.stop();
                return Err(RelayError::Worker {
                    worker: "inbound",
                    source,
                });
            }
        };

        Ok(Self { outbound, inbound })
    }

    /// Wait up to `timeout` for the outbound direction to finish.
    ///
    /// Returns `false` if it is still blocked in a read.
    pub fn wait_outbound(&self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        while !self.outbound.is_finished() {
            if Instant::now() >= deadline {
                return false;
            }
            thread::sleep(JOIN_POLL);
        }
        true
    }

    /// Collect whatever has finished. Workers still blocked in a read are
    /// detached rather than waited on.
    pub fn finish(self) -> (Option<Transfer>, Option<Transfer>) {
        (reap(self.outbound), reap(self.inbound))
    }
}

fn reap(handle: thread::JoinHandle<Transfer>) -> Option<Transfer> {
    if handle.is_finished() {
        handle.join().ok()
    } else {
        None
    }
}
