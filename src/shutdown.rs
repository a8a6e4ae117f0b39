use std::fmt;
use std::io::Write;
use std::time::Duration;

use parking_lot::Mutex;
use portable_pty::{Child, ExitStatus};

use crate::pty::MasterHandle;
use crate::relay::{self, Relay, RelayState};

/// Exit code used when the child did not exit normally.
pub const FALLBACK_EXIT_CODE: i32 = 1;

/// Longest the drain waits for the outbound worker to release host output.
const OUTPUT_LOCK_TIMEOUT: Duration = Duration::from_secs(1);

/// How the child ended, as far as the parent can tell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChildTermination {
    Exited(u32),
    Signaled(String),
    /// The wait itself failed.
    Unknown,
}

impl ChildTermination {
    pub fn from_status(status: &ExitStatus) -> Self {
        match status.signal() {
            Some(signal) => Self::Signaled(signal.to_string()),
            None => Self::Exited(status.exit_code()),
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Exited(code) => i32::try_from(*code).unwrap_or(FALLBACK_EXIT_CODE),
            Self::Signaled(_) | Self::Unknown => FALLBACK_EXIT_CODE,
        }
    }
}

impl fmt::Display for ChildTermination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exited(code) => write!(f, "exited with status {}", code),
            Self::Signaled(signal) => write!(f, "terminated by signal {}", signal),
            Self::Unknown => write!(f, "exit status unavailable"),
        }
    }
}

/// Tears the session down once the child is gone.
pub struct ShutdownCoordinator {
    grace_period: Duration,
}

impl ShutdownCoordinator {
    pub fn new(grace_period: Duration) -> Self {
        Self { grace_period }
    }

    /// Block until the child exits. Never fails.
    pub fn wait_child(&self, child: &mut (dyn Child + Send + Sync)) -> ChildTermination {
        match child.wait() {
            Ok(status) => ChildTermination::from_status(&status),
            Err(e) => {
                tracing::warn!("Failed to collect child status: {}", e);
                ChildTermination::Unknown
            }
        }
    }

    /// Stop the relay, drain what the terminal still holds, close the
    /// master and return the process exit code.
    pub fn finish<W: Write>(
        &self,
        termination: &ChildTermination,
        state: &RelayState,
        relay: Relay,
        master: MasterHandle,
        output: &Mutex<W>,
    ) -> i32 {
        state.stop();

        if !relay.wait_outbound(self.grace_period) {
            tracing::debug!(
                "outbound relay still blocked after {:?}, draining anyway",
                self.grace_period
            );
        }

        let drained = drain_master(&master, output);
        drop(master);

        let (outbound, inbound) = relay.finish();
        tracing::debug!(?outbound, ?inbound, drained, "relay closed");

        let code = termination.exit_code();
        tracing::info!(code, "child {}", termination);
        code
    }
}

fn drain_master<W: Write>(master: &MasterHandle, output: &Mutex<W>) -> u64 {
    let mut reader = match master.drain_reader() {
        Ok(reader) => reader,
        Err(e) => {
            tracing::debug!("Skipping drain: {}", e);
            return 0;
        }
    };
    let Some(mut output) = output.try_lock_for(OUTPUT_LOCK_TIMEOUT) else {
        tracing::warn!("Skipping drain: host output is still busy");
        return 0;
    };
    relay::drain(&mut reader, &mut *output)
}
