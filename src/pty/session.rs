use std::io::{Read, Write};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::config::RelayConfig;
use crate::error::RelayError;
use crate::pty::allocator::PtyAllocator;
use crate::pty::handle::MasterHandle;
use crate::pty::raw_mode::enter_raw_mode;
use crate::pty::spawn_config::PtySpawnConfig;
use crate::relay::{Relay, RelayState};
use crate::shutdown::ShutdownCoordinator;

/// One child in one terminal, relayed over a host byte stream.
pub struct PtySession {
    config: RelayConfig,
    allocator: PtyAllocator,
}

impl PtySession {
    pub fn new(config: RelayConfig) -> Self {
        Self::with_allocator(config, PtyAllocator::native())
    }

    pub fn with_allocator(config: RelayConfig, allocator: PtyAllocator) -> Self {
        Self { config, allocator }
    }

    pub fn config(&self) -> &RelayConfig {
        &self.config
    }

    /// Run `spawn` to completion, relaying `input` to its terminal and its
    /// terminal to `output`.
    ///
    /// Returns the exit code the host should terminate with. Errors are
    /// only returned for setup failures, before any bytes are relayed.
    pub fn run<I, W>(&self, spawn: &PtySpawnConfig, input: I, output: W) -> Result<i32, RelayError>
    where
        I: Read + Send + 'static,
        W: Write + Send + 'static,
    {
        let pair = self.allocator.allocate(self.config.geometry)?;
        let master = MasterHandle::new(pair.master);
        enter_raw_mode(master.raw_fd().map_err(RelayError::RawMode)?)
            .map_err(RelayError::RawMode)?;

        let master_reader = master.reader()?;
        let master_writer = master.writer()?;

        let mut child = spawn.spawn(&*pair.slave)?;
        drop(pair.slave);

        let state = Arc::new(RelayState::new());
        let output = Arc::new(Mutex::new(output));
        let relay = match Relay::start(
            master_reader,
            master_writer,
            input,
            Arc::clone(&output),
            Arc::clone(&state),
        ) {
            Ok(relay) => relay,
            Err(e) => {
                let _ = child.kill();
                let _ = child.wait();
                return Err(e);
            }
        };

        let coordinator = ShutdownCoordinator::new(self.config.grace_period);
        let termination = coordinator.wait_child(&mut *child);
        Ok(coordinator.finish(&termination, &state, relay, master, &output))
    }
}
