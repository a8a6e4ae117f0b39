use std::sync::atomic::{AtomicBool, Ordering};

/// Liveness shared by the two relay workers and the shutdown coordinator.
///
/// `stopped` only ever goes from `false` to `true`. Host input reaching
/// end-of-stream is tracked separately in `input_closed`: it ends the
/// inbound direction without cutting off output from a child that is
/// still running.
#[derive(Debug, Default)]
pub struct RelayState {
    stopped: AtomicBool,
    input_closed: AtomicBool,
}

impl RelayState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_alive(&self) -> bool {
        !self.stopped.load(Ordering::SeqCst)
    }

    /// Mark the relay stopped. Returns `true` for the call that made the
    /// transition.
    pub fn stop(&self) -> bool {
        !self.stopped.swap(true, Ordering::SeqCst)
    }

    pub fn close_input(&self) -> bool {
        !self.input_closed.swap(true, Ordering::SeqCst)
    }

    pub fn is_input_closed(&self) -> bool {
        self.input_closed.load(Ordering::SeqCst)
    }
}
