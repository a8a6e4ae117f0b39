//! Run one command inside a pseudo-terminal and relay it, byte for byte,
//! over the host process's stdin and stdout.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod pty;
pub mod relay;
pub mod shutdown;
