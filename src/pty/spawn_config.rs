use std::ffi::OsString;

use portable_pty::{Child, CommandBuilder, SlavePty};

use crate::error::RelayError;

/// What to run inside the terminal.
///
/// `argv[0]` is both the program to look up on `PATH` and the argument
/// zero the child sees; the rest is passed through untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PtySpawnConfig {
    argv: Vec<OsString>,
    term: String,
}

impl PtySpawnConfig {
    /// Returns `None` for an empty command line.
    pub fn new(argv: Vec<OsString>, term: impl Into<String>) -> Option<Self> {
        if argv.is_empty() {
            return None;
        }
        Some(Self {
            argv,
            term: term.into(),
        })
    }

    pub fn program(&self) -> String {
        self.argv[0].to_string_lossy().into_owned()
    }

    pub fn argv(&self) -> &[OsString] {
        &self.argv
    }

    /// Build the command for the PTY crate.
    ///
    /// The crate's spawn makes the child a session leader, sets the
    /// subordinate as its controlling terminal and as fds 0-2, and closes
    /// every other inherited descriptor before exec.
    pub fn command(&self) -> CommandBuilder {
        let mut cmd = CommandBuilder::from_argv(self.argv.clone());
        // Without an explicit cwd the child would start in $HOME.
        if let Ok(cwd) = std::env::current_dir() {
            cmd.cwd(cwd);
        }
        cmd.env("TERM", &self.term);
        cmd
    }

    /// Launch the child on `slave`.
    pub fn spawn(&self, slave: &dyn SlavePty) -> Result<Box<dyn Child + Send + Sync>, RelayError> {
        let child = slave
            .spawn_command(self.command())
            .map_err(|source| RelayError::Spawn {
                command: self.program(),
                source,
            })?;
        tracing::info!(pid = ?child.process_id(), command = %self.program(), "spawned child");
        Ok(child)
    }
}

