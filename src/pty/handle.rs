use std::fs::File;
use std::io::{self, Read};
use std::os::unix::io::{FromRawFd, RawFd};

use portable_pty::MasterPty;

use crate::config::TerminalGeometry;
use crate::error::RelayError;

/// Parent-side owner of the terminal master.
///
/// Every worker gets its own duplicated descriptor; dropping the handle
/// closes the original.
pub struct MasterHandle {
    master: Box<dyn MasterPty + Send>,
}

impl MasterHandle {
    pub fn new(master: Box<dyn MasterPty + Send>) -> Self {
        Self { master }
    }

    pub fn raw_fd(&self) -> io::Result<RawFd> {
        self.master.as_raw_fd().ok_or_else(|| {
            io::Error::new(io::ErrorKind::Unsupported, "terminal master has no descriptor")
        })
    }

    pub fn reader(&self) -> Result<Box<dyn Read + Send>, RelayError> {
        self.master
            .try_clone_reader()
            .map_err(|e| RelayError::Master(io::Error::other(e)))
    }

    /// A plain duplicate of the master for writing.
    ///
    /// Unlike the PTY crate's own writer, closing it does not push an
    /// end-of-file character into the child's input.
    pub fn writer(&self) -> Result<File, RelayError> {
        self.duplicate().map_err(RelayError::Master)
    }

    /// A duplicate switched to non-blocking mode, for the final drain.
    ///
    /// `O_NONBLOCK` lives on the shared open file description, so any
    /// worker still blocked on the master sees it too.
    pub fn drain_reader(&self) -> io::Result<File> {
        let file = self.duplicate()?;
        set_nonblocking(&file)?;
        Ok(file)
    }

    pub fn geometry(&self) -> Option<TerminalGeometry> {
        self.master
            .get_size()
            .ok()
            .map(|size| TerminalGeometry::new(size.rows, size.cols))
    }

    fn duplicate(&self) -> io::Result<File> {
        let fd = self.raw_fd()?;
        // SAFETY: fd is a live descriptor owned by self.master.
        let dup = unsafe { libc::fcntl(fd, libc::F_DUPFD_CLOEXEC, 0) };
        if dup < 0 {
            return Err(io::Error::last_os_error());
        }
        // SAFETY: dup is a freshly created descriptor nobody else owns.
        Ok(unsafe { File::from_raw_fd(dup) })
    }
}

fn set_nonblocking(file: &File) -> io::Result<()> {
    use std::os::unix::io::AsRawFd;

    let fd = file.as_raw_fd();
    // SAFETY: fd belongs to `file` for the duration of both calls.
    let flags = unsafe { libc::fcntl(fd, libc::F_GETFL) };
    if flags < 0 {
        return Err(io::Error::last_os_error());
    }
    if unsafe { libc::fcntl(fd, libc::F_SETFL, flags | libc::O_NONBLOCK) } < 0 {
        return Err(io::Error::last_os_error());
    }
    Ok(())
}
