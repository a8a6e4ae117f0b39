use std::io;
use std::mem::MaybeUninit;
use std::os::unix::io::RawFd;

/// Switch the terminal behind `fd` into pass-through mode.
///
/// Clears CR/NL input translation, output post-processing, canonical
/// line buffering and echo, and applies the change immediately. Signal
/// characters and flow control are left as the platform set them.
pub fn enter_raw_mode(fd: RawFd) -> io::Result<()> {
    let mut attrs = get_attrs(fd)?;
    make_raw(&mut attrs);
    // SAFETY: attrs was filled in by tcgetattr for this fd.
    if unsafe { libc::tcsetattr(fd, libc::TCSANOW, &attrs) } != 0 {
        return Err(io::Error::last_os_error());
    }
    Ok(())
}

pub fn make_raw(attrs: &mut libc::termios) {
    attrs.c_iflag &= !(libc::ICRNL | libc::INLCR | libc::IGNCR);
    attrs.c_oflag &= !libc::OPOST;
    attrs.c_lflag &= !(libc::ICANON | libc::ECHO);
}

pub fn get_attrs(fd: RawFd) -> io::Result<libc::termios> {
    let mut attrs = MaybeUninit::<libc::termios>::uninit();
    // SAFETY: tcgetattr writes a full termios on success.
    if unsafe { libc::tcgetattr(fd, attrs.as_mut_ptr()) } != 0 {
        return Err(io::Error::last_os_error());
    }
    Ok(unsafe { attrs.assume_init() })
}
