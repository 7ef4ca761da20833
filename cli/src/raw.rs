//! Terminal raw-mode handling.
//!
//! Single-key input needs canonical mode and echo switched off; the guard
//! restores the previous settings on drop, including on panic.

/// Puts the terminal into raw mode for its lifetime.
pub struct RawModeGuard {
    #[cfg(unix)]
    saved: Option<libc::termios>,
}

#[cfg(unix)]
impl RawModeGuard {
    pub fn enable() -> Self {
        use std::io;
        use std::os::unix::io::AsRawFd;

        let fd = io::stdin().as_raw_fd();
        let saved = unsafe {
            let mut termios: libc::termios = std::mem::zeroed();
            if libc::tcgetattr(fd, &mut termios) != 0 {
                return RawModeGuard { saved: None };
            }
            let original = termios;
            termios.c_lflag &= !(libc::ICANON | libc::ECHO);
            termios.c_cc[libc::VMIN] = 1;
            termios.c_cc[libc::VTIME] = 0;
            if libc::tcsetattr(fd, libc::TCSANOW, &termios) != 0 {
                return RawModeGuard { saved: None };
            }
            Some(original)
        };
        RawModeGuard { saved }
    }
}

#[cfg(unix)]
impl Drop for RawModeGuard {
    fn drop(&mut self) {
        use std::io;
        use std::os::unix::io::AsRawFd;

        if let Some(original) = self.saved {
            let fd = io::stdin().as_raw_fd();
            unsafe {
                libc::tcsetattr(fd, libc::TCSANOW, &original);
            }
        }
    }
}

#[cfg(not(unix))]
impl RawModeGuard {
    // Without raw mode each key needs Enter; the game still works.
    pub fn enable() -> Self {
        RawModeGuard {}
    }
}
