//! Byte-at-a-time input for the key decoder.
//!
//! The decoder needs two kinds of read: a blocking one for the first byte of a
//! key, and a bounded one while it waits for the rest of an escape sequence.

use std::io::{self, Read};
use std::time::Duration;

pub trait ByteSource {
    /// Blocks until a byte arrives. `None` means the input ended.
    fn read_byte(&mut self) -> io::Result<Option<u8>>;

    /// Waits at most `timeout` for a byte. `None` means nothing arrived in
    /// time, or the input ended.
    fn read_byte_timeout(&mut self, timeout: Duration) -> io::Result<Option<u8>>;
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        (**self).read_byte()
    }

    fn read_byte_timeout(&mut self, timeout: Duration) -> io::Result<Option<u8>> {
        (**self).read_byte_timeout(timeout)
    }
}

/// Adapts any reader. Reads never time out: bytes already in the reader are
/// returned at once, and the lookahead ends at end of input.
pub struct ReaderSource<R> {
    reader: R,
}

impl<R: Read> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: Read> ByteSource for ReaderSource<R> {
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        let mut byte = [0u8; 1];
        match self.reader.read(&mut byte)? {
            0 => Ok(None),
            _ => Ok(Some(byte[0])),
        }
    }

    fn read_byte_timeout(&mut self, _timeout: Duration) -> io::Result<Option<u8>> {
        self.read_byte()
    }
}

/// Unbuffered standard input.
///
/// Bytes are read straight from the file descriptor so that a poll for the
/// tail of an escape sequence never misses bytes parked in a userspace buffer.
#[derive(Default)]
pub struct StdinSource;

#[cfg(unix)]
impl StdinSource {
    fn wait_readable(timeout: Duration) -> io::Result<bool> {
        let mut poll_fd = libc::pollfd {
            fd: libc::STDIN_FILENO,
            events: libc::POLLIN,
            revents: 0,
        };
        let millis = i32::try_from(timeout.as_millis()).unwrap_or(i32::MAX);

        // SAFETY: one valid pollfd, count matches.
        let ready = unsafe { libc::poll(&mut poll_fd, 1, millis) };
        if ready < 0 {
            return Err(io::Error::last_os_error());
        }

        Ok(ready > 0)
    }
}

#[cfg(unix)]
impl ByteSource for StdinSource {
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        let mut byte = 0u8;

        // SAFETY: reads at most one byte into a live local.
        let count = unsafe {
            libc::read(
                libc::STDIN_FILENO,
                std::ptr::addr_of_mut!(byte).cast::<libc::c_void>(),
                1,
            )
        };

        match count {
            n if n < 0 => Err(io::Error::last_os_error()),
            0 => Ok(None),
            _ => Ok(Some(byte)),
        }
    }

    fn read_byte_timeout(&mut self, timeout: Duration) -> io::Result<Option<u8>> {
        if Self::wait_readable(timeout)? {
            self.read_byte()
        } else {
            Ok(None)
        }
    }
}

// Without poll a bare ESC waits for the next key to arrive.
#[cfg(not(unix))]
impl ByteSource for StdinSource {
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        ReaderSource::new(io::stdin()).read_byte()
    }

    fn read_byte_timeout(&mut self, _timeout: Duration) -> io::Result<Option<u8>> {
        self.read_byte()
    }
}
