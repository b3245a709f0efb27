//! Decoding of raw terminal bytes into key events.
//!
//! Every call to [`KeyDecoder::next_key`] blocks for one byte and returns at
//! most one key. An ESC byte opens a short lookahead window: CSI (`ESC [`)
//! and SS3 (`ESC O`) sequences that complete inside it become navigation or
//! function keys, anything else is reported as a bare `Escape`.

use std::collections::VecDeque;
use std::time::Duration;

use log::debug;
use rust_select_core::error::DecodeError;

use super::source::ByteSource;
use super::types::KeyEvent;

const ESC: u8 = 0x1b;
const CTRL_C: u8 = 0x03;

/// Longest CSI parameter run kept; longer sequences are consumed and dropped.
const MAX_SEQUENCE_LEN: usize = 16;

pub struct KeyDecoder<S> {
    source: S,
    pending: VecDeque<u8>,
    escape_timeout: Duration,
}

#[inline]
fn is_csi_final(byte: u8) -> bool {
    (0x40..=0x7e).contains(&byte)
}

#[inline]
fn is_csi_body(byte: u8) -> bool {
    (0x20..=0x3f).contains(&byte)
}

/// Keys shared by the CSI and SS3 forms.
fn map_final(byte: u8) -> Option<KeyEvent> {
    match byte {
        b'A' => Some(KeyEvent::Up),
        b'B' => Some(KeyEvent::Down),
        b'C' => Some(KeyEvent::Right),
        b'D' => Some(KeyEvent::Left),
        b'H' => Some(KeyEvent::Home),
        b'F' => Some(KeyEvent::End),
        b'P'..=b'S' => Some(KeyEvent::FunctionKey(byte - b'P' + 1)),
        _ => None,
    }
}

/// `ESC [ n ~` forms.
fn map_tilde(code: u16) -> KeyEvent {
    match code {
        1 | 7 => KeyEvent::Home,
        4 | 8 => KeyEvent::End,
        11..=15 => KeyEvent::FunctionKey((code - 10) as u8),
        17..=21 => KeyEvent::FunctionKey((code - 11) as u8),
        23 | 24 => KeyEvent::FunctionKey((code - 12) as u8),
        _ => KeyEvent::Unknown,
    }
}

fn map_csi(params: &[u8], final_byte: u8) -> KeyEvent {
    if final_byte == b'~' {
        // Modifiers follow a `;`, only the key code matters here
        let code = params
            .split(|&b| b == b';')
            .next()
            .and_then(|p| std::str::from_utf8(p).ok())
            .and_then(|p| p.parse::<u16>().ok());

        return code.map_or(KeyEvent::Unknown, map_tilde);
    }

    map_final(final_byte).unwrap_or(KeyEvent::Unknown)
}

/// Byte count of a UTF-8 sequence from its lead byte.
fn utf8_width(lead: u8) -> Option<usize> {
    match lead {
        0xc2..=0xdf => Some(2),
        0xe0..=0xef => Some(3),
        0xf0..=0xf4 => Some(4),
        _ => None,
    }
}

impl<S: ByteSource> KeyDecoder<S> {
    pub fn new(source: S, escape_timeout: Duration) -> Self {
        Self {
            source,
            pending: VecDeque::new(),
            escape_timeout,
        }
    }

    /// Reads the next key. `Ok(None)` means the input ended.
    ///
    /// # Errors
    ///
    /// Returns an error if the read fails or a multi-byte character is not
    /// valid UTF-8.
    pub fn next_key(&mut self) -> Result<Option<KeyEvent>, DecodeError> {
        let Some(byte) = self.next_byte()? else {
            return Ok(None);
        };

        let key = match byte {
            ESC => self.decode_escape()?,
            CTRL_C => KeyEvent::CtrlC,
            b'\r' | b'\n' => KeyEvent::Enter,
            b' ' => KeyEvent::Space,
            0x21..=0x7e => KeyEvent::Printable(char::from(byte)),
            0x80..=0xff => self.decode_utf8(byte)?,
            _ => KeyEvent::Unknown,
        };

        Ok(Some(key))
    }

    fn next_byte(&mut self) -> Result<Option<u8>, DecodeError> {
        if let Some(byte) = self.pending.pop_front() {
            return Ok(Some(byte));
        }

        self.source.read_byte().map_err(DecodeError::Read)
    }

    fn lookahead(&mut self) -> Result<Option<u8>, DecodeError> {
        if let Some(byte) = self.pending.pop_front() {
            return Ok(Some(byte));
        }

        self.source
            .read_byte_timeout(self.escape_timeout)
            .map_err(DecodeError::Read)
    }

    fn decode_escape(&mut self) -> Result<KeyEvent, DecodeError> {
        match self.lookahead()? {
            None => Ok(KeyEvent::Escape),
            Some(b'[') => self.decode_csi(),
            Some(b'O') => self.decode_ss3(),
            Some(other) => {
                // Not a sequence we know: ESC stands alone, the byte is a key of its own
                self.pending.push_back(other);
                Ok(KeyEvent::Escape)
            }
        }
    }

    fn decode_csi(&mut self) -> Result<KeyEvent, DecodeError> {
        let mut params: Vec<u8> = Vec::with_capacity(MAX_SEQUENCE_LEN);
        let mut overflowed = false;

        loop {
            let Some(byte) = self.lookahead()? else {
                debug!("Incomplete CSI sequence {:02x?}, treating as escape", params);
                return Ok(KeyEvent::Escape);
            };

            if is_csi_final(byte) {
                if overflowed {
                    debug!("Dropped overlong CSI sequence");
                    return Ok(KeyEvent::Unknown);
                }

                let key = map_csi(&params, byte);
                if key == KeyEvent::Unknown {
                    debug!("Unrecognised CSI sequence {:02x?} {:02x}", params, byte);
                }
                return Ok(key);
            }

            if !is_csi_body(byte) {
                // A control byte cuts the sequence short; decode it next time
                self.pending.push_back(byte);
                return Ok(KeyEvent::Unknown);
            }

            if params.len() < MAX_SEQUENCE_LEN {
                params.push(byte);
            } else {
                overflowed = true;
            }
        }
    }

    fn decode_ss3(&mut self) -> Result<KeyEvent, DecodeError> {
        match self.lookahead()? {
            None => Ok(KeyEvent::Escape),
            Some(byte) => Ok(map_final(byte).unwrap_or_else(|| {
                debug!("Unrecognised SS3 sequence {:02x}", byte);
                KeyEvent::Unknown
            })),
        }
    }

    fn decode_utf8(&mut self, lead: u8) -> Result<KeyEvent, DecodeError> {
        let Some(width) = utf8_width(lead) else {
            return Err(DecodeError::MalformedUtf8(vec![lead]));
        };

        let mut bytes = Vec::with_capacity(width);
        bytes.push(lead);
        while bytes.len() < width {
            match self.next_byte()? {
                Some(byte) => bytes.push(byte),
                None => return Err(DecodeError::MalformedUtf8(bytes)),
            }
        }

        let decoded = std::str::from_utf8(&bytes)
            .ok()
            .and_then(|text| text.chars().next());

        match decoded {
            Some(c) if !c.is_control() => Ok(KeyEvent::Printable(c)),
            Some(_) => Ok(KeyEvent::Unknown),
            None => Err(DecodeError::MalformedUtf8(bytes)),
        }
    }
}
