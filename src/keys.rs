//! Raw-mode key decoding: a pull-based iterator turning terminal bytes into
//! discrete key events.
//!
//! Raw mode delivers input byte-at-a-time with no line buffering, so arrow
//! keys arrive as the three-byte sequence `ESC [ A` / `ESC [ B`. The decoder
//! consumes exactly one event's worth of bytes per pull and performs no
//! buffering of its own; end of input ends the iterator.

use std::io::{self, Read};

/// One decoded key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    /// Any single byte that is not part of a recognized sequence.
    Char(u8),
    /// `ESC [ A`.
    Up,
    /// `ESC [ B`.
    Down,
    /// `\n` (or `\r`, which raw mode delivers for the Enter key).
    Enter,
    /// A discarded escape sequence (`ESC` not followed by `[`, or an
    /// unrecognized final byte).
    Unknown,
}

/// Decodes key events from a raw byte stream.
pub struct KeyDecoder<R: Read> {
    input: R,
}

impl<R: Read> KeyDecoder<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }

    /// Read one byte; `Ok(None)` is end of input.
    fn next_byte(&mut self) -> io::Result<Option<u8>> {
        let mut buf = [0u8; 1];
        loop {
            match self.input.read(&mut buf) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(buf[0])),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }

    /// Decode one event; `Ok(None)` is end of input, including EOF that
    /// truncates an escape sequence mid-way.
    fn next_event(&mut self) -> io::Result<Option<KeyEvent>> {
        let Some(first) = self.next_byte()? else {
            return Ok(None);
        };

        if first == 0x1B {
            let Some(second) = self.next_byte()? else {
                return Ok(None);
            };
            if second != b'[' {
                // Not a CSI sequence; discard both bytes without retry.
                return Ok(Some(KeyEvent::Unknown));
            }
            let Some(final_byte) = self.next_byte()? else {
                return Ok(None);
            };
            return Ok(Some(match final_byte {
                b'A' => KeyEvent::Up,
                b'B' => KeyEvent::Down,
                _ => KeyEvent::Unknown,
            }));
        }

        Ok(Some(match first {
            b'\n' | b'\r' => KeyEvent::Enter,
            b => KeyEvent::Char(b),
        }))
    }
}

impl<R: Read> Iterator for KeyDecoder<R> {
    type Item = io::Result<KeyEvent>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_event().transpose()
    }
}
