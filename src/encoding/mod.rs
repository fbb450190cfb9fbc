//! Percent-encoding utilities.

pub mod table;

use crate::error::{ParseError, ParseErrorKind};
use alloc::vec::Vec;
use core::fmt;
use self::table::Table;

/// Returns the value of an ASCII hexadecimal digit.
const fn hex_value(x: u8) -> Option<u8> {
    match x {
        b'0'..=b'9' => Some(x - b'0'),
        b'A'..=b'F' => Some(x - b'A' + 10),
        b'a'..=b'f' => Some(x - b'a' + 10),
        _ => None,
    }
}

/// A decoder for a single percent-encoded octet.
///
/// Feed it the two bytes following a `%` sign; once both are accepted
/// the decoded octet is available through [`byte`](Self::byte).
pub(crate) struct PctDecoder {
    state: PctState,
    value: u8,
}

enum PctState {
    HiNibble,
    LoNibble,
    Done,
}

impl PctDecoder {
    pub(crate) fn new() -> PctDecoder {
        PctDecoder {
            state: PctState::HiNibble,
            value: 0,
        }
    }

    /// Consumes one byte, returning `false` if it is not a hexadecimal digit.
    ///
    /// Must not be called again once the decoder is done.
    pub(crate) fn feed(&mut self, x: u8) -> bool {
        let Some(digit) = hex_value(x) else {
            return false;
        };
        match self.state {
            PctState::HiNibble => {
                self.value = digit << 4;
                self.state = PctState::LoNibble;
            }
            PctState::LoNibble => {
                self.value |= digit;
                self.state = PctState::Done;
            }
            PctState::Done => unreachable!("fed a finished decoder"),
        }
        true
    }

    pub(crate) fn is_done(&self) -> bool {
        matches!(self.state, PctState::Done)
    }

    /// Returns the decoded octet.
    pub(crate) fn byte(&self) -> u8 {
        self.value
    }
}

/// Decodes one component, validating unencoded bytes against `table`.
///
/// `offset` is the position of `raw[0]` in the original input and is
/// only used to report absolute error indexes.
pub(crate) fn decode_element(
    raw: &[u8],
    table: &Table,
    offset: usize,
) -> Result<Vec<u8>, ParseError> {
    let mut out = Vec::with_capacity(raw.len());
    let mut i = 0;
    while i < raw.len() {
        let x = raw[i];
        if x == b'%' {
            let start = i;
            let mut dec = PctDecoder::new();
            i += 1;
            while !dec.is_done() {
                match raw.get(i) {
                    Some(&b) if dec.feed(b) => i += 1,
                    _ => {
                        return Err(ParseError {
                            index: offset + start,
                            kind: ParseErrorKind::InvalidOctet,
                        })
                    }
                }
            }
            out.push(dec.byte());
        } else if table.allows(x) {
            out.push(x);
            i += 1;
        } else {
            return Err(ParseError {
                index: offset + i,
                kind: ParseErrorKind::UnexpectedChar,
            });
        }
    }
    Ok(out)
}

/// Writes decoded bytes out, percent-encoding whatever `table` disallows.
pub(crate) fn encode_into<W: fmt::Write>(
    bytes: &[u8],
    table: &Table,
    w: &mut W,
) -> fmt::Result {
    for &x in bytes {
        table.encode(x, w)?;
    }
    Ok(())
}
