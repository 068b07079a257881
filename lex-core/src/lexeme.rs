//! Growable byte buffer used to accumulate a lexeme while the DFA runs.
//!
//! Mirrors the C original's append/finalize discipline (grow by a fixed
//! step, shrink to fit on finalize) rather than just wrapping a `Vec`
//! outright, so the growth policy stays an explicit, inspectable knob.

/// Bytes added to capacity each time [`Lexeme::append`] would otherwise overflow it.
const GROWTH_STEP: usize = 32;

/// An in-progress lexeme: its bytes so far, plus the (line, column) of its
/// first byte, captured before that byte was read.
pub struct Lexeme {
    bytes: Vec<u8>,
    line: usize,
    column: usize,
}

impl Lexeme {
    /// Start a new lexeme, snapshotting the stream's current position as
    /// its start. No bytes have been captured yet.
    pub fn new(line: usize, column: usize) -> Self {
        Self {
            bytes: Vec::new(),
            line,
            column,
        }
    }

    /// Append one byte, growing the backing store in `GROWTH_STEP`-sized
    /// steps rather than relying on `Vec`'s doubling policy.
    pub fn push(&mut self, byte: u8) {
        if self.bytes.len() == self.bytes.capacity() {
            self.bytes.reserve_exact(GROWTH_STEP);
        }
        self.bytes.push(byte);
    }

    /// Number of bytes captured so far.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Consume the lexeme, shrinking its backing allocation down to
    /// exactly its length and handing back the captured bytes alongside
    /// the starting position.
    pub fn finalize(mut self) -> (Vec<u8>, usize, usize) {
        self.bytes.shrink_to_fit();
        (self.bytes, self.line, self.column)
    }
}
