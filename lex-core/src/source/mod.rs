//! Buffered, position-tracked byte reader with unlimited pushback.
//!
//! `SourceStream` is the scanner's only window onto the outside world. It
//! owns a [`Backend`] (a pull-callback reader or an in-memory byte buffer),
//! a pushback stack, and the per-newline column stack that lets
//! `unget_char('\n')` restore the column the newline interrupted.

mod backend;

use backend::Backend;
use tracing::trace;

use crate::error::ScanError;

/// A source stream: position-tracked, with unbounded pushback.
///
/// Mutated exclusively by the scanner; not shared across threads.
pub struct SourceStream {
    backend: Backend,

    /// Bytes previously pushed back, most-recently-pushed last.
    pushback: Vec<u8>,

    /// Column saved immediately before each newline currently "behind" the
    /// read head. Popped by `unget_char('\n')` to restore the prior line's
    /// column count.
    newline_columns: Vec<usize>,

    line: usize,
    column: usize,

    /// Set when `END` has been pushed back. Cleared the next time it is
    /// consumed by `get_char`.
    end_pushed_back: bool,

    /// Ordinary bytes pushed back *after* `END` was pushed back, so the
    /// sequence `…, END, x, y` replays in order as `END, x, y`.
    post_end_count: usize,
}

impl SourceStream {
    fn new(backend: Backend) -> Self {
        Self {
            backend,
            pushback: Vec::new(),
            newline_columns: Vec::new(),
            line: 1,
            column: 1,
            end_pushed_back: false,
            post_end_count: 0,
        }
    }

    /// Construct a stream pulling bytes from a reader callback.
    ///
    /// The callback receives a mutable buffer and returns the number of
    /// bytes written, with `0` denoting end of input (the same contract
    /// as [`std::io::Read::read`]).
    pub fn from_reader(reader: impl FnMut(&mut [u8]) -> std::io::Result<usize> + 'static) -> Self {
        Self::new(Backend::pull(Box::new(reader)))
    }

    /// Construct a stream over an in-memory byte buffer.
    pub fn from_slice(bytes: impl Into<Vec<u8>>) -> Self {
        Self::new(Backend::slice(bytes.into()))
    }

    /// Current 1-based line number for the next byte that will be read.
    pub fn current_line(&self) -> usize {
        self.line
    }

    /// Current 1-based column number for the next byte that will be read.
    pub fn current_column(&self) -> usize {
        self.column
    }

    /// Read the next byte, or `None` at end of input.
    ///
    /// Consults the pushback stack (and the end-pushed-back flag) before
    /// falling through to the backend.
    pub fn get_char(&mut self) -> Result<Option<u8>, ScanError> {
        if self.end_pushed_back {
            if self.post_end_count > 0 {
                self.post_end_count -= 1;
                let c = self
                    .pushback
                    .pop()
                    .expect("post_end_count tracked a byte that isn't on the pushback stack");
                self.move_forward(c)?;
                return Ok(Some(c));
            }
            self.end_pushed_back = false;
            return Ok(None);
        }

        if let Some(c) = self.pushback.pop() {
            self.move_forward(c)?;
            return Ok(Some(c));
        }

        match self.backend.read()? {
            None => Ok(None),
            Some(c) => {
                self.move_forward(c)?;
                Ok(Some(c))
            }
        }
    }

    /// Push a byte, or the end-of-input sentinel (`None`), back onto the
    /// stream so the next `get_char` returns it again.
    pub fn unget_char(&mut self, c: Option<u8>) {
        match c {
            None => {
                trace!("unget END");
                self.end_pushed_back = true;
            }
            Some(c) => {
                self.pushback.push(c);
                if self.end_pushed_back {
                    self.post_end_count += 1;
                }
                self.move_backward(c);
            }
        }
    }

    /// Advance the position tracker past a byte just returned by a read,
    /// in either direction (pushback stack or backend).
    fn move_forward(&mut self, c: u8) -> Result<(), ScanError> {
        if c == b'\n' {
            if self.line == usize::MAX {
                return Err(ScanError::LineLimit);
            }
            self.newline_columns.push(self.column);
            self.line += 1;
            self.column = 1;
        } else {
            if self.column == usize::MAX {
                return Err(ScanError::ColumnLimit);
            }
            self.column += 1;
        }
        Ok(())
    }

    /// Reverse the position tracker for a byte being pushed back.
    fn move_backward(&mut self, c: u8) {
        if c == b'\n' {
            self.line -= 1;
            self.column = self
                .newline_columns
                .pop()
                .expect("newline-column stack underflow on unget_char('\\n')");
        } else {
            self.column -= 1;
        }
    }
}
