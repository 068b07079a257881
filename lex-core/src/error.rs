//! Error types surfaced by the source stream and scan driver.
//!
//! Malformed input is never an error here; see [`crate::token::TokenKind`]
//! for the in-band "bad token" family. `ScanError` is reserved for the
//! handful of conditions that abort the current [`crate::scanner::Scanner::scan`]
//! call outright: a failing reader callback, or a line/column counter that
//! has saturated `usize::MAX`.

use thiserror::Error;

/// Failure modes that can abort a single `scan` call.
///
/// There is no `MemoryError` variant: unlike the C original this crate is
/// scanning against, allocation failure in safe Rust aborts the process
/// rather than returning a recoverable status, so there is nothing for
/// this enum to carry for that case.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The pull backend's reader callback reported failure.
    #[error("reader callback failed: {0}")]
    Io(#[from] std::io::Error),

    /// The line counter would have wrapped past `usize::MAX`.
    #[error("line counter overflowed")]
    LineLimit,

    /// The column counter would have wrapped past `usize::MAX`.
    #[error("column counter overflowed")]
    ColumnLimit,
}
