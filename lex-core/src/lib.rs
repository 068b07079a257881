//! A hand-written scanner for a small expression language: identifiers,
//! based numeric literals (binary/octal/decimal/hexadecimal, integer and
//! fractional), line/block comments, and line continuations.
//!
//! The scanner operates on raw bytes rather than assuming UTF-8 validity.
//!
//! # Architecture
//!
//! - [`source::SourceStream`]: position-tracked byte reader with unlimited pushback
//! - [`scanner::Scanner`]: the scan driver, one [`token::LexicalUnit`] per call
//! - [`token::TokenKind`]: classification of a scanned unit
//! - [`dfa`]: the per-byte state machine the driver steps
//! - [`skip`]: whitespace/comment/line-continuation skipping ahead of each token
//! - [`error::ScanError`]: failure modes that can abort a `scan` call
//!
//! # Example
//!
//! ```no_run
//! use lex_core::{Scanner, SourceStream, TokenKind};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let source = SourceStream::from_slice(b"abc 0x1f".to_vec());
//! let mut scanner = Scanner::new(source);
//!
//! loop {
//!     let unit = scanner.scan()?;
//!     let done = unit.kind == TokenKind::End;
//!     println!("{:?}", unit);
//!     if done {
//!         break;
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod classify;
pub mod dfa;
pub mod error;
mod lexeme;
pub mod scanner;
pub mod skip;
pub mod source;
pub mod token;

pub use error::ScanError;
pub use scanner::Scanner;
pub use source::SourceStream;
pub use token::{LexicalUnit, TokenKind};
