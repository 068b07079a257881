//! Token kinds and the lexical unit produced by each [`crate::scanner::Scanner::scan`] call.

use crate::classify::Base;

/// Which half of a numeric literal was last accepted: before or after the
/// fractional dot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumForm {
    Int,
    Float,
}

/// The error context a numeric token carries, if any. `None` is a clean
/// literal; the rest mirror the `_DOT`/`_COM`/`_SEQ`/`_SUF` variants,
/// collapsed into one tag instead of 4 separate enum arms per base/form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumError {
    /// No error: a well-formed integer or float.
    None,
    /// Terminated by a trailing dot with no digit following (`S_*_dot` accept).
    Dot,
    /// Terminated by a trailing comma (`S_*_comma` accept).
    Com,
    /// Two sequence punctuators (`.`/`,`) back to back.
    Seq,
    /// An identifier-like run followed valid digits, rendering the literal malformed.
    Suf,
}

/// Classification of a scanned lexical unit.
///
/// The 40 numeric variants (4 bases × 2 forms × 5 error tags) are
/// represented as one `Number { base, form, error }` variant rather than
/// 40 flat enum arms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Identifier starting with a lowercase letter.
    Lowercase,
    /// Identifier starting with an uppercase letter.
    Uppercase,
    /// A numeric literal, possibly malformed.
    Number {
        base: Base,
        form: NumForm,
        error: NumError,
    },
    /// A single `\n`.
    Eol,
    /// End of input.
    End,
    /// A `#` line comment with no terminating newline before end of input.
    BadComment,
    /// A `{ ... }` block comment with no matching close before end of input.
    BadMultilineComment,
    /// Any byte the initial DFA state does not accept.
    Unknown,
}

impl TokenKind {
    /// Shorthand for a clean (non-error) numeric token.
    pub fn number(base: Base, form: NumForm) -> Self {
        TokenKind::Number {
            base,
            form,
            error: NumError::None,
        }
    }
}

/// A lexeme paired with its token kind and starting source position.
///
/// `next` is reserved for a downstream parser; the scanner itself always
/// leaves it `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexicalUnit {
    pub kind: TokenKind,
    pub bytes: Vec<u8>,
    pub line: usize,
    pub column: usize,
    pub next: Option<Box<LexicalUnit>>,
}

impl LexicalUnit {
    pub(crate) fn new(kind: TokenKind, bytes: Vec<u8>, line: usize, column: usize) -> Self {
        Self {
            kind,
            bytes,
            line,
            column,
            next: None,
        }
    }
}
