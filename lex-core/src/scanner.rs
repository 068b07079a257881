//! The scan driver: ties the skip phase, the DFA, and the lexeme
//! buffer together into one `scan` call per lexical unit.

use tracing::debug;

use crate::classify::{is_dec, is_lower, is_upper, Base};
use crate::dfa::{self, IdCase, NumSub, State, Step};
use crate::error::ScanError;
use crate::lexeme::Lexeme;
use crate::skip::{self, SkipOutcome};
use crate::source::SourceStream;
use crate::token::{LexicalUnit, NumForm, TokenKind};

/// Drives one `SourceStream` through repeated `scan` calls.
pub struct Scanner {
    source: SourceStream,
}

impl Scanner {
    pub fn new(source: SourceStream) -> Self {
        Self { source }
    }

    /// Scan the next lexical unit. Returns `TokenKind::End` forever once
    /// end of input is reached; callers stop by matching on that kind.
    pub fn scan(&mut self) -> Result<LexicalUnit, ScanError> {
        match skip::skip(&mut self.source)? {
            SkipOutcome::Bad(bad) => {
                debug!(line = bad.line, column = bad.column, multiline = bad.multiline, "bad comment");
                let kind = if bad.multiline {
                    TokenKind::BadMultilineComment
                } else {
                    TokenKind::BadComment
                };
                return Ok(LexicalUnit::new(kind, Vec::new(), bad.line, bad.column));
            }
            SkipOutcome::Ok(_) => {}
        }

        let line = self.source.current_line();
        let column = self.source.current_column();
        let mut lexeme = Lexeme::new(line, column);

        let first = self.source.get_char()?;
        let (mut state, mut c) = match first {
            Some(c) if is_lower(c) => {
                lexeme.push(c);
                (State::Identifier(IdCase::Lower), self.source.get_char()?)
            }
            Some(c) if is_upper(c) => {
                lexeme.push(c);
                (State::Identifier(IdCase::Upper), self.source.get_char()?)
            }
            Some(b'0') => {
                lexeme.push(b'0');
                (State::Zero, self.source.get_char()?)
            }
            Some(c) if is_dec(c) => {
                lexeme.push(c);
                (State::Number(Base::Dec, NumForm::Int, NumSub::Body), self.source.get_char()?)
            }
            Some(b'\n') => {
                lexeme.push(b'\n');
                let (bytes, line, column) = lexeme.finalize();
                return Ok(LexicalUnit::new(TokenKind::Eol, bytes, line, column));
            }
            None => {
                let (bytes, line, column) = lexeme.finalize();
                return Ok(LexicalUnit::new(TokenKind::End, bytes, line, column));
            }
            Some(other) => {
                lexeme.push(other);
                let (bytes, line, column) = lexeme.finalize();
                return Ok(LexicalUnit::new(TokenKind::Unknown, bytes, line, column));
            }
        };

        loop {
            match dfa::step(state, c) {
                Step::Next(next) => {
                    lexeme.push(c.expect("Step::Next is never produced on None"));
                    c = self.source.get_char()?;
                    state = next;
                }
                Step::Accept(kind) => {
                    self.source.unget_char(c);
                    let (bytes, line, column) = lexeme.finalize();
                    return Ok(LexicalUnit::new(kind, bytes, line, column));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::NumError;

    fn scan_all(input: &[u8]) -> Vec<LexicalUnit> {
        let mut scanner = Scanner::new(SourceStream::from_slice(input.to_vec()));
        let mut units = Vec::new();
        loop {
            let unit = scanner.scan().unwrap();
            let done = unit.kind == TokenKind::End;
            units.push(unit);
            if done {
                break;
            }
        }
        units
    }

    #[test]
    fn identifiers_split_on_case() {
        let units = scan_all(b"foo Bar");
        assert_eq!(units[0].kind, TokenKind::Lowercase);
        assert_eq!(units[0].bytes, b"foo");
        assert_eq!(units[1].kind, TokenKind::Uppercase);
        assert_eq!(units[1].bytes, b"Bar");
    }

    #[test]
    fn bare_zero_is_clean_dec_int() {
        let units = scan_all(b"0 q");
        assert_eq!(
            units[0].kind,
            TokenKind::Number {
                base: Base::Dec,
                form: NumForm::Int,
                error: NumError::None
            }
        );
        assert_eq!(units[0].bytes, b"0");
        // S_zero has no suffix branch: the 'q' is a separate identifier token.
        assert_eq!(units[1].kind, TokenKind::Lowercase);
    }

    #[test]
    fn hex_literal_round_trips() {
        let units = scan_all(b"0x1f");
        assert_eq!(
            units[0].kind,
            TokenKind::Number {
                base: Base::Hex,
                form: NumForm::Int,
                error: NumError::None
            }
        );
        assert_eq!(units[0].bytes, b"0x1f");
    }

    #[test]
    fn prefix_without_matching_digit_falls_back_to_decimal_suffix() {
        // "0b" with nothing binary after it: 'b' is reinterpreted as the
        // start of a decimal suffix on a bare zero.
        let units = scan_all(b"0b ");
        assert_eq!(
            units[0].kind,
            TokenKind::Number {
                base: Base::Dec,
                form: NumForm::Int,
                error: NumError::Suf
            }
        );
        assert_eq!(units[0].bytes, b"0b");
    }

    #[test]
    fn prefix_letter_absorbs_a_following_digit_as_decimal_suffix() {
        // "0o9" is one 3-byte DEC_INT_SUF token, not "0o" plus a separate
        // "9": the fallback gate absorbs digits too.
        let units = scan_all(b"0o9 ");
        assert_eq!(
            units[0].kind,
            TokenKind::Number {
                base: Base::Dec,
                form: NumForm::Int,
                error: NumError::Suf
            }
        );
        assert_eq!(units[0].bytes, b"0o9");
    }

    #[test]
    fn prefix_letter_absorbs_further_decimal_suffix_bytes() {
        let units = scan_all(b"0bq2 ");
        assert_eq!(
            units[0].kind,
            TokenKind::Number {
                base: Base::Dec,
                form: NumForm::Int,
                error: NumError::Suf
            }
        );
        assert_eq!(units[0].bytes, b"0bq2");
    }

    #[test]
    fn float_promotion_after_int_dot() {
        let units = scan_all(b"1.5");
        assert_eq!(
            units[0].kind,
            TokenKind::Number {
                base: Base::Dec,
                form: NumForm::Float,
                error: NumError::None
            }
        );
        assert_eq!(units[0].bytes, b"1.5");
    }

    #[test]
    fn trailing_dot_with_no_digit_is_int_dot_error() {
        let units = scan_all(b"1. ");
        assert_eq!(
            units[0].kind,
            TokenKind::Number {
                base: Base::Dec,
                form: NumForm::Int,
                error: NumError::Dot
            }
        );
        assert_eq!(units[0].bytes, b"1.");
    }

    #[test]
    fn double_dot_is_a_float_dot_error() {
        // "3..1" accepts as DEC_FLT_DOT, not DEC_INT_SEQ: a repeated dot
        // routes straight into the S_B_float_dot absorb state, same as a
        // dot seen after the fractional body already started.
        let units = scan_all(b"1..x ");
        assert_eq!(
            units[0].kind,
            TokenKind::Number {
                base: Base::Dec,
                form: NumForm::Float,
                error: NumError::Dot
            }
        );
        assert_eq!(units[0].bytes, b"1..x");
    }

    #[test]
    fn dot_then_comma_is_still_a_sequence_error() {
        let units = scan_all(b"1.,x ");
        assert_eq!(
            units[0].kind,
            TokenKind::Number {
                base: Base::Dec,
                form: NumForm::Int,
                error: NumError::Seq
            }
        );
        assert_eq!(units[0].bytes, b"1.,x");
    }

    #[test]
    fn newline_is_its_own_single_byte_token() {
        let units = scan_all(b"\n");
        assert_eq!(units[0].kind, TokenKind::Eol);
        assert_eq!(units[0].bytes, b"\n");
    }

    #[test]
    fn end_of_input_is_empty_bodied() {
        let units = scan_all(b"");
        assert_eq!(units[0].kind, TokenKind::End);
        assert!(units[0].bytes.is_empty());
    }

    #[test]
    fn unknown_byte_is_its_own_token() {
        let units = scan_all(b"@x");
        assert_eq!(units[0].kind, TokenKind::Unknown);
        assert_eq!(units[0].bytes, b"@");
    }

    #[test]
    fn bad_comment_carries_opening_position() {
        let units = scan_all(b"  # unterminated");
        assert_eq!(units[0].kind, TokenKind::BadComment);
        assert_eq!(units[0].column, 3);
        assert!(units[0].bytes.is_empty());
    }

    #[test]
    fn skip_then_scan_resumes_at_token() {
        let units = scan_all(b"  \n foo");
        assert_eq!(units[0].kind, TokenKind::Eol);
        assert_eq!(units[1].kind, TokenKind::Lowercase);
        assert_eq!(units[1].line, 2);
        assert_eq!(units[1].column, 2);
    }
}
