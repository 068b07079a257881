//! Skip phase: consumes whitespace, comments, and escaped newlines ahead
//! of each token.

use tracing::trace;

use crate::error::ScanError;
use crate::source::SourceStream;

/// Outcome of a skip pass that successfully reached token-bearing input
/// (or end of input): the normal case.
pub struct Skipped;

/// A malformed comment that ran to end of input instead of closing.
/// Carries the position of the comment's opening delimiter so the driver
/// can use it as the resulting lexeme's start position.
pub struct BadComment {
    pub line: usize,
    pub column: usize,
    pub multiline: bool,
}

pub enum SkipOutcome {
    Ok(Skipped),
    Bad(BadComment),
}

/// Advance `source` past whitespace, `#` line comments, nestable `{ }`
/// block comments, and `\`-continued newlines, leaving the cursor at
/// either token-bearing input or end of input.
pub fn skip(source: &mut SourceStream) -> Result<SkipOutcome, ScanError> {
    loop {
        let line = source.current_line();
        let column = source.current_column();

        match source.get_char()? {
            Some(b' ') => continue,
            Some(b'#') => match skip_line_comment(source)? {
                true => continue,
                false => {
                    return Ok(SkipOutcome::Bad(BadComment {
                        line,
                        column,
                        multiline: false,
                    }));
                }
            },
            Some(b'{') => match skip_block_comment(source)? {
                true => continue,
                false => {
                    return Ok(SkipOutcome::Bad(BadComment {
                        line,
                        column,
                        multiline: true,
                    }));
                }
            },
            Some(b'\n') => {
                if try_skip_continuation(source)? {
                    continue;
                }
                return Ok(SkipOutcome::Ok(Skipped));
            }
            other => {
                source.unget_char(other);
                return Ok(SkipOutcome::Ok(Skipped));
            }
        }
    }
}

/// Consume up to and including a terminating `\n` (pushed back for the
/// DFA to scan as `EOL`). Returns `false` if end of input was reached
/// instead, leaving the bad-comment position to the caller.
fn skip_line_comment(source: &mut SourceStream) -> Result<bool, ScanError> {
    loop {
        match source.get_char()? {
            Some(b'\n') => {
                source.unget_char(Some(b'\n'));
                return Ok(true);
            }
            None => return Ok(false),
            Some(_) => continue,
        }
    }
}

/// Consume a `{ ... }` block comment, including nested ones. The opening
/// `{` has already been read by the caller. Returns `false` if end of
/// input was reached before the depth returned to zero.
fn skip_block_comment(source: &mut SourceStream) -> Result<bool, ScanError> {
    let mut depth: usize = 1;
    loop {
        match source.get_char()? {
            Some(b'{') => depth += 1,
            Some(b'}') => {
                depth -= 1;
                if depth == 0 {
                    return Ok(true);
                }
            }
            None => return Ok(false),
            Some(_) => {}
        }
    }
}

/// After a `\n` has been read, look ahead for `\n ␠*\\` (a line
/// continuation). On success the whole sequence is absorbed. On failure
/// every byte read here, plus the original `\n`, is pushed back so the
/// stream ends up exactly as it was before the `\n` was read (P7).
fn try_skip_continuation(source: &mut SourceStream) -> Result<bool, ScanError> {
    let mut space_count = 0usize;
    let next = loop {
        match source.get_char()? {
            Some(b' ') => space_count += 1,
            other => break other,
        }
    };

    if next == Some(b'\\') {
        trace!(space_count, "absorbed line continuation");
        return Ok(true);
    }

    source.unget_char(next);
    for _ in 0..space_count {
        source.unget_char(Some(b' '));
    }
    source.unget_char(Some(b'\n'));
    Ok(false)
}
