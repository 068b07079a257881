//! Transition logic for the numeric body states, parameterized over base
//! and form so the bin/oct/dec/hex families share one implementation
//! instead of being hand-duplicated four times.

use crate::classify::{is_sequence, is_suffix, Base};
use crate::token::{NumError, NumForm, TokenKind};

use super::state::{NumSub, State};
use super::Step;

/// Step a `Number(base, form, sub)` state on byte `c` (`None` at end of input).
pub(super) fn step(base: Base, form: NumForm, sub: NumSub, c: Option<u8>) -> Step {
    match (form, sub) {
        (NumForm::Int, NumSub::Body) => body(base, NumForm::Int, c),
        (NumForm::Float, NumSub::Body) => body(base, NumForm::Float, c),
        (NumForm::Int, NumSub::Dot) => int_dot(base, c),
        (NumForm::Float, NumSub::Dot) => {
            absorb_suffix_then_accept(base, NumForm::Float, NumSub::Dot, NumError::Dot, c)
        }
        (NumForm::Int, NumSub::Comma) => comma(base, NumForm::Int, c),
        (NumForm::Float, NumSub::Comma) => comma(base, NumForm::Float, c),
        (_, NumSub::Seq) => absorb_suffix_then_accept(base, form, NumSub::Seq, NumError::Seq, c),
        (_, NumSub::Suf) => absorb_suffix_then_accept(base, form, NumSub::Suf, NumError::Suf, c),
    }
}

/// `S_B_int` / `S_B_float`: ordinary digit run.
fn body(base: Base, form: NumForm, c: Option<u8>) -> Step {
    match c {
        Some(c) if base.is_digit(c) => Step::Next(State::Number(base, form, NumSub::Body)),
        Some(b'.') => Step::Next(State::Number(base, form, NumSub::Dot)),
        Some(b',') => Step::Next(State::Number(base, form, NumSub::Comma)),
        Some(c) if base.is_suffix_starter(c) => Step::Next(State::Number(base, form, NumSub::Suf)),
        _ => Step::Accept(TokenKind::number(base, form)),
    }
}

/// `S_B_int_dot`: a `.` right after digits. A further digit promotes to
/// the fractional form instead of erroring, unlike `S_B_float_dot`.
///
/// A second `.` here (e.g. `3..1`) is routed straight into the
/// `S_B_float_dot` absorb state rather than the generic `S_B_int_seq`,
/// so `3..1` accepts as `DEC_FLT_DOT`, not `DEC_INT_SEQ`: a repeated dot
/// is a dot error specifically, while a comma mixed in here (`3.,1`)
/// falls through to the generic sequence error.
fn int_dot(base: Base, c: Option<u8>) -> Step {
    match c {
        Some(c) if base.is_digit(c) => Step::Next(State::Number(base, NumForm::Float, NumSub::Body)),
        Some(b'.') => Step::Next(State::Number(base, NumForm::Float, NumSub::Dot)),
        Some(c) if is_sequence(c) => Step::Next(State::Number(base, NumForm::Int, NumSub::Seq)),
        Some(c) if base.is_suffix_starter(c) => {
            Step::Next(State::Number(base, NumForm::Float, NumSub::Suf))
        }
        _ => Step::Accept(TokenKind::Number {
            base,
            form: NumForm::Int,
            error: NumError::Dot,
        }),
    }
}

/// `S_B_int_comma` / `S_B_float_comma`: a `,` right after digits.
fn comma(base: Base, form: NumForm, c: Option<u8>) -> Step {
    match c {
        Some(c) if base.is_digit(c) => Step::Next(State::Number(base, form, NumSub::Body)),
        Some(c) if is_sequence(c) => Step::Next(State::Number(base, form, NumSub::Seq)),
        Some(c) if base.is_suffix_starter(c) => Step::Next(State::Number(base, form, NumSub::Suf)),
        _ => Step::Accept(TokenKind::Number {
            base,
            form,
            error: NumError::Com,
        }),
    }
}

/// Shared tail for the `_seq`/`_suf`/`float_dot` states: greedily self-loop
/// absorbing everything `is_suffix` accepts, then accept with `error`. The
/// state (and so the eventual error tag) never changes mid-absorption:
/// `float_dot` absorbing a second suffix byte is still `FLT_DOT`, not `FLT_SUF`.
fn absorb_suffix_then_accept(
    base: Base,
    form: NumForm,
    sub: NumSub,
    error: NumError,
    c: Option<u8>,
) -> Step {
    match c {
        Some(c) if is_suffix(c) => Step::Next(State::Number(base, form, sub)),
        _ => Step::Accept(TokenKind::Number { base, form, error }),
    }
}
