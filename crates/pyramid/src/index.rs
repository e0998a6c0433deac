//! Index parsing and range validation
//!
//! The argument is read as a leading integer prefix: optional whitespace,
//! an optional sign, then at least one decimal digit. Anything after the
//! digit run is ignored, so `"12abc"` parses as `12`, while `"abc"` is
//! rejected outright rather than being read as zero.

use crate::error::PyramidError;
use std::borrow::Cow;
use std::ffi::OsStr;
use std::num::IntErrorKind;
use tracing::trace;

/// Smallest accepted index
pub const MIN_INDEX: i64 = 0;

/// Largest accepted index (inclusive)
pub const MAX_INDEX: i64 = 1000;

/// Number of table entries needed so every accepted index has a slot.
pub const TABLE_LEN: usize = MAX_INDEX as usize + 1;

/// Text to hand to [`parse_index`] for a raw command-line argument.
///
/// A missing argument becomes empty text and invalid UTF-8 is replaced
/// lossily; neither yields a leading digit where the bytes had none.
pub fn argument_text(arg: Option<&OsStr>) -> Cow<'_, str> {
    match arg {
        Some(arg) => arg.to_string_lossy(),
        None => Cow::Borrowed(""),
    }
}

/// Parse the leading integer of `raw`.
///
/// Returns [`PyramidError::InvalidNumber`] when no digit is consumed and
/// [`PyramidError::NumberOverflow`] when the digits do not fit in an `i64`.
pub fn parse_index(raw: &str) -> Result<i64, PyramidError> {
    let rest = raw.trim_start_matches(is_c_space);
    let skipped = raw.len() - rest.len();

    let sign_len = match rest.as_bytes().first() {
        Some(b'+') | Some(b'-') => 1,
        _ => 0,
    };
    let digit_len = rest.as_bytes()[sign_len..]
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count();

    if digit_len == 0 {
        trace!(raw, "no leading digits");
        return Err(PyramidError::InvalidNumber);
    }

    let number = &raw[skipped..skipped + sign_len + digit_len];
    number.parse::<i64>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => PyramidError::NumberOverflow,
        // The slice is a sign plus a non-empty digit run, so nothing else can fail
        _ => PyramidError::InvalidNumber,
    })
}

/// Check that `idx` lies in `MIN_INDEX..=MAX_INDEX` and convert it for lookup.
pub fn validate_range(idx: i64) -> Result<usize, PyramidError> {
    if idx > MAX_INDEX {
        return Err(PyramidError::TooLarge);
    }
    if idx < MIN_INDEX {
        return Err(PyramidError::TooSmall);
    }
    usize::try_from(idx).map_err(|_| PyramidError::TooSmall)
}

/// Whitespace as C's `isspace` defines it in the "C" locale.
fn is_c_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0b' | '\x0c' | '\r')
}
