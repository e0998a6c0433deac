//! pyramid: prefix sums of squares for a bounded index
//!
//! Given an index `n` in `0..=1000`, prints `0² + 1² + ... + n²`.
//!
//! ```
//! assert_eq!(pyramid::evaluate("3"), Ok(14));
//! assert!(pyramid::evaluate("1001").is_err());
//! ```

pub mod error;
pub mod index;
pub mod table;

pub use error::PyramidError;
pub use index::{
    MAX_INDEX, MIN_INDEX, TABLE_LEN, argument_text, parse_index, validate_range,
};
pub use table::Table;

use std::io::Write;
use tracing::debug;

/// Parse, validate, and look up `raw` in a freshly built table.
///
/// The table is only built once the argument has been accepted.
pub fn evaluate(raw: &str) -> Result<i64, PyramidError> {
    let idx = parse_index(raw)?;
    debug!(idx, "parsed index");
    let slot = validate_range(idx)?;

    let table = Table::build(TABLE_LEN);
    // TABLE_LEN covers MAX_INDEX, so a validated slot is always present
    table.get(slot).ok_or(PyramidError::TooLarge)
}

/// Evaluate `raw` and report the outcome, returning the process exit status.
///
/// On success the value goes to `out`; on failure a single `Error: ...`
/// line goes to `err`.
pub fn run(raw: &str, out: &mut impl Write, err: &mut impl Write) -> i32 {
    match evaluate(raw) {
        Ok(value) => match writeln!(out, "{}", value) {
            Ok(()) => 0,
            Err(e) => {
                let _ = writeln!(err, "Error: {}", e);
                1
            }
        },
        Err(e) => {
            let _ = writeln!(err, "Error: {}", e);
            e.exit_code()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_capture(raw: &str) -> (i32, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run(raw, &mut out, &mut err);
        (
            code,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_evaluate_boundaries() {
        assert_eq!(evaluate("0"), Ok(0));
        assert_eq!(evaluate("999"), Ok(332_833_500));
        assert_eq!(evaluate("1000"), Ok(333_833_500));
    }

    #[test]
    fn test_evaluate_errors() {
        assert_eq!(evaluate("1001"), Err(PyramidError::TooLarge));
        assert_eq!(evaluate("-1"), Err(PyramidError::TooSmall));
        assert_eq!(evaluate("abc"), Err(PyramidError::InvalidNumber));
        assert_eq!(
            evaluate("123456789012345678901234567890"),
            Err(PyramidError::NumberOverflow)
        );
    }

    #[test]
    fn test_run_success_writes_stdout_only() {
        let (code, out, err) = run_capture("10");
        assert_eq!(code, 0);
        assert_eq!(out, "385\n");
        assert!(err.is_empty());
    }

    #[test]
    fn test_run_failure_writes_one_stderr_line() {
        let (code, out, err) = run_capture("1001");
        assert_eq!(code, 1);
        assert!(out.is_empty());
        assert_eq!(err, "Error: Max input is 1000\n");

        let (code, _, err) = run_capture("-1");
        assert_eq!(code, 1);
        assert_eq!(err, "Error: Min input is 0\n");

        let (code, _, err) = run_capture("abc");
        assert_eq!(code, 1);
        assert_eq!(err, "Error: Invalid number\n");

        let (code, _, err) = run_capture("99999999999999999999");
        assert_eq!(code, 1);
        assert_eq!(err, "Error: Number overflow\n");
    }

    #[test]
    fn test_run_is_repeatable() {
        assert_eq!(run_capture("500"), run_capture("500"));
    }
}
