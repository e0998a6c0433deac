//! Error types for index parsing and validation.

/// Every way a `pyramid` invocation can be rejected.
///
/// `Display` renders the bare message; callers add the `Error: ` prefix
/// when writing to stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PyramidError {
    /// The argument has no leading integer
    InvalidNumber,
    /// The leading integer does not fit in an `i64`
    NumberOverflow,
    /// The index is below [`MIN_INDEX`](crate::index::MIN_INDEX)
    TooSmall,
    /// The index is above [`MAX_INDEX`](crate::index::MAX_INDEX)
    TooLarge,
}

impl PyramidError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        1
    }
}

impl std::fmt::Display for PyramidError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PyramidError::InvalidNumber => write!(f, "Invalid number"),
            PyramidError::NumberOverflow => write!(f, "Number overflow"),
            PyramidError::TooSmall => write!(f, "Min input is {}", crate::index::MIN_INDEX),
            PyramidError::TooLarge => write!(f, "Max input is {}", crate::index::MAX_INDEX),
        }
    }
}

impl std::error::Error for PyramidError {}
