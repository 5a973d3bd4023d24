// error.rs - Error types for case mapping and comparison.
//
// Groups the handful of failure modes a mapping or comparison call can hit
// into semantic variants. There is no out-parameter error slot here (unlike
// the C original this crate is grounded on) -- every public entry point
// returns a `Result`.

use std::fmt;

/// Error returned by a case mapping or comparison operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseMapError {
    /// An argument was invalid: a negative length, a null destination with
    /// nonzero capacity, or overlapping source/destination spans.
    IllegalArgument,
    /// The destination buffer is smaller than the required output length.
    /// The length returned alongside this error (via the caller's own
    /// bookkeeping) is authoritative; callers may reallocate and retry.
    BufferOverflow,
    /// An internal length or index computation would have overflowed
    /// `i32`/`usize`. Fatal to this call, not to the process.
    IndexOutOfBounds,
    /// The edit log's backing storage could not grow to hold a new record.
    MemoryAllocation,
}

impl fmt::Display for CaseMapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaseMapError::IllegalArgument => write!(f, "illegal argument"),
            CaseMapError::BufferOverflow => write!(f, "destination buffer too small"),
            CaseMapError::IndexOutOfBounds => write!(f, "index or length overflow"),
            CaseMapError::MemoryAllocation => write!(f, "edit log allocation failed"),
        }
    }
}

impl std::error::Error for CaseMapError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_impl() {
        assert_eq!(
            CaseMapError::IllegalArgument.to_string(),
            "illegal argument"
        );
        assert_eq!(
            CaseMapError::BufferOverflow.to_string(),
            "destination buffer too small"
        );
        assert_eq!(
            CaseMapError::IndexOutOfBounds.to_string(),
            "index or length overflow"
        );
        assert_eq!(
            CaseMapError::MemoryAllocation.to_string(),
            "edit log allocation failed"
        );
    }

    #[test]
    fn error_trait() {
        let err: Box<dyn std::error::Error> = Box::new(CaseMapError::IllegalArgument);
        assert_eq!(err.to_string(), "illegal argument");
    }

    #[test]
    fn equality() {
        assert_eq!(CaseMapError::BufferOverflow, CaseMapError::BufferOverflow);
        assert_ne!(CaseMapError::BufferOverflow, CaseMapError::IllegalArgument);
    }
}
