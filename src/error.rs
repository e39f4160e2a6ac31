// ABOUTME: Error types for UTF-8 scanning and validation.
// ABOUTME: Error variants map 1:1 onto the scanner's numeric status codes.

use std::fmt;

/// The result type for scan operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Malformations detected while scanning a UTF-8 buffer.
///
/// Each variant carries a stable numeric status code (via [`Error::code`])
/// and a stable name (via [`Error::name`]) for conformance-test matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Error {
    /// The scan arguments do not describe readable memory: the declared
    /// bound exceeds the buffer length.
    /// Status code: -1
    InvalidArgument,

    /// A unit that can never begin a sequence appeared in lead position —
    /// a continuation unit, or one of the permanently illegal values
    /// 0xf8-0xff.
    /// Status code: 1
    UnexpectedContinuation,

    /// A sequence was cut short by the end of the buffer or by a zero unit.
    /// Status code: 2
    Truncated,

    /// A non-continuation unit appeared where a continuation unit was
    /// required.
    /// Status code: 3
    ExpectedContinuation,

    /// The decoded value falls in the reserved surrogate range.
    ///
    /// The range check is exclusive at both ends (`> 0xD800 && < 0xE000`),
    /// so the exact value 0xD800 is accepted and visited. Callers needing
    /// strict Unicode conformance must reject it themselves.
    /// Status code: 4
    SurrogateForbidden,

    /// The decoded value exceeds the largest encodable scalar value
    /// (0x10FFFF). Reported for 4-unit sequences only.
    /// Status code: 5
    ValueTooLarge,

    /// The value was encoded with more units than it requires. Takes
    /// priority over the surrogate check.
    /// Status code: 6
    OverlongEncoding,
}

impl Error {
    /// Returns the numeric status code for this malformation.
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Error::InvalidArgument => -1,
            Error::UnexpectedContinuation => 1,
            Error::Truncated => 2,
            Error::ExpectedContinuation => 3,
            Error::SurrogateForbidden => 4,
            Error::ValueTooLarge => 5,
            Error::OverlongEncoding => 6,
        }
    }

    /// Maps a numeric status code back onto its variant.
    ///
    /// Returns `None` for 0 (success, not an error) and for codes outside
    /// the reserved set (visitor-defined signals).
    #[must_use]
    pub const fn from_code(code: i32) -> Option<Error> {
        match code {
            -1 => Some(Error::InvalidArgument),
            1 => Some(Error::UnexpectedContinuation),
            2 => Some(Error::Truncated),
            3 => Some(Error::ExpectedContinuation),
            4 => Some(Error::SurrogateForbidden),
            5 => Some(Error::ValueTooLarge),
            6 => Some(Error::OverlongEncoding),
            _ => None,
        }
    }

    /// Returns the standardized error name for test matching.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Error::InvalidArgument => "invalid_argument",
            Error::UnexpectedContinuation => "unexpected_continuation",
            Error::Truncated => "truncated",
            Error::ExpectedContinuation => "expected_continuation",
            Error::SurrogateForbidden => "surrogate_forbidden",
            Error::ValueTooLarge => "value_too_large",
            Error::OverlongEncoding => "overlong_encoding",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument => write!(f, "declared bound exceeds the buffer length"),
            Error::UnexpectedContinuation => {
                write!(f, "continuation or illegal unit in lead position")
            }
            Error::Truncated => write!(f, "sequence truncated by end of input"),
            Error::ExpectedContinuation => write!(f, "expected a continuation unit"),
            Error::SurrogateForbidden => write!(f, "decoded value is a forbidden surrogate"),
            Error::ValueTooLarge => write!(f, "decoded value exceeds the maximum scalar value"),
            Error::OverlongEncoding => write!(f, "value encoded with more units than required"),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_roundtrip() {
        let all = [
            Error::InvalidArgument,
            Error::UnexpectedContinuation,
            Error::Truncated,
            Error::ExpectedContinuation,
            Error::SurrogateForbidden,
            Error::ValueTooLarge,
            Error::OverlongEncoding,
        ];
        for err in all {
            assert_eq!(Error::from_code(err.code()), Some(err));
        }
    }

    #[test]
    fn test_code_table() {
        assert_eq!(Error::InvalidArgument.code(), -1);
        assert_eq!(Error::UnexpectedContinuation.code(), 1);
        assert_eq!(Error::Truncated.code(), 2);
        assert_eq!(Error::ExpectedContinuation.code(), 3);
        assert_eq!(Error::SurrogateForbidden.code(), 4);
        assert_eq!(Error::ValueTooLarge.code(), 5);
        assert_eq!(Error::OverlongEncoding.code(), 6);
    }

    #[test]
    fn test_unreserved_codes_have_no_variant() {
        assert_eq!(Error::from_code(0), None);
        assert_eq!(Error::from_code(7), None);
        assert_eq!(Error::from_code(-2), None);
        assert_eq!(Error::from_code(1000), None);
    }

    #[test]
    fn test_display_is_nonempty() {
        assert!(!Error::Truncated.to_string().is_empty());
        assert!(!Error::SurrogateForbidden.to_string().is_empty());
    }
}
