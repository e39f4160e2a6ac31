// ABOUTME: Strict UTF-8 scanner for Rust: validation, scalar decoding, and
// ABOUTME: per-value visitation with early exit over caller-owned buffers.

//! # utf8scan
//!
//! A strict, allocation-free UTF-8 validator and code point iterator.
//!
//! The single engine is [`scan`]: it walks a byte buffer, decodes each
//! encoded scalar value, classifies every malformation with a precise
//! [`Error`], and hands each value to a caller-supplied [`Visitor`] that can
//! stop the scan at any point with an application-defined signal.
//!
//! ## Quick Start
//!
//! ```rust
//! use utf8scan::{scan, Exit, Mode};
//!
//! let mut values = Vec::new();
//! let exit = scan("héllo".as_bytes(), Mode::NulTerminated, |value: u32| {
//!     values.push(value);
//!     0
//! })
//! .unwrap();
//!
//! assert_eq!(exit, Exit::Complete);
//! assert_eq!(values, vec![0x68, 0xe9, 0x6c, 0x6c, 0x6f]);
//! ```
//!
//! ## Early Exit
//!
//! A non-zero visitor return halts the scan immediately and travels back to
//! the caller verbatim:
//!
//! ```rust
//! use utf8scan::{scan, Exit, Mode};
//!
//! // Stop at the first non-ASCII scalar.
//! let mut found = 0;
//! let exit = scan("x→y".as_bytes(), Mode::Bounded(5), |value: u32| {
//!     if value > 0x7f {
//!         found = value;
//!         1
//!     } else {
//!         0
//!     }
//! })
//! .unwrap();
//!
//! assert_eq!(exit, Exit::Halted(1));
//! assert_eq!(found, 0x2192);
//! ```
//!
//! ## Validation Only
//!
//! ```rust
//! use utf8scan::{validate, Error, Mode};
//!
//! assert!(validate(b"ok", Mode::Bounded(2)).is_ok());
//! assert_eq!(
//!     validate(&[0xc0, 0x80], Mode::Bounded(2)),
//!     Err(Error::OverlongEncoding)
//! );
//! ```
//!
//! ## Strictness
//!
//! Overlong encodings, values beyond 0x10FFFF, truncated sequences, and
//! surrogates are all rejected, each with its own status code. One
//! deliberate quirk is kept for bit-compatibility: the surrogate range
//! check is exclusive at the low end, so the exact value 0xD800 passes
//! validation and is visited. Decoded values are therefore surfaced as
//! `u32` scalars, not `char`.

pub mod error;
pub mod scanner;
pub mod types;

// Re-export commonly used items at the crate root
pub use error::{Error, Result};
pub use scanner::{scan, Exit, Mode, Visitor};
pub use types::{code_unit, scalar};

/// Validate a buffer without visiting any values.
///
/// Performs the full scan with a no-op visitor; useful when only the
/// well-formedness verdict matters.
///
/// # Example
///
/// ```rust
/// use utf8scan::{validate, Error, Mode};
///
/// assert!(validate("中文".as_bytes(), Mode::NulTerminated).is_ok());
/// assert_eq!(
///     validate(&[0x80], Mode::Bounded(1)),
///     Err(Error::UnexpectedContinuation)
/// );
/// ```
pub fn validate(input: &[u8], mode: Mode) -> Result<()> {
    scan(input, mode, ()).map(|_| ())
}

/// Decode every scalar value in the buffer, in order.
///
/// Values are returned as `u32` scalars; see the crate docs for why they
/// are not `char`.
///
/// # Example
///
/// ```rust
/// use utf8scan::{decode_scalars, Mode};
///
/// let values = decode_scalars("a😀".as_bytes(), Mode::Bounded(5)).unwrap();
/// assert_eq!(values, vec![0x61, 0x1f600]);
/// ```
pub fn decode_scalars(input: &[u8], mode: Mode) -> Result<Vec<u32>> {
    let mut values = Vec::new();
    scan(input, mode, |value: u32| {
        values.push(value);
        0
    })?;
    Ok(values)
}

/// Run a scan and collapse the outcome into the single numeric status
/// channel: 0 for a complete scan, -1..=6 for malformations, or the
/// visitor's signal verbatim.
///
/// Callers that need to distinguish a visitor signal from a reserved
/// status code should use [`scan`] directly; the typed return keeps the
/// two channels apart.
///
/// # Example
///
/// ```rust
/// use utf8scan::{scan_status, Error, Mode};
///
/// assert_eq!(scan_status(b"ok", Mode::Bounded(2), ()), 0);
/// assert_eq!(
///     scan_status(&[0xc3], Mode::Bounded(1), ()),
///     Error::Truncated.code()
/// );
/// ```
pub fn scan_status<V: Visitor>(input: &[u8], mode: Mode, visitor: V) -> i32 {
    match scan(input, mode, visitor) {
        Ok(exit) => exit.code(),
        Err(err) => err.code(),
    }
}
