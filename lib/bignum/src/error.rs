//! Arithmetic error type.

use core::fmt::{self, Display};

/// Result type.
///
/// A result with this crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors raised by big integer operations.
///
/// Every variant is raised at the point of detection and propagates to the
/// caller unchanged; nothing inside the arithmetic core catches and retries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// A signed result exceeded the fixed limb capacity.
    Overflow,
    /// A digit string contained a character outside the radix, or the radix
    /// was outside `[2, 36]`.
    InvalidFormat,
    /// An argument violated an operation's precondition.
    InvalidArgument(&'static str),
    /// The operand and modulus of a modular inverse are not coprime.
    NoInverse,
    /// The divisor was zero.
    DivisionByZero,
    /// A bounded candidate search ran out of iterations.
    Exhausted,
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Overflow => f.write_str("overflow past the fixed capacity"),
            Error::InvalidFormat => f.write_str("invalid digit string"),
            Error::InvalidArgument(msg) => f.write_str(msg),
            Error::NoInverse => f.write_str("no modular inverse exists"),
            Error::DivisionByZero => f.write_str("division by zero"),
            Error::Exhausted => f.write_str("candidate search exhausted its iteration budget"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
