//! Error types for interval-domain
//!
//! Provides unified error handling across the crate.

use num_bigint::BigInt;
use thiserror::Error;

use crate::features::value_range::domain::NumericType;

/// Main error type for interval-domain operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Comparison operands do not share a numeric type.
    ///
    /// A caller contract violation, surfaced immediately and never coerced:
    /// silently comparing an `i32` range against a `u64` range could hand an
    /// unsound verdict to the surrounding analysis.
    #[error("type mismatch: {lhs} vs {rhs}")]
    TypeMismatch { lhs: NumericType, rhs: NumericType },

    /// Interval construction with `lower > upper`
    #[error("invalid interval: lower bound {lower} exceeds upper bound {upper}")]
    InvalidInterval { lower: BigInt, upper: BigInt },

    /// Scalar construction outside the type's representable range
    #[error("value {value} is not representable in {ty}")]
    ValueOutOfRange { value: BigInt, ty: NumericType },

    /// Numeric type construction with a zero bit width
    #[error("bit width must be at least 1")]
    ZeroWidth,

    /// Bit-string decoding with the wrong length or non-binary digits
    #[error("malformed {ty} encoding: {encoding:?}")]
    MalformedEncoding { encoding: String, ty: NumericType },
}

/// Result type alias for interval-domain operations
pub type Result<T> = std::result::Result<T, DomainError>;
