//! Exact scalar values decoded from fixed-width encodings
//!
//! A `ScalarValue` pairs a [`NumericType`] with the arbitrary-precision
//! integer its encoding denotes. Every relation compares the decoded value,
//! never the raw bit pattern, so verdicts are independent of the host's
//! machine-word size and cannot wrap at the type's extremes.

use num_bigint::BigInt;
use num_traits::One;
use serde::Serialize;
use std::fmt;

use super::NumericType;
use crate::errors::{DomainError, Result};

/// An exactly-known value of a fixed-width integer type
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ScalarValue {
    ty: NumericType,
    value: BigInt,
}

impl ScalarValue {
    /// Create from an already-decoded integer, checked against the type's range
    pub fn new(ty: NumericType, value: BigInt) -> Result<Self> {
        if !ty.can_represent(&value) {
            return Err(DomainError::ValueOutOfRange { value, ty });
        }
        Ok(Self { ty, value })
    }

    /// Create from a machine integer, checked against the type's range
    pub fn from_int(ty: NumericType, value: i128) -> Result<Self> {
        Self::new(ty, BigInt::from(value))
    }

    /// Decode a raw bit pattern: the low `width` bits of `bits`, two's
    /// complement when the type is signed.
    ///
    /// Total: excess high bits are ignored, and widths above 128 zero-extend.
    pub fn from_bits(ty: NumericType, bits: u128) -> Self {
        let width = ty.width();
        let raw = if width >= 128 {
            BigInt::from(bits)
        } else {
            BigInt::from(bits & ((1u128 << width) - 1))
        };
        let value = if ty.is_signed() && width <= 128 && (bits >> (width - 1)) & 1 == 1 {
            raw - (BigInt::one() << width as usize)
        } else {
            raw
        };
        Self { ty, value }
    }

    /// Decode a base-2 digit string of exactly `width` characters, two's
    /// complement when the type is signed.
    pub fn from_binary(ty: NumericType, encoding: &str) -> Result<Self> {
        let malformed = || DomainError::MalformedEncoding {
            encoding: encoding.to_string(),
            ty,
        };
        if encoding.len() != ty.width() as usize
            || !encoding.bytes().all(|b| b == b'0' || b == b'1')
        {
            return Err(malformed());
        }
        let raw = BigInt::parse_bytes(encoding.as_bytes(), 2).ok_or_else(malformed)?;
        let value = if ty.is_signed() && encoding.as_bytes()[0] == b'1' {
            raw - (BigInt::one() << ty.width() as usize)
        } else {
            raw
        };
        Ok(Self { ty, value })
    }

    /// The type's minimum as a value, and the conventional "no tighter
    /// lower bound known" sentinel
    pub fn type_min(ty: NumericType) -> Self {
        Self {
            value: ty.min_value(),
            ty,
        }
    }

    /// The type's maximum as a value, and the conventional "no tighter
    /// upper bound known" sentinel
    pub fn type_max(ty: NumericType) -> Self {
        Self {
            value: ty.max_value(),
            ty,
        }
    }

    /// The decoded arbitrary-precision value
    pub fn value(&self) -> &BigInt {
        &self.value
    }

    /// The value's numeric type
    pub fn numeric_type(&self) -> NumericType {
        self.ty
    }

    fn require_same_type(&self, other: &ScalarValue) -> Result<()> {
        if self.ty != other.ty {
            return Err(DomainError::TypeMismatch {
                lhs: self.ty,
                rhs: other.ty,
            });
        }
        Ok(())
    }

    /// Exact `self < other`; errors on differing types
    pub fn less_than(&self, other: &ScalarValue) -> Result<bool> {
        self.require_same_type(other)?;
        Ok(self.value < other.value)
    }

    /// Exact `self <= other`; errors on differing types
    pub fn less_than_or_equal(&self, other: &ScalarValue) -> Result<bool> {
        self.require_same_type(other)?;
        Ok(self.value <= other.value)
    }

    /// Exact `self > other`; errors on differing types
    pub fn greater_than(&self, other: &ScalarValue) -> Result<bool> {
        other.less_than(self)
    }

    /// Exact `self >= other`; errors on differing types
    pub fn greater_than_or_equal(&self, other: &ScalarValue) -> Result<bool> {
        other.less_than_or_equal(self)
    }

    /// Exact `self == other`; errors on differing types
    pub fn equal(&self, other: &ScalarValue) -> Result<bool> {
        self.require_same_type(other)?;
        Ok(self.value == other.value)
    }

    /// Exact `self != other`; errors on differing types
    pub fn not_equal(&self, other: &ScalarValue) -> Result<bool> {
        Ok(!self.equal(other)?)
    }
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
