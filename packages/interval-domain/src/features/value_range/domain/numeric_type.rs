//! Fixed-width numeric type descriptors
//!
//! A `NumericType` carries the bit width and signedness of the machine
//! integers a range describes. Its `min_value`/`max_value` are computed in
//! arbitrary precision so they stay exact at any width.

use num_bigint::BigInt;
use num_traits::{One, Zero};
use serde::Serialize;
use std::fmt;

use crate::errors::{DomainError, Result};

/// Width and signedness of a fixed-width integer encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct NumericType {
    width: u32,
    signed: bool,
}

impl NumericType {
    /// Create a type descriptor; width must be at least 1
    pub fn new(width: u32, signed: bool) -> Result<Self> {
        if width == 0 {
            return Err(DomainError::ZeroWidth);
        }
        Ok(Self { width, signed })
    }

    /// Create a signed (two's complement) type of the given width
    pub fn signed(width: u32) -> Result<Self> {
        Self::new(width, true)
    }

    /// Create an unsigned type of the given width
    pub fn unsigned(width: u32) -> Result<Self> {
        Self::new(width, false)
    }

    /// Bit width of the encoding
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Whether the encoding is two's complement
    pub fn is_signed(&self) -> bool {
        self.signed
    }

    /// Smallest representable value: `-2^(width-1)` signed, `0` unsigned
    pub fn min_value(&self) -> BigInt {
        if self.signed {
            -(BigInt::one() << (self.width - 1) as usize)
        } else {
            BigInt::zero()
        }
    }

    /// Largest representable value: `2^(width-1) - 1` signed, `2^width - 1` unsigned
    pub fn max_value(&self) -> BigInt {
        if self.signed {
            (BigInt::one() << (self.width - 1) as usize) - BigInt::one()
        } else {
            (BigInt::one() << self.width as usize) - BigInt::one()
        }
    }

    /// Check whether a decoded value lies in `[min_value, max_value]`
    pub fn can_represent(&self, value: &BigInt) -> bool {
        self.min_value() <= *value && *value <= self.max_value()
    }
}

impl fmt::Display for NumericType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", if self.signed { 'i' } else { 'u' }, self.width)
    }
}
