//! Closed integer intervals and their order-relation algebra
//!
//! An `Interval` is a pair of same-typed [`ScalarValue`] bounds denoting
//! every representable value between them, inclusive. Its relations answer
//! "is this guaranteed for every concrete value pair?": `True`/`False`
//! only when the bounds prove it, `Unknown` whenever the ranges overlap in
//! a way that leaves both outcomes possible.

use serde::Serialize;
use std::fmt;

use super::{NumericType, ScalarValue, TriBool};
use crate::errors::{DomainError, Result};

/// A closed range `[lower, upper]` over a fixed-width integer type
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Interval {
    lower: ScalarValue,
    upper: ScalarValue,
}

impl Interval {
    /// Create from two bounds.
    ///
    /// Errors with `TypeMismatch` when the bounds disagree on type and
    /// `InvalidInterval` when `lower > upper`; a malformed range must never
    /// reach the relation algebra.
    pub fn new(lower: ScalarValue, upper: ScalarValue) -> Result<Self> {
        if lower.numeric_type() != upper.numeric_type() {
            return Err(DomainError::TypeMismatch {
                lhs: lower.numeric_type(),
                rhs: upper.numeric_type(),
            });
        }
        if lower.value() > upper.value() {
            return Err(DomainError::InvalidInterval {
                lower: lower.value().clone(),
                upper: upper.value().clone(),
            });
        }
        Ok(Self { lower, upper })
    }

    /// The singleton interval `[v, v]` denoting an exactly-known value
    pub fn singleton(value: ScalarValue) -> Self {
        Self {
            lower: value.clone(),
            upper: value,
        }
    }

    /// The unconstrained interval `[min, max]` a driver installs for a
    /// fresh variable with no tighter bound known
    pub fn full(ty: NumericType) -> Self {
        Self {
            lower: ScalarValue::type_min(ty),
            upper: ScalarValue::type_max(ty),
        }
    }

    /// Lower bound (inclusive)
    pub fn lower(&self) -> &ScalarValue {
        &self.lower
    }

    /// Upper bound (inclusive)
    pub fn upper(&self) -> &ScalarValue {
        &self.upper
    }

    /// The bounds' numeric type
    pub fn numeric_type(&self) -> NumericType {
        self.lower.numeric_type()
    }

    /// Check if the interval denotes exactly one value
    pub fn is_singleton(&self) -> bool {
        self.lower.value() == self.upper.value()
    }

    /// The exactly-known value, if the interval is a singleton
    pub fn as_singleton(&self) -> Option<&ScalarValue> {
        if self.is_singleton() {
            Some(&self.lower)
        } else {
            None
        }
    }

    /// Check if a value lies within the bounds; errors on differing types
    pub fn contains(&self, value: &ScalarValue) -> Result<bool> {
        if self.numeric_type() != value.numeric_type() {
            return Err(DomainError::TypeMismatch {
                lhs: self.numeric_type(),
                rhs: value.numeric_type(),
            });
        }
        Ok(self.lower.value() <= value.value() && value.value() <= self.upper.value())
    }

    fn require_same_type(&self, other: &Interval) -> Result<()> {
        if self.numeric_type() != other.numeric_type() {
            return Err(DomainError::TypeMismatch {
                lhs: self.numeric_type(),
                rhs: other.numeric_type(),
            });
        }
        Ok(())
    }

    /// Guaranteed `self < other`?
    ///
    /// `True` when every element of `self` precedes every element of
    /// `other` (`a_hi < b_lo`), `False` when no pairing can satisfy it
    /// (`a_lo >= b_hi`), `Unknown` otherwise.
    pub fn less_than(&self, other: &Interval) -> Result<TriBool> {
        self.require_same_type(other)?;
        if self.upper.value() < other.lower.value() {
            Ok(TriBool::True)
        } else if self.lower.value() >= other.upper.value() {
            Ok(TriBool::False)
        } else {
            Ok(TriBool::Unknown)
        }
    }

    /// Guaranteed `self <= other`?
    ///
    /// `True` iff `a_hi <= b_lo`, `False` iff `a_lo > b_hi`, else `Unknown`.
    pub fn less_than_or_equal(&self, other: &Interval) -> Result<TriBool> {
        self.require_same_type(other)?;
        if self.upper.value() <= other.lower.value() {
            Ok(TriBool::True)
        } else if self.lower.value() > other.upper.value() {
            Ok(TriBool::False)
        } else {
            Ok(TriBool::Unknown)
        }
    }

    /// Guaranteed `self > other`? Defined as `other.less_than(self)`.
    pub fn greater_than(&self, other: &Interval) -> Result<TriBool> {
        other.less_than(self)
    }

    /// Guaranteed `self >= other`? Defined as `other.less_than_or_equal(self)`.
    pub fn greater_than_or_equal(&self, other: &Interval) -> Result<TriBool> {
        other.less_than_or_equal(self)
    }

    /// Guaranteed `self == other`?
    ///
    /// `True` only for equal singletons, `False` for disjoint ranges,
    /// `Unknown` for any other overlap.
    pub fn equal(&self, other: &Interval) -> Result<TriBool> {
        self.require_same_type(other)?;
        if self.is_singleton() && other.is_singleton() && self.lower.value() == other.lower.value()
        {
            Ok(TriBool::True)
        } else if self.upper.value() < other.lower.value()
            || other.upper.value() < self.lower.value()
        {
            Ok(TriBool::False)
        } else {
            Ok(TriBool::Unknown)
        }
    }

    /// Guaranteed `self != other`? The negation of [`equal`](Self::equal).
    pub fn not_equal(&self, other: &Interval) -> Result<TriBool> {
        Ok(self.equal(other)?.negate())
    }

    /// Strict boolean ordering: `a_hi < b_lo`.
    ///
    /// Not a total order: overlapping intervals are neither strictly less
    /// nor strictly greater. Safe as a container comparator only over
    /// pairwise-disjoint interval sets.
    pub fn strictly_less_than(&self, other: &Interval) -> Result<bool> {
        self.require_same_type(other)?;
        Ok(self.upper.value() < other.lower.value())
    }

    /// Strict boolean ordering: `b_hi < a_lo`. See
    /// [`strictly_less_than`](Self::strictly_less_than) for the caveat.
    pub fn strictly_greater_than(&self, other: &Interval) -> Result<bool> {
        other.strictly_less_than(self)
    }
}

impl From<ScalarValue> for Interval {
    /// A scalar participating in an interval relation is the singleton `[v, v]`
    fn from(value: ScalarValue) -> Self {
        Interval::singleton(value)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lower, self.upper)
    }
}
