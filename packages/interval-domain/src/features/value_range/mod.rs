//! Value-Range Analysis Domain
//!
//! The interval abstract domain a range analysis iterates: immutable
//! closed-range values over fixed-width integer types, with a tri-valued
//! order-relation algebra.
//!
//! ## Architecture
//!
//! ```text
//! value_range
//! ├── domain/               # Immutable value types
//! │   ├── numeric_type      # Width + signedness, exact min/max
//! │   ├── scalar_value      # Decoded arbitrary-precision value
//! │   ├── interval          # Closed range + relation algebra
//! │   ├── tribool           # Three-valued verdicts
//! │   └── comparison        # Reified branch operators
//! └── infrastructure/       # Driver-facing evaluation
//!     └── evaluator         # (op, lhs, rhs) -> TriBool
//! ```
//!
//! ## Usage
//!
//! ```
//! use interval_domain::{ComparisonOp, Interval, NumericType, ScalarValue, TriBool};
//! use interval_domain::compare_intervals;
//!
//! let ty = NumericType::signed(32)?;
//! let a = Interval::new(
//!     ScalarValue::from_int(ty, 10)?,
//!     ScalarValue::from_int(ty, 29)?,
//! )?;
//! let b = Interval::new(
//!     ScalarValue::from_int(ty, 30)?,
//!     ScalarValue::from_int(ty, 40)?,
//! )?;
//!
//! // Every value in [10, 29] precedes every value in [30, 40]
//! assert_eq!(compare_intervals(ComparisonOp::Lt, &a, &b)?, TriBool::True);
//! # Ok::<(), interval_domain::DomainError>(())
//! ```

pub mod domain;
pub mod infrastructure;

pub use domain::{ComparisonOp, Interval, NumericType, ScalarValue, TriBool};
pub use infrastructure::{compare_intervals, compare_scalars, may_hold, must_hold};
