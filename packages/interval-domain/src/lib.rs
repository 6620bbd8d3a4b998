/*
 * Interval Domain - Value-Range Abstract Domain
 *
 * Immutable closed integer ranges over fixed-width numeric types, with the
 * tri-valued order-relation algebra a soundness-dependent range analysis
 * iterates. Every comparison is exact: encodings are decoded into
 * arbitrary-precision integers before any relation is applied, so verdicts
 * never depend on the host's word size and never wrap at a type's extremes.
 *
 * A True/False verdict is a guarantee over every concrete value pair the
 * ranges denote; anything unprovable from the bounds is Unknown.
 */

/// Feature modules
pub mod features;

/// Error types
pub mod errors;

pub use errors::{DomainError, Result};
pub use features::value_range::{
    compare_intervals, compare_scalars, may_hold, must_hold, ComparisonOp, Interval, NumericType,
    ScalarValue, TriBool,
};
