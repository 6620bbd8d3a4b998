//! Comparison verdict evaluator
//!
//! Maps a reified branch condition `(op, lhs, rhs)` onto the interval
//! relation algebra and hands the resulting verdict to the feasibility
//! driver. A decisive verdict lets the driver fold the branch; `Unknown`
//! leaves both successors live.

use tracing::debug;

use crate::errors::Result;
use crate::features::value_range::domain::{ComparisonOp, Interval, ScalarValue, TriBool};

/// Evaluate `lhs op rhs` over intervals
pub fn compare_intervals(op: ComparisonOp, lhs: &Interval, rhs: &Interval) -> Result<TriBool> {
    let verdict = match op {
        ComparisonOp::Eq => lhs.equal(rhs)?,
        ComparisonOp::Neq => lhs.not_equal(rhs)?,
        ComparisonOp::Lt => lhs.less_than(rhs)?,
        ComparisonOp::Le => lhs.less_than_or_equal(rhs)?,
        ComparisonOp::Gt => lhs.greater_than(rhs)?,
        ComparisonOp::Ge => lhs.greater_than_or_equal(rhs)?,
    };
    if !verdict.is_unknown() {
        debug!(%op, %lhs, %rhs, %verdict, "comparison decided from ranges");
    }
    Ok(verdict)
}

/// Evaluate `lhs op rhs` over exactly-known scalars
pub fn compare_scalars(op: ComparisonOp, lhs: &ScalarValue, rhs: &ScalarValue) -> Result<bool> {
    match op {
        ComparisonOp::Eq => lhs.equal(rhs),
        ComparisonOp::Neq => lhs.not_equal(rhs),
        ComparisonOp::Lt => lhs.less_than(rhs),
        ComparisonOp::Le => lhs.less_than_or_equal(rhs),
        ComparisonOp::Gt => lhs.greater_than(rhs),
        ComparisonOp::Ge => lhs.greater_than_or_equal(rhs),
    }
}

/// Check whether the condition can hold for some concrete value pair.
///
/// A branch guarded by an infeasible condition is dead.
pub fn may_hold(op: ComparisonOp, lhs: &Interval, rhs: &Interval) -> Result<bool> {
    Ok(!compare_intervals(op, lhs, rhs)?.is_false())
}

/// Check whether the condition holds for every concrete value pair.
///
/// A branch guarded by a must-hold condition is always taken.
pub fn must_hold(op: ComparisonOp, lhs: &Interval, rhs: &Interval) -> Result<bool> {
    Ok(compare_intervals(op, lhs, rhs)?.is_true())
}
