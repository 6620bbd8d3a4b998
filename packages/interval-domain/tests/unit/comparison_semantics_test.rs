//! Comparison Algebra End-to-End Scenarios
//!
//! Tests covering:
//! - Scalar relations over a 32-bit signed type, including the extremes
//! - Tri-valued interval relations (guaranteed / impossible / undecidable)
//! - Strict boolean ordering on disjoint vs. touching ranges

use interval_domain::{ComparisonOp, Interval, NumericType, ScalarValue, TriBool};
use interval_domain::{compare_intervals, compare_scalars};
use pretty_assertions::assert_eq;

fn i32t() -> NumericType {
    NumericType::signed(32).unwrap()
}

fn v(x: i128) -> ScalarValue {
    ScalarValue::from_int(i32t(), x).unwrap()
}

fn iv(lo: i128, hi: i128) -> Interval {
    Interval::new(v(lo), v(hi)).unwrap()
}

fn type_min() -> ScalarValue {
    ScalarValue::type_min(i32t())
}

fn type_max() -> ScalarValue {
    ScalarValue::type_max(i32t())
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Scalar relations
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[test]
fn scalar_less_than_over_small_values() {
    assert!(v(0).less_than(&v(1)).unwrap());
    assert!(v(1).less_than(&v(2)).unwrap());
    assert!(v(1).less_than(&v(100)).unwrap());

    assert!(v(-10).less_than(&v(1)).unwrap());
    assert!(!v(-10).less_than(&v(-100)).unwrap());
    assert!(v(-10).less_than(&v(-5)).unwrap());
}

#[test]
fn scalar_relations_against_type_extremes() {
    // Everything finite precedes the maximum...
    assert!(v(-10).less_than(&type_max()).unwrap());
    assert!(v(10).less_than(&type_max()).unwrap());
    assert!(v(0).less_than(&type_max()).unwrap());

    // ...and nothing precedes the minimum
    assert!(!v(-10).less_than(&type_min()).unwrap());
    assert!(!v(10).less_than(&type_min()).unwrap());
    assert!(!v(0).less_than(&type_min()).unwrap());

    assert!(!type_min().less_than(&type_min()).unwrap());
    assert!(!type_max().less_than(&type_min()).unwrap());
    assert!(!type_max().less_than(&type_max()).unwrap());
    assert!(type_min().less_than(&type_max()).unwrap());

    assert!(type_min().equal(&type_min()).unwrap());
    assert!(type_max().not_equal(&type_min()).unwrap());
    assert!(type_max().equal(&type_max()).unwrap());
    assert!(type_min().not_equal(&type_max()).unwrap());
}

#[test]
fn scalar_greater_than_mirrors_less_than() {
    assert!(!v(0).greater_than(&v(1)).unwrap());
    assert!(!v(1).greater_than(&v(2)).unwrap());
    assert!(!v(1).greater_than(&v(100)).unwrap());

    assert!(!v(-10).greater_than(&v(1)).unwrap());
    assert!(v(-10).greater_than(&v(-100)).unwrap());
    assert!(!v(-10).greater_than(&v(-5)).unwrap());
    assert!(!v(-10).greater_than(&type_max()).unwrap());

    assert!(v(-10).greater_than(&type_min()).unwrap());
    assert!(v(10).greater_than(&type_min()).unwrap());
    assert!(v(0).greater_than(&type_min()).unwrap());

    assert!(!type_min().greater_than(&type_min()).unwrap());
    assert!(type_min().greater_than_or_equal(&type_min()).unwrap());

    assert!(type_max().greater_than(&type_min()).unwrap());
    assert!(type_max().greater_than_or_equal(&type_min()).unwrap());

    assert!(!type_max().greater_than(&type_max()).unwrap());
    assert!(!type_min().greater_than(&type_max()).unwrap());
}

#[test]
fn scalar_trichotomy_over_a_window() {
    // Exactly one of <, ==, > holds for every pair in [-20, 20]^2
    for a in -20..=20 {
        for b in -20..=20 {
            let x = v(a);
            let y = v(b);
            let holds = [
                x.less_than(&y).unwrap(),
                x.equal(&y).unwrap(),
                x.greater_than(&y).unwrap(),
            ];
            assert_eq!(holds.iter().filter(|&&h| h).count(), 1, "pair ({a}, {b})");
            assert_eq!(x.not_equal(&y).unwrap(), !x.equal(&y).unwrap());
        }
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Tri-valued interval relations
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[test]
fn interval_less_than_verdict_table() {
    // [10,29] < [30,40]: separated -> guaranteed
    assert_eq!(iv(10, 29).less_than(&iv(30, 40)).unwrap(), TriBool::True);
    // [10,30] < [30,40]: touching -> undecidable
    assert_eq!(iv(10, 30).less_than(&iv(30, 40)).unwrap(), TriBool::Unknown);
    // [10,31] < [30,40]: overlapping -> undecidable
    assert_eq!(iv(10, 31).less_than(&iv(30, 40)).unwrap(), TriBool::Unknown);
    // [30,40] < [10,29]: impossible
    assert_eq!(iv(30, 40).less_than(&iv(10, 29)).unwrap(), TriBool::False);
}

#[test]
fn interval_less_than_or_equal_verdict_table() {
    assert_eq!(
        iv(10, 29).less_than_or_equal(&iv(30, 40)).unwrap(),
        TriBool::True
    );
    // Touching ranges still guarantee <=
    assert_eq!(
        iv(10, 30).less_than_or_equal(&iv(30, 40)).unwrap(),
        TriBool::True
    );
    assert_eq!(
        iv(10, 31).less_than_or_equal(&iv(30, 40)).unwrap(),
        TriBool::Unknown
    );
}

#[test]
fn interval_greater_than_verdict_table() {
    assert_eq!(iv(10, 29).greater_than(&iv(30, 40)).unwrap(), TriBool::False);
    assert_eq!(
        iv(10, 29).greater_than(&iv(30, 40)).unwrap(),
        iv(30, 40).less_than(&iv(10, 29)).unwrap()
    );
    assert_eq!(iv(30, 40).greater_than(&iv(10, 29)).unwrap(), TriBool::True);
    assert_eq!(
        iv(10, 30).greater_than(&iv(30, 40)).unwrap(),
        TriBool::Unknown
    );
    assert_eq!(
        iv(10, 31).greater_than(&iv(30, 40)).unwrap(),
        TriBool::Unknown
    );
}

#[test]
fn interval_greater_than_or_equal_verdict_table() {
    assert_eq!(
        iv(10, 29).greater_than_or_equal(&iv(30, 40)).unwrap(),
        TriBool::False
    );
    assert_eq!(
        iv(10, 30).greater_than_or_equal(&iv(30, 40)).unwrap(),
        TriBool::Unknown
    );
    assert_eq!(
        iv(10, 31).greater_than_or_equal(&iv(30, 40)).unwrap(),
        TriBool::Unknown
    );
}

#[test]
fn interval_equality_verdicts() {
    let min = Interval::singleton(type_min());
    let max = Interval::singleton(type_max());

    assert_eq!(min.equal(&min).unwrap(), TriBool::True);
    assert_eq!(min.not_equal(&max).unwrap(), TriBool::True);
    assert_eq!(min.less_than(&max).unwrap(), TriBool::True);
    assert_eq!(max.greater_than(&max).unwrap(), TriBool::False);

    // Overlapping non-singletons cannot be proven either way
    assert_eq!(iv(1, 9).equal(&iv(1, 9)).unwrap(), TriBool::Unknown);
}

#[test]
fn scalars_lift_to_singleton_intervals() {
    let a: Interval = v(10).into();
    let b: Interval = v(20).into();
    assert_eq!(a.less_than(&b).unwrap(), TriBool::True);
    assert_eq!(a.less_than(&iv(5, 15)).unwrap(), TriBool::Unknown);
    assert_eq!(Interval::from(v(10)).equal(&a).unwrap(), TriBool::True);
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Strict boolean ordering
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[test]
fn strict_ordering_on_disjoint_and_touching_ranges() {
    assert!(iv(10, 20).strictly_less_than(&iv(30, 40)).unwrap());
    // Boundary touches: not strictly separated
    assert!(!iv(10, 30).strictly_less_than(&iv(30, 40)).unwrap());
    assert!(!iv(10, 20).strictly_greater_than(&iv(30, 40)).unwrap());
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Operator dispatch
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[test]
fn evaluator_agrees_with_direct_relations() {
    let a = iv(10, 30);
    let b = iv(30, 40);
    assert_eq!(
        compare_intervals(ComparisonOp::Lt, &a, &b).unwrap(),
        TriBool::Unknown
    );
    assert_eq!(
        compare_intervals(ComparisonOp::Le, &a, &b).unwrap(),
        TriBool::True
    );
    assert_eq!(
        compare_intervals(ComparisonOp::Ge, &a, &b).unwrap(),
        TriBool::Unknown
    );
    assert!(compare_scalars(ComparisonOp::Lt, &v(0), &v(1)).unwrap());
}
