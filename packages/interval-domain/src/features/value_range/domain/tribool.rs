//! Three-valued verdict type
//!
//! Comparison of two ranges cannot always be decided: `[10, 30] < [30, 40]`
//! holds for some concrete value pairs and fails for others. Verdicts are
//! therefore three-valued, and `Unknown` must never be collapsed into
//! `True` or `False`: a guessed verdict would make the surrounding
//! analysis unsound.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Not;

/// Three-valued comparison verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TriBool {
    /// The relation holds for every concrete value pair
    True,
    /// The relation holds for no concrete value pair
    False,
    /// Undecidable from range information alone
    Unknown,
}

impl TriBool {
    /// Lift a decided boolean into a verdict
    pub fn from_bool(value: bool) -> Self {
        if value {
            TriBool::True
        } else {
            TriBool::False
        }
    }

    /// Logical negation: `True` ↔ `False`, `Unknown` stays `Unknown`
    pub fn negate(self) -> Self {
        match self {
            TriBool::True => TriBool::False,
            TriBool::False => TriBool::True,
            TriBool::Unknown => TriBool::Unknown,
        }
    }

    /// Kleene conjunction: `False` dominates
    pub fn and(self, other: TriBool) -> Self {
        match (self, other) {
            (TriBool::False, _) | (_, TriBool::False) => TriBool::False,
            (TriBool::True, TriBool::True) => TriBool::True,
            _ => TriBool::Unknown,
        }
    }

    /// Kleene disjunction: `True` dominates
    pub fn or(self, other: TriBool) -> Self {
        match (self, other) {
            (TriBool::True, _) | (_, TriBool::True) => TriBool::True,
            (TriBool::False, TriBool::False) => TriBool::False,
            _ => TriBool::Unknown,
        }
    }

    /// Check if verdict is `True`
    pub fn is_true(self) -> bool {
        self == TriBool::True
    }

    /// Check if verdict is `False`
    pub fn is_false(self) -> bool {
        self == TriBool::False
    }

    /// Check if verdict is `Unknown`
    pub fn is_unknown(self) -> bool {
        self == TriBool::Unknown
    }

    /// Decided verdicts as `Some`, `Unknown` as `None`
    pub fn known(self) -> Option<bool> {
        match self {
            TriBool::True => Some(true),
            TriBool::False => Some(false),
            TriBool::Unknown => None,
        }
    }
}

impl From<bool> for TriBool {
    fn from(value: bool) -> Self {
        TriBool::from_bool(value)
    }
}

impl Not for TriBool {
    type Output = TriBool;

    fn not(self) -> TriBool {
        self.negate()
    }
}

impl fmt::Display for TriBool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::True => write!(f, "true"),
            Self::False => write!(f, "false"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}
