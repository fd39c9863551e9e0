//! Career goal records.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A career goal with its current and target value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    /// Goal label.
    #[serde(default)]
    pub goal: String,
    /// Where things stand today.
    pub current: GoalValue,
    /// Where things should end up.
    pub target: GoalValue,
    /// Unit appended to both values (e.g. "k", "years").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

/// A goal value: either free text or a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GoalValue {
    /// Numeric value.
    Number(f64),
    /// Free text value.
    Text(String),
}

impl GoalValue {
    /// Numeric value, if this is a number.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(_) => None,
        }
    }
}

impl fmt::Display for GoalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // 80.0 prints as "80"
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl Goal {
    /// Progress towards the target in `[0, 1]` when both values are numbers.
    #[must_use]
    pub fn progress(&self) -> Option<f64> {
        let current = self.current.as_number()?;
        let target = self.target.as_number()?;
        if target <= 0.0 {
            return None;
        }
        Some((current / target).clamp(0.0, 1.0))
    }
}
