//! The `meta` tag carried by blocks and sub-blocks.
//!
//! Content files use an open string tag. It only selects icon and color
//! treatment, so unknown values are kept as [`Meta::Other`] rather than
//! rejected.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Presentation tag of a block or sub-block.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Meta {
    /// Code signature banner.
    Signature,
    /// A pro.
    Positive,
    /// A solution to a stated problem.
    Solution,
    /// A con.
    Negative,
    /// A problem statement.
    Problem,
    /// Free-form notes.
    Notes,
    /// Real world scenarios.
    Scenarios,
    /// General information.
    Info,
    /// Tooling.
    Tool,
    /// Component catalogue.
    Component,
    /// Security concerns.
    Security,
    /// Performance concerns.
    Performance,
    /// Lifecycle description.
    Lifecycle,
    /// Architecture description.
    Architecture,
    /// Any tag not listed above, kept verbatim.
    Other(String),
}

impl Meta {
    /// The tag as it appears in content files.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Signature => "signature",
            Self::Positive => "positive",
            Self::Solution => "solution",
            Self::Negative => "negative",
            Self::Problem => "problem",
            Self::Notes => "notes",
            Self::Scenarios => "scenarios",
            Self::Info => "info",
            Self::Tool => "tool",
            Self::Component => "component",
            Self::Security => "security",
            Self::Performance => "performance",
            Self::Lifecycle => "lifecycle",
            Self::Architecture => "architecture",
            Self::Other(tag) => tag,
        }
    }

    /// True for `positive` and `solution`.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Positive | Self::Solution)
    }

    /// True for `negative` and `problem`.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Negative | Self::Problem)
    }
}

impl From<&str> for Meta {
    fn from(tag: &str) -> Self {
        match tag {
            "signature" => Self::Signature,
            "positive" => Self::Positive,
            "solution" => Self::Solution,
            "negative" => Self::Negative,
            "problem" => Self::Problem,
            "notes" => Self::Notes,
            "scenarios" => Self::Scenarios,
            "info" => Self::Info,
            "tool" => Self::Tool,
            "component" => Self::Component,
            "security" => Self::Security,
            "performance" => Self::Performance,
            "lifecycle" => Self::Lifecycle,
            "architecture" => Self::Architecture,
            other => Self::Other(other.to_owned()),
        }
    }
}

impl From<String> for Meta {
    fn from(tag: String) -> Self {
        match Self::from(tag.as_str()) {
            Self::Other(_) => Self::Other(tag),
            known => known,
        }
    }
}

impl From<Meta> for String {
    fn from(meta: Meta) -> Self {
        match meta {
            Meta::Other(tag) => tag,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for Meta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
