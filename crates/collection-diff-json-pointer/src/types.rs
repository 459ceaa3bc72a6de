//! Type definitions for paths.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A step in a path.
///
/// Object properties are addressed by [`PathStep::Key`], array elements by
/// [`PathStep::Index`]. Serialises untagged, so a path renders as a plain
/// JSON array such as `["b", 0, "c"]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathStep {
    Index(usize),
    Key(String),
}

/// A root-relative path.
pub type Path = Vec<PathStep>;

impl PathStep {
    /// Returns the array index this step addresses, if it is an index.
    pub fn as_index(&self) -> Option<usize> {
        match self {
            PathStep::Index(idx) => Some(*idx),
            PathStep::Key(_) => None,
        }
    }
}

impl fmt::Display for PathStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathStep::Index(idx) => write!(f, "{idx}"),
            PathStep::Key(key) => f.write_str(key),
        }
    }
}

impl From<usize> for PathStep {
    fn from(idx: usize) -> Self {
        PathStep::Index(idx)
    }
}

impl From<&str> for PathStep {
    fn from(key: &str) -> Self {
        PathStep::Key(key.to_string())
    }
}

impl From<String> for PathStep {
    fn from(key: String) -> Self {
        PathStep::Key(key)
    }
}
