use std::fmt;

use thiserror::Error;

use crate::types::ValueKind;

/// Which argument of a diff call was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => f.write_str("left"),
            Side::Right => f.write_str("right"),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DiffError {
    /// A root argument is not an object or array.
    #[error("INVALID_ARGUMENT: both arguments must be objects or arrays, {side} is {kind}")]
    InvalidArgument { side: Side, kind: ValueKind },
}
