//! Core types: operations and value kinds.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub use collection_diff_json_pointer::{Path, PathStep};

// ── Operation ─────────────────────────────────────────────────────────────

/// One unit of change.
///
/// `P` is the path representation chosen by the path converter: a raw
/// [`Path`] by default, or a pointer string. Serialises as
/// `{"op": "add" | "remove" | "replace", "path": P, "value"?: Value}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum Operation<P = Path> {
    Add { path: P, value: Value },
    Remove { path: P },
    Replace { path: P, value: Value },
}

impl<P> Operation<P> {
    /// Returns the operation name as it appears in the `op` field.
    pub fn op_name(&self) -> &'static str {
        match self {
            Operation::Add { .. } => "add",
            Operation::Remove { .. } => "remove",
            Operation::Replace { .. } => "replace",
        }
    }

    pub fn path(&self) -> &P {
        match self {
            Operation::Add { path, .. } => path,
            Operation::Remove { path } => path,
            Operation::Replace { path, .. } => path,
        }
    }

    pub fn into_path(self) -> P {
        match self {
            Operation::Add { path, .. } => path,
            Operation::Remove { path } => path,
            Operation::Replace { path, .. } => path,
        }
    }

    /// Returns the new value for `add` and `replace`; `remove` carries none.
    pub fn value(&self) -> Option<&Value> {
        match self {
            Operation::Add { value, .. } | Operation::Replace { value, .. } => Some(value),
            Operation::Remove { .. } => None,
        }
    }
}

// ── ValueKind ─────────────────────────────────────────────────────────────

/// The variant tag of a JSON value.
///
/// Two values of different kinds are never diffed structurally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

impl ValueKind {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Boolean,
            Value::Number(_) => ValueKind::Number,
            Value::String(_) => ValueKind::String,
            Value::Array(_) => ValueKind::Array,
            Value::Object(_) => ValueKind::Object,
        }
    }

    /// Arrays and objects are composites; everything else is a scalar.
    pub fn is_composite(self) -> bool {
        matches!(self, ValueKind::Array | ValueKind::Object)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ValueKind::Null => "null",
            ValueKind::Boolean => "boolean",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
