//! Structural diff of JSON objects and arrays.
//!
//! [`diff`] compares two composite values and returns the `add`, `remove`
//! and `replace` operations that turn the first into the second. Removals
//! come first, ordered so that applying them one after another never
//! invalidates a pending array index, followed by replacements and then
//! additions.
//!
//! Arrays are compared index by index. When an array shrinks, the diff is
//! computed twice, once assuming the trailing elements were removed and once
//! assuming the leading ones were, and the interpretation needing fewer
//! operations is returned.
//!
//! # Example
//!
//! ```
//! use collection_diff::{diff, diff_with, json_patch_path_converter, Operation, PathStep};
//! use serde_json::json;
//!
//! let ops = diff(&json!({"a": 3, "b": 5}), &json!({"a": 4, "c": 5})).unwrap();
//! assert_eq!(
//!     ops,
//!     vec![
//!         Operation::Remove { path: vec![PathStep::from("b")] },
//!         Operation::Replace { path: vec![PathStep::from("a")], value: json!(4) },
//!         Operation::Add { path: vec![PathStep::from("c")], value: json!(5) },
//!     ]
//! );
//!
//! let ops = diff_with(&json!([1, 2, 3]), &json!([2, 3]), json_patch_path_converter).unwrap();
//! assert_eq!(ops, vec![Operation::Remove { path: "/0".to_string() }]);
//! ```
//!
//! # Limits
//!
//! Recursion depth follows the nesting depth of the inputs. Every shrinking
//! array doubles the number of candidates, so inputs with many shrinking
//! arrays are exponential in that count; [`DiffOptions::trim_left`] turns
//! the second interpretation off.

use serde_json::Value;

mod error;
mod options;
mod path;
mod permutation;
pub mod types;
mod walker;

pub use error::{DiffError, Side};
pub use options::DiffOptions;
pub use path::{
    identity_path_converter, json_patch_path_converter, json_pointer_path_converter,
    PathConverter,
};
pub use types::{Operation, Path, PathStep, ValueKind};

use permutation::{select, Permutation};
use walker::Walker;

/// Diffs two composites, reporting paths as raw step sequences.
///
/// Numbers compare by value, so `1` and `1.0` are equal. An array root
/// diffed against an object root yields a single `replace` at the root.
///
/// # Errors
///
/// Returns [`DiffError::InvalidArgument`] if either value is not an object
/// or array.
pub fn diff(left: &Value, right: &Value) -> Result<Vec<Operation>, DiffError> {
    diff_with(left, right, identity_path_converter)
}

/// Diffs two composites, rendering every path through `converter`.
///
/// # Errors
///
/// Returns [`DiffError::InvalidArgument`] if either value is not an object
/// or array.
pub fn diff_with<C: PathConverter>(
    left: &Value,
    right: &Value,
    converter: C,
) -> Result<Vec<Operation<C::Output>>, DiffError> {
    diff_with_options(left, right, converter, &DiffOptions::default())
}

/// Diffs two composites with explicit [`DiffOptions`].
///
/// # Errors
///
/// Returns [`DiffError::InvalidArgument`] if either value is not an object
/// or array.
///
/// # Example
///
/// ```
/// use collection_diff::{diff_with_options, identity_path_converter, DiffOptions};
/// use serde_json::json;
///
/// let options = DiffOptions::new().trim_left(false);
/// let ops = diff_with_options(&json!([1, 2, 3]), &json!([2, 3]), identity_path_converter, &options)
///     .unwrap();
/// assert_eq!(ops.len(), 3);
/// ```
pub fn diff_with_options<C: PathConverter>(
    left: &Value,
    right: &Value,
    converter: C,
    options: &DiffOptions,
) -> Result<Vec<Operation<C::Output>>, DiffError> {
    check_composite(left, Side::Left)?;
    check_composite(right, Side::Right)?;
    tracing::debug!(
        target: "collection_diff",
        left = %ValueKind::of(left),
        right = %ValueKind::of(right),
        trim_left = options.trim_left,
        "computing diff"
    );

    let walker = Walker::new(&converter, options);
    let pool = walker.walk(left, right, &[], &[], vec![Permutation::new()]);
    let candidates = pool.len();

    let Some((winner, permutation)) = select(pool) else {
        return Ok(Vec::new());
    };
    tracing::debug!(
        target: "collection_diff",
        candidates,
        winner,
        operations = permutation.step_count(),
        "selected candidate"
    );
    Ok(permutation.into_operations())
}

fn check_composite(value: &Value, side: Side) -> Result<(), DiffError> {
    let kind = ValueKind::of(value);
    if kind.is_composite() {
        Ok(())
    } else {
        Err(DiffError::InvalidArgument { side, kind })
    }
}
