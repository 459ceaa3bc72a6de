use serde_json::Value;

use crate::types::PathStep;

/// Resolves `path` inside `doc` for in-place edits.
///
/// Array elements are reached through [`PathStep::Index`]; object members
/// through the step's string form, so `Index(0)` also finds key `"0"`.
/// Returns `None` when a step is missing or lands on a scalar.
///
/// ```
/// use collection_diff_json_pointer::{get_mut, PathStep};
/// use serde_json::json;
///
/// let mut doc = json!({"list": [1, 2]});
/// *get_mut(&mut doc, &[PathStep::from("list"), PathStep::Index(1)]).unwrap() = json!(5);
/// assert_eq!(doc, json!({"list": [1, 5]}));
/// ```
pub fn get_mut<'a>(doc: &'a mut Value, path: &[PathStep]) -> Option<&'a mut Value> {
    path.iter().try_fold(doc, |node, step| match node {
        Value::Array(items) => items.get_mut(step.as_index()?),
        Value::Object(members) => members.get_mut(&step.to_string()),
        _ => None,
    })
}
