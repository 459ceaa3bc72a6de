#![allow(dead_code)]

use collection_diff::{Operation, PathStep};
use collection_diff_json_pointer::get_mut;
use serde_json::Value;
use tracing_subscriber::EnvFilter;

/// Routes `collection_diff` events to the test harness output. Filter with
/// `RUST_LOG=collection_diff=trace`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Applies diff output to `doc` in order: removals, replacements, additions,
/// exactly as emitted.
pub fn apply(doc: &Value, ops: &[Operation]) -> Result<Value, String> {
    let mut doc = doc.clone();
    for op in ops {
        apply_op(&mut doc, op)?;
    }
    Ok(doc)
}

fn apply_op(doc: &mut Value, op: &Operation) -> Result<(), String> {
    let Some((last, parent_path)) = op.path().split_last() else {
        return match op {
            Operation::Replace { value, .. } => {
                *doc = value.clone();
                Ok(())
            }
            _ => Err(format!("{} at root", op.op_name())),
        };
    };
    let parent =
        get_mut(doc, parent_path).ok_or_else(|| format!("missing parent for {op:?}"))?;

    match (op, parent) {
        (Operation::Remove { .. }, Value::Array(arr)) => {
            let idx = index_within(last, arr.len(), op)?;
            arr.remove(idx);
        }
        (Operation::Remove { .. }, Value::Object(map)) => {
            map.remove(&last.to_string())
                .ok_or_else(|| format!("missing key for {op:?}"))?;
        }
        (Operation::Replace { value, .. }, Value::Array(arr)) => {
            let idx = index_within(last, arr.len(), op)?;
            arr[idx] = value.clone();
        }
        (Operation::Replace { value, .. }, Value::Object(map)) => {
            let slot = map
                .get_mut(&last.to_string())
                .ok_or_else(|| format!("missing key for {op:?}"))?;
            *slot = value.clone();
        }
        (Operation::Add { value, .. }, Value::Array(arr)) => {
            let idx = index_within(last, arr.len() + 1, op)?;
            arr.insert(idx, value.clone());
        }
        (Operation::Add { value, .. }, Value::Object(map)) => {
            map.insert(last.to_string(), value.clone());
        }
        (_, other) => return Err(format!("{op:?} targets scalar {other}")),
    }
    Ok(())
}

fn index_within(step: &PathStep, bound: usize, op: &Operation) -> Result<usize, String> {
    match step.as_index() {
        Some(idx) if idx < bound => Ok(idx),
        _ => Err(format!("index out of bounds for {op:?}")),
    }
}
