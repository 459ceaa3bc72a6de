//! Structural walker.
//!
//! Walks two composites key by key and records the operations that turn the
//! left side into the right side. The walker never owns a global candidate
//! list: the live [`Pool`] is moved into each call and returned from it, so
//! forks made deep in the tree flow back out through the return value.

mod trim;

use serde_json::{Map, Number, Value};

use crate::options::DiffOptions;
use crate::path::PathConverter;
use crate::permutation::{emit, Pool};
use crate::types::{Operation, Path, PathStep, ValueKind};

pub(crate) struct Walker<'a, C> {
    converter: &'a C,
    options: &'a DiffOptions,
}

/// What to do with two differing values found under the same key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Replace,
    Descend,
}

fn classify(left: &Value, right: &Value) -> Step {
    let (left_kind, right_kind) = (ValueKind::of(left), ValueKind::of(right));
    if !left_kind.is_composite() || !right_kind.is_composite() || left_kind != right_kind {
        Step::Replace
    } else {
        Step::Descend
    }
}

/// Strict equality. Numbers compare by value, so `1` equals `1.0` and `0`
/// equals `-0.0`; integers that both fit `i64` or `u64` compare exactly.
fn same_value(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Number(left), Value::Number(right)) => same_number(left, right),
        _ => left == right,
    }
}

fn same_number(left: &Number, right: &Number) -> bool {
    if let (Some(l), Some(r)) = (left.as_i64(), right.as_i64()) {
        return l == r;
    }
    if let (Some(l), Some(r)) = (left.as_u64(), right.as_u64()) {
        return l == r;
    }
    match (left.as_f64(), right.as_f64()) {
        (Some(l), Some(r)) => l == r,
        _ => false,
    }
}

fn child(base: &[PathStep], step: PathStep) -> Path {
    let mut path = Vec::with_capacity(base.len() + 1);
    path.extend_from_slice(base);
    path.push(step);
    path
}

impl<'a, C: PathConverter> Walker<'a, C> {
    pub(crate) fn new(converter: &'a C, options: &'a DiffOptions) -> Self {
        Self { converter, options }
    }

    /// Diffs two composites.
    ///
    /// `base` prefixes add and replace targets, `remove_base` prefixes remove
    /// targets. They differ only below an array read as trim-left, where
    /// removals still address the original, unshifted indices.
    pub(crate) fn walk(
        &self,
        left: &Value,
        right: &Value,
        base: &[PathStep],
        remove_base: &[PathStep],
        mut pool: Pool<C::Output>,
    ) -> Pool<C::Output> {
        match (left, right) {
            (Value::Object(left), Value::Object(right)) => {
                self.walk_object(left, right, base, remove_base, pool)
            }
            (Value::Array(left), Value::Array(right)) => {
                self.walk_array(left, right, base, remove_base, pool)
            }
            // Only reachable for mismatched roots; nested mismatches are
            // classified as replacements before descending.
            _ => {
                self.emit_replace(&mut pool, base, right);
                pool
            }
        }
    }

    fn walk_object(
        &self,
        left: &Map<String, Value>,
        right: &Map<String, Value>,
        base: &[PathStep],
        remove_base: &[PathStep],
        mut pool: Pool<C::Output>,
    ) -> Pool<C::Output> {
        for key in left.keys() {
            if !right.contains_key(key) {
                self.emit_remove(&mut pool, &child(remove_base, PathStep::Key(key.clone())));
            }
        }
        for (key, right_value) in right {
            let step = PathStep::Key(key.clone());
            pool = self.compare_entry(
                left.get(key),
                right_value,
                &child(base, step.clone()),
                &child(remove_base, step),
                pool,
            );
        }
        pool
    }

    /// Compares the values found under one key of `right`. `left` is `None`
    /// when the key is new.
    fn compare_entry(
        &self,
        left: Option<&Value>,
        right: &Value,
        path: &[PathStep],
        remove_path: &[PathStep],
        mut pool: Pool<C::Output>,
    ) -> Pool<C::Output> {
        match left {
            None => {
                let op = Operation::Add {
                    path: self.converter.convert(path),
                    value: right.clone(),
                };
                emit(&mut pool, op);
                pool
            }
            Some(left) if same_value(left, right) => pool,
            Some(left) => match classify(left, right) {
                Step::Replace => {
                    self.emit_replace(&mut pool, path, right);
                    pool
                }
                Step::Descend => self.walk(left, right, path, remove_path, pool),
            },
        }
    }

    fn emit_remove(&self, pool: &mut Pool<C::Output>, path: &[PathStep]) {
        let op = Operation::Remove {
            path: self.converter.convert(path),
        };
        emit(pool, op);
    }

    fn emit_replace(&self, pool: &mut Pool<C::Output>, path: &[PathStep], value: &Value) {
        let op = Operation::Replace {
            path: self.converter.convert(path),
            value: value.clone(),
        };
        emit(pool, op);
    }
}
