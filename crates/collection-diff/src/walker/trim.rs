//! Array trim resolution.
//!
//! When the left array is longer, index-by-index comparison cannot tell
//! whether elements were dropped from the end or from the front. Both
//! readings are tried: the live pool is copied, one copy is walked as
//! trim-right and the other as trim-left, and the two results are
//! concatenated with the trim-right candidates first.

use serde_json::Value;

use super::{child, Walker};
use crate::path::PathConverter;
use crate::permutation::Pool;
use crate::types::PathStep;

impl<C: PathConverter> Walker<'_, C> {
    pub(super) fn walk_array(
        &self,
        left: &[Value],
        right: &[Value],
        base: &[PathStep],
        remove_base: &[PathStep],
        pool: Pool<C::Output>,
    ) -> Pool<C::Output> {
        let delta = left.len().saturating_sub(right.len());
        if delta == 0 || !self.options.trim_left {
            return self.trim_right(left, right, base, remove_base, pool);
        }

        tracing::trace!(
            target: "collection_diff",
            path = ?base,
            delta,
            live = pool.len(),
            "forking candidates on shrunk array"
        );
        let shifted = pool.clone();
        let mut out = self.trim_right(left, right, base, remove_base, pool);
        out.extend(self.trim_left(left, right, delta, base, remove_base, shifted));
        out
    }

    /// Pairs `left[i]` with `right[i]` and removes the tail of `left`.
    fn trim_right(
        &self,
        left: &[Value],
        right: &[Value],
        base: &[PathStep],
        remove_base: &[PathStep],
        mut pool: Pool<C::Output>,
    ) -> Pool<C::Output> {
        for idx in right.len()..left.len() {
            self.emit_remove(&mut pool, &child(remove_base, PathStep::Index(idx)));
        }
        for (idx, right_value) in right.iter().enumerate() {
            pool = self.compare_entry(
                left.get(idx),
                right_value,
                &child(base, PathStep::Index(idx)),
                &child(remove_base, PathStep::Index(idx)),
                pool,
            );
        }
        pool
    }

    /// Removes the first `delta` elements of `left` and pairs
    /// `left[i + delta]` with `right[i]`.
    ///
    /// Replacements land on the shifted index `i`. Removals nested below an
    /// element keep its original index `i + delta`, since every removal is
    /// applied before the leading elements are dropped.
    fn trim_left(
        &self,
        left: &[Value],
        right: &[Value],
        delta: usize,
        base: &[PathStep],
        remove_base: &[PathStep],
        mut pool: Pool<C::Output>,
    ) -> Pool<C::Output> {
        for idx in 0..delta {
            self.emit_remove(&mut pool, &child(remove_base, PathStep::Index(idx)));
        }
        for (idx, (left_value, right_value)) in left[delta..].iter().zip(right).enumerate() {
            pool = self.compare_entry(
                Some(left_value),
                right_value,
                &child(base, PathStep::Index(idx)),
                &child(remove_base, PathStep::Index(idx + delta)),
                pool,
            );
        }
        pool
    }
}
