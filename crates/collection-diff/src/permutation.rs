//! Candidate operation sets.

use crate::types::Operation;

/// One hypothesis for expressing a diff.
///
/// Operations are appended in discovery order, partitioned by kind. The
/// partitions are only ordered relative to each other when the candidate is
/// finalised with [`Permutation::into_operations`].
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Permutation<P> {
    remove: Vec<Operation<P>>,
    replace: Vec<Operation<P>>,
    add: Vec<Operation<P>>,
}

/// Live candidates, in creation order.
pub(crate) type Pool<P> = Vec<Permutation<P>>;

impl<P> Permutation<P> {
    pub(crate) fn new() -> Self {
        Self {
            remove: Vec::new(),
            replace: Vec::new(),
            add: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, op: Operation<P>) {
        match op {
            Operation::Remove { .. } => self.remove.push(op),
            Operation::Replace { .. } => self.replace.push(op),
            Operation::Add { .. } => self.add.push(op),
        }
    }

    pub(crate) fn step_count(&self) -> usize {
        self.remove.len() + self.replace.len() + self.add.len()
    }

    /// Removals in reverse discovery order, then replacements, then
    /// additions.
    ///
    /// Reversal makes higher indices go first, so applying the removals in
    /// sequence never shifts an index that a later removal still refers to.
    pub(crate) fn into_operations(self) -> Vec<Operation<P>> {
        let Self {
            mut remove,
            replace,
            add,
        } = self;
        remove.reverse();
        remove.extend(replace);
        remove.extend(add);
        remove
    }
}

/// Append `op` to every live candidate.
pub(crate) fn emit<P: Clone>(pool: &mut Pool<P>, op: Operation<P>) {
    if let Some((last, rest)) = pool.split_last_mut() {
        for permutation in rest {
            permutation.push(op.clone());
        }
        last.push(op);
    }
}

/// Picks the candidate with the fewest operations. Ties go to the candidate
/// created first.
pub(crate) fn select<P>(pool: Pool<P>) -> Option<(usize, Permutation<P>)> {
    pool.into_iter()
        .enumerate()
        .min_by_key(|(_, permutation)| permutation.step_count())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn remove(i: usize) -> Operation<usize> {
        Operation::Remove { path: i }
    }

    #[test]
    fn test_partitions_and_final_order() {
        let mut p = Permutation::new();
        p.push(Operation::Add { path: 9, value: json!(1) });
        p.push(remove(1));
        p.push(Operation::Replace { path: 5, value: json!(2) });
        p.push(remove(2));
        assert_eq!(p.step_count(), 4);

        let paths: Vec<usize> = p.into_operations().into_iter().map(Operation::into_path).collect();
        assert_eq!(paths, vec![2, 1, 5, 9]);
    }

    #[test]
    fn test_emit_reaches_every_candidate() {
        let mut pool = vec![Permutation::new(), Permutation::new()];
        emit(&mut pool, remove(0));
        assert!(pool.iter().all(|p| p.step_count() == 1));

        let mut empty: Pool<usize> = Vec::new();
        emit(&mut empty, remove(0));
        assert!(empty.is_empty());
    }

    #[test]
    fn test_select_prefers_first_on_tie() {
        let mut a = Permutation::new();
        a.push(remove(0));
        let mut b = Permutation::new();
        b.push(remove(1));
        let mut c = Permutation::new();
        c.push(remove(2));
        c.push(remove(3));

        let (index, winner) = select(vec![c, a.clone(), b]).unwrap();
        assert_eq!(index, 1);
        assert_eq!(winner, a);
        assert!(select::<usize>(Vec::new()).is_none());
    }
}
