//! Earliest-ancestor query over a parent/child DAG
//!
//! Given `(parent, child)` edges, the earliest ancestor of a node is the root
//! (a node with no recorded parents) farthest from it. Ties on distance go to
//! the smaller id.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use indexmap::IndexMap;

use crate::frontier::Stack;

/// Options for the earliest-ancestor walk
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AncestorOptions {
    /// Return the first root found farther than half the lookup table size
    /// instead of exploring every ancestor. Faster, but it can disagree with
    /// the full walk when several roots are candidates.
    pub early_exit: bool,
}

/// Child → parents table built from `(parent, child)` edges
#[derive(Debug, Clone)]
pub struct ParentLookup<V> {
    parents: IndexMap<V, Vec<V>>,
}

impl<V> ParentLookup<V>
where
    V: Clone + Eq + Hash,
{
    pub fn from_edges(edges: &[(V, V)]) -> Self {
        let mut parents: IndexMap<V, Vec<V>> = IndexMap::new();
        for (parent, child) in edges {
            parents
                .entry(child.clone())
                .or_default()
                .push(parent.clone());
        }
        Self { parents }
    }

    /// Recorded parents of `child`, `None` for a root
    pub fn parents_of(&self, child: &V) -> Option<&[V]> {
        self.parents.get(child).map(Vec::as_slice)
    }

    /// Number of nodes that have at least one parent
    pub fn len(&self) -> usize {
        self.parents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }
}

/// Find the earliest ancestor of `start`.
///
/// Returns `None` when `start` has no parents at all.
#[tracing::instrument(level = "debug", skip(edges, opts), fields(start = ?start, edges = edges.len(), early_exit = opts.early_exit))]
pub fn earliest_ancestor<V>(edges: &[(V, V)], start: &V, opts: &AncestorOptions) -> Option<V>
where
    V: Clone + Ord + Hash + Debug,
{
    let lookup = ParentLookup::from_edges(edges);
    let early_exit_bound = lookup.len() / 2;

    // (node, distance) of the best root so far
    let mut best = (start.clone(), 0usize);
    // Farthest distance each node has been pushed at
    let mut pushed_at: HashMap<V, usize> = HashMap::new();
    let mut stack = Stack::with_start((start.clone(), 0usize));

    while let Some((node, distance)) = stack.pop() {
        let Some(parents) = lookup.parents_of(&node) else {
            if opts.early_exit && distance > early_exit_bound {
                tracing::debug!(root = ?node, distance, "early exit");
                return Some(node);
            }
            if is_better_root(&node, distance, &best) {
                best = (node, distance);
            }
            continue;
        };

        // In a DAG every node on the walk is a distinct child entry, so the
        // distance of a node with parents stays below the table size.
        if distance >= lookup.len() {
            tracing::warn!(node = ?node, "cycle in parent edges, stopping this branch");
            continue;
        }

        for parent in parents {
            let next = distance + 1;
            if pushed_at.get(parent).is_some_and(|&seen| seen >= next) {
                continue;
            }
            pushed_at.insert(parent.clone(), next);
            stack.push((parent.clone(), next));
        }
    }

    if &best.0 == start {
        None
    } else {
        Some(best.0)
    }
}

fn is_better_root<V: Ord>(node: &V, distance: usize, best: &(V, usize)) -> bool {
    distance > best.1 || (distance == best.1 && node < &best.0)
}

/// Earliest ancestor with `-1` standing in for "no ancestor"
pub fn earliest_ancestor_or_sentinel(
    edges: &[(i64, i64)],
    start: i64,
    opts: &AncestorOptions,
) -> i64 {
    earliest_ancestor(edges, &start, opts).unwrap_or(-1)
}

/// The eleven-node family tree used by the demonstration driver
pub fn demo_edges() -> Vec<(i64, i64)> {
    vec![
        (1, 3),
        (2, 3),
        (3, 6),
        (5, 6),
        (5, 7),
        (4, 5),
        (4, 8),
        (8, 9),
        (11, 8),
        (10, 1),
    ]
}
