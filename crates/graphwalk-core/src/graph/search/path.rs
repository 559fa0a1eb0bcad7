//! Path reconstruction utilities for graph search

use std::collections::HashMap;
use std::hash::Hash;

/// Walk the predecessor map back from `to` until `from` is reached and
/// return the path in `from -> to` order.
///
/// A vertex missing from `predecessors` ends the walk early, so a broken map
/// yields the partial suffix rather than looping.
pub fn reconstruct_path<V>(from: &V, to: &V, predecessors: &HashMap<V, V>) -> Vec<V>
where
    V: Clone + Eq + Hash,
{
    let mut path = vec![to.clone()];
    let mut current = to;

    while current != from {
        match predecessors.get(current) {
            Some(pred) => {
                path.push(pred.clone());
                current = pred;
            }
            None => break,
        }
    }

    path.reverse();
    path
}
