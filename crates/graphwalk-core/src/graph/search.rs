mod path;

use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

use crate::error::{GraphError, Result};
use crate::frontier::{Frontier, Queue, Stack};
use crate::graph::store::Graph;
use crate::graph::traversal::{require_vertex, GraphProvider};
use crate::graph::types::TraversalOptions;

pub use path::reconstruct_path;

/// Expand from `from` in frontier order until `to` is seen as a neighbor.
///
/// Returns the reconstructed path, or `None` once the frontier is exhausted.
fn frontier_search<V, G, F>(provider: &G, from: &V, to: &V, mut frontier: F) -> Option<Vec<V>>
where
    V: Clone + Eq + Hash,
    G: GraphProvider<V> + ?Sized,
    F: Frontier<V>,
{
    let mut visited: HashSet<V> = HashSet::new();
    let mut predecessors: HashMap<V, V> = HashMap::new();

    visited.insert(from.clone());
    frontier.insert(from.clone());

    while let Some(current) = frontier.remove() {
        for neighbor in provider.get_outbound(&current) {
            if &neighbor == to {
                predecessors.insert(neighbor, current);
                return Some(reconstruct_path(from, to, &predecessors));
            }

            if visited.insert(neighbor.clone()) {
                predecessors.insert(neighbor.clone(), current.clone());
                frontier.insert(neighbor);
            }
        }
    }

    None
}

fn require_endpoints<V, G>(provider: &G, from: &V, to: &V) -> Result<()>
where
    V: Debug,
    G: GraphProvider<V> + ?Sized,
{
    require_vertex(provider, from)?;
    require_vertex(provider, to)
}

/// Find a shortest path (fewest edges) from `from` to `to`.
///
/// Returns `Ok(None)` when `to` is unreachable. A search from a vertex to
/// itself yields the single-vertex path.
#[tracing::instrument(level = "debug", skip(provider), fields(from = ?from, to = ?to))]
pub fn bfs<V, G>(provider: &G, from: &V, to: &V) -> Result<Option<Vec<V>>>
where
    V: Clone + Eq + Hash + Debug,
    G: GraphProvider<V> + ?Sized,
{
    require_endpoints(provider, from, to)?;
    if from == to {
        return Ok(Some(vec![from.clone()]));
    }

    let path = frontier_search(provider, from, to, Queue::new());
    if path.is_none() {
        tracing::debug!("destination unreachable");
    }
    Ok(path)
}

/// Find a path from `from` to `to` in depth-first order.
///
/// The path is valid but not necessarily shortest.
#[tracing::instrument(level = "debug", skip(provider), fields(from = ?from, to = ?to))]
pub fn dfs<V, G>(provider: &G, from: &V, to: &V) -> Result<Option<Vec<V>>>
where
    V: Clone + Eq + Hash + Debug,
    G: GraphProvider<V> + ?Sized,
{
    require_endpoints(provider, from, to)?;
    if from == to {
        return Ok(Some(vec![from.clone()]));
    }

    let path = frontier_search(provider, from, to, Stack::new());
    if path.is_none() {
        tracing::debug!("destination unreachable");
    }
    Ok(path)
}

/// Find a path from `from` to `to` by recursive depth-first descent.
#[tracing::instrument(level = "debug", skip(provider, opts), fields(from = ?from, to = ?to, max_depth = opts.max_depth))]
pub fn dfs_recursive<V, G>(
    provider: &G,
    from: &V,
    to: &V,
    opts: &TraversalOptions,
) -> Result<Option<Vec<V>>>
where
    V: Clone + Eq + Hash + Debug,
    G: GraphProvider<V> + ?Sized,
{
    require_endpoints(provider, from, to)?;

    let mut descent = RecursiveDescent {
        provider,
        to,
        max_depth: opts.max_depth,
        visited: HashSet::from([from.clone()]),
        path: Vec::new(),
    };

    if descent.descend(from, 0)? {
        Ok(Some(descent.path))
    } else {
        tracing::debug!("destination unreachable");
        Ok(None)
    }
}

struct RecursiveDescent<'a, V, G: ?Sized> {
    provider: &'a G,
    to: &'a V,
    max_depth: usize,
    visited: HashSet<V>,
    /// Vertices on the current branch, origin first
    path: Vec<V>,
}

impl<V, G> RecursiveDescent<'_, V, G>
where
    V: Clone + Eq + Hash,
    G: GraphProvider<V> + ?Sized,
{
    fn descend(&mut self, vertex: &V, depth: usize) -> Result<bool> {
        if depth > self.max_depth {
            return Err(GraphError::RecursionLimit {
                limit: self.max_depth,
            });
        }

        self.path.push(vertex.clone());
        if vertex == self.to {
            return Ok(true);
        }

        for neighbor in self.provider.get_outbound(vertex) {
            if self.visited.insert(neighbor.clone()) && self.descend(&neighbor, depth + 1)? {
                return Ok(true);
            }
        }

        self.path.pop();
        Ok(false)
    }
}

impl<V> Graph<V>
where
    V: Clone + Eq + Hash + Debug,
{
    /// Shortest path from `from` to `to`, or `None` if unreachable
    pub fn bfs(&self, from: &V, to: &V) -> Result<Option<Vec<V>>> {
        bfs(self, from, to)
    }

    /// Depth-first path from `from` to `to`, or `None` if unreachable
    pub fn dfs(&self, from: &V, to: &V) -> Result<Option<Vec<V>>> {
        dfs(self, from, to)
    }

    /// Recursive depth-first path from `from` to `to`
    pub fn dfs_recursive(&self, from: &V, to: &V) -> Result<Option<Vec<V>>> {
        dfs_recursive(self, from, to, &TraversalOptions::default())
    }
}

#[cfg(test)]
mod tests;
