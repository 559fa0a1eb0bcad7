use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;
use std::time::Instant;

use crate::error::{GraphError, Result};
use crate::frontier::{Frontier, Queue, Stack};
use crate::graph::store::Graph;
use crate::graph::types::TraversalOptions;
use crate::trace_time;

/// Trait for providing graph adjacency
pub trait GraphProvider<V> {
    fn has_vertex(&self, id: &V) -> bool;
    /// Outgoing neighbors of `id`, empty for an unknown vertex
    fn get_outbound(&self, id: &V) -> Vec<V>;
}

impl<V> GraphProvider<V> for Graph<V>
where
    V: Clone + Eq + Hash + Debug,
{
    fn has_vertex(&self, id: &V) -> bool {
        self.contains(id)
    }

    fn get_outbound(&self, id: &V) -> Vec<V> {
        self.get_neighbors(id)
            .map(|neighbors| neighbors.iter().cloned().collect())
            .unwrap_or_default()
    }
}

pub(crate) fn require_vertex<V, G>(provider: &G, id: &V) -> Result<()>
where
    V: Debug,
    G: GraphProvider<V> + ?Sized,
{
    if provider.has_vertex(id) {
        Ok(())
    } else {
        Err(GraphError::unknown_vertex(id))
    }
}

/// Visit every vertex reachable from `start` in the order the frontier
/// yields them. Vertices are marked visited when they enter the frontier.
fn expand<V, G, F>(provider: &G, start: &V, mut frontier: F) -> Result<Vec<V>>
where
    V: Clone + Eq + Hash + Debug,
    G: GraphProvider<V> + ?Sized,
    F: Frontier<V>,
{
    require_vertex(provider, start)?;

    let mut visited: HashSet<V> = HashSet::new();
    let mut order = Vec::new();

    visited.insert(start.clone());
    frontier.insert(start.clone());

    while let Some(vertex) = frontier.remove() {
        for neighbor in provider.get_outbound(&vertex) {
            if visited.insert(neighbor.clone()) {
                frontier.insert(neighbor);
            }
        }
        order.push(vertex);
    }

    Ok(order)
}

/// Breadth-first traversal from `start`
#[tracing::instrument(level = "debug", skip(provider), fields(start = ?start))]
pub fn bft<V, G>(provider: &G, start: &V) -> Result<Vec<V>>
where
    V: Clone + Eq + Hash + Debug,
    G: GraphProvider<V> + ?Sized,
{
    let began = Instant::now();
    let order = expand(provider, start, Queue::new())?;
    trace_time!(began, "bft", visited = order.len());
    Ok(order)
}

/// Depth-first traversal from `start` using an explicit stack
#[tracing::instrument(level = "debug", skip(provider), fields(start = ?start))]
pub fn dft<V, G>(provider: &G, start: &V) -> Result<Vec<V>>
where
    V: Clone + Eq + Hash + Debug,
    G: GraphProvider<V> + ?Sized,
{
    let began = Instant::now();
    let order = expand(provider, start, Stack::new())?;
    trace_time!(began, "dft", visited = order.len());
    Ok(order)
}

/// Depth-first traversal from `start` by recursion.
///
/// Pre-order: the current vertex is emitted before recursing into each
/// unvisited neighbor in iteration order. Recursion deeper than
/// `opts.max_depth` fails with [`GraphError::RecursionLimit`].
#[tracing::instrument(level = "debug", skip(provider, opts), fields(start = ?start, max_depth = opts.max_depth))]
pub fn dft_recursive<V, G>(provider: &G, start: &V, opts: &TraversalOptions) -> Result<Vec<V>>
where
    V: Clone + Eq + Hash + Debug,
    G: GraphProvider<V> + ?Sized,
{
    require_vertex(provider, start)?;

    let mut walk = RecursiveWalk {
        provider,
        max_depth: opts.max_depth,
        visited: HashSet::from([start.clone()]),
        order: Vec::new(),
    };
    walk.visit(start, 0)?;
    Ok(walk.order)
}

struct RecursiveWalk<'a, V, G: ?Sized> {
    provider: &'a G,
    max_depth: usize,
    visited: HashSet<V>,
    order: Vec<V>,
}

impl<V, G> RecursiveWalk<'_, V, G>
where
    V: Clone + Eq + Hash,
    G: GraphProvider<V> + ?Sized,
{
    fn visit(&mut self, vertex: &V, depth: usize) -> Result<()> {
        if depth > self.max_depth {
            return Err(GraphError::RecursionLimit {
                limit: self.max_depth,
            });
        }

        self.order.push(vertex.clone());
        for neighbor in self.provider.get_outbound(vertex) {
            if self.visited.insert(neighbor.clone()) {
                self.visit(&neighbor, depth + 1)?;
            }
        }
        Ok(())
    }
}

impl<V> Graph<V>
where
    V: Clone + Eq + Hash + Debug,
{
    /// Breadth-first visitation order from `start`
    pub fn bft(&self, start: &V) -> Result<Vec<V>> {
        bft(self, start)
    }

    /// Depth-first visitation order from `start`
    pub fn dft(&self, start: &V) -> Result<Vec<V>> {
        dft(self, start)
    }

    /// Recursive depth-first visitation order from `start`
    pub fn dft_recursive(&self, start: &V) -> Result<Vec<V>> {
        dft_recursive(self, start, &TraversalOptions::default())
    }
}
