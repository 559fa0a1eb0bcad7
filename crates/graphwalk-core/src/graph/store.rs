use std::fmt::Debug;
use std::hash::Hash;

use indexmap::{IndexMap, IndexSet};

use crate::error::{GraphError, Result};

/// Directed graph stored as vertex → set of outgoing neighbors.
///
/// Vertices must be registered with [`Graph::add_vertex`] before they can be
/// used as edge endpoints. Edges have set semantics, so adding the same edge
/// twice is a no-op. Iteration follows insertion order.
#[derive(Debug, Clone)]
pub struct Graph<V> {
    vertices: IndexMap<V, IndexSet<V>>,
}

impl<V> Default for Graph<V> {
    fn default() -> Self {
        Self {
            vertices: IndexMap::new(),
        }
    }
}

impl<V> Graph<V>
where
    V: Clone + Eq + Hash + Debug,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from explicit vertices plus edges.
    ///
    /// Edge endpoints are registered automatically, so `vertices` only needs
    /// to list isolated vertices.
    pub fn from_edges<I, E>(vertices: I, edges: E) -> Self
    where
        I: IntoIterator<Item = V>,
        E: IntoIterator<Item = (V, V)>,
    {
        let mut graph = Self::new();
        for vertex in vertices {
            graph.add_vertex(vertex);
        }
        for (from, to) in edges {
            graph.add_vertex(from.clone());
            graph.add_vertex(to.clone());
            graph.vertices.entry(from).or_default().insert(to);
        }
        graph
    }

    /// Add a vertex. Adding an existing vertex leaves the graph unchanged.
    pub fn add_vertex(&mut self, id: V) {
        self.vertices.entry(id).or_default();
    }

    /// Add a directed edge `from -> to`.
    ///
    /// Fails with [`GraphError::UnknownVertex`] if either endpoint has not
    /// been added; the graph is not modified in that case.
    pub fn add_edge(&mut self, from: &V, to: &V) -> Result<()> {
        if !self.vertices.contains_key(to) {
            return Err(GraphError::unknown_vertex(to));
        }
        let neighbors = self
            .vertices
            .get_mut(from)
            .ok_or_else(|| GraphError::unknown_vertex(from))?;
        neighbors.insert(to.clone());
        Ok(())
    }

    /// Outgoing neighbors of `id`
    pub fn get_neighbors(&self, id: &V) -> Result<&IndexSet<V>> {
        self.vertices
            .get(id)
            .ok_or_else(|| GraphError::unknown_vertex(id))
    }

    pub fn contains(&self, id: &V) -> bool {
        self.vertices.contains_key(id)
    }

    /// Registered vertices in insertion order
    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.vertices.keys()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.vertices.values().map(IndexSet::len).sum()
    }

    /// Whether the edge `from -> to` exists
    pub fn has_edge(&self, from: &V, to: &V) -> bool {
        self.vertices
            .get(from)
            .is_some_and(|neighbors| neighbors.contains(to))
    }
}

impl Graph<i64> {
    /// The seven-vertex topology used by the demonstration driver.
    ///
    /// `{1: {2}, 2: {3, 4}, 3: {5}, 4: {6, 7}, 5: {3}, 6: {3}, 7: {1, 6}}`
    pub fn demo() -> Self {
        Self::from_edges(
            1..=7,
            [
                (5, 3),
                (6, 3),
                (7, 1),
                (4, 7),
                (1, 2),
                (7, 6),
                (2, 4),
                (3, 5),
                (2, 3),
                (4, 6),
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_vertex_is_idempotent() {
        let mut graph = Graph::new();
        graph.add_vertex(1);
        graph.add_vertex(2);
        graph.add_edge(&1, &2).unwrap();

        graph.add_vertex(1);

        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert!(graph.has_edge(&1, &2));
    }

    #[test]
    fn test_add_edge_is_directed() {
        let mut graph = Graph::new();
        graph.add_vertex("a");
        graph.add_vertex("b");
        graph.add_edge(&"a", &"b").unwrap();

        assert!(graph.get_neighbors(&"a").unwrap().contains(&"b"));
        assert!(graph.get_neighbors(&"b").unwrap().is_empty());
    }

    #[test]
    fn test_add_edge_twice_keeps_one_edge() {
        let mut graph = Graph::new();
        graph.add_vertex(1);
        graph.add_vertex(2);
        graph.add_edge(&1, &2).unwrap();
        graph.add_edge(&1, &2).unwrap();
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_add_edge_unknown_source() {
        let mut graph = Graph::new();
        graph.add_vertex(2);
        let err = graph.add_edge(&1, &2).unwrap_err();
        assert!(matches!(err, GraphError::UnknownVertex { ref vertex } if vertex == "1"));
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_add_edge_unknown_target_leaves_graph_unchanged() {
        let mut graph = Graph::new();
        graph.add_vertex(1);
        let err = graph.add_edge(&1, &9).unwrap_err();
        assert!(matches!(err, GraphError::UnknownVertex { ref vertex } if vertex == "9"));
        assert!(graph.get_neighbors(&1).unwrap().is_empty());
        assert!(!graph.contains(&9));
    }

    #[test]
    fn test_get_neighbors_unknown_vertex() {
        let graph: Graph<u8> = Graph::new();
        assert!(matches!(
            graph.get_neighbors(&3),
            Err(GraphError::UnknownVertex { .. })
        ));
    }

    #[test]
    fn test_demo_topology() {
        let graph = Graph::demo();
        assert_eq!(graph.vertex_count(), 7);
        assert_eq!(graph.edge_count(), 10);

        let neighbors: Vec<i64> = graph.get_neighbors(&2).unwrap().iter().copied().collect();
        assert_eq!(neighbors, vec![4, 3]);
        assert!(graph.has_edge(&7, &1));
        assert!(graph.has_edge(&4, &6));
    }

    #[test]
    fn test_from_edges_registers_endpoints() {
        let graph = Graph::from_edges(["z"], [("a", "b"), ("b", "c")]);
        assert_eq!(graph.vertex_count(), 4);
        assert!(graph.contains(&"z"));
        assert!(graph.get_neighbors(&"z").unwrap().is_empty());
    }

    #[test]
    fn test_vertices_in_insertion_order() {
        let graph = Graph::from_edges(["z"], [("a", "b"), ("b", "c")]);
        let vertices: Vec<&str> = graph.vertices().copied().collect();
        assert_eq!(vertices, vec!["z", "a", "b", "c"]);
    }
}
