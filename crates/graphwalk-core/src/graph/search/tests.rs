use crate::error::GraphError;
use crate::graph::search::*;
use crate::graph::types::{TraversalOptions, DEFAULT_MAX_DEPTH};
use crate::graph::Graph;

fn assert_valid_path(graph: &Graph<i64>, path: &[i64], from: i64, to: i64) {
    assert_eq!(path.first(), Some(&from));
    assert_eq!(path.last(), Some(&to));
    for hop in path.windows(2) {
        assert!(
            graph.has_edge(&hop[0], &hop[1]),
            "{} -> {} is not an edge",
            hop[0],
            hop[1]
        );
    }
}

#[test]
fn test_bfs_demo_shortest_path() {
    let graph = Graph::demo();
    assert_eq!(graph.bfs(&1, &6).unwrap(), Some(vec![1, 2, 4, 6]));
}

#[test]
fn test_dfs_demo_path_is_one_of_valid() {
    let graph = Graph::demo();
    let path = graph.dfs(&1, &6).unwrap().unwrap();
    assert!(
        path == vec![1, 2, 4, 6] || path == vec![1, 2, 4, 7, 6],
        "unexpected dfs path {:?}",
        path
    );
}

#[test]
fn test_dfs_recursive_demo_path_is_one_of_valid() {
    let graph = Graph::demo();
    let path = graph.dfs_recursive(&1, &6).unwrap().unwrap();
    assert!(
        path == vec![1, 2, 4, 6] || path == vec![1, 2, 4, 7, 6],
        "unexpected recursive dfs path {:?}",
        path
    );
}

#[test]
fn test_bfs_prefers_fewer_edges() {
    // long: 1 -> 2 -> 3 -> 4 -> 9, short: 1 -> 5 -> 9
    let graph = Graph::from_edges([], [(1, 2), (2, 3), (3, 4), (4, 9), (1, 5), (5, 9)]);
    assert_eq!(graph.bfs(&1, &9).unwrap(), Some(vec![1, 5, 9]));
}

#[test]
fn test_searches_return_none_when_unreachable() {
    let mut graph = Graph::from_edges([], [(1, 2), (2, 3), (4, 1)]);
    graph.add_vertex(7);

    assert_eq!(graph.bfs(&1, &4).unwrap(), None);
    assert_eq!(graph.dfs(&1, &4).unwrap(), None);
    assert_eq!(graph.dfs_recursive(&1, &4).unwrap(), None);
    assert_eq!(graph.bfs(&1, &7).unwrap(), None);
}

#[test]
fn test_searches_reject_unknown_endpoints() {
    let graph = Graph::demo();
    for (from, to) in [(0, 6), (1, 0)] {
        assert!(matches!(
            graph.bfs(&from, &to),
            Err(GraphError::UnknownVertex { .. })
        ));
        assert!(matches!(
            graph.dfs(&from, &to),
            Err(GraphError::UnknownVertex { .. })
        ));
        assert!(matches!(
            graph.dfs_recursive(&from, &to),
            Err(GraphError::UnknownVertex { .. })
        ));
    }
}

#[test]
fn test_search_to_self() {
    let graph = Graph::demo();
    assert_eq!(graph.bfs(&3, &3).unwrap(), Some(vec![3]));
    assert_eq!(graph.dfs(&3, &3).unwrap(), Some(vec![3]));
    assert_eq!(graph.dfs_recursive(&3, &3).unwrap(), Some(vec![3]));
}

#[test]
fn test_dfs_paths_follow_edges_through_cycles() {
    let graph = Graph::from_edges(
        [],
        [(1, 2), (2, 1), (2, 3), (3, 2), (3, 4), (4, 1), (4, 5)],
    );
    let path = graph.dfs(&1, &5).unwrap().unwrap();
    assert_valid_path(&graph, &path, 1, 5);

    let path = graph.dfs_recursive(&1, &5).unwrap().unwrap();
    assert_valid_path(&graph, &path, 1, 5);
}

#[test]
fn test_dfs_recursive_backtracks_out_of_dead_ends() {
    // 1 -> [2, 3]; 2 is a dead end, 3 -> 4
    let graph = Graph::from_edges([], [(1, 2), (2, 5), (1, 3), (3, 4)]);
    assert_eq!(graph.dfs_recursive(&1, &4).unwrap(), Some(vec![1, 3, 4]));
}

#[test]
fn test_dfs_recursive_depth_guard() {
    let graph = Graph::from_edges([], [(1, 2), (2, 3), (3, 4)]);
    let err = dfs_recursive(&graph, &1, &4, &TraversalOptions { max_depth: 1 }).unwrap_err();
    assert!(matches!(err, GraphError::RecursionLimit { limit: 1 }));

    let path = dfs_recursive(&graph, &1, &4, &TraversalOptions { max_depth: 3 }).unwrap();
    assert_eq!(path, Some(vec![1, 2, 3, 4]));
}

#[test]
fn test_dfs_recursive_past_default_guard_is_an_error() {
    let last = DEFAULT_MAX_DEPTH + 1;
    let edges: Vec<(usize, usize)> = (0..last).map(|i| (i, i + 1)).collect();
    let graph = Graph::from_edges([], edges);

    let err = graph.dfs_recursive(&0, &last).unwrap_err();
    assert!(matches!(
        err,
        GraphError::RecursionLimit { limit } if limit == DEFAULT_MAX_DEPTH
    ));

    // One hop shorter reaches the destination exactly at the guard
    let path = graph.dfs_recursive(&0, &(last - 1)).unwrap().unwrap();
    assert_eq!(path.len(), DEFAULT_MAX_DEPTH + 1);
}

#[test]
fn test_string_vertices() {
    let graph = Graph::from_edges(
        [],
        [("home", "work"), ("work", "gym"), ("home", "gym")],
    );
    assert_eq!(
        bfs(&graph, &"home", &"gym").unwrap(),
        Some(vec!["home", "gym"])
    );
    let err = bfs(&graph, &"home", &"beach").unwrap_err();
    assert_eq!(err.to_string(), "no vertex found with value \"beach\"");
}
