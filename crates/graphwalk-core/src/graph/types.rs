use serde::Serialize;

use crate::error::GraphError;

/// Default recursion guard for the recursive traversal variants.
///
/// Kept low enough that a full-depth walk fits a 2 MiB thread stack in an
/// unoptimised build.
pub const DEFAULT_MAX_DEPTH: usize = 1_000;

/// Traversal or search algorithm selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// Breadth-first traversal of every reachable vertex
    #[default]
    Bft,
    /// Depth-first traversal with an explicit stack
    Dft,
    /// Depth-first traversal by recursion
    DftRecursive,
    /// Breadth-first search for a shortest path
    Bfs,
    /// Depth-first search with an explicit stack
    Dfs,
    /// Depth-first search by recursion
    DfsRecursive,
}

impl Algorithm {
    /// Whether the algorithm looks for a path to a destination
    pub fn is_search(self) -> bool {
        matches!(
            self,
            Algorithm::Bfs | Algorithm::Dfs | Algorithm::DfsRecursive
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Algorithm::Bft => "bft",
            Algorithm::Dft => "dft",
            Algorithm::DftRecursive => "dft-recursive",
            Algorithm::Bfs => "bfs",
            Algorithm::Dfs => "dfs",
            Algorithm::DfsRecursive => "dfs-recursive",
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Algorithm {
    type Err = GraphError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "bft" => Ok(Algorithm::Bft),
            "dft" => Ok(Algorithm::Dft),
            "dft-recursive" => Ok(Algorithm::DftRecursive),
            "bfs" => Ok(Algorithm::Bfs),
            "dfs" => Ok(Algorithm::Dfs),
            "dfs-recursive" => Ok(Algorithm::DfsRecursive),
            other => Err(GraphError::invalid_value(
                "algorithm",
                format!(
                    "{} (expected: bft, dft, dft-recursive, bfs, dfs, dfs-recursive)",
                    other
                ),
            )),
        }
    }
}

/// Options for traversal and search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraversalOptions {
    /// Maximum recursion depth for the recursive variants
    pub max_depth: usize,
}

impl Default for TraversalOptions {
    fn default() -> Self {
        TraversalOptions {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Complete traversal result
#[derive(Debug, Clone, Serialize)]
pub struct TraversalResult<V> {
    pub root: V,
    pub algorithm: String,
    pub order: Vec<V>,
}

/// Path result
#[derive(Debug, Clone, Serialize)]
pub struct PathResult<V> {
    pub from: V,
    pub to: V,
    pub algorithm: String,
    pub found: bool,
    pub path: Vec<V>,
    /// Number of edges on the path
    pub path_length: usize,
}

impl<V> PathResult<V> {
    pub fn new(from: V, to: V, algorithm: Algorithm, path: Option<Vec<V>>) -> Self {
        let found = path.is_some();
        let path = path.unwrap_or_default();
        PathResult {
            from,
            to,
            algorithm: algorithm.to_string(),
            found,
            path_length: path.len().saturating_sub(1),
            path,
        }
    }
}
