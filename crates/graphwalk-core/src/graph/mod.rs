//! Directed graph storage, traversal and path search
//!
//! Provides:
//! - `Graph`: insertion-ordered adjacency-set directed graph
//! - Full traversals (`bft`, `dft`, `dft_recursive`) returning visitation order
//! - Point-to-point searches (`bfs`, `dfs`, `dfs_recursive`) returning paths
//! - Graph provider trait so traversals run over any adjacency source

pub mod search;
pub mod store;
pub mod traversal;
pub mod types;

pub use search::{bfs, dfs, dfs_recursive, reconstruct_path};
pub use store::Graph;
pub use traversal::{bft, dft, dft_recursive, GraphProvider};
pub use types::{Algorithm, PathResult, TraversalOptions, TraversalResult, DEFAULT_MAX_DEPTH};
