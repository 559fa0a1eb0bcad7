//! Graphwalk Core Library
//!
//! Graph traversal and search algorithms: a generic directed graph with
//! breadth-first and depth-first traversal, the earliest-ancestor query over
//! a parent/child DAG, and shortest friendship paths in a social graph.

pub mod ancestor;
pub mod config;
pub mod error;
pub mod format;
pub mod frontier;
pub mod graph;
pub mod logging;
pub mod social;
