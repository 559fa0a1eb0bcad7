//! CLI commands for graphwalk

pub mod ancestor;
pub mod dispatch;
pub mod graph;
pub mod social;
