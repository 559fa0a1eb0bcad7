//! CLI argument parsing for graphwalk
//!
//! Supports global flags: --format, --quiet, --verbose, --log-level,
//! --log-json, --config

pub mod parse;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use graphwalk_core::graph::Algorithm;
pub use graphwalk_core::format::OutputFormat;
use parse::{parse_algorithm, parse_edge, parse_format};

/// Graphwalk - graph traversal, ancestry and social-network queries
#[derive(Parser, Debug)]
#[command(name = "graphwalk")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (human or json)
    #[arg(long, global = true, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Read configuration from this file instead of the default location
    #[arg(long, global = true, env = "GRAPHWALK_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Traverse a directed graph or search it for a path
    Graph {
        /// Directed edge FROM,TO (repeatable; defaults to the demo graph)
        #[arg(long, short, value_parser = parse_edge, action = clap::ArgAction::Append, allow_hyphen_values = true)]
        edge: Vec<(i64, i64)>,

        /// Extra vertex with no edges (repeatable)
        #[arg(long, action = clap::ArgAction::Append, allow_negative_numbers = true)]
        vertex: Vec<i64>,

        /// Starting vertex
        #[arg(long, short, allow_negative_numbers = true)]
        start: i64,

        /// Destination vertex (switches to path search)
        #[arg(long, short, allow_negative_numbers = true)]
        dest: Option<i64>,

        /// Algorithm: bft, dft, dft-recursive, bfs, dfs, dfs-recursive
        #[arg(long, short, value_parser = parse_algorithm)]
        algo: Option<Algorithm>,
    },

    /// Find the earliest ancestor of a node in a parent/child table
    Ancestor {
        /// Parent/child edge PARENT,CHILD (repeatable; defaults to the demo tree)
        #[arg(long, short, value_parser = parse_edge, action = clap::ArgAction::Append, allow_hyphen_values = true)]
        edge: Vec<(i64, i64)>,

        /// Node whose earliest ancestor is wanted
        #[arg(long, short, allow_negative_numbers = true)]
        start: i64,

        /// Stop at the first root found past half the table size
        #[arg(long)]
        early_exit: bool,
    },

    /// Populate a random social network and report one user's extended network
    Social {
        /// Number of users (defaults to config)
        #[arg(long, short)]
        users: Option<u32>,

        /// Average friendships per user (defaults to config)
        #[arg(long, short)]
        avg: Option<u32>,

        /// Seed for reproducible networks
        #[arg(long)]
        seed: Option<u64>,

        /// User whose network is reported
        #[arg(long, short, default_value_t = 1)]
        start: u32,
    },
}
