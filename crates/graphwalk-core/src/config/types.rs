//! Configuration type definitions

use serde::{Deserialize, Serialize};

use crate::ancestor::AncestorOptions;
use crate::graph::{TraversalOptions, DEFAULT_MAX_DEPTH};

/// Top-level graphwalk configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Traversal and search settings
    #[serde(default)]
    pub traversal: TraversalConfig,

    /// Earliest-ancestor settings
    #[serde(default)]
    pub ancestor: AncestorConfig,

    /// Social graph population settings
    #[serde(default)]
    pub social: SocialConfig,
}

/// Configuration for graph traversal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraversalConfig {
    /// Recursion guard for the recursive traversal variants
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

impl Default for TraversalConfig {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
        }
    }
}

impl From<&TraversalConfig> for TraversalOptions {
    fn from(config: &TraversalConfig) -> Self {
        TraversalOptions {
            max_depth: config.max_depth,
        }
    }
}

/// Configuration for the earliest-ancestor query
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AncestorConfig {
    /// Enable the half-table early exit
    #[serde(default)]
    pub early_exit: bool,
}

impl From<&AncestorConfig> for AncestorOptions {
    fn from(config: &AncestorConfig) -> Self {
        AncestorOptions {
            early_exit: config.early_exit,
        }
    }
}

/// Configuration for random social graph population
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialConfig {
    /// Users to create
    #[serde(default = "default_num_users")]
    pub num_users: u32,

    /// Average friendships per user
    #[serde(default = "default_avg_friendships")]
    pub avg_friendships: u32,

    /// Seed for reproducible population (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for SocialConfig {
    fn default() -> Self {
        Self {
            num_users: default_num_users(),
            avg_friendships: default_avg_friendships(),
            seed: None,
        }
    }
}

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

fn default_num_users() -> u32 {
    1000
}

fn default_avg_friendships() -> u32 {
    5
}
