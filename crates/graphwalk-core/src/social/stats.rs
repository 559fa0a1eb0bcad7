use indexmap::IndexSet;
use serde::Serialize;

use super::{SocialGraph, SocialPaths, UserId};

/// Summary of one user's extended network
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetworkStats {
    pub start: UserId,
    pub total_users: usize,
    /// Users other than `start` with a friendship path from `start`
    pub reachable: usize,
    /// Share of all users appearing on any path from `start` (start included)
    pub percentage: f64,
    /// Mean number of hops to the reachable users
    pub average_separation: f64,
    /// Mean number of friends per user across the whole graph
    pub average_degree: f64,
}

impl NetworkStats {
    pub fn compute(graph: &SocialGraph, start: UserId, paths: &SocialPaths) -> Self {
        let total_users = graph.user_count();

        let members: IndexSet<UserId> = paths.values().flatten().copied().collect();
        let hops: Vec<usize> = paths
            .values()
            .filter(|path| !path.is_empty())
            .map(|path| path.len() - 1)
            .collect();

        let total_degree: usize = graph.friendships.values().map(IndexSet::len).sum();

        NetworkStats {
            start,
            total_users,
            reachable: hops.len(),
            percentage: ratio(members.len(), total_users) * 100.0,
            average_separation: ratio(hops.iter().sum(), hops.len()),
            average_degree: ratio(total_degree, total_users),
        }
    }
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}
