//! `graphwalk social`: populate a random network and report one user's reach

use serde::Serialize;

use graphwalk_core::error::Result;
use graphwalk_core::social::{rng_for, NetworkStats, SocialGraph, SocialPaths, UserId};

use super::dispatch::CommandContext;
use crate::cli::OutputFormat;

#[derive(Debug, Serialize)]
struct SocialOutput<'a> {
    users: usize,
    friendships: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    seed: Option<u64>,
    stats: &'a NetworkStats,
    paths: &'a SocialPaths,
}

/// Execute the social command
pub fn execute(
    ctx: &CommandContext,
    users: Option<u32>,
    avg: Option<u32>,
    seed: Option<u64>,
    start: UserId,
) -> Result<()> {
    let social = &ctx.config.social;
    let num_users = users.unwrap_or(social.num_users);
    let avg_friendships = avg.unwrap_or(social.avg_friendships);
    let seed = seed.or(social.seed);

    let mut graph = SocialGraph::new();
    graph.populate_graph(num_users, avg_friendships, &mut rng_for(seed))?;

    tracing::debug!(elapsed = ?ctx.start.elapsed(), "populate_graph");

    let paths = graph.get_all_social_paths(start)?;
    let stats = NetworkStats::compute(&graph, start, &paths);

    match ctx.cli.format {
        OutputFormat::Json => {
            let output = SocialOutput {
                users: graph.user_count(),
                friendships: graph.friendship_count(),
                seed,
                stats: &stats,
                paths: &paths,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if !ctx.cli.quiet {
                println!(
                    "{} users, {} friendships (average degree {:.2})",
                    stats.total_users,
                    graph.friendship_count(),
                    stats.average_degree
                );
            }
            println!(
                "User {} reaches {} users ({:.2}% of the network)",
                start, stats.reachable, stats.percentage
            );
            println!(
                "Average degree of separation: {:.2}",
                stats.average_separation
            );
        }
    }

    Ok(())
}
