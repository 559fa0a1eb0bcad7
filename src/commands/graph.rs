//! `graphwalk graph`: traversal and path search over a directed graph

use graphwalk_core::bail_usage;
use graphwalk_core::error::Result;
use graphwalk_core::format::join_ids;
use graphwalk_core::graph::{
    bfs, bft, dfs, dfs_recursive, dft, dft_recursive, Algorithm, Graph, PathResult,
    TraversalOptions, TraversalResult,
};

use super::dispatch::CommandContext;
use crate::cli::OutputFormat;

/// Arguments of one `graph` invocation
pub struct GraphRequest<'a> {
    pub edges: &'a [(i64, i64)],
    pub vertices: &'a [i64],
    pub start: i64,
    pub dest: Option<i64>,
    pub algorithm: Option<Algorithm>,
}

/// Pick the algorithm, defaulting to BFS when a destination is given
fn resolve_algorithm(algorithm: Option<Algorithm>, dest: Option<i64>) -> Result<Algorithm> {
    match (algorithm, dest) {
        (None, None) => Ok(Algorithm::Bft),
        (None, Some(_)) => Ok(Algorithm::Bfs),
        (Some(algo), None) if algo.is_search() => {
            bail_usage!(format!("--algo {} requires --dest", algo))
        }
        (Some(algo), Some(_)) if !algo.is_search() => {
            bail_usage!(format!(
                "--algo {} visits every vertex and does not take --dest",
                algo
            ))
        }
        (Some(algo), _) => Ok(algo),
    }
}

fn build_graph(request: &GraphRequest) -> Graph<i64> {
    if request.edges.is_empty() && request.vertices.is_empty() {
        Graph::demo()
    } else {
        Graph::from_edges(
            request.vertices.iter().copied(),
            request.edges.iter().copied(),
        )
    }
}

/// Execute the graph command
pub fn execute(ctx: &CommandContext, request: &GraphRequest) -> Result<()> {
    let algorithm = resolve_algorithm(request.algorithm, request.dest)?;
    let graph = build_graph(request);
    let opts = TraversalOptions::from(&ctx.config.traversal);

    tracing::debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        %algorithm,
        "graph built"
    );

    match request.dest {
        Some(dest) => {
            let path = match algorithm {
                Algorithm::Dfs => dfs(&graph, &request.start, &dest)?,
                Algorithm::DfsRecursive => dfs_recursive(&graph, &request.start, &dest, &opts)?,
                _ => bfs(&graph, &request.start, &dest)?,
            };
            output_path(ctx, &PathResult::new(request.start, dest, algorithm, path))
        }
        None => {
            let order = match algorithm {
                Algorithm::Dft => dft(&graph, &request.start)?,
                Algorithm::DftRecursive => dft_recursive(&graph, &request.start, &opts)?,
                _ => bft(&graph, &request.start)?,
            };
            let result = TraversalResult {
                root: request.start,
                algorithm: algorithm.to_string(),
                order,
            };
            output_traversal(ctx, &result)
        }
    }
}

fn output_path(ctx: &CommandContext, result: &PathResult<i64>) -> Result<()> {
    match ctx.cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(result)?);
        }
        OutputFormat::Human => {
            if result.found {
                println!("{}", join_ids(&result.path));
                if !ctx.cli.quiet {
                    println!(
                        "({} edge{}, {})",
                        result.path_length,
                        if result.path_length == 1 { "" } else { "s" },
                        result.algorithm
                    );
                }
            } else {
                println!("no path from {} to {}", result.from, result.to);
            }
        }
    }
    Ok(())
}

fn output_traversal(ctx: &CommandContext, result: &TraversalResult<i64>) -> Result<()> {
    match ctx.cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(result)?);
        }
        OutputFormat::Human => {
            println!("{}", join_ids(&result.order));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use graphwalk_core::error::GraphError;

    #[test]
    fn test_algorithm_defaults() {
        assert_eq!(resolve_algorithm(None, None).unwrap(), Algorithm::Bft);
        assert_eq!(resolve_algorithm(None, Some(6)).unwrap(), Algorithm::Bfs);
        assert_eq!(
            resolve_algorithm(Some(Algorithm::DfsRecursive), Some(6)).unwrap(),
            Algorithm::DfsRecursive
        );
    }

    #[test]
    fn test_algorithm_and_dest_must_agree() {
        assert!(matches!(
            resolve_algorithm(Some(Algorithm::Dfs), None),
            Err(GraphError::UsageError(_))
        ));
        assert!(matches!(
            resolve_algorithm(Some(Algorithm::Dft), Some(3)),
            Err(GraphError::UsageError(_))
        ));
    }

    #[test]
    fn test_build_graph_uses_demo_without_edges() {
        let request = GraphRequest {
            edges: &[],
            vertices: &[],
            start: 1,
            dest: None,
            algorithm: None,
        };
        assert_eq!(build_graph(&request).vertex_count(), 7);

        let request = GraphRequest {
            edges: &[(1, 2)],
            vertices: &[9],
            ..request
        };
        let graph = build_graph(&request);
        assert_eq!(graph.vertex_count(), 3);
        assert!(graph.has_edge(&1, &2));
    }
}
