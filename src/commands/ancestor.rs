//! `graphwalk ancestor`: earliest ancestor in a parent/child table

use serde::Serialize;

use graphwalk_core::ancestor::{demo_edges, earliest_ancestor, AncestorOptions};
use graphwalk_core::error::Result;

use super::dispatch::CommandContext;
use crate::cli::OutputFormat;

#[derive(Debug, Serialize)]
struct AncestorOutput {
    start: i64,
    /// `null` when `start` has no parents
    ancestor: Option<i64>,
    early_exit: bool,
}

/// Execute the ancestor command
pub fn execute(
    ctx: &CommandContext,
    edges: &[(i64, i64)],
    start: i64,
    early_exit: bool,
) -> Result<()> {
    let demo;
    let edges = if edges.is_empty() {
        demo = demo_edges();
        demo.as_slice()
    } else {
        edges
    };

    // The flag can only switch the fast path on; config supplies the default
    let mut opts = AncestorOptions::from(&ctx.config.ancestor);
    opts.early_exit |= early_exit;

    let ancestor = earliest_ancestor(edges, &start, &opts);

    match ctx.cli.format {
        OutputFormat::Json => {
            let output = AncestorOutput {
                start,
                ancestor,
                early_exit: opts.early_exit,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            println!("{}", ancestor.unwrap_or(-1));
        }
    }

    Ok(())
}
