//! Command dispatch logic for graphwalk

use std::time::Instant;

use tracing::debug;

use crate::cli::{Cli, Commands};
use crate::commands;
use graphwalk_core::config::Config;
use graphwalk_core::error::Result;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: Config,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: Config, start: Instant) -> Self {
        Self { cli, config, start }
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("graphwalk {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Graph traversal, ancestry and social-network queries.");
        println!();
        println!("Run `graphwalk --help` for usage information.");
        Ok(())
    }
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Graph {
                edge,
                vertex,
                start,
                dest,
                algo,
            } => {
                let request = commands::graph::GraphRequest {
                    edges: edge,
                    vertices: vertex,
                    start: *start,
                    dest: *dest,
                    algorithm: *algo,
                };
                commands::graph::execute(ctx, &request)
            }

            Commands::Ancestor {
                edge,
                start,
                early_exit,
            } => commands::ancestor::execute(ctx, edge, *start, *early_exit),

            Commands::Social {
                users,
                avg,
                seed,
                start,
            } => commands::social::execute(ctx, *users, *avg, *seed, *start),
        }
    }
}

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    debug!(elapsed = ?start.elapsed(), "load_config");

    let ctx = CommandContext::new(cli, config, start);

    let result = match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    };

    debug!(elapsed = ?start.elapsed(), "execute_command");
    result
}
