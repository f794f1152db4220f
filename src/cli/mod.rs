//! CLI argument parsing for graphalgo
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json,
//! --config. Graph flags (--vertices, --directed, --repr, --edge) are global
//! too, so they may appear before or after the subcommand.

pub mod parse;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use graphalgo_core::algos::CycleCheck;
use graphalgo_core::format::OutputFormat;
use graphalgo_core::graph::{Edge, Representation, VertexId};
use parse::{parse_cycle_check, parse_edge, parse_format, parse_representation};

/// Graphalgo - classical graph algorithms from the command line
#[derive(Parser, Debug)]
#[command(name = "graphalgo")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format [default: from config, else human]
    #[arg(long, global = true, value_parser = parse_format)]
    pub format: Option<OutputFormat>,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging and phase timings
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. "debug", "graphalgo_core=trace")
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Configuration file [default: $GRAPHALGO_CONFIG_DIR/config.toml]
    #[arg(long, global = true, env = "GRAPHALGO_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub graph: GraphArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Graph built from the command line before running a subcommand
#[derive(Args, Debug, Clone, Default)]
pub struct GraphArgs {
    /// Number of vertices; vertices are 0..N
    #[arg(long, short = 'n', global = true)]
    pub vertices: Option<usize>,

    /// Treat edges as one-way
    #[arg(long, global = true, conflicts_with = "undirected")]
    pub directed: bool,

    /// Treat edges as two-way (overrides a directed config default)
    #[arg(long, global = true)]
    pub undirected: bool,

    /// Storage representation [default: from config, else matrix]
    #[arg(long, global = true, value_parser = parse_representation)]
    pub repr: Option<Representation>,

    /// Edge as U:V or U:V:W (repeatable; W defaults to 1)
    #[arg(
        long = "edge",
        short = 'e',
        global = true,
        value_parser = parse_edge,
        action = clap::ArgAction::Append
    )]
    pub edges: Vec<Edge>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Minimum-weight path (Dijkstra)
    Path {
        source: VertexId,
        destination: VertexId,
    },

    /// Fewest-edges path, ignoring weights (BFS)
    Hops {
        source: VertexId,
        destination: VertexId,
    },

    /// Minimum spanning tree grown from a source vertex (Prim)
    Prim { source: VertexId },

    /// Minimum spanning tree from edges in weight order (Kruskal)
    Kruskal {
        /// Cycle test [default: from config, else union-find]
        #[arg(long, value_parser = parse_cycle_check)]
        cycle_check: Option<CycleCheck>,
    },

    /// Topological order of a directed acyclic graph
    Topo,

    /// Breadth-first traversal order
    Bfs { start: VertexId },

    /// Depth-first traversal order
    Dfs { start: VertexId },

    /// Print the edges and in-degree of every vertex
    Show,
}
