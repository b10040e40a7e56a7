//! CLI entry point for the `adjg` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};

use adjgraph::cli::commands;
use adjgraph::format::{EdgeListFormat, LoadOptions};
use adjgraph::types::{GraphError, TraversalDirection, DEFAULT_WEIGHT};

#[derive(Parser)]
#[command(
    name = "adjg",
    about = "adjg: run graph algorithms over edge-list files"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct Input {
    /// Path to the edge-list file
    file: PathBuf,
    /// Input layout: adjacency ("id n,w n,w") or edges ("from to [w]")
    #[arg(long, default_value = "adjacency")]
    input_format: String,
    /// Add every edge in both directions
    #[arg(long)]
    undirected: bool,
    /// Weight for edge lines without one
    #[arg(long, default_value_t = DEFAULT_WEIGHT)]
    default_weight: f64,
}

#[derive(Subcommand)]
enum Commands {
    /// Display vertex and edge counts
    Info {
        #[command(flatten)]
        input: Input,
    },
    /// Show successors and predecessors of a vertex
    Neighbors {
        #[command(flatten)]
        input: Input,
        /// Vertex ID
        vertex: String,
    },
    /// Breadth-first hop distances from a start vertex
    Bfs {
        #[command(flatten)]
        input: Input,
        /// Start vertex ID
        start: String,
    },
    /// Vertices reachable from a start vertex (depth-first)
    Dfs {
        #[command(flatten)]
        input: Input,
        /// Start vertex ID
        start: String,
    },
    /// Shortest weighted distances from a start vertex
    Dijkstra {
        #[command(flatten)]
        input: Input,
        /// Start vertex ID
        start: String,
        /// Comma-separated vertex IDs to report (default: all)
        #[arg(long)]
        targets: Option<String>,
    },
    /// Topological order of a DAG
    Topo {
        #[command(flatten)]
        input: Input,
        /// Rank vertices even if the graph has a cycle
        #[arg(long)]
        unchecked: bool,
    },
    /// Connected components
    Ucc {
        #[command(flatten)]
        input: Input,
        /// Edges to follow: forward, backward, or both
        #[arg(long, default_value = "forward")]
        direction: String,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let result = match cli.command {
        Commands::Info { input } => commands::cmd_info(&input.file, load_options(&input), json),
        Commands::Neighbors { input, vertex } => {
            commands::cmd_neighbors(&input.file, load_options(&input), &vertex, json)
        }
        Commands::Bfs { input, start } => {
            commands::cmd_bfs(&input.file, load_options(&input), &start, json)
        }
        Commands::Dfs { input, start } => {
            commands::cmd_dfs(&input.file, load_options(&input), &start, json)
        }
        Commands::Dijkstra {
            input,
            start,
            targets,
        } => {
            let targets: Vec<String> = targets
                .map(|s| {
                    s.split(',')
                        .map(|t| t.trim().to_string())
                        .filter(|t| !t.is_empty())
                        .collect()
                })
                .unwrap_or_default();
            commands::cmd_dijkstra(&input.file, load_options(&input), &start, &targets, json)
        }
        Commands::Topo { input, unchecked } => {
            commands::cmd_topo(&input.file, load_options(&input), unchecked, json)
        }
        Commands::Ucc { input, direction } => {
            let dir = match TraversalDirection::from_name(&direction) {
                Some(dir) => dir,
                None => {
                    eprintln!("Invalid direction: {}", direction);
                    process::exit(3);
                }
            };
            commands::cmd_ucc(&input.file, load_options(&input), dir, json)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::Io(_) => 1,
            GraphError::Parse { .. } => 2,
            GraphError::VertexNotFound(_) => 4,
            GraphError::InvalidWeight { .. }
            | GraphError::NegativeWeight { .. }
            | GraphError::CycleDetected(_) => 5,
        };
        process::exit(code);
    }
}

fn load_options(input: &Input) -> LoadOptions {
    let format = match EdgeListFormat::from_name(&input.input_format) {
        Some(format) => format,
        None => {
            eprintln!("Invalid input format: {}", input.input_format);
            process::exit(3);
        }
    };
    LoadOptions {
        format,
        undirected: input.undirected,
        default_weight: input.default_weight,
    }
}
