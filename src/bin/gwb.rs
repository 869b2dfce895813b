//! CLI entry point for the `gwb` command-line tool.

use std::io;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use graph_workbench::cli::commands;
use graph_workbench::cli::shell::{run_shell, ShellFormat};
use graph_workbench::config::resolve_config;
use graph_workbench::graph::TraversalOrder;
use graph_workbench::{GraphError, LoadOptions, Workbench};

#[derive(Parser)]
#[command(
    name = "gwb",
    about = "Graph workbench: edit graphs, traverse them, and find matchings"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    /// Configuration file (defaults to $GWB_CONFIG, then ./gwb.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Display size and modes of an edge-list file
    Info {
        /// Path to the edge-list file
        file: PathBuf,
        /// Read edges as directed
        #[arg(long)]
        directed: bool,
        /// Load in weighted mode even without weights in the file
        #[arg(long)]
        weighted: bool,
        /// Split vertices into letter and number sides
        #[arg(long)]
        bipartite: bool,
    },
    /// Breadth-first search from a vertex
    Bfs {
        /// Path to the edge-list file
        file: PathBuf,
        /// Start vertex
        start: String,
        /// Read edges as directed
        #[arg(long)]
        directed: bool,
    },
    /// Depth-first search from a vertex
    Dfs {
        /// Path to the edge-list file
        file: PathBuf,
        /// Start vertex
        start: String,
        /// Read edges as directed
        #[arg(long)]
        directed: bool,
    },
    /// Maximum matching of an undirected graph
    Match {
        /// Path to the edge-list file
        file: PathBuf,
    },
    /// Export vertices and edges as JSON
    Export {
        /// Path to the edge-list file
        file: PathBuf,
        /// Read edges as directed
        #[arg(long)]
        directed: bool,
        /// Pretty-print JSON
        #[arg(long)]
        pretty: bool,
    },
    /// Interactive session reading one command per line from stdin
    Shell {
        /// Edge-list file to load before the first command
        #[arg(long)]
        file: Option<PathBuf>,
    },
}

fn init_logging(verbose: bool, level: &str) {
    let level = if verbose { "debug" } else { level };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .try_init();
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let config = match resolve_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(2);
        }
    };
    init_logging(cli.verbose, &config.log_level);

    let result = match cli.command {
        Commands::Info {
            file,
            directed,
            weighted,
            bipartite,
        } => commands::cmd_info(
            &file,
            LoadOptions {
                directed,
                weighted,
                bipartite,
            },
            json,
        ),
        Commands::Bfs {
            file,
            start,
            directed,
        } => commands::cmd_traverse(&file, &start, TraversalOrder::Breadth, directed, json),
        Commands::Dfs {
            file,
            start,
            directed,
        } => commands::cmd_traverse(&file, &start, TraversalOrder::Depth, directed, json),
        Commands::Match { file } => commands::cmd_match(&file, json),
        Commands::Export {
            file,
            directed,
            pretty,
        } => commands::cmd_export(
            &file,
            LoadOptions {
                directed,
                ..LoadOptions::default()
            },
            pretty,
        ),
        Commands::Shell { file } => {
            let mut workbench = Workbench::new(config);
            let format = if json {
                ShellFormat::Json
            } else {
                ShellFormat::Text
            };
            let loaded = match file {
                Some(path) => workbench.load(Some(path.as_path())).map(|_| ()),
                None => Ok(()),
            };
            loaded.and_then(|()| {
                run_shell(
                    &mut workbench,
                    &mut io::stdin().lock(),
                    &mut io::stdout().lock(),
                    format,
                )
            })
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::Io(_) => 1,
            GraphError::MalformedInput { .. } | GraphError::Config(_) => 2,
            GraphError::InvalidCommand(_) => 3,
            GraphError::InvalidVertex(_) | GraphError::EdgeNotFound { .. } => 4,
            _ => 5,
        };
        process::exit(code);
    }
}
