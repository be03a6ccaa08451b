//! netrank CLI - centrality rankings for edge-list files.
//!
//! # Usage
//!
//! ```bash
//! # Node/edge counts, components
//! netrank stats edges.txt
//!
//! # Top 10 nodes by PageRank, treating edges as directed
//! netrank pagerank edges.txt --kind directed --top 10
//!
//! # Top 5 nodes by betweenness from a CSV with a header row, as JSON
//! netrank betweenness edges.csv --delimiter comma --header --top 5 --json
//! ```

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use indicatif::ProgressBar;
use netrank_core::algo::centrality::{
    betweenness_centrality, top_n_betweenness, BetweennessConfig,
};
use netrank_core::algo::pagerank::{pagerank_with_report, top_n_centrality_nodes, PageRankConfig};
use netrank_core::algo::ranking::Ranked;
use netrank_core::formats::{Delimiter, EdgeList, EdgeListConfig};
use netrank_core::{Graph, GraphKind};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "netrank")]
#[command(about = "Graph centrality CLI", long_about = None)]
struct Cli {
    /// Enable debug logging from the engines
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show statistics about a graph
    Stats {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Compute PageRank centrality
    Pagerank {
        #[command(flatten)]
        input: InputArgs,

        /// Number of top nodes to show (capped at the graph's node count)
        #[arg(short, long, default_value = "10")]
        top: usize,

        /// Damping factor (undirected graphs only)
        #[arg(long, default_value = "0.85")]
        damping: f64,

        /// Per-node convergence tolerance
        #[arg(long, default_value = "1e-6")]
        tolerance: f64,

        /// Iteration cap
        #[arg(long, default_value = "100")]
        max_iterations: usize,
    },

    /// Compute betweenness centrality (Brandes)
    Betweenness {
        #[command(flatten)]
        input: InputArgs,

        /// Number of top nodes to show (capped at the graph's node count)
        #[arg(short, long, default_value = "10")]
        top: usize,

        /// Do not credit sources with the number of nodes they reach
        #[arg(long)]
        no_endpoints: bool,

        /// Halve scores of undirected graphs
        #[arg(long)]
        halve: bool,
    },
}

#[derive(Args)]
struct InputArgs {
    /// Edge-list file, one `source destination` pair per line
    input: PathBuf,

    /// Graph kind: directed or undirected
    #[arg(short, long, default_value = "undirected")]
    kind: String,

    /// Field delimiter
    #[arg(short, long, default_value = "space")]
    delimiter: DelimiterArg,

    /// Skip the first line
    #[arg(long)]
    header: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum DelimiterArg {
    Space,
    Comma,
    Tab,
}

impl From<DelimiterArg> for Delimiter {
    fn from(arg: DelimiterArg) -> Self {
        match arg {
            DelimiterArg::Space => Self::Space,
            DelimiterArg::Comma => Self::Comma,
            DelimiterArg::Tab => Self::Tab,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Engine warnings on stderr by default; --verbose enables debug; RUST_LOG overrides
    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_module("netrank_core", level)
        .filter_module("netrank", level)
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    match cli.command {
        Commands::Stats { input } => cmd_stats(&input, cli.json),
        Commands::Pagerank {
            input,
            top,
            damping,
            tolerance,
            max_iterations,
        } => {
            let config = PageRankConfig {
                damping_factor: damping,
                max_iterations,
                tolerance,
            };
            cmd_pagerank(&input, top, config, cli.json)
        }
        Commands::Betweenness {
            input,
            top,
            no_endpoints,
            halve,
        } => {
            let config = BetweennessConfig {
                endpoints: !no_endpoints,
                halve_undirected: halve,
            };
            cmd_betweenness(&input, top, config, cli.json)
        }
    }
}

fn load_graph(args: &InputArgs) -> Result<Graph> {
    let kind: GraphKind = args
        .kind
        .parse()
        .with_context(|| format!("Invalid --kind {:?}", args.kind))?;
    let config = EdgeListConfig {
        delimiter: args.delimiter.into(),
        has_header: args.header,
    };

    let start = Instant::now();
    let pb = ProgressBar::new_spinner();
    pb.set_message(format!("Loading {}...", args.input.display()));

    let graph = EdgeList::read_file(&args.input, kind, config)
        .with_context(|| format!("Failed to load {}", args.input.display()))?;

    pb.finish_and_clear();
    log::debug!(
        "loaded {} ({} nodes, {} edges) in {:.2?}",
        args.input.display(),
        graph.node_count(),
        graph.edge_count(),
        start.elapsed()
    );
    Ok(graph)
}

fn cmd_stats(input: &InputArgs, json: bool) -> Result<()> {
    let graph = load_graph(input)?;
    let stats = graph.stats();

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("Graph Statistics");
    println!("================");
    println!("Kind:            {}", stats.kind);
    println!("Nodes:           {}", stats.node_count);
    println!("Edges:           {}", stats.edge_count);
    println!("Self-loops:      {}", stats.self_loops);
    println!("Isolated nodes:  {}", stats.isolated_nodes);
    println!("Avg out-degree:  {:.2}", stats.avg_out_degree);
    println!("Weak components: {}", stats.weak_components);

    Ok(())
}

fn cmd_pagerank(input: &InputArgs, top: usize, config: PageRankConfig, json: bool) -> Result<()> {
    let graph = load_graph(input)?;
    if graph.is_empty() {
        println!("Graph is empty.");
        return Ok(());
    }

    let start = Instant::now();
    let report = pagerank_with_report(&graph, config).context("PageRank failed")?;
    let ranking = top_n_centrality_nodes(&graph, &report.scores, top.min(graph.node_count()), true)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&ranking)?);
        return Ok(());
    }

    println!(
        "Computed PageRank ({}) in {:.2?}: {} iterations, converged: {}",
        graph.kind(),
        start.elapsed(),
        report.iterations,
        report.converged
    );
    print_ranking("PageRank", &ranking);
    Ok(())
}

fn cmd_betweenness(
    input: &InputArgs,
    top: usize,
    config: BetweennessConfig,
    json: bool,
) -> Result<()> {
    let graph = load_graph(input)?;
    if graph.is_empty() {
        println!("Graph is empty.");
        return Ok(());
    }

    let start = Instant::now();
    let scores = betweenness_centrality(&graph, config);
    let ranking = top_n_betweenness(&graph, &scores, top.min(graph.node_count()), true)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&ranking)?);
        return Ok(());
    }

    println!(
        "Computed betweenness ({}) in {:.2?}",
        graph.kind(),
        start.elapsed()
    );
    print_ranking("betweenness", &ranking);
    Ok(())
}

fn print_ranking(measure: &str, ranking: &[Ranked]) {
    println!("Top {} nodes by {}:", ranking.len(), measure);
    for (i, ranked) in ranking.iter().enumerate() {
        println!(
            "{}. {} ({:.6})",
            i + 1,
            ranked.node,
            ranked.score.unwrap_or_default()
        );
    }
}
