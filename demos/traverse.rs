//! Reads a graph in the edge list format and prints the results of both
//! traversals.
//!
//! ```text
//! printf '6 5\n0 1\n0 2\n1 3\n2 4\n4 5\n' | cargo run --example traverse -- --source 0
//! ```

use std::{
    error::Error,
    fs::File,
    io::{self, BufReader},
    path::PathBuf,
};

use clap::Parser;
use digraph::{
    infra::{export::Dot, load::read_from},
    DirectedGraph,
};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser, Debug)]
#[command(about = "Run breadth-first and depth-first search on a directed graph")]
struct Args {
    /// Input file, standard input if omitted.
    input: Option<PathBuf>,

    /// Source vertex for breadth-first search.
    #[arg(short, long, default_value_t = 0)]
    source: usize,

    /// Print the graph in DOT format, labeled by BFS distances.
    #[arg(long)]
    dot: bool,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("DIGRAPH_LOG")
        .unwrap_or_else(|_| EnvFilter::new("digraph=info,warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(io::stderr))
        .init();
}

fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();

    let args = Args::parse();

    let graph = match &args.input {
        Some(path) => read_from(BufReader::new(File::open(path)?))?,
        None => read_from(io::stdin().lock())?,
    };

    print_bfs(&graph, args.source)?;
    println!();
    print_dfs(&graph);

    if args.dot {
        let labels = graph
            .bfs(args.source)?
            .iter()
            .enumerate()
            .map(|(v, record)| match record.distance {
                Some(dist) => format!("{v} ({dist})"),
                None => format!("{v} (inf)"),
            })
            .collect::<Vec<_>>();

        println!();
        print!("{}", Dot::with_labels(None, labels).to_string(&graph));
    }

    Ok(())
}

fn print_bfs(graph: &DirectedGraph, source: usize) -> Result<(), digraph::Error> {
    let bfs = graph.bfs(source)?;

    println!("breadth-first search from {source}");
    println!("{:>8} {:>8} {:>8} {:>8}", "vertex", "visited", "parent", "distance");

    for (v, record) in bfs.iter().enumerate() {
        println!(
            "{:>8} {:>8} {:>8} {:>8}",
            v,
            record.visited,
            display_opt(record.parent, "-"),
            display_opt(record.distance, "inf"),
        );
    }

    Ok(())
}

fn print_dfs(graph: &DirectedGraph) {
    let dfs = graph.dfs();

    println!("depth-first search");
    println!(
        "{:>8} {:>8} {:>10} {:>8} {:>8}",
        "vertex", "parent", "discovery", "finish", "order"
    );

    for (v, record) in dfs.iter().enumerate() {
        println!(
            "{:>8} {:>8} {:>10} {:>8} {:>8}",
            v,
            display_opt(record.parent, "-"),
            record.discovery,
            record.finish,
            record.topological_order,
        );
    }

    let sorted = dfs
        .topological_sort()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ");

    println!("topological order: {sorted}");
}

fn display_opt(value: Option<usize>, none: &str) -> String {
    value.map_or_else(|| none.to_string(), |value| value.to_string())
}
