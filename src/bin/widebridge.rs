use std::{
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
    time::Instant,
};

use anyhow::{Context, Result, bail};
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};
use tracing::info;
use tracing_subscriber::EnvFilter;
use widebridge::{algo::*, gens::*, io::*, prelude::*};

#[derive(Parser)]
#[command(name = "widebridge")]
#[command(about = "Reports the wide bridges of an undirected graph", long_about = None)]
struct Cli {
    /// Edge list to analyse; reads from stdin if absent or `-`
    file: Option<PathBuf>,

    /// Drop self-loops and repeated edges while reading
    #[arg(long, default_value_t = false)]
    simple: bool,

    /// Run ghost passes on all cores (requires the `parallel` feature)
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Print the articulation points of the graph instead of its wide bridges
    #[arg(long, default_value_t = false)]
    articulation_points: bool,

    /// Print edges normalized and sorted instead of in detection order
    #[arg(long, default_value_t = false)]
    sorted: bool,

    /// Instead of analysing, print a random G(n,p) graph with N nodes
    #[arg(long, value_name = "N")]
    generate: Option<NumNodes>,

    /// Edge probability of the generated graph
    #[arg(long, default_value_t = 0.1)]
    prob: f64,

    /// Seed of the generated graph
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // stdout only carries results
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let writer = BufWriter::new(io::stdout().lock());

    if let Some(n) = cli.generate {
        return generate(n, cli.prob, cli.seed, writer);
    }

    let graph = read_graph(cli.file.as_deref(), cli.simple)?;
    info!(
        nodes = graph.number_of_nodes(),
        edges = graph.number_of_edges(),
        "graph loaded"
    );

    if cli.articulation_points {
        let points = graph.compute_articulation_points();
        info!(articulation_points = points.cardinality(), "articulation points found");
        return write_nodes(writer, points.iter_set_bits())
            .context("failed to write articulation points");
    }

    let start = Instant::now();
    let bridges = if cli.parallel {
        compute_parallel(&graph)?
    } else {
        WideBridgeSearch::new(&graph).compute()
    };
    info!(
        wide_bridges = bridges.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "wide bridges found"
    );

    let edges = if cli.sorted {
        bridges.to_sorted_normalized()
    } else {
        bridges.into_vec()
    };

    write_edges(writer, edges).context("failed to write wide bridges")
}

fn read_graph(path: Option<&Path>, simple: bool) -> Result<AdjArrayUndir> {
    let reader = EdgeListReader::new().simple(simple);

    let graph: AdjArrayUndir = match path {
        Some(path) if path != Path::new("-") => reader
            .try_read_graph_file(path)
            .with_context(|| format!("failed to read graph from {}", path.display()))?,
        _ => reader
            .try_read_graph(io::stdin().lock())
            .context("failed to read graph from stdin")?,
    };

    Ok(graph)
}

#[cfg(feature = "parallel")]
fn compute_parallel(graph: &AdjArrayUndir) -> Result<WideBridgeSet> {
    Ok(WideBridgeSearch::new(graph).try_compute_parallel()?)
}

#[cfg(not(feature = "parallel"))]
fn compute_parallel(_graph: &AdjArrayUndir) -> Result<WideBridgeSet> {
    bail!("--parallel is unavailable: rebuild with `--features parallel`")
}

fn generate<W: Write>(n: NumNodes, p: f64, seed: u64, writer: W) -> Result<()> {
    if !p.is_valid_probility() {
        bail!("edge probability {p} is not within [0, 1]");
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let graph = AdjArrayUndir::gnp(&mut rng, n, p);
    info!(nodes = n, edges = graph.number_of_edges(), seed, "graph generated");

    graph
        .try_write_edge_list(writer)
        .context("failed to write generated graph")
}
