//! Command-line interface orchestration for treeline.
//!
//! Offers a `run` command that loads a whitespace-separated edge list and a
//! `sample` command that runs the embedded cable network, both executing the
//! traced Kruskal engine and rendering the decision log plus a cost summary.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use thiserror::Error;
use treeline_core::{EdgeGraph, KruskalBuilder, MstError, MstRun, TraceMode, WeightedEdge};

use crate::edgelist::{EdgeListError, EdgeListGraph};

/// The cable network from the project's motivating example: a trunk feed, a
/// distribution layer, and endpoint drops, with a handful of redundant
/// links for the algorithm to prune.
const SAMPLE_NETWORK: &[(&str, &str, f64)] = &[
    ("A", "B", 1890.0),
    ("B", "V1", 1320.0),
    ("B", "V2", 1080.0),
    ("B", "V3", 907.0),
    ("B", "V4", 809.0),
    ("B", "V5", 708.0),
    ("B", "V6", 702.0),
    ("B", "V7", 263.0),
    ("V1", "W1", 40.0),
    ("V1", "W2", 48.0),
    ("V1", "W3", 30.0),
    ("V2", "W2", 158.0),
    ("V4", "W4", 50.0),
    ("V4", "W5", 121.0),
    ("V5", "W4", 110.0),
    ("V5", "W5", 87.0),
    ("V6", "W6", 80.0),
    ("V6", "W7", 50.0),
    ("V6", "W8", 150.0),
    ("V7", "W8", 80.0),
];

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(name = "treeline", about = "Compute a minimum spanning tree and replay its decision trace.")]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Run the engine over an edge-list file.
    Run(RunCommand),
    /// Run the engine over the embedded sample cable network.
    Sample(SampleCommand),
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Path to a file with one `source target weight` edge per line.
    pub path: PathBuf,

    /// How much of the edge sequence to process and trace.
    #[arg(long, value_enum, default_value = "exhaustive")]
    pub mode: ModeArg,

    /// Override name for the graph (defaults to the file name).
    #[arg(long)]
    pub name: Option<String>,
}

/// Options accepted by the `sample` command.
#[derive(Debug, Args, Clone)]
pub struct SampleCommand {
    /// How much of the edge sequence to process and trace.
    #[arg(long, value_enum, default_value = "exhaustive")]
    pub mode: ModeArg,
}

/// Trace modes selectable from the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ModeArg {
    /// Evaluate and trace every edge (the reference behaviour).
    Exhaustive,
    /// Stop once the accepted edges span a single component.
    StopAtSpanning,
}

impl From<ModeArg> for TraceMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Exhaustive => Self::Exhaustive,
            ModeArg::StopAtSpanning => Self::StopAtSpanning,
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// File I/O failed while loading an input source.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Edge-list ingestion failed.
    #[error(transparent)]
    EdgeList(#[from] EdgeListError),
    /// The engine rejected the graph or failed while running.
    #[error(transparent)]
    Core(#[from] MstError),
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Display name of the processed graph.
    pub graph_name: String,
    /// Number of nodes in the input graph.
    pub node_count: usize,
    /// Sum of all input edge weights, before spanning-tree reduction.
    pub initial_weight: f64,
    /// The engine run: forest, total weight, and decision trace.
    pub run: MstRun<String>,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when loading or execution fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use treeline_cli::cli::{Cli, Command, ModeArg, SampleCommand, run_cli};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let cli = Cli {
///     command: Command::Sample(SampleCommand { mode: ModeArg::Exhaustive }),
/// };
/// let summary = run_cli(cli)?;
/// assert!(summary.run.is_tree());
/// assert_eq!(summary.run.trace().len(), 20);
/// # Ok(())
/// # }
/// ```
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Run(run) => run_edge_list(run),
        Command::Sample(sample) => run_sample(&sample),
    }
}

fn run_edge_list(command: RunCommand) -> Result<ExecutionSummary, CliError> {
    let RunCommand { path, mode, name } = command;
    let chosen_name = derive_graph_name(&path, name.as_deref());
    let reader = open_edge_list(&path)?;
    let listing = EdgeListGraph::try_from_reader(chosen_name, reader)?;
    let graph_name = listing.name().to_owned();
    execute(graph_name, listing.into_graph(), mode.into())
}

fn run_sample(command: &SampleCommand) -> Result<ExecutionSummary, CliError> {
    let edges = SAMPLE_NETWORK
        .iter()
        .map(|(source, target, weight)| {
            WeightedEdge::new((*source).to_owned(), (*target).to_owned(), *weight)
        })
        .collect();
    execute(
        "sample-network".to_owned(),
        EdgeGraph::from_edges(edges),
        command.mode.into(),
    )
}

fn execute(
    graph_name: String,
    graph: EdgeGraph<String>,
    mode: TraceMode,
) -> Result<ExecutionSummary, CliError> {
    let engine = KruskalBuilder::new().with_trace_mode(mode).build();
    let run = engine.run(&graph)?;
    Ok(ExecutionSummary {
        graph_name,
        node_count: graph.node_count(),
        initial_weight: graph.total_weight(),
        run,
    })
}

fn open_edge_list(path: &Path) -> Result<BufReader<File>, CliError> {
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

fn derive_graph_name(path: &Path, override_name: Option<&str>) -> String {
    if let Some(name) = override_name {
        return name.to_owned();
    }

    path.file_stem()
        .and_then(|value| value.to_str())
        .map(ToOwned::to_owned)
        .unwrap_or_else(|| "graph".to_owned())
}

/// Renders the decision trace of `summary` to `writer`, one block per step.
///
/// The block shape mirrors the construction the engine performed: the edge
/// under examination, the accept/reject decision, and the running edge
/// count against the spanning target.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
pub fn render_trace(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    let target = summary.node_count.saturating_sub(1);
    for event in summary.run.trace() {
        writeln!(
            writer,
            "step {}: edge ({}, {}) weight {}",
            event.step(),
            event.source(),
            event.target(),
            event.weight()
        )?;
        if event.accepted() {
            writeln!(writer, "  -> accepted into the spanning tree")?;
        } else {
            writeln!(writer, "  -> rejected (would close a cycle)")?;
        }
        writeln!(
            writer,
            "  edges so far: {} of {}",
            event.mst_edge_count(),
            target
        )?;
    }
    Ok(())
}

/// Renders the cost summary of `summary` to `writer`.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use std::io::Cursor;
/// # use treeline_cli::cli::{Cli, Command, ModeArg, SampleCommand, render_summary, run_cli};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let cli = Cli {
///     command: Command::Sample(SampleCommand { mode: ModeArg::Exhaustive }),
/// };
/// let summary = run_cli(cli)?;
/// let mut buffer = Cursor::new(Vec::new());
/// render_summary(&summary, &mut buffer)?;
/// let text = String::from_utf8(buffer.into_inner())?;
/// assert!(text.contains("savings: 2952"));
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "graph: {}", summary.graph_name)?;
    writeln!(writer, "nodes: {}", summary.node_count)?;
    writeln!(writer, "spanning edges: {}", summary.run.edges().len())?;
    writeln!(writer, "components: {}", summary.run.component_count())?;
    writeln!(writer, "initial weight: {}", summary.initial_weight)?;
    writeln!(writer, "spanning weight: {}", summary.run.total_weight())?;
    writeln!(
        writer,
        "savings: {}",
        summary.initial_weight - summary.run.total_weight()
    )?;
    Ok(())
}
