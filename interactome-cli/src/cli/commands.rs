//! Command implementations and argument parsing for the interactome CLI.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use interactome_core::{
    BarabasiAlbert, ErdosRenyi, GraphModel, InteractomeError, TopologyGenerator,
};
use interactome_providers_text::{
    Delimiter, TextEdgeListProvider, TextProviderError, write_adjacency_matrix,
    write_clean_export, write_components,
};
use rand::{SeedableRng, rngs::SmallRng};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use super::report::{NetworkSummary, Report};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "interactome",
    about = "Inspect protein-protein interaction networks and compare them with random graphs."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Print size, degree, density and component statistics.
    Stats(InputArgs),
    /// Print the degree of one protein.
    Degree(VertexArgs),
    /// Print the local clustering coefficient of one protein.
    Clustering(VertexArgs),
    /// Print how many proteins have each degree in a range.
    Histogram(HistogramArgs),
    /// List connected components, one per line.
    Components(ComponentsArgs),
    /// Write the interaction file without duplicates and self-interactions.
    Clean(CleanArgs),
    /// Print the adjacency matrix.
    Matrix(InputArgs),
    /// Replace the interactions with a random graph and print its statistics.
    Random(RandomArgs),
}

/// Input file shared by every command.
#[derive(Debug, Args, Clone)]
pub struct InputArgs {
    /// Interaction file: a count line, then one pair per line.
    pub path: PathBuf,

    /// Override the network name (defaults to the file stem).
    #[arg(long)]
    pub name: Option<String>,
}

/// Arguments naming a single protein.
#[derive(Debug, Args, Clone)]
pub struct VertexArgs {
    /// Input file.
    #[command(flatten)]
    pub input: InputArgs,

    /// Protein identifier.
    pub vertex: String,
}

/// Arguments for `histogram`.
#[derive(Debug, Args, Clone)]
pub struct HistogramArgs {
    /// Input file.
    #[command(flatten)]
    pub input: InputArgs,

    /// Smallest degree to report.
    #[arg(long, default_value_t = 0)]
    pub min: usize,

    /// Largest degree to report (defaults to the maximum degree).
    #[arg(long)]
    pub max: Option<usize>,
}

/// Arguments for `components`.
#[derive(Debug, Args, Clone)]
pub struct ComponentsArgs {
    /// Input file.
    #[command(flatten)]
    pub input: InputArgs,

    /// Write the listing to this file instead of stdout.
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

/// Arguments for `clean`.
#[derive(Debug, Args, Clone)]
pub struct CleanArgs {
    /// Input file.
    #[command(flatten)]
    pub input: InputArgs,

    /// Destination of the cleaned interaction file.
    pub output: PathBuf,
}

/// Arguments for `random`.
#[derive(Debug, Args, Clone)]
pub struct RandomArgs {
    /// Input file supplying the vertex set.
    #[command(flatten)]
    pub input: InputArgs,

    /// Seed for a reproducible graph.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Random-graph model.
    #[command(subcommand)]
    pub model: RandomModel,
}

/// Random-graph models.
#[derive(Debug, Subcommand, Clone, Copy)]
pub enum RandomModel {
    /// Join every pair independently with a fixed probability.
    ErdosRenyi {
        /// Edge probability in `[0, 1]`.
        #[arg(long, short, allow_negative_numbers = true)]
        probability: f64,
    },
    /// Grow the network by preferential attachment.
    BarabasiAlbert,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Opening or creating a file failed.
    #[error("failed to access `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Reading or writing interaction text failed.
    #[error(transparent)]
    Text(#[from] TextProviderError),
    /// Building or querying the network failed.
    #[error(transparent)]
    Core(#[from] InteractomeError),
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when loading, querying or writing fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use interactome_cli::cli::{Cli, Command, InputArgs, Report, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "2\nA B\nB C\n")?;
/// let cli = Cli {
///     command: Command::Stats(InputArgs {
///         path: file.path().to_path_buf(),
///         name: Some("toy".into()),
///     }),
/// };
/// let Report::Summary(summary) = run_cli(cli)? else {
///     panic!("stats prints a summary");
/// };
/// assert_eq!(summary.vertices, 3);
/// assert_eq!(summary.component_sizes, [3]);
/// # Ok(())
/// # }
/// ```
pub fn run_cli(cli: Cli) -> Result<Report, CliError> {
    match cli.command {
        Command::Stats(input) => {
            let (graph, _) = load_network(&input)?;
            Ok(Report::Summary(NetworkSummary::try_from_graph(&graph, None)?))
        }
        Command::Degree(args) => {
            let (graph, _) = load_network(&args.input)?;
            let degree = graph.degree(&args.vertex)?;
            Ok(Report::Degree {
                vertex: args.vertex,
                degree,
            })
        }
        Command::Clustering(args) => {
            let (graph, _) = load_network(&args.input)?;
            let coefficient = graph.clustering(&args.vertex)?;
            Ok(Report::Clustering {
                vertex: args.vertex,
                coefficient,
            })
        }
        Command::Histogram(args) => {
            let (graph, _) = load_network(&args.input)?;
            let max = args.max.unwrap_or_else(|| graph.max_degree().degree);
            Ok(Report::Histogram(graph.degree_histogram(args.min, max)))
        }
        Command::Components(args) => run_components(&args),
        Command::Clean(args) => run_clean(&args),
        Command::Matrix(input) => {
            let (graph, _) = load_network(&input)?;
            let mut buffer = Vec::new();
            write_adjacency_matrix(&graph.adjacency_matrix(), &mut buffer)?;
            Ok(Report::Listing(buffer))
        }
        Command::Random(args) => run_random(&args),
    }
}

fn run_components(args: &ComponentsArgs) -> Result<Report, CliError> {
    let (graph, _) = load_network(&args.input)?;
    let partition = graph.connected_components();
    match &args.output {
        Some(path) => {
            let mut writer = create_output(path)?;
            write_components(&partition, &mut writer)?;
            Ok(Report::Written {
                path: path.clone(),
                records: partition.len(),
            })
        }
        None => {
            let mut buffer = Vec::new();
            write_components(&partition, &mut buffer)?;
            Ok(Report::Listing(buffer))
        }
    }
}

fn run_clean(args: &CleanArgs) -> Result<Report, CliError> {
    let (graph, delimiter) = load_network(&args.input)?;
    let export = graph.clean_export();
    // Render first so an unwritable export leaves no truncated file behind.
    let mut buffer = Vec::new();
    let used = write_clean_export(&export, &mut buffer, delimiter)?;
    if used != delimiter {
        info!(input = %delimiter, output = %used, "clean export switched delimiter");
    }
    let mut writer = create_output(&args.output)?;
    writer
        .write_all(&buffer)
        .and_then(|()| writer.flush())
        .map_err(|source| CliError::Io {
            path: args.output.clone(),
            source,
        })?;
    Ok(Report::Written {
        path: args.output.clone(),
        records: export.count(),
    })
}

#[instrument(
    name = "cli.random",
    err,
    skip(args),
    fields(path = %args.input.path.display(), seed = field::Empty),
)]
fn run_random(args: &RandomArgs) -> Result<Report, CliError> {
    let (mut graph, _) = load_network(&args.input)?;
    let generator: Box<dyn TopologyGenerator> = match args.model {
        RandomModel::ErdosRenyi { probability } => Box::new(ErdosRenyi::new(probability)?),
        RandomModel::BarabasiAlbert => Box::new(BarabasiAlbert),
    };
    let mut rng = match args.seed {
        Some(seed) => {
            Span::current().record("seed", seed);
            SmallRng::seed_from_u64(seed)
        }
        None => SmallRng::from_entropy(),
    };
    graph.regenerate(generator.as_ref(), &mut rng)?;
    Ok(Report::Summary(NetworkSummary::try_from_graph(
        &graph,
        Some(generator.name()),
    )?))
}

#[instrument(name = "cli.load", err, skip(input), fields(path = %input.path.display()))]
fn load_network(input: &InputArgs) -> Result<(GraphModel, Delimiter), CliError> {
    let file = File::open(&input.path).map_err(|source| CliError::Io {
        path: input.path.clone(),
        source,
    })?;
    let name = derive_network_name(&input.path, input.name.as_deref());
    let provider = TextEdgeListProvider::try_from_reader(name, BufReader::new(file))?;
    let graph = GraphModel::from_source(&provider)?;
    info!(
        network = graph.name(),
        delimiter = %provider.delimiter(),
        "interaction file loaded"
    );
    Ok((graph, provider.delimiter()))
}

fn create_output(path: &Path) -> Result<BufWriter<File>, CliError> {
    let file = File::create(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufWriter::new(file))
}

pub(super) fn derive_network_name(path: &Path, override_name: Option<&str>) -> String {
    if let Some(name) = override_name {
        return name.to_owned();
    }

    path.file_stem()
        .and_then(|value| value.to_str())
        .map_or_else(|| "interactome".to_owned(), ToOwned::to_owned)
}
