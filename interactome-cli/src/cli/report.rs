//! Command results and their plain-text rendering.

use std::collections::BTreeMap;
use std::io::{self, Write};
use std::path::PathBuf;

use interactome_core::{GraphModel, InteractomeError, Result};

/// Result of a successful command, rendered to stdout by [`render_report`].
#[derive(Debug, Clone, PartialEq)]
pub enum Report {
    /// Whole-network statistics.
    Summary(NetworkSummary),
    /// Degree of a single protein.
    Degree {
        /// Queried protein.
        vertex: String,
        /// Number of distinct partners.
        degree: usize,
    },
    /// Local clustering coefficient of a single protein.
    Clustering {
        /// Queried protein.
        vertex: String,
        /// Coefficient in `[0, 1]`.
        coefficient: f64,
    },
    /// Degree to vertex-count table, rendered with one `*` per protein.
    Histogram(BTreeMap<usize, usize>),
    /// Pre-rendered text such as a component listing or adjacency matrix.
    Listing(Vec<u8>),
    /// A file was written instead of printing.
    Written {
        /// Destination path.
        path: PathBuf,
        /// Records written: interactions for `clean`, components otherwise.
        records: usize,
    },
}

/// Summary statistics reported by `stats` and `random`.
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkSummary {
    /// Network name.
    pub network: String,
    /// Number of proteins.
    pub vertices: usize,
    /// Number of interactions between distinct proteins.
    pub edges: usize,
    /// Highest degree observed.
    pub max_degree: usize,
    /// Proteins attaining [`Self::max_degree`], in vertex order.
    pub max_degree_vertices: Vec<String>,
    /// Mean degree rounded to one decimal, absent for an empty network.
    pub average_degree: Option<f64>,
    /// Edge density, absent when fewer than two proteins exist.
    pub density: Option<f64>,
    /// Component sizes in discovery order.
    pub component_sizes: Vec<usize>,
    /// Random model that produced the topology, if any.
    pub model: Option<&'static str>,
}

impl NetworkSummary {
    /// Collects the statistics of `graph`.
    ///
    /// # Errors
    /// Propagates failures other than [`InteractomeError::DegenerateGraph`],
    /// which marks an undefined statistic instead.
    pub fn try_from_graph(graph: &GraphModel, model: Option<&'static str>) -> Result<Self> {
        let max = graph.max_degree();
        let (_, component_sizes) = graph.component_count_and_sizes();
        Ok(Self {
            network: graph.name().to_owned(),
            vertices: graph.vertex_count(),
            edges: graph.edge_count(),
            max_degree: max.degree,
            max_degree_vertices: max
                .vertices
                .iter()
                .map(|vertex| vertex.as_str().to_owned())
                .collect(),
            average_degree: defined(graph.average_degree())?,
            density: defined(graph.density())?,
            component_sizes,
            model,
        })
    }
}

fn defined(value: Result<f64>) -> Result<Option<f64>> {
    match value {
        Ok(value) => Ok(Some(value)),
        Err(InteractomeError::DegenerateGraph { .. }) => Ok(None),
        Err(err) => Err(err),
    }
}

/// Render `report` as plain text to `out`.
///
/// # Errors
/// Returns any I/O error raised by `out`.
pub fn render_report(report: &Report, mut out: impl Write) -> io::Result<()> {
    match report {
        Report::Summary(summary) => render_summary(summary, &mut out),
        Report::Degree { vertex, degree } => writeln!(out, "{vertex}: {degree}"),
        Report::Clustering {
            vertex,
            coefficient,
        } => writeln!(out, "{vertex}: {coefficient}"),
        Report::Histogram(histogram) => {
            for (degree, &count) in histogram {
                if count == 0 {
                    writeln!(out, "{degree}\t{count}")?;
                } else {
                    writeln!(out, "{degree}\t{count}\t{}", "*".repeat(count))?;
                }
            }
            Ok(())
        }
        Report::Listing(bytes) => out.write_all(bytes),
        Report::Written { path, records } => {
            writeln!(out, "wrote {records} records to {}", path.display())
        }
    }
}

fn render_summary(summary: &NetworkSummary, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "network: {}", summary.network)?;
    if let Some(model) = summary.model {
        writeln!(out, "model: {model}")?;
    }
    writeln!(out, "vertices: {}", summary.vertices)?;
    writeln!(out, "edges: {}", summary.edges)?;
    writeln!(
        out,
        "max degree: {} ({})",
        summary.max_degree,
        summary.max_degree_vertices.join(", ")
    )?;
    match summary.average_degree {
        Some(value) => writeln!(out, "average degree: {value:.1}")?,
        None => writeln!(out, "average degree: undefined")?,
    }
    match summary.density {
        Some(value) => writeln!(out, "density: {value}")?,
        None => writeln!(out, "density: undefined")?,
    }
    let sizes: Vec<String> = summary
        .component_sizes
        .iter()
        .map(ToString::to_string)
        .collect();
    writeln!(
        out,
        "components: {} [{}]",
        summary.component_sizes.len(),
        sizes.join(", ")
    )
}
