//! Text renderings of exports, component listings and matrices.

use std::io::Write;

use interactome_core::{AdjacencyMatrix, CleanExport, ComponentPartition};

use crate::{delimiter::Delimiter, errors::TextProviderError};

/// Writes `export` as a count line followed by one `a<delimiter>b` row per
/// interaction, returning the delimiter actually used.
///
/// `preferred` is used when reading the output back would sniff it again and
/// recover every pair unchanged. Otherwise the first delimiter in sniffing
/// order with that property is chosen.
///
/// # Errors
/// Returns [`TextProviderError::NoSafeDelimiter`] when no delimiter round-trips
/// and [`TextProviderError::Io`] if writing fails.
///
/// # Examples
/// ```
/// use interactome_core::GraphModel;
/// use interactome_providers_text::{Delimiter, write_clean_export};
///
/// let graph = GraphModel::from_pairs("toy", [("B", "A"), ("C", "C")]);
/// let mut out = Vec::new();
/// let used = write_clean_export(&graph.clean_export(), &mut out, Delimiter::Tab)?;
/// assert_eq!(used, Delimiter::Tab);
/// assert_eq!(String::from_utf8(out)?, "1\nA\tB\n");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn write_clean_export<W: Write + ?Sized>(
    export: &CleanExport<'_>,
    writer: &mut W,
    preferred: Delimiter,
) -> Result<Delimiter, TextProviderError> {
    let delimiter = select_delimiter(export, preferred)?;
    writeln!(writer, "{}", export.count())?;
    for (a, b) in export.edges() {
        writeln!(writer, "{a}{}{b}", delimiter.as_str())?;
    }
    writer.flush()?;
    Ok(delimiter)
}

fn select_delimiter(
    export: &CleanExport<'_>,
    preferred: Delimiter,
) -> Result<Delimiter, TextProviderError> {
    if export.count() == 0 {
        return Ok(preferred);
    }
    let candidates = std::iter::once(preferred)
        .chain(Delimiter::ALL.into_iter().filter(|&delimiter| delimiter != preferred));
    for candidate in candidates {
        if reads_back(export, candidate) {
            return Ok(candidate);
        }
    }
    let vertex = export
        .edges()
        .iter()
        .flat_map(|(a, b)| [a, b])
        .find(|vertex| Delimiter::Whitespace.split(vertex.as_str()) != [vertex.as_str()])
        .or_else(|| export.edges().first().map(|(a, _)| a))
        .map(|vertex| vertex.as_str().to_owned())
        .unwrap_or_default();
    Err(TextProviderError::NoSafeDelimiter { vertex })
}

fn reads_back(export: &CleanExport<'_>, delimiter: Delimiter) -> bool {
    let rows: Vec<String> = export
        .edges()
        .iter()
        .map(|(a, b)| format!("{a}{}{b}", delimiter.as_str()))
        .collect();
    let borrowed: Vec<&str> = rows.iter().map(String::as_str).collect();
    if Delimiter::sniff_rows(&borrowed) != delimiter {
        return false;
    }
    borrowed
        .iter()
        .zip(export.edges())
        .all(|(row, (a, b))| delimiter.split(row) == [a.as_str(), b.as_str()])
}

/// Writes one line per component: its size, then its members in visitation
/// order, space separated.
///
/// # Errors
/// Returns [`TextProviderError::Io`] if writing fails.
pub fn write_components<W: Write + ?Sized>(
    partition: &ComponentPartition<'_>,
    writer: &mut W,
) -> Result<(), TextProviderError> {
    write!(writer, "{partition}")?;
    writer.flush()?;
    Ok(())
}

/// Writes the matrix as tab-separated text with a header row of vertex
/// labels and each row prefixed by its vertex.
///
/// # Errors
/// Returns [`TextProviderError::Io`] if writing fails.
pub fn write_adjacency_matrix<W: Write + ?Sized>(
    matrix: &AdjacencyMatrix<'_>,
    writer: &mut W,
) -> Result<(), TextProviderError> {
    for vertex in matrix.vertices() {
        write!(writer, "\t{vertex}")?;
    }
    writeln!(writer)?;
    for (vertex, row) in matrix.vertices().iter().zip(matrix.rows()) {
        write!(writer, "{vertex}")?;
        for cell in row {
            write!(writer, "\t{cell}")?;
        }
        writeln!(writer)?;
    }
    writer.flush()?;
    Ok(())
}
