//! Reader for count-header interaction files.

use std::{fs::File, io::Read, path::Path};

use interactome_core::InteractionSource;
use tracing::{debug, instrument};

use crate::{delimiter::Delimiter, errors::TextProviderError};

/// Interaction listing read from UTF-8 text.
///
/// The first line is kept verbatim as the header. Every following non-blank
/// line becomes a data row, split with the delimiter that fits every row.
///
/// # Examples
/// ```
/// use interactome_core::{GraphModel, InteractionSource};
/// use interactome_providers_text::{Delimiter, TextEdgeListProvider};
///
/// let text = "2\nA,B\nB,C\n";
/// let provider = TextEdgeListProvider::try_from_reader("inline", text.as_bytes())?;
/// assert_eq!(provider.delimiter(), Delimiter::Comma);
/// assert_eq!(provider.header(), Some("2"));
/// let graph = GraphModel::from_source(&provider)?;
/// assert_eq!(graph.edge_count(), 2);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextEdgeListProvider {
    name: String,
    header: Option<String>,
    rows: Vec<Vec<String>>,
    delimiter: Delimiter,
}

impl TextEdgeListProvider {
    /// Parses an in-memory document.
    #[must_use]
    pub fn from_text(name: impl Into<String>, text: &str) -> Self {
        let mut lines = text.lines();
        let header = lines.next().map(str::to_owned);
        let data: Vec<&str> = lines.filter(|line| !line.trim().is_empty()).collect();
        let delimiter = Delimiter::sniff_rows(&data);
        let rows = data.into_iter().map(|row| delimiter.split(row)).collect();
        Self {
            name: name.into(),
            header,
            rows,
            delimiter,
        }
    }

    /// Reads and parses the whole of `reader`.
    ///
    /// # Errors
    /// Returns [`TextProviderError::Io`] when reading fails and
    /// [`TextProviderError::InvalidUtf8`] when the bytes are not UTF-8.
    pub fn try_from_reader<R: Read>(
        name: impl Into<String>,
        mut reader: R,
    ) -> Result<Self, TextProviderError> {
        let name = name.into();
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        match String::from_utf8(bytes) {
            Ok(text) => Ok(Self::from_text(name, &text)),
            Err(error) => Err(TextProviderError::InvalidUtf8 {
                name,
                valid_up_to: error.utf8_error().valid_up_to(),
            }),
        }
    }

    /// Opens and parses the file at `path`, naming the source after the path.
    ///
    /// # Errors
    /// As [`TextEdgeListProvider::try_from_reader`].
    #[instrument(name = "text.read", err, skip_all, fields(path = %path.as_ref().display()))]
    pub fn try_from_path(path: impl AsRef<Path>) -> Result<Self, TextProviderError> {
        let path = path.as_ref();
        let provider = Self::try_from_reader(path.display().to_string(), File::open(path)?)?;
        debug!(
            rows = provider.rows.len(),
            delimiter = %provider.delimiter,
            "interaction file read"
        );
        Ok(provider)
    }

    /// Returns the delimiter sniffed from the data rows.
    #[must_use]
    pub fn delimiter(&self) -> Delimiter {
        self.delimiter
    }
}

impl InteractionSource for TextEdgeListProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn header(&self) -> Option<&str> {
        self.header.as_deref()
    }

    fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }
}
