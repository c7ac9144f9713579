//! Raw interaction sources consumed by the edge-list validator.

/// Abstraction over an already-tokenised interaction listing: a header line
/// followed by data rows split into fields.
///
/// Parsing the textual syntax (delimiters, quoting, encodings) is the job of
/// the implementor; the core only inspects the header and the field counts.
///
/// # Examples
/// ```
/// use interactome_core::InteractionSource;
///
/// struct Fixed;
///
/// impl InteractionSource for Fixed {
///     fn name(&self) -> &str { "fixed" }
///     fn header(&self) -> Option<&str> { Some("1") }
///     fn rows(&self) -> &[Vec<String>] {
///         static ROWS: std::sync::OnceLock<Vec<Vec<String>>> = std::sync::OnceLock::new();
///         ROWS.get_or_init(|| vec![vec!["A".into(), "B".into()]])
///     }
/// }
///
/// let src = Fixed;
/// assert_eq!(src.name(), "fixed");
/// assert!(!src.is_empty());
/// assert_eq!(src.rows().len(), 1);
/// ```
pub trait InteractionSource {
    /// Returns a human-readable name.
    fn name(&self) -> &str;

    /// Returns the first line of the source, or `None` for a zero-byte source.
    fn header(&self) -> Option<&str>;

    /// Returns the data rows following the header, one entry per interaction.
    fn rows(&self) -> &[Vec<String>];

    /// Returns whether the source contained no bytes at all.
    ///
    /// # Examples
    /// ```
    /// use interactome_core::{InteractionSource, RawEdgeList};
    ///
    /// assert!(RawEdgeList::empty("void").is_empty());
    /// ```
    #[must_use]
    fn is_empty(&self) -> bool {
        self.header().is_none() && self.rows().is_empty()
    }
}

/// In-memory [`InteractionSource`].
///
/// # Examples
/// ```
/// use interactome_core::{InteractionSource, RawEdgeList};
///
/// let raw = RawEdgeList::new("toy", "2", vec![
///     vec!["A".into(), "B".into()],
///     vec!["B".into(), "C".into()],
/// ]);
/// assert_eq!(raw.header(), Some("2"));
/// assert_eq!(raw.rows().len(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawEdgeList {
    name: String,
    header: Option<String>,
    rows: Vec<Vec<String>>,
}

impl RawEdgeList {
    /// Creates a raw listing from a header line and its tokenised rows.
    #[must_use]
    pub fn new(name: impl Into<String>, header: impl Into<String>, rows: Vec<Vec<String>>) -> Self {
        Self {
            name: name.into(),
            header: Some(header.into()),
            rows,
        }
    }

    /// Creates a listing representing a zero-byte source.
    #[must_use]
    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            header: None,
            rows: Vec::new(),
        }
    }

    /// Builds a well-formed listing from two-field pairs, deriving the header
    /// from the number of pairs.
    ///
    /// # Examples
    /// ```
    /// use interactome_core::{InteractionSource, RawEdgeList};
    ///
    /// let raw = RawEdgeList::from_pairs("toy", [("A", "B"), ("A", "C")]);
    /// assert_eq!(raw.header(), Some("2"));
    /// ```
    #[must_use]
    pub fn from_pairs<I, S>(name: impl Into<String>, pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        let rows: Vec<Vec<String>> = pairs
            .into_iter()
            .map(|(left, right)| vec![left.into(), right.into()])
            .collect();
        Self::new(name, rows.len().to_string(), rows)
    }
}

impl InteractionSource for RawEdgeList {
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
