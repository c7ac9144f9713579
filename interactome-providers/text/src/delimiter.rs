//! Field delimiters and the sniffing heuristic.

use std::fmt;

/// Field separator used by an interaction file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Delimiter {
    /// `\t`
    Tab,
    /// `,`
    Comma,
    /// `;`
    Semicolon,
    /// `|`
    Pipe,
    /// One or more spaces or tabs; written as a single space.
    #[default]
    Whitespace,
}

impl Delimiter {
    const EXPLICIT: [Self; 4] = [Self::Tab, Self::Comma, Self::Semicolon, Self::Pipe];

    /// Every delimiter in sniffing priority order.
    pub const ALL: [Self; 5] = [
        Self::Tab,
        Self::Comma,
        Self::Semicolon,
        Self::Pipe,
        Self::Whitespace,
    ];

    /// Picks the delimiter that splits every row into exactly two fields,
    /// trying tab, comma, semicolon, pipe and whitespace in that order.
    ///
    /// When none fits all rows the first row alone decides, as in
    /// [`Delimiter::sniff`], so malformed rows still reach validation.
    ///
    /// # Examples
    /// ```
    /// use interactome_providers_text::Delimiter;
    ///
    /// assert_eq!(Delimiter::sniff_rows(&["A,1 A2", "Z1 Z2"]), Delimiter::Whitespace);
    /// assert_eq!(Delimiter::sniff_rows(&["A,B", "C,D"]), Delimiter::Comma);
    /// assert_eq!(Delimiter::sniff_rows(&["A,B,C"]), Delimiter::Comma);
    /// ```
    #[must_use]
    pub fn sniff_rows(rows: &[&str]) -> Self {
        if rows.is_empty() {
            return Self::default();
        }
        Self::ALL
            .into_iter()
            .find(|delimiter| rows.iter().all(|row| delimiter.split(row).len() == 2))
            .unwrap_or_else(|| rows.first().map_or_else(Self::default, |row| Self::sniff(row)))
    }

    /// Picks the first explicit separator that occurs in `row`, falling back
    /// to whitespace.
    ///
    /// Files are sniffed with [`Delimiter::sniff_rows`]; this single-row rule
    /// is its fallback.
    ///
    /// # Examples
    /// ```
    /// use interactome_providers_text::Delimiter;
    ///
    /// assert_eq!(Delimiter::sniff("A,B"), Delimiter::Comma);
    /// assert_eq!(Delimiter::sniff("A\tB,C"), Delimiter::Tab);
    /// assert_eq!(Delimiter::sniff("A   B"), Delimiter::Whitespace);
    /// ```
    #[must_use]
    pub fn sniff(row: &str) -> Self {
        Self::EXPLICIT
            .into_iter()
            .find(|delimiter| delimiter.as_char().is_some_and(|c| row.contains(c)))
            .unwrap_or_default()
    }

    /// Returns the separator character, `None` for whitespace runs.
    #[must_use]
    pub const fn as_char(self) -> Option<char> {
        match self {
            Self::Tab => Some('\t'),
            Self::Comma => Some(','),
            Self::Semicolon => Some(';'),
            Self::Pipe => Some('|'),
            Self::Whitespace => None,
        }
    }

    /// Returns the text written between two fields.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tab => "\t",
            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::Pipe => "|",
            Self::Whitespace => " ",
        }
    }

    /// Splits `row` into trimmed fields.
    ///
    /// # Examples
    /// ```
    /// use interactome_providers_text::Delimiter;
    ///
    /// assert_eq!(Delimiter::Comma.split("A , B"), ["A", "B"]);
    /// assert_eq!(Delimiter::Whitespace.split(" A \t B "), ["A", "B"]);
    /// ```
    #[must_use]
    pub fn split(self, row: &str) -> Vec<String> {
        match self.as_char() {
            Some(separator) => row
                .split(separator)
                .map(|field| field.trim().to_owned())
                .collect(),
            None => row.split_whitespace().map(str::to_owned).collect(),
        }
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Tab => "tab",
            Self::Comma => "comma",
            Self::Semicolon => "semicolon",
            Self::Pipe => "pipe",
            Self::Whitespace => "whitespace",
        };
        f.write_str(name)
    }
}
