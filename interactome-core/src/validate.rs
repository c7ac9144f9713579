//! Structural validation of raw interaction listings.
//!
//! Checks run in a fixed order and the first violation wins: the source must
//! be non-empty, the header must be a bare non-negative integer, the header
//! must match the number of data rows, and every row must hold exactly two
//! fields. Duplicate interactions and self-interactions are not rejected here;
//! the graph model normalises them.

use std::sync::Arc;

use tracing::{instrument, warn};

use crate::{
    Result,
    error::{FormatError, InteractomeError},
    source::InteractionSource,
};

/// An interaction list that passed [`validate`].
///
/// # Examples
/// ```
/// use interactome_core::{RawEdgeList, validate};
///
/// let raw = RawEdgeList::from_pairs("toy", [("A", "B"), ("B", "C")]);
/// let list = validate(&raw)?;
/// assert_eq!(list.declared_count(), 2);
/// assert_eq!(list.pairs()[1], ("B".to_owned(), "C".to_owned()));
/// # Ok::<(), interactome_core::InteractomeError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidatedEdgeList {
    name: Arc<str>,
    declared_count: usize,
    pairs: Vec<(String, String)>,
}

impl ValidatedEdgeList {
    /// Returns the name of the source the list was read from.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the row count announced by the header.
    #[must_use]
    pub fn declared_count(&self) -> usize {
        self.declared_count
    }

    /// Returns the raw pairs in file order.
    #[must_use]
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    pub(crate) fn into_parts(self) -> (Arc<str>, Vec<(String, String)>) {
        (self.name, self.pairs)
    }
}

/// Validates `source` and extracts its interaction pairs.
///
/// # Errors
/// Returns [`InteractomeError::InvalidFormat`] wrapping the first
/// [`FormatError`] encountered.
///
/// # Examples
/// ```
/// use interactome_core::{FormatError, InteractomeError, RawEdgeList, validate};
///
/// let raw = RawEdgeList::new("short", "5", vec![vec!["A".into(), "B".into()]]);
/// let err = validate(&raw).expect_err("count mismatch must fail");
/// assert!(matches!(
///     err,
///     InteractomeError::InvalidFormat {
///         error: FormatError::RowCountMismatch { declared: 5, actual: 1 },
///         ..
///     }
/// ));
/// ```
#[instrument(
    name = "core.validate",
    err,
    skip(source),
    fields(data_source = %source.name(), rows = source.rows().len()),
)]
pub fn validate<S: InteractionSource + ?Sized>(source: &S) -> Result<ValidatedEdgeList> {
    check_structure(source)
        .map(|(declared_count, pairs)| ValidatedEdgeList {
            name: Arc::from(source.name()),
            declared_count,
            pairs,
        })
        .map_err(|error| {
            warn!(code = %error.code(), "interaction source rejected");
            InteractomeError::InvalidFormat {
                data_source: Arc::from(source.name()),
                error,
            }
        })
}

type Checked = (usize, Vec<(String, String)>);

fn check_structure<S: InteractionSource + ?Sized>(
    source: &S,
) -> core::result::Result<Checked, FormatError> {
    if source.is_empty() {
        return Err(FormatError::EmptySource);
    }
    let header = source.header().unwrap_or_default();
    let declared = parse_declared_count(header)?;

    let rows = source.rows();
    if rows.len() != declared {
        return Err(FormatError::RowCountMismatch {
            declared,
            actual: rows.len(),
        });
    }

    let pairs = rows
        .iter()
        .enumerate()
        .map(|(row, fields)| match fields.as_slice() {
            [left, right] => Ok((left.clone(), right.clone())),
            other => Err(FormatError::ColumnCount {
                row,
                fields: other.len(),
            }),
        })
        .collect::<core::result::Result<Vec<_>, _>>()?;

    Ok((declared, pairs))
}

fn parse_declared_count(header: &str) -> core::result::Result<usize, FormatError> {
    let trimmed = header.trim();
    let invalid = || FormatError::InvalidHeader {
        header: trimmed.to_owned(),
    };
    if trimmed.is_empty() || !trimmed.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(invalid());
    }
    trimmed.parse::<usize>().map_err(|_| invalid())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::RawEdgeList;
    use rstest::rstest;

    fn rows(raw: &[&[&str]]) -> Vec<Vec<String>> {
        raw.iter()
            .map(|row| row.iter().map(|field| (*field).to_owned()).collect())
            .collect()
    }

    #[rstest]
    #[case("3", 3)]
    #[case(" 0 ", 0)]
    #[case("007\n", 7)]
    fn parse_declared_count_accepts_digits(#[case] raw: &str, #[case] expected: usize) {
        assert_eq!(parse_declared_count(raw).expect("header must parse"), expected);
    }

    #[rstest]
    #[case::empty("")]
    #[case::sign("+3")]
    #[case::negative("-1")]
    #[case::decimal("3.0")]
    #[case::word("three")]
    #[case::overflow("99999999999999999999999999")]
    fn parse_declared_count_rejects_non_literals(#[case] raw: &str) {
        let err = parse_declared_count(raw).expect_err("header must be rejected");
        assert!(matches!(err, FormatError::InvalidHeader { .. }));
    }

    #[test]
    fn row_count_is_checked_before_columns() {
        let raw = RawEdgeList::new("demo", "1", rows(&[&["A", "B", "C"], &["D"]]));
        let err = check_structure(&raw).expect_err("mismatch must fail");
        assert_eq!(
            err,
            FormatError::RowCountMismatch {
                declared: 1,
                actual: 2
            }
        );
    }

    #[rstest]
    #[case::single(&[&["A", "B"] as &[&str], &["C"]], 1, 1)]
    #[case::triple(&[&["A", "B", "C"] as &[&str], &["C", "D"]], 0, 3)]
    fn wrong_column_count_reports_row(
        #[case] raw_rows: &[&[&str]],
        #[case] row: usize,
        #[case] fields: usize,
    ) {
        let raw = RawEdgeList::new("demo", "2", rows(raw_rows));
        let err = check_structure(&raw).expect_err("column count must fail");
        assert_eq!(err, FormatError::ColumnCount { row, fields });
    }

    #[test]
    fn empty_source_fails_first() {
        let err = check_structure(&RawEdgeList::empty("void")).expect_err("empty must fail");
        assert_eq!(err, FormatError::EmptySource);
    }

    #[test]
    fn header_only_source_with_zero_count_is_valid() {
        let raw = RawEdgeList::new("none", "0", Vec::new());
        let list = validate(&raw).expect("zero interactions are valid");
        assert_eq!(list.declared_count(), 0);
        assert!(list.pairs().is_empty());
    }

    #[test]
    fn duplicates_and_self_loops_are_tolerated() {
        let raw = RawEdgeList::from_pairs("dupes", [("A", "B"), ("B", "A"), ("C", "C")]);
        let list = validate(&raw).expect("semantic oddities are not format errors");
        assert_eq!(list.pairs().len(), 3);
    }
}
