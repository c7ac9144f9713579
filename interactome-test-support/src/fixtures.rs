//! Canonical interaction networks shared by unit, integration and CLI tests.
//!
//! Fixtures are plain pair slices so this crate stays independent of the
//! graph crates that consume it.

/// Six proteins in one component: `A-B, A-C, B-C, B-D, D-E, D-F`.
pub const TOY_EXAMPLE: &[(&str, &str)] = &[
    ("A", "B"),
    ("A", "C"),
    ("B", "C"),
    ("B", "D"),
    ("D", "E"),
    ("D", "F"),
];

/// Eleven proteins in three components of sizes 6, 2 and 3.
///
/// Depth-first discovery from the lowest vertex yields
/// `[A, G, C, D, E, F]`, `[B, H]`, `[I, J, K]`.
pub const THREE_COMPONENTS: &[(&str, &str)] = &[
    ("A", "G"),
    ("A", "C"),
    ("C", "G"),
    ("G", "D"),
    ("D", "E"),
    ("D", "F"),
    ("B", "H"),
    ("I", "J"),
    ("J", "K"),
];

/// Renders `pairs` as an interaction file: the count line, then one
/// `a<delimiter>b` row per pair.
///
/// # Examples
/// ```
/// use interactome_test_support::fixtures::{TOY_EXAMPLE, render_edge_file};
///
/// let text = render_edge_file(&TOY_EXAMPLE[..2], "\t");
/// assert_eq!(text, "2\nA\tB\nA\tC\n");
/// ```
#[must_use]
pub fn render_edge_file(pairs: &[(&str, &str)], delimiter: &str) -> String {
    let mut text = format!("{}\n", pairs.len());
    for (a, b) in pairs {
        text.push_str(a);
        text.push_str(delimiter);
        text.push_str(b);
        text.push('\n');
    }
    text
}
