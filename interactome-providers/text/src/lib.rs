//! Text provider for delimited interaction files.
//!
//! Reads the count-header format (the number of interactions on the first
//! line, then one two-column row per interaction) into an
//! [`InteractionSource`](interactome_core::InteractionSource), and writes
//! clean exports, component listings and adjacency matrices back to text.

mod delimiter;
mod errors;
mod provider;
mod writer;

pub use delimiter::Delimiter;
pub use errors::TextProviderError;
pub use provider::TextEdgeListProvider;
pub use writer::{write_adjacency_matrix, write_clean_export, write_components};
