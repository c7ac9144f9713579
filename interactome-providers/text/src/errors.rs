use thiserror::Error;

/// Errors raised while reading or writing interaction text.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TextProviderError {
    /// The source is not valid UTF-8.
    #[error("`{name}` is not valid UTF-8 (first invalid byte at offset {valid_up_to})")]
    InvalidUtf8 {
        /// Name of the offending source.
        name: String,
        /// Length of the longest valid prefix.
        valid_up_to: usize,
    },
    /// No delimiter keeps every exported interaction readable as two fields.
    #[error("no delimiter can separate every exported interaction (first conflict: `{vertex}`)")]
    NoSafeDelimiter {
        /// A vertex that collides with the last delimiter tried.
        vertex: String,
    },
    #[error("i/o error: {0}")]
    /// Reading or writing failed.
    Io(#[from] std::io::Error),
}
