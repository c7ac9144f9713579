//! Error types for the interactome core library.
//!
//! Defines the error enums exposed by the public API, their stable
//! machine-readable codes, and a convenient result alias.

use std::{fmt, sync::Arc};

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// A structural violation detected while validating a raw interaction list.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum FormatError {
    /// The source contained no bytes at all.
    #[error("interaction source is empty")]
    EmptySource,
    /// The first line was not a non-negative integer literal.
    #[error("header `{header}` is not a non-negative integer row count")]
    InvalidHeader {
        /// The offending header, stripped of surrounding whitespace.
        header: String,
    },
    /// The header announced a different number of rows than were supplied.
    #[error("header declares {declared} interactions but {actual} rows were found")]
    RowCountMismatch {
        /// Row count announced by the header.
        declared: usize,
        /// Number of data rows actually present.
        actual: usize,
    },
    /// A data row did not contain exactly two fields.
    #[error("row {row} has {fields} fields but exactly 2 are required")]
    ColumnCount {
        /// Zero-based index of the data row (the header is not counted).
        row: usize,
        /// Number of fields found on the row.
        fields: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`FormatError`] variants.
    enum FormatErrorCode for FormatError {
        /// The source contained no bytes at all.
        EmptySource => EmptySource => "FORMAT_EMPTY_SOURCE",
        /// The first line was not a non-negative integer literal.
        InvalidHeader => InvalidHeader { .. } => "FORMAT_INVALID_HEADER",
        /// The header announced a different number of rows than were supplied.
        RowCountMismatch => RowCountMismatch { .. } => "FORMAT_ROW_COUNT_MISMATCH",
        /// A data row did not contain exactly two fields.
        ColumnCount => ColumnCount { .. } => "FORMAT_COLUMN_COUNT",
    }
}

/// Error type produced when building or querying an interaction network.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum InteractomeError {
    /// The raw interaction list failed structural validation.
    #[error("interaction source `{data_source}` is malformed: {error}")]
    InvalidFormat {
        /// Identifier for the rejected source.
        data_source: Arc<str>,
        #[source]
        /// Underlying structural violation.
        error: FormatError,
    },
    /// A query named a vertex that is not part of the network.
    #[error("vertex `{vertex}` is not part of the network")]
    UnknownVertex {
        /// The identifier that could not be found.
        vertex: Arc<str>,
    },
    /// A generator parameter was outside its accepted range.
    #[error("invalid value for `{parameter}`: {reason}")]
    InvalidParameter {
        /// Name of the rejected parameter.
        parameter: &'static str,
        /// Human-readable explanation of the accepted range.
        reason: String,
    },
    /// The computation would divide by zero on this network.
    #[error("`{operation}` is undefined for a network with {vertices} vertices and {edges} edges")]
    DegenerateGraph {
        /// The operation that could not be evaluated.
        operation: &'static str,
        /// Vertex count of the network at the time of the call.
        vertices: usize,
        /// Edge count of the network at the time of the call.
        edges: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`InteractomeError`] variants.
    enum InteractomeErrorCode for InteractomeError {
        /// The raw interaction list failed structural validation.
        InvalidFormat => InvalidFormat { .. } => "INTERACTOME_INVALID_FORMAT",
        /// A query named a vertex that is not part of the network.
        UnknownVertex => UnknownVertex { .. } => "INTERACTOME_UNKNOWN_VERTEX",
        /// A generator parameter was outside its accepted range.
        InvalidParameter => InvalidParameter { .. } => "INTERACTOME_INVALID_PARAMETER",
        /// The computation would divide by zero on this network.
        DegenerateGraph => DegenerateGraph { .. } => "INTERACTOME_DEGENERATE_GRAPH",
    }
}

impl InteractomeError {
    /// Retrieve the inner [`FormatErrorCode`] when the error originated in validation.
    pub const fn format_code(&self) -> Option<FormatErrorCode> {
        match self {
            Self::InvalidFormat { error, .. } => Some(error.code()),
            _ => None,
        }
    }

    pub(crate) fn unknown_vertex(vertex: &str) -> Self {
        Self::UnknownVertex {
            vertex: Arc::from(vertex),
        }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, InteractomeError>;
