//! Interactome core library.
//!
//! Builds an undirected protein-protein interaction network from a validated
//! edge list and answers structural queries over it: degrees, density, local
//! clustering and connected components. With the `random` feature (on by
//! default) the network can be regenerated from Erdős–Rényi or
//! Barabási–Albert models over the same vertex set.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod builder;
mod components;
mod error;
mod export;
#[cfg(feature = "random")]
mod generate;
mod graph;
mod matrix;
mod source;
mod statistics;
#[cfg(test)]
mod test_utils;
mod validate;

#[cfg(feature = "random")]
#[cfg_attr(docsrs, doc(cfg(feature = "random")))]
pub use crate::generate::{BarabasiAlbert, ErdosRenyi, TopologyGenerator};
pub use crate::{
    builder::GraphModelBuilder,
    components::ComponentPartition,
    error::{FormatError, FormatErrorCode, InteractomeError, InteractomeErrorCode, Result},
    export::CleanExport,
    graph::{Edge, GraphModel, Topology, TopologyBuilder, Vertex},
    matrix::AdjacencyMatrix,
    source::{InteractionSource, RawEdgeList},
    statistics::MaxDegree,
    validate::{ValidatedEdgeList, validate},
};
