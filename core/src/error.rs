//! Error types for graph-search-core.
//!
//! An unreachable destination is not an error: queries report it as `None`.

use thiserror::Error;

use crate::graph::{RawId, VertexId};

/// Errors raised by traversal entry points.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("vertex {vertex} out of range for graph with {size} vertices")]
    OutOfRangeVertex { vertex: VertexId, size: usize },
}

/// Errors raised while normalizing an edge list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    #[error("edge {edge}: raw vertex id {id} is negative")]
    NegativeId { edge: usize, id: RawId },
}
