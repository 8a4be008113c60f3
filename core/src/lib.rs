//! graph-search-core: embeddable graph traversal engine.
//!
//! Breadth-first and depth-first search over anything that can answer
//! "what are vertex v's neighbors" and "how many vertices exist" (the
//! `Readable` capability), plus an id normalizer that turns sparse,
//! arbitrarily keyed edge lists into dense adjacency lists, a forward
//! reachability component scan, and a hop-count shortest path query.
//!
//! Every call is synchronous and allocates its own `Traversal`; the graph
//! is only read. The engine takes no locks: callers that share a
//! `Modifiable` graph between threads must serialize mutation against
//! in-flight traversals themselves.

mod convert;
mod error;
mod frontier;
mod graph;
mod query;
mod traversal;

pub use convert::{edge_to_adjacency_list, IdMap, Normalized};
pub use error::{ConversionError, SearchError};
pub use frontier::{Frontier, Queue, Stack};
pub use graph::{
    AdjacencyList, Edge, EdgeListView, IntEdgeList, IntWeightedEdgeList, KeyInterner,
    Modifiable, RawId, Readable, StringEdgeList, StringId, VertexId, Weight, Weighted,
    WeightedAdjacencyList, WeightedEdge, WeightedEdgeListView, DEFAULT_WEIGHT,
};
pub use query::{component_scan, shortest_path};
pub use traversal::{bfs, dfs, Color, Traversal};
