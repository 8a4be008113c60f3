use graph_search_core::{
    bfs, component_scan, dfs, Modifiable, RawId, Readable, SearchError, VertexId,
};
use thiserror::Error;

use crate::protocol::{Message, Method, Response};

#[derive(Debug, Error)]
enum DispatchError {
    #[error("{0:?} requires an edge argument")]
    MissingEdge(Method),

    #[error("vertex id {0} is negative")]
    NegativeVertex(RawId),

    #[error("vertex {vertex} exceeds the limit of {max} vertices")]
    VertexLimit { vertex: VertexId, max: usize },

    #[error("graph representation does not support modification")]
    NotModifiable,

    #[error(transparent)]
    Search(#[from] SearchError),
}

/// Apply one request to the graph. Failures become `Response::Error`.
///
/// `Add` may grow the vertex range up to `max_vertices` and no further.
pub fn dispatch(graph: &mut dyn Readable, message: &Message, max_vertices: usize) -> Response {
    match run(graph, message, max_vertices) {
        Ok(response) => response,
        Err(e) => {
            tracing::debug!(method = ?message.method, error = %e, "request rejected");
            Response::Error {
                message: e.to_string(),
            }
        }
    }
}

fn run(
    graph: &mut dyn Readable,
    message: &Message,
    max_vertices: usize,
) -> Result<Response, DispatchError> {
    match message.method {
        Method::Add => {
            let (u, v) = first_edge(message)?;
            let (u, v) = (vertex(u)?, vertex(v)?);
            let top = u.max(v);
            if top >= graph.size().max(max_vertices) {
                return Err(DispatchError::VertexLimit {
                    vertex: top,
                    max: max_vertices,
                });
            }
            modifiable(graph)?.add(u, v);
            Ok(Response::Ack)
        }
        Method::Remove => {
            let (u, _) = first_edge(message)?;
            let u = vertex(u)?;
            let size = graph.size();
            if u >= size {
                return Err(SearchError::OutOfRangeVertex { vertex: u, size }.into());
            }
            modifiable(graph)?.remove(u);
            Ok(Response::Ack)
        }
        Method::Bfs => {
            let (u, v) = first_edge(message)?;
            let t = bfs(&*graph, vertex(u)?, destination(v))?;
            Ok(Response::Traversal(t))
        }
        Method::Dfs => {
            let (u, v) = first_edge(message)?;
            let t = dfs(&*graph, vertex(u)?, destination(v))?;
            Ok(Response::Traversal(t))
        }
        Method::StrongConnComponents => Ok(Response::Components(component_scan(&*graph, dfs)?)),
        Method::Print => Ok(Response::Graph(rows(&*graph))),
    }
}

fn first_edge(message: &Message) -> Result<(RawId, RawId), DispatchError> {
    message
        .edges
        .first()
        .copied()
        .ok_or(DispatchError::MissingEdge(message.method))
}

fn vertex(raw: RawId) -> Result<VertexId, DispatchError> {
    VertexId::try_from(raw).map_err(|_| DispatchError::NegativeVertex(raw))
}

/// Negative destination means "no early stop".
fn destination(raw: RawId) -> Option<VertexId> {
    VertexId::try_from(raw).ok()
}

fn modifiable(graph: &mut dyn Readable) -> Result<&mut dyn Modifiable, DispatchError> {
    graph.as_modifiable().ok_or(DispatchError::NotModifiable)
}

fn rows(graph: &dyn Readable) -> Vec<Vec<VertexId>> {
    (0..graph.size())
        .map(|u| (0..graph.len(u)).map(|k| graph.get(u, k)).collect())
        .collect()
}
