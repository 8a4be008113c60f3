use std::io::{BufReader, BufWriter};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::thread;

use graph_search_core::{edge_to_adjacency_list, AdjacencyList, EdgeListView};

use crate::config::Settings;
use crate::dispatch::dispatch;
use crate::error::Error;
use crate::protocol::{read_frame, write_frame, Message, ProtocolError};
use crate::state::SharedGraph;

/// Build the initial graph from the configured seed edges.
///
/// An empty seed list gives an empty, modifiable `AdjacencyList`.
pub fn seed_graph(settings: &Settings) -> Result<SharedGraph, Error> {
    if settings.seed_edges.is_empty() {
        return Ok(SharedGraph::new(Box::new(AdjacencyList::new())));
    }
    let normalized = edge_to_adjacency_list(&settings.seed_edges)?;
    for (dense, raw) in normalized.ids.iter() {
        tracing::debug!(dense, raw, "seed vertex");
    }
    Ok(SharedGraph::new(normalized.graph))
}

/// TCP front end: one thread per connection, every request applied under
/// the shared graph lock.
pub struct Server {
    listener: TcpListener,
    graph: SharedGraph,
    limits: Limits,
}

impl Server {
    pub fn bind(settings: &Settings, graph: SharedGraph) -> Result<Self, Error> {
        let listener = TcpListener::bind(settings.addr)?;
        Ok(Self {
            listener,
            graph,
            limits: Limits {
                max_message_bytes: settings.max_message_bytes,
                max_vertices: settings.max_vertices,
            },
        })
    }

    pub fn local_addr(&self) -> Result<SocketAddr, Error> {
        Ok(self.listener.local_addr()?)
    }

    /// Accept connections forever. A failed accept is logged and skipped.
    pub fn serve(self) -> Result<(), Error> {
        tracing::info!(
            addr = %self.local_addr()?,
            vertices = self.graph.vertex_count(),
            "listening"
        );

        for stream in self.listener.incoming() {
            let stream = match stream {
                Ok(s) => s,
                Err(e) => {
                    tracing::warn!(error = %e, "accept failed");
                    continue;
                }
            };
            let graph = self.graph.clone();
            let limits = self.limits;
            thread::spawn(move || {
                let peer = stream
                    .peer_addr()
                    .map(|a| a.to_string())
                    .unwrap_or_else(|_| "unknown".to_string());
                match handle_connection(stream, &graph, limits) {
                    Ok(served) => tracing::debug!(%peer, served, "connection closed"),
                    Err(e) => tracing::warn!(%peer, error = %e, "connection dropped"),
                }
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
struct Limits {
    max_message_bytes: usize,
    max_vertices: usize,
}

/// Answer frames until the peer closes. Returns the number of requests served.
/// Any decode or I/O failure ends this connection only.
fn handle_connection(
    stream: TcpStream,
    graph: &SharedGraph,
    limits: Limits,
) -> Result<usize, ProtocolError> {
    let mut reader = BufReader::new(stream.try_clone()?);
    let mut writer = BufWriter::new(stream);
    let mut served = 0;

    while let Some(message) = read_frame::<_, Message>(&mut reader, limits.max_message_bytes)? {
        tracing::debug!(method = ?message.method, edges = message.edges.len(), "request");
        let response = graph.with_graph(|g| dispatch(g, &message, limits.max_vertices));
        write_frame(&mut writer, &response)?;
        served += 1;
    }

    Ok(served)
}
