//! Request/response messages and their wire framing.
//!
//! Each frame is a 4-byte big-endian body length followed by a JSON body.

use std::io::{self, Read, Write};

use graph_search_core::{RawId, Traversal, VertexId};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default cap on a single frame body.
pub const DEFAULT_MAX_MESSAGE_BYTES: usize = 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
pub enum Method {
    /// Add the edge `(u, v)`.
    Add,
    /// Remove vertex `u`.
    Remove,
    /// BFS from `u`, stopping at `v` (`v < 0`: no stop).
    Bfs,
    /// DFS from `u`, stopping at `v` (`v < 0`: no stop).
    Dfs,
    /// Forward reachability partition. Historical name; this is not an SCC decomposition.
    StrongConnComponents,
    /// Dump the adjacency rows.
    Print,
}

/// A request. Methods that take arguments read them from the first edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub method: Method,
    #[serde(default)]
    pub edges: Vec<(RawId, RawId)>,
}

impl Message {
    pub fn new(method: Method, u: RawId, v: RawId) -> Self {
        Self {
            method,
            edges: vec![(u, v)],
        }
    }

    pub fn bare(method: Method) -> Self {
        Self {
            method,
            edges: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "body", rename_all = "snake_case")]
pub enum Response {
    Ack,
    Traversal(Traversal),
    Components(Vec<Traversal>),
    Graph(Vec<Vec<VertexId>>),
    Error { message: String },
}

#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("malformed message body: {0}")]
    Json(#[from] serde_json::Error),

    #[error("frame of {len} bytes exceeds limit of {max} bytes")]
    FrameTooLarge { len: usize, max: usize },

    #[error("connection closed before a response arrived")]
    ConnectionClosed,
}

/// Serialize `value` and write it as one frame.
pub fn write_frame<W, T>(writer: &mut W, value: &T) -> Result<(), ProtocolError>
where
    W: Write,
    T: Serialize,
{
    let body = serde_json::to_vec(value)?;
    let len = u32::try_from(body.len()).map_err(|_| ProtocolError::FrameTooLarge {
        len: body.len(),
        max: u32::MAX as usize,
    })?;
    writer.write_all(&len.to_be_bytes())?;
    writer.write_all(&body)?;
    writer.flush()?;
    Ok(())
}

/// Read one frame. Returns `Ok(None)` on a clean EOF before the length prefix.
pub fn read_frame<R, T>(reader: &mut R, max_len: usize) -> Result<Option<T>, ProtocolError>
where
    R: Read,
    T: DeserializeOwned,
{
    let mut prefix = [0u8; 4];
    match reader.read_exact(&mut prefix) {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => return Ok(None),
        Err(e) => return Err(e.into()),
    }

    let len = u32::from_be_bytes(prefix) as usize;
    if len > max_len {
        return Err(ProtocolError::FrameTooLarge { len, max: max_len });
    }

    let mut body = vec![0u8; len];
    reader.read_exact(&mut body)?;
    Ok(Some(serde_json::from_slice(&body)?))
}
