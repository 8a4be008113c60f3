//! Server settings: CLI flags, each backed by a `GRAPH_SEARCH_*` environment
//! variable, validated against fixed bounds.

use std::net::SocketAddr;

use clap::Parser;
use graph_search_core::{IntEdgeList, RawId};
use thiserror::Error;

use crate::protocol::DEFAULT_MAX_MESSAGE_BYTES;

pub const MIN_MESSAGE_BYTES: usize = 64;
pub const MAX_MESSAGE_BYTES: usize = 64 * 1024 * 1024;

/// Default cap on the vertex range an `Add` may grow the graph to.
pub const DEFAULT_MAX_VERTICES: usize = 1 << 20;
pub const MIN_VERTICES: usize = 1;
pub const MAX_VERTICES: usize = 1 << 28;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid parameter '{name}': {message}")]
    InvalidParameter { name: &'static str, message: String },
}

#[derive(Debug, Clone, Parser)]
#[command(name = "graph-search-server", about = "Serve BFS/DFS queries over TCP")]
pub struct ServerArgs {
    /// Address to listen on.
    #[arg(long, env = "GRAPH_SEARCH_ADDR", default_value = "127.0.0.1:5000")]
    pub addr: String,

    /// Largest accepted request body, in bytes.
    #[arg(long, env = "GRAPH_SEARCH_MAX_MESSAGE_BYTES", default_value_t = DEFAULT_MAX_MESSAGE_BYTES)]
    pub max_message_bytes: usize,

    /// Largest vertex range an `Add` request may grow the graph to.
    #[arg(long, env = "GRAPH_SEARCH_MAX_VERTICES", default_value_t = DEFAULT_MAX_VERTICES)]
    pub max_vertices: usize,

    /// Initial edges as comma-separated `u:v` raw id pairs, normalized at startup.
    #[arg(long, env = "GRAPH_SEARCH_SEED_EDGES", default_value = "")]
    pub seed_edges: String,

    /// Emit logs as JSON lines.
    #[arg(long, env = "GRAPH_SEARCH_LOG_JSON")]
    pub log_json: bool,
}

/// Validated server settings.
#[derive(Debug, Clone)]
pub struct Settings {
    pub addr: SocketAddr,
    pub max_message_bytes: usize,
    pub max_vertices: usize,
    pub seed_edges: IntEdgeList,
    pub log_json: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 5000)),
            max_message_bytes: DEFAULT_MAX_MESSAGE_BYTES,
            max_vertices: DEFAULT_MAX_VERTICES,
            seed_edges: IntEdgeList::default(),
            log_json: false,
        }
    }
}

impl TryFrom<ServerArgs> for Settings {
    type Error = ConfigError;

    fn try_from(args: ServerArgs) -> Result<Self, ConfigError> {
        let addr = args
            .addr
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidParameter {
                name: "addr",
                message: format!("'{}': {}", args.addr, e),
            })?;

        if !(MIN_MESSAGE_BYTES..=MAX_MESSAGE_BYTES).contains(&args.max_message_bytes) {
            return Err(ConfigError::InvalidParameter {
                name: "max_message_bytes",
                message: format!(
                    "{} is outside {}..={}",
                    args.max_message_bytes, MIN_MESSAGE_BYTES, MAX_MESSAGE_BYTES
                ),
            });
        }

        if !(MIN_VERTICES..=MAX_VERTICES).contains(&args.max_vertices) {
            return Err(ConfigError::InvalidParameter {
                name: "max_vertices",
                message: format!(
                    "{} is outside {}..={}",
                    args.max_vertices, MIN_VERTICES, MAX_VERTICES
                ),
            });
        }

        Ok(Self {
            addr,
            max_message_bytes: args.max_message_bytes,
            max_vertices: args.max_vertices,
            seed_edges: parse_seed_edges(&args.seed_edges)?,
            log_json: args.log_json,
        })
    }
}

/// Parse `"15:25,15:50"` into raw edges. Blank input yields an empty list.
pub fn parse_seed_edges(s: &str) -> Result<IntEdgeList, ConfigError> {
    let invalid = |message: String| ConfigError::InvalidParameter {
        name: "seed_edges",
        message,
    };

    s.split(',')
        .map(str::trim)
        .filter(|pair| !pair.is_empty())
        .map(|pair| -> Result<(RawId, RawId), ConfigError> {
            let (u, v) = pair
                .split_once(':')
                .ok_or_else(|| invalid(format!("'{}' is not a u:v pair", pair)))?;
            let parse = |id: &str| {
                id.trim()
                    .parse::<RawId>()
                    .map_err(|e| invalid(format!("'{}': {}", id, e)))
            };
            Ok((parse(u)?, parse(v)?))
        })
        .collect::<Result<Vec<_>, _>>()
        .map(IntEdgeList::from)
}
