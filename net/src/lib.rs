//! graph-search-net: TCP request/response front end for graph-search-core.
//!
//! A client sends a `Message` (method plus edge list); the server applies it
//! to a shared graph and answers with a `Response` carrying a `Traversal`,
//! a component list, the adjacency rows, or an error.

pub mod client;
pub mod config;
mod dispatch;
mod error;
pub mod logging;
pub mod protocol;
pub mod server;
mod state;

pub use client::{send_message, Client};
pub use config::{ConfigError, ServerArgs, Settings};
pub use dispatch::dispatch;
pub use error::Error;
pub use protocol::{Message, Method, ProtocolError, Response};
pub use server::{seed_graph, Server};
pub use state::SharedGraph;
