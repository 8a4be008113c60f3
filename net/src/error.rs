use graph_search_core::ConversionError;
use thiserror::Error;

use crate::config::ConfigError;
use crate::protocol::ProtocolError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("seed edges rejected: {0}")]
    Conversion(#[from] ConversionError),

    #[error("logging setup failed: {0}")]
    Logging(String),
}
