use std::io::{BufReader, BufWriter};
use std::net::{TcpStream, ToSocketAddrs};

use graph_search_core::RawId;

use crate::protocol::{
    read_frame, write_frame, Message, Method, ProtocolError, Response, DEFAULT_MAX_MESSAGE_BYTES,
};

/// A connection that can issue any number of requests in sequence.
pub struct Client {
    reader: BufReader<TcpStream>,
    writer: BufWriter<TcpStream>,
    max_message_bytes: usize,
}

impl Client {
    pub fn connect<A: ToSocketAddrs>(addr: A) -> Result<Self, ProtocolError> {
        let stream = TcpStream::connect(addr)?;
        Ok(Self {
            reader: BufReader::new(stream.try_clone()?),
            writer: BufWriter::new(stream),
            max_message_bytes: DEFAULT_MAX_MESSAGE_BYTES,
        })
    }

    /// Cap on response bodies. Component scans of large graphs may need more
    /// than the default.
    pub fn with_max_message_bytes(mut self, max: usize) -> Self {
        self.max_message_bytes = max;
        self
    }

    pub fn call(&mut self, message: &Message) -> Result<Response, ProtocolError> {
        write_frame(&mut self.writer, message)?;
        read_frame(&mut self.reader, self.max_message_bytes)?.ok_or(ProtocolError::ConnectionClosed)
    }
}

/// One-shot request: connect, send `method` with edge `(u, v)`, wait for the reply.
pub fn send_message<A: ToSocketAddrs>(
    addr: A,
    method: Method,
    u: RawId,
    v: RawId,
) -> Result<Response, ProtocolError> {
    Client::connect(addr)?.call(&Message::new(method, u, v))
}
