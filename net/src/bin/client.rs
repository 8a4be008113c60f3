use clap::Parser;
use graph_search_core::RawId;
use graph_search_net::protocol::DEFAULT_MAX_MESSAGE_BYTES;
use graph_search_net::{Client, Error, Message, Method};

#[derive(Debug, Parser)]
#[command(
    name = "graph-search-client",
    about = "Send one request to a graph-search server",
    allow_negative_numbers = true
)]
struct ClientArgs {
    /// Server address.
    #[arg(long, env = "GRAPH_SEARCH_ADDR", default_value = "127.0.0.1:5000")]
    addr: String,

    /// Largest accepted response body, in bytes.
    #[arg(long, env = "GRAPH_SEARCH_MAX_MESSAGE_BYTES", default_value_t = DEFAULT_MAX_MESSAGE_BYTES)]
    max_message_bytes: usize,

    #[arg(value_enum)]
    method: Method,

    /// First endpoint (source vertex for queries).
    #[arg(default_value_t = 0)]
    u: RawId,

    /// Second endpoint (destination for queries; -1 for none).
    #[arg(default_value_t = -1)]
    v: RawId,
}

fn main() -> Result<(), Error> {
    let args = ClientArgs::parse();
    let response = Client::connect(args.addr.as_str())?
        .with_max_message_bytes(args.max_message_bytes)
        .call(&Message::new(args.method, args.u, args.v))?;
    let rendered = serde_json::to_string_pretty(&response)
        .map_err(|e| Error::Protocol(e.into()))?;
    println!("{}", rendered);
    Ok(())
}
