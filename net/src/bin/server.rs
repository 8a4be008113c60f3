use clap::Parser;
use graph_search_net::{logging, seed_graph, Error, ServerArgs, Server, Settings};

fn main() -> Result<(), Error> {
    let settings = Settings::try_from(ServerArgs::parse())?;
    logging::init_tracing(settings.log_json).map_err(|e| Error::Logging(e.to_string()))?;

    let graph = seed_graph(&settings)?;
    let server = Server::bind(&settings, graph)?;
    server.serve()
}
