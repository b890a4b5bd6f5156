//! Unitconv MCP Server
//!
//! Line-delimited JSON-RPC over stdio. Requests arrive one per line on stdin,
//! responses leave one per line on stdout, logs go to stderr.
//!
//! Tools:
//! - list_categories: List unit categories
//! - list_units: List the units of a category
//! - convert: Convert a value between two units
//! - convert_expression: Convert "1000 m -> km" style text
//!
//! Environment:
//! - UNITCONV_PRECISION: decimals in formatted results (default 8)
//! - RUST_LOG: log filter (default info)

mod config;
mod protocol;
mod tools;
mod transport;

use std::io::{self, IsTerminal};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use config::ServerConfig;
use protocol::{Server, PROTOCOL_VERSION, SERVER_VERSION};

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();
}

fn main() {
    init_logging();

    let config = ServerConfig::from_env();
    let server = Server::new(config);

    info!(version = SERVER_VERSION, protocol = PROTOCOL_VERSION, "Unitconv MCP server started");
    info!(
        precision = server.config.precision,
        categories = server.converter.catalog().list_categories().len(),
        "configuration loaded"
    );

    info!("server ready, waiting for requests");

    if let Err(e) = transport::serve(&server, io::stdin().lock(), io::stdout().lock()) {
        error!(error = %e, "stdio transport failed");
    }

    info!("server shutting down");
}
