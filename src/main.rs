//! Entry point: initialise tracing, parse configuration, run the server.

mod server;

use clap::Parser;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use server::ServerConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let config = ServerConfig::parse();
    server::run(config).await
}
