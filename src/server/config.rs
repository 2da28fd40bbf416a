//! Server configuration parsed from flags and the environment.

use std::net::SocketAddr;

use clap::Parser;

/// Command-line and environment configuration for `rosterd`.
#[derive(Debug, Clone, Parser)]
#[command(name = "rosterd", about = "Employee roster REST service")]
pub struct ServerConfig {
    /// Address to bind the HTTP listener to.
    #[arg(long, env = "ROSTER_BIND_ADDR", default_value = "0.0.0.0:8080")]
    pub bind_addr: SocketAddr,

    /// PostgreSQL connection URL. When unset the server falls back to a
    /// non-durable in-memory store.
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Maximum number of pooled database connections.
    #[arg(long, env = "ROSTER_DB_POOL_SIZE", default_value_t = 10)]
    pub db_pool_size: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn defaults_apply_without_arguments() {
        let config = ServerConfig::try_parse_from(["rosterd"]).expect("parse");

        assert_eq!(config.bind_addr, "0.0.0.0:8080".parse().expect("addr"));
        assert_eq!(config.database_url, None);
        assert_eq!(config.db_pool_size, 10);
    }

    #[rstest]
    fn flags_override_defaults() {
        let config = ServerConfig::try_parse_from([
            "rosterd",
            "--bind-addr",
            "127.0.0.1:9000",
            "--database-url",
            "postgres://localhost/roster",
            "--db-pool-size",
            "4",
        ])
        .expect("parse");

        assert_eq!(config.bind_addr, "127.0.0.1:9000".parse().expect("addr"));
        assert_eq!(
            config.database_url.as_deref(),
            Some("postgres://localhost/roster")
        );
        assert_eq!(config.db_pool_size, 4);
    }
}
