//! Server construction: store selection and actix wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::{App, HttpServer, web};
use tracing::{info, warn};

use roster::domain::EmployeeService;
use roster::domain::ports::EmployeeStore;
use roster::inbound::http::api_scope;
use roster::inbound::http::health::{HealthState, live, ready};
use roster::inbound::http::state::HttpState;
use roster::outbound::memory::InMemoryEmployeeStore;
use roster::outbound::persistence::{DbPool, DieselEmployeeStore, PoolConfig};

/// Pick the employee store from configuration.
///
/// A configured `DATABASE_URL` selects the PostgreSQL adapter; otherwise the
/// server runs on the in-memory store, which is useful for demos and local
/// development but loses all data on restart.
async fn build_store(config: &ServerConfig) -> std::io::Result<Arc<dyn EmployeeStore>> {
    match &config.database_url {
        Some(url) => {
            let pool_config = PoolConfig::new(url.clone()).with_max_size(config.db_pool_size);
            let pool = DbPool::new(pool_config)
                .await
                .map_err(std::io::Error::other)?;
            info!("using the PostgreSQL employee store");
            Ok(Arc::new(DieselEmployeeStore::new(pool)))
        }
        None => {
            warn!("DATABASE_URL not set; falling back to the in-memory employee store");
            Ok(Arc::new(InMemoryEmployeeStore::new()))
        }
    }
}

/// Bind and run the HTTP server until shutdown.
pub async fn run(config: ServerConfig) -> std::io::Result<()> {
    let store = build_store(&config).await?;
    let state = HttpState::new(EmployeeService::new(store));
    let health = web::Data::new(HealthState::new());

    let server_state = state.clone();
    let server_health = health.clone();
    let server = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(server_state.clone()))
            .app_data(server_health.clone())
            .service(api_scope())
            .service(live)
            .service(ready)
    })
    .bind(config.bind_addr)?;

    info!(addr = %config.bind_addr, "listening");
    health.mark_ready();
    server.run().await
}
