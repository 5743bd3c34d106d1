//! Backend entry-point: loads settings, prepares the record store and serves
//! the doctor directory API.

mod server;

use std::env;
use std::net::SocketAddr;

use actix_web::web;
use color_eyre::eyre::{Context, Result, eyre};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use doctor_directory::inbound::http::health::HealthState;
use doctor_directory::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use doctor_directory::settings::DatabaseSettings;
use server::{ServerConfig, create_server};

const DEFAULT_PORT: u16 = 5000;

fn init_tracing() {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }
}

fn listen_port() -> Result<u16> {
    match env::var("PORT") {
        Ok(raw) => raw
            .trim()
            .parse()
            .wrap_err_with(|| format!("PORT must be a TCP port number, got `{raw}`")),
        Err(_) => Ok(DEFAULT_PORT),
    }
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing();

    let settings = DatabaseSettings::load_from_iter(env::args_os())
        .map_err(|err| eyre!("failed to load database settings: {err}"))?;
    let bind_addr = SocketAddr::from(([0, 0, 0, 0], listen_port()?));
    let mut config = ServerConfig::new(bind_addr);

    match settings.database_url()? {
        Some(url) => {
            info!(
                host = settings.host(),
                port = settings.port(),
                database = settings.name(),
                "connecting to PostgreSQL"
            );
            run_pending_migrations(&url).await?;
            let pool =
                DbPool::new(PoolConfig::new(url).with_max_size(settings.pool_size())).await?;
            config = config.with_db_pool(pool);
        }
        None => warn!("DB_USERNAME is not set; falling back to the in-memory store"),
    }

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)?;
    actix_web::rt::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("shutdown requested; failing health probes");
            health_state.mark_draining();
        }
    });
    server.await?;
    Ok(())
}
