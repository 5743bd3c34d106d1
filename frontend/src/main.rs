//! Frontend entry-point: loads settings and serves the doctor pages.

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use actix_web::{App, HttpServer, web};
use color_eyre::eyre::{Result, eyre};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use doctors_listing::{FrontendSettings, FrontendState, HttpDirectoryClient, Pages, routes};

const BACKEND_TIMEOUT: Duration = Duration::from_secs(10);

fn init_tracing() {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }
}

#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing();

    let settings = FrontendSettings::load_from_iter(env::args_os())
        .map_err(|err| eyre!("failed to load frontend settings: {err}"))?;
    let backend_url = settings.backend_url()?;
    let client = HttpDirectoryClient::new(backend_url.clone(), BACKEND_TIMEOUT)?;
    let pages = Pages::new().map_err(|err| eyre!("failed to compile templates: {err}"))?;
    let state = web::Data::new(FrontendState::new(Arc::new(client), Arc::new(pages)));

    let bind_addr = SocketAddr::from(([0, 0, 0, 0], settings.port()));
    let server = HttpServer::new(move || App::new().app_data(state.clone()).configure(routes::configure))
        .bind(bind_addr)?
        .run();

    info!(%bind_addr, backend = %backend_url, "doctors listing listening");
    server.await?;
    Ok(())
}
