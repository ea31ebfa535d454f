//! Backend entry-point: loads settings, wires persistence, and serves the
//! REST API.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use specials_backend::inbound::http::health::HealthState;

use server::{ServerSettings, build_http_state, create_server, spawn_graceful_shutdown};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load_from_iter(std::env::args_os())
        .map_err(|err| color_eyre::eyre::eyre!("failed to load settings: {err}"))?;

    let health_state = web::Data::new(HealthState::new());
    let http_state = build_http_state(&settings).await?;
    let server = create_server(health_state.clone(), http_state, &settings)?;
    spawn_graceful_shutdown(&server, health_state);
    server.await?;
    Ok(())
}
