//! This binary serves the waste collection calendar feed over HTTP.
//!
//! The path and query string are
//! `/calendar?postCode=<post_code>&houseNumber=<house_number>[&houseLetter=<letter>]`.

use std::{env, net::SocketAddr, sync::Arc};

use axum::{routing::get, Router};
use tracing_subscriber::EnvFilter;
use twc_core::{config::ApiConfig, waste_client::WasteApiClient};

mod route;

static PORT_VAR: &str = "TWC_PORT";
static DEFAULT_PORT: u16 = 8008;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let client = Arc::new(WasteApiClient::new(ApiConfig::from_env()));
    let app = Router::new()
        .route("/calendar", get(route::calendar::handler))
        .with_state(client);
    let addr = SocketAddr::from(([0, 0, 0, 0], port()));
    tracing::info!(%addr, "serving calendar feed");
    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .unwrap();
}

fn port() -> u16 {
    env::var(PORT_VAR)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(DEFAULT_PORT)
}
