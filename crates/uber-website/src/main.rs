//! Demo website for the Uber API client.
//!
//! Serves product, estimate and rider pages backed by the sandbox API, with
//! an OAuth connect flow for rider-scoped pages.

use anyhow::Result;
use clap::Parser;

mod config;
mod cookies;
mod error;
mod html;
mod routes;
mod state;

use config::SiteConfig;
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = SiteConfig::parse();

    let filter = if config.verbose {
        "uber_website=debug,uber_client=debug,uber_oauth=debug,info"
    } else {
        "uber_website=info,uber_client=info,uber_oauth=info,warn"
    };
    use tracing_subscriber::prelude::*;
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_filter(tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();

    let bind_address = config.bind_address;
    let state = AppState::new(config)?;
    let router = routes::router(state);

    tracing::info!(%bind_address, "Serving the Uber demo site");
    let listener = tokio::net::TcpListener::bind(bind_address).await?;
    axum::serve(listener, router).await?;
    Ok(())
}
