use std::env;

use anyhow::Result;
use lagoon_api::build_app;
use lagoon_observability::init_tracing;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing("lagoon_api");

    let bind = env::var("LAGOON_BIND").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

    let app = build_app().await?;

    let listener = tokio::net::TcpListener::bind(&bind).await?;
    tracing::info!(bind = %bind, "blue lagoon concierge api started");

    axum::serve(listener, app).await?;
    Ok(())
}
