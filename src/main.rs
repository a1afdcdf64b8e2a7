mod api_doc;
mod app;
mod config;
mod handlers;
mod routes;

use anyhow::Context;
use config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    tracing::info!("hello-backend starting");

    let config = Config::from_env()?;
    config.log_startup();

    let router = app::app(&config)?;

    let addr = format!("{}:{}", config.service_host, config.service_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    axum::serve(listener, router).await?;

    Ok(())
}
