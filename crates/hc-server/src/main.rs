use anyhow::Context;
use hc_server::{app_with_state, config::AppConfig, state::AppState};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer())
        .init();

    let config = AppConfig::load().context("loading configuration")?;
    let addr = config.server.addr();
    let app = app_with_state(AppState::with_config(config.compactor)?);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    tracing::info!(%addr, "hc-server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
