use anyhow::Context;
use tracing_subscriber::EnvFilter;

use dealerhub_api::config::ApiConfig;
use dealerhub_api::state::AppState;
use dealerhub_api::{app, db};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if std::env::var("DEALERHUB_LOG_JSON").is_ok_and(|v| v == "1" || v == "true") {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = ApiConfig::from_env();
    tracing::info!(
        bind = %config.bind,
        backend = %config.client.backend_url,
        sentiment = %config.client.sentiment_url,
        "starting dealerhub-api"
    );

    let pool = db::init_pool(&config.database_url)
        .await
        .with_context(|| format!("opening database {}", config.database_url))?;

    let bind = config.bind.clone();
    let state = AppState::new(config, pool).context("building upstream clients")?;

    let listener = tokio::net::TcpListener::bind(&bind)
        .await
        .with_context(|| format!("binding {bind}"))?;
    tracing::info!(addr = %listener.local_addr()?, "listening");

    axum::serve(listener, app(state))
        .await
        .context("server terminated")?;
    Ok(())
}
