use std::sync::Arc;

use anyhow::Context;
use restaurant_review_backend::{
    config::Config,
    routes,
    services::llm::GeminiClient,
    state::AppState,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "restaurant_review_backend=info,tower_http=info".into());
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = Config::from_env().context("invalid startup configuration")?;
    info!(model = %config.model, "Loaded configuration");

    let http = reqwest::Client::builder()
        .build()
        .context("failed to build HTTP client")?;
    let llm = GeminiClient::new(&config, http);
    let state = Arc::new(AppState::new(Arc::new(llm)));

    let app = routes::create_router().with_state(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    info!("Restaurant review backend running at http://{}", config.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
