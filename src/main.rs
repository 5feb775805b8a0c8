mod config;
mod routes;
mod state;

#[tokio::main]
async fn main() {
    // A missing .env file is normal outside local development.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::HostConfig::from_env().expect("invalid host configuration");
    match config.api_upstream_url.as_deref() {
        Some(upstream) => tracing::info!(%upstream, "forwarding /api to upstream"),
        None => tracing::warn!("API_UPSTREAM_URL not set; /api requests will answer 503"),
    }

    let state = state::AppState::from_config(&config).expect("HTTP client init failed");
    let app = routes::leptos_app(state).expect("leptos app init failed");

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, "ledgerly listening");
    axum::serve(listener, app).await.expect("server failed");
}
