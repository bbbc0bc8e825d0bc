mod config;
mod routes;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env().expect("invalid server configuration");
    let app = routes::leptos_app(&config).expect("leptos app init failed");

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port))
        .await
        .expect("failed to bind");

    tracing::info!(host = %config.host, port = config.port, edge_gate = config.edge_gate, "gigboard listening");
    axum::serve(listener, app).await.expect("server failed");
}
