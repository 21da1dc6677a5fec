mod config;
mod customer_api;
mod routes;
mod state;

use std::sync::Arc;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env().expect("invalid configuration");

    let customers =
        customer_api::HttpCustomerApi::new(&config.customer_api).expect("customer API client init failed");
    tracing::info!(base_url = customers.base_url(), "customer API client initialized");

    let state = state::AppState::new(Arc::new(customers));

    let app = routes::leptos_app(state).expect("leptos app init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, "customer desk listening");
    axum::serve(listener, app).await.expect("server failed");
}
