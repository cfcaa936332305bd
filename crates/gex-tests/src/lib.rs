//! Integration tests for the GEX Levels API.
//!
//! By default each test starts its own server in-process on an ephemeral
//! port. Set `API_BASE_URL` to run the same tests against an already running
//! server instead.

use gex_client::{ClientConfig, GexClient};
use gex_levels_backend::api::create_router;
use gex_levels_backend::state::AppState;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

/// Starts a server with default configuration on `127.0.0.1:0`.
///
/// # Returns
/// The base URL of the spawned server.
///
/// # Panics
/// Panics if the listener cannot be bound.
pub async fn spawn_test_server() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Failed to read local address");

    let app = create_router(Arc::new(AppState::new()));
    tokio::spawn(async move {
        axum::serve(listener, app).await.ok();
    });

    format!("http://{}", addr)
}

/// Gets the API base URL: `API_BASE_URL` if set, otherwise a freshly spawned
/// in-process server.
pub async fn get_api_url() -> String {
    match std::env::var("API_BASE_URL") {
        Ok(url) => url,
        Err(_) => spawn_test_server().await,
    }
}

/// Creates a test client configured for the API.
///
/// # Errors
/// Returns error if client creation fails.
pub async fn create_test_client() -> Result<GexClient, gex_client::Error> {
    GexClient::new(ClientConfig {
        base_url: get_api_url().await,
        timeout: Duration::from_secs(10),
    })
}

/// Generates a unique test symbol to avoid conflicts between tests.
#[must_use]
pub fn unique_symbol(prefix: &str) -> String {
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::time::{SystemTime, UNIX_EPOCH};

    static COUNTER: AtomicU64 = AtomicU64::new(0);

    let ts = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64;
    let counter = COUNTER.fetch_add(1, Ordering::Relaxed);

    format!("{}_{}_{}", prefix, ts, counter)
}
