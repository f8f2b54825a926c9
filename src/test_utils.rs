use crate::router::create_router;
use crate::schemas::AppState;
use axum::{Json, Router, http::StatusCode, routing::get, routing::post};
use serde_json::{Value, json};
use std::path::Path;
use tokio::net::TcpListener;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Initialize tracing for tests with output to STDERR.
///
/// The log level is taken from RUST_LOG, defaulting to WARN.
pub fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
    let log_level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|level| match level.to_uppercase().as_str() {
            "ERROR" => Some(Level::ERROR),
            "WARN" => Some(Level::WARN),
            "INFO" => Some(Level::INFO),
            "DEBUG" => Some(Level::DEBUG),
            "TRACE" => Some(Level::TRACE),
            _ => None,
        })
        .unwrap_or(Level::WARN);

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_default(subscriber)
}

/// Create axum app serving `static_dir` for testing
pub fn setup_test_app(static_dir: &Path) -> Router {
    create_router(AppState::new(static_dir.to_path_buf()))
}

async fn stub_predict(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    if body["carrier"] == "ZZ" {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"success": false, "error": "Unknown carrier: ZZ"})),
        );
    }

    (
        StatusCode::OK,
        Json(json!({
            "success": true,
            "prediction": {
                "total_delay_minutes": 42.3,
                "average_delay_per_flight": 10.1,
                "delay_category": "Moderate Delay"
            }
        })),
    )
}

async fn stub_insights() -> Json<Value> {
    Json(json!({
        "success": true,
        "insights": {
            "best_model": "Random Forest",
            "model_performance": {"r2": 0.873, "mae": 12.4},
            "monthly_delays": {"1": 20.5, "7": 31.0, "12": 25.25},
            "carrier_delays": {"AA": 18.0, "DL": 9.5, "WN": 14.0},
            "airport_delays": {"ATL": 40.0, "ORD": 55.0, "SEA": 12.0}
        }
    }))
}

async fn stub_carriers() -> Json<Value> {
    Json(json!({"success": true, "carriers": ["AA", "DL"]}))
}

async fn stub_airports() -> Json<Value> {
    Json(json!({"success": false, "error": "airport list unavailable"}))
}

/// Spawns a stand-in prediction service on an ephemeral port and returns its base URL.
///
/// `/api/airports` always fails so callers exercise the built-in list.
pub async fn spawn_stub_service() -> String {
    let app = Router::new()
        .route("/api/predict", post(stub_predict))
        .route("/api/insights", get(stub_insights))
        .route("/api/carriers", get(stub_carriers))
        .route("/api/airports", get(stub_airports));

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stub service");
    let address = listener.local_addr().expect("Stub service has no address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Stub service failed");
    });

    format!("http://{}", address)
}

/// An address nothing listens on.
pub async fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind probe listener");
    let address = listener.local_addr().expect("Probe listener has no address");
    drop(listener);
    format!("http://{}", address)
}
