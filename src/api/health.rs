use axum::response::Json;
use serde_json::{Value, json};

/// Liveness probe for the callback server. Reports the binary name and
/// version so a stray process on the callback port is identifiable.
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
