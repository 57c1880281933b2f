use axum::Json;
use serde_json::{Value, json};

/// Liveness check.
#[utoipa::path(
    get,
    path = "/healthz",
    responses(
        (status = 200, description = "Service is healthy"),
    ),
    tag = "health"
)]
pub async fn healthz() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
