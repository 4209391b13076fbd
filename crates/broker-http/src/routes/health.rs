use axum::Json;
use serde_json::{json, Value};

/// Ambient liveness probe; not part of the broker's domain contract.
pub async fn healthz() -> Json<Value> {
	Json(json!({ "status": "ok" }))
}
