use axum::extract::State;
use axum::Json;
use pollmq_core::SessionId;
use pollmq_proto::RegisterResponse;

use crate::state::AppState;

/// `POST /api/register` — always succeeds; the server generates the id, the
/// caller cannot choose it (§4.5, §9 open question 4).
pub async fn register(State(state): State<AppState>) -> Json<RegisterResponse> {
	let id = uuid::Uuid::new_v4().to_string();
	let session_id = state.broker.register(SessionId::from(id));
	Json(RegisterResponse {
		session_id: session_id.to_string(),
	})
}
