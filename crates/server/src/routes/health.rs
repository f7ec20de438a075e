use axum::{Router, response::Json as ResponseJson, routing::get};
use utils::response::ApiEnvelope;

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

async fn health() -> ResponseJson<ApiEnvelope<()>> {
    ResponseJson(ApiEnvelope::ok_message("ok"))
}
