use api_types::{
    AuditIssueRequest, CreateIssueRequest, DataResult, FindIssueQuery, IdQuery, IssueDetail,
};
use axum::{
    Json, Router,
    extract::{Multipart, Query, State},
    response::Json as ResponseJson,
    routing::{get, post},
};
use services::{ISSUE_MEDIA_DIR, UpsertOutcome};
use utils::response::ApiEnvelope;

use crate::{AppState, error::ApiError, routes::store_uploads};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/issue/create", post(create))
        .route("/issue/auditIssue", post(audit))
        .route("/issue/find", get(find))
        .route("/issue/delete", get(delete))
        .route("/issue/upload", post(upload))
}

/// Worker submission. Insert-or-overwrite on `(proCode, caseCode)`; both
/// outcomes are success, distinguished only by the message.
async fn create(
    State(state): State<AppState>,
    Json(req): Json<CreateIssueRequest>,
) -> Result<ResponseJson<ApiEnvelope<()>>, ApiError> {
    let outcome = state.issue_service.upsert(req).await?;
    let message = match outcome {
        UpsertOutcome::Inserted => "issue created",
        UpsertOutcome::Updated => "issue updated",
    };
    Ok(ResponseJson(ApiEnvelope::ok_message(message)))
}

async fn audit(
    State(state): State<AppState>,
    Json(req): Json<AuditIssueRequest>,
) -> Result<ResponseJson<ApiEnvelope<()>>, ApiError> {
    state
        .issue_service
        .audit(req.issue_id, req.issue_status)
        .await?;
    Ok(ResponseJson(ApiEnvelope::ok_message("issue audited")))
}

async fn find(
    State(state): State<AppState>,
    Query(params): Query<FindIssueQuery>,
) -> Result<ResponseJson<ApiEnvelope<IssueDetail>>, ApiError> {
    let detail = state
        .issue_service
        .find(&params.pro_code, params.case_code)
        .await?;
    Ok(ResponseJson(ApiEnvelope::ok(detail, "query succeeded")))
}

async fn delete(
    State(state): State<AppState>,
    Query(params): Query<IdQuery>,
) -> Result<ResponseJson<ApiEnvelope<()>>, ApiError> {
    state.issue_service.delete(params.id).await?;
    Ok(ResponseJson(ApiEnvelope::ok_message("issue deleted")))
}

async fn upload(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<ResponseJson<ApiEnvelope<DataResult<Vec<String>>>>, ApiError> {
    let stored = store_uploads(&state.media_store, ISSUE_MEDIA_DIR, multipart).await?;
    let message = format!("uploaded {} files", stored.len());
    Ok(ResponseJson(ApiEnvelope::ok(
        DataResult { data: stored },
        message,
    )))
}
