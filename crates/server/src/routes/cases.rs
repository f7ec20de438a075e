use api_types::{
    Case, CaseIssueRow, CaseSummary, CreateCaseRequest, DataResult, IdQuery, ListDetailQuery,
    PageQuery, PageResult, UpdateCaseRequest,
};
use axum::{
    Json, Router,
    extract::{Multipart, Query, State},
    response::Json as ResponseJson,
    routing::{get, post},
};
use services::CASE_MEDIA_DIR;
use utils::response::ApiEnvelope;

use crate::{AppState, error::ApiError, routes::store_uploads};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/case/list", get(list))
        .route("/case/listDetail", get(list_detail))
        .route("/case/query", get(query))
        .route("/case/create", post(create))
        .route("/case/update", post(update))
        .route("/case/delete", get(delete))
        .route("/case/upload", post(upload))
}

async fn list(
    State(state): State<AppState>,
    Query(page): Query<PageQuery>,
) -> Result<ResponseJson<ApiEnvelope<PageResult<CaseSummary>>>, ApiError> {
    let result = state.case_service.list(page).await?;
    Ok(ResponseJson(ApiEnvelope::ok(result, "query succeeded")))
}

async fn list_detail(
    State(state): State<AppState>,
    Query(params): Query<ListDetailQuery>,
) -> Result<ResponseJson<ApiEnvelope<PageResult<CaseIssueRow>>>, ApiError> {
    let result = state
        .case_service
        .list_detail(&params.project_code, params.page())
        .await?;
    Ok(ResponseJson(ApiEnvelope::ok(result, "query succeeded")))
}

async fn query(
    State(state): State<AppState>,
    Query(params): Query<IdQuery>,
) -> Result<ResponseJson<ApiEnvelope<DataResult<Case>>>, ApiError> {
    let case = state.case_service.query(params.id).await?;
    Ok(ResponseJson(ApiEnvelope::ok(
        DataResult { data: case },
        "query succeeded",
    )))
}

async fn create(
    State(state): State<AppState>,
    Json(req): Json<CreateCaseRequest>,
) -> Result<ResponseJson<ApiEnvelope<DataResult<Case>>>, ApiError> {
    let case = state.case_service.create(req).await?;
    Ok(ResponseJson(ApiEnvelope::ok(
        DataResult { data: case },
        "case created",
    )))
}

async fn update(
    State(state): State<AppState>,
    Json(req): Json<UpdateCaseRequest>,
) -> Result<ResponseJson<ApiEnvelope<()>>, ApiError> {
    state.case_service.update(req).await?;
    Ok(ResponseJson(ApiEnvelope::ok_message("case updated")))
}

async fn delete(
    State(state): State<AppState>,
    Query(params): Query<IdQuery>,
) -> Result<ResponseJson<ApiEnvelope<()>>, ApiError> {
    state.case_service.delete(params.id).await?;
    Ok(ResponseJson(ApiEnvelope::ok_message("case deleted")))
}

async fn upload(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<ResponseJson<ApiEnvelope<DataResult<Vec<String>>>>, ApiError> {
    let stored = store_uploads(&state.media_store, CASE_MEDIA_DIR, multipart).await?;
    let message = format!("uploaded {} files", stored.len());
    Ok(ResponseJson(ApiEnvelope::ok(
        DataResult { data: stored },
        message,
    )))
}
