use axum::{Router, extract::Multipart};
use services::MediaStore;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{AppState, error::ApiError};

pub mod cases;
pub mod health;
pub mod issues;

pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(health::router())
        .merge(cases::router())
        .merge(issues::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Drain a multipart upload into the media store, returning the stored
/// names. Fields without a filename are skipped.
pub(crate) async fn store_uploads(
    store: &MediaStore,
    subdir: &str,
    mut multipart: Multipart,
) -> Result<Vec<String>, ApiError> {
    let mut stored = Vec::new();
    while let Some(field) = multipart.next_field().await? {
        let Some(name) = field.file_name().map(str::to_owned) else {
            continue;
        };
        let bytes = field.bytes().await?;
        stored.push(store.store(subdir, &name, &bytes).await?);
    }
    Ok(stored)
}
