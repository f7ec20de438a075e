//! HTTP adapter over the case and issue services.

use std::path::Path;

use axum::Router;
use db::DBService;
use services::{CaseService, IssueService, MediaStore};

pub mod config;
pub mod error;
pub mod routes;

/// Shared handles threaded through every route handler.
#[derive(Clone)]
pub struct AppState {
    pub case_service: CaseService,
    pub issue_service: IssueService,
    pub media_store: MediaStore,
}

impl AppState {
    pub fn new(db: DBService, asset_dir: impl AsRef<Path>) -> Self {
        Self {
            case_service: CaseService::new(db.clone()),
            issue_service: IssueService::new(db),
            media_store: MediaStore::new(asset_dir.as_ref()),
        }
    }
}

pub fn app(state: AppState) -> Router {
    routes::router(state)
}
