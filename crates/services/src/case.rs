//! Case operations: the manager-facing CRUD surface plus the project
//! dashboard join. Translates between the wire form (media arrays) and the
//! stored form (joined strings) at this boundary.

use api_types::{
    Case as ApiCase, CaseIssueRow, CaseSummary, CreateCaseRequest, PageQuery, PageResult,
    UpdateCaseRequest,
};
use db::{
    DBService,
    models::{Case, CaseData, CaseIssueJoin},
};
use sqlx::SqlitePool;
use utils::media::{join_media, split_media};
use uuid::Uuid;

use crate::error::{ServiceError, ServiceResult};

#[derive(Clone)]
pub struct CaseService {
    db: DBService,
}

impl CaseService {
    pub fn new(db: DBService) -> Self {
        Self { db }
    }

    fn pool(&self) -> &SqlitePool {
        &self.db.pool
    }

    /// All cases, newest first, each annotated with its combined media
    /// count. `total` is the full table count regardless of the window.
    pub async fn list(&self, page: PageQuery) -> ServiceResult<PageResult<CaseSummary>> {
        let rows = Case::find_all(self.pool(), page.window()).await?;
        let total = Case::count(self.pool()).await?;
        Ok(PageResult {
            data: rows.into_iter().map(summary).collect(),
            total,
        })
    }

    /// The manager dashboard join for one project: every case paired with
    /// the issue submitted under `project_code`, if any.
    ///
    /// `total` stays the full case count rather than the joined page count,
    /// matching the legacy dashboard contract.
    pub async fn list_detail(
        &self,
        project_code: &str,
        page: PageQuery,
    ) -> ServiceResult<PageResult<CaseIssueRow>> {
        let rows = Case::find_for_project(self.pool(), project_code, page.window()).await?;
        let total = Case::count(self.pool()).await?;
        Ok(PageResult {
            data: rows
                .into_iter()
                .map(|row| detail_row(row, project_code))
                .collect(),
            total,
        })
    }

    pub async fn query(&self, id: Uuid) -> ServiceResult<ApiCase> {
        Case::find_by_id(self.pool(), id)
            .await?
            .map(api_case)
            .ok_or(ServiceError::CaseNotFound(id))
    }

    pub async fn create(&self, req: CreateCaseRequest) -> ServiceResult<ApiCase> {
        let data = CaseData {
            images: join_media(&req.images)?,
            videos: join_media(&req.videos)?,
            case_snap: req.case_snap,
            case_desc: req.case_desc,
            case_method: req.case_method,
            create_user: req.create_user,
            marker: req.marker.unwrap_or_default(),
        };
        let row = Case::create(self.pool(), &data).await?;
        Ok(api_case(row))
    }

    pub async fn update(&self, req: UpdateCaseRequest) -> ServiceResult<()> {
        let data = CaseData {
            images: join_media(&req.images)?,
            videos: join_media(&req.videos)?,
            case_snap: req.case_snap,
            case_desc: req.case_desc,
            case_method: req.case_method,
            create_user: req.create_user,
            marker: req.marker.unwrap_or_default(),
        };
        match Case::update(self.pool(), req.id, &data).await? {
            1 => Ok(()),
            _ => Err(ServiceError::CaseNotFound(req.id)),
        }
    }

    pub async fn delete(&self, id: Uuid) -> ServiceResult<()> {
        match Case::delete(self.pool(), id).await? {
            1 => Ok(()),
            _ => Err(ServiceError::CaseNotFound(id)),
        }
    }
}

fn api_case(row: Case) -> ApiCase {
    ApiCase {
        id: row.id,
        case_snap: row.case_snap,
        case_desc: row.case_desc,
        case_method: row.case_method,
        create_user: row.create_user,
        images: split_media(&row.images),
        videos: split_media(&row.videos),
        marker: row.marker.0,
        created_at: row.created_at,
        updated_at: row.updated_at,
    }
}

fn summary(row: Case) -> CaseSummary {
    let images = split_media(&row.images);
    let videos = split_media(&row.videos);
    CaseSummary {
        media_length: images.len() + videos.len(),
        id: row.id,
        case_snap: row.case_snap,
        case_desc: row.case_desc,
        case_method: row.case_method,
        create_user: row.create_user,
        images,
        videos,
        marker: row.marker.0,
        created_at: row.created_at,
        updated_at: row.updated_at,
    }
}

fn detail_row(row: CaseIssueJoin, project_code: &str) -> CaseIssueRow {
    let case_media_length =
        split_media(&row.case_images).len() + split_media(&row.case_videos).len();
    let pro_media_length = row.pro_images.as_deref().map_or(0, |m| split_media(m).len())
        + row.pro_videos.as_deref().map_or(0, |m| split_media(m).len());
    CaseIssueRow {
        case_code: row.case_code,
        case_snap: row.case_snap,
        case_desc: row.case_desc,
        case_media_length,
        // Rows with no submission still belong to the requested project.
        pro_code: row.pro_code.unwrap_or_else(|| project_code.to_string()),
        pro_media_length,
        created_at: row.created_at,
    }
}
