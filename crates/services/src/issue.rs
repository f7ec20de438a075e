//! Issue operations: worker submissions, the audit transition, and the
//! flattened case/issue composite read.

use api_types::{CreateIssueRequest, IssueDetail, IssueStatus};
use db::{
    DBService,
    models::{Issue, IssueData},
};
use sqlx::SqlitePool;
use utils::media::{join_media, split_media};
use uuid::Uuid;

use crate::error::{ServiceError, ServiceResult};

/// Outcome of the insert-or-overwrite submission path. Both are reported as
/// success; the distinction only drives the response message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Inserted,
    Updated,
}

#[derive(Clone)]
pub struct IssueService {
    db: DBService,
}

impl IssueService {
    pub fn new(db: DBService) -> Self {
        Self { db }
    }

    fn pool(&self) -> &SqlitePool {
        &self.db.pool
    }

    /// Insert or overwrite the submission for `(proCode, caseCode)`. An
    /// overwrite replaces the media and submitter and resets the status to
    /// unaudited.
    pub async fn upsert(&self, req: CreateIssueRequest) -> ServiceResult<UpsertOutcome> {
        let data = IssueData {
            images: join_media(&req.images)?,
            videos: join_media(&req.videos)?,
            pro_code: req.pro_code,
            case_code: req.case_code,
            create_user: req.create_user,
        };
        let (_, inserted) = Issue::upsert(self.pool(), &data).await?;
        Ok(if inserted {
            UpsertOutcome::Inserted
        } else {
            UpsertOutcome::Updated
        })
    }

    /// Move one issue to `status`. Any of the five states is a legal
    /// target; only the status column changes.
    pub async fn audit(&self, issue_id: Uuid, status: IssueStatus) -> ServiceResult<()> {
        match Issue::set_status(self.pool(), issue_id, status).await? {
            1 => Ok(()),
            _ => Err(ServiceError::IssueNotFound(issue_id)),
        }
    }

    /// The flattened case/issue composite for one `(proCode, caseCode)`
    /// pair. A missing case is a recoverable miss even when a dangling
    /// issue still references it; a missing issue yields empty media
    /// arrays, never null.
    pub async fn find(&self, pro_code: &str, case_code: Uuid) -> ServiceResult<IssueDetail> {
        let row = Issue::find_detail(self.pool(), pro_code, case_code)
            .await?
            .ok_or(ServiceError::CaseNotFound(case_code))?;
        Ok(IssueDetail {
            case_code: row.case_code,
            case_snap: row.case_snap,
            case_desc: row.case_desc,
            case_method: row.case_method,
            case_marker: row.marker.0,
            case_images: split_media(&row.case_images),
            case_videos: split_media(&row.case_videos),
            issue_id: row.issue_id,
            issue_status: row.issue_status,
            issue_images: row.issue_images.as_deref().map(split_media).unwrap_or_default(),
            issue_videos: row.issue_videos.as_deref().map(split_media).unwrap_or_default(),
        })
    }

    pub async fn delete(&self, id: Uuid) -> ServiceResult<()> {
        match Issue::delete(self.pool(), id).await? {
            1 => Ok(()),
            _ => Err(ServiceError::IssueNotFound(id)),
        }
    }
}
