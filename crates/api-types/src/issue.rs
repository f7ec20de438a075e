use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::types::{GeoPoint, IssueStatus};

/// Issue as presented at the API boundary.
#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Issue {
    pub id: Uuid,
    pub pro_code: String,
    pub case_code: Uuid,
    pub create_user: String,
    pub images: Vec<String>,
    pub videos: Vec<String>,
    #[ts(type = "number")]
    pub issue_status: IssueStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Flattened composite of a case and the issue (if any) submitted for it.
///
/// Issue media always materialize as arrays; a pair with no issue carries
/// empty arrays, never null.
#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct IssueDetail {
    pub case_code: Uuid,
    pub case_snap: String,
    pub case_desc: String,
    pub case_method: String,
    pub case_marker: GeoPoint,
    pub case_images: Vec<String>,
    pub case_videos: Vec<String>,
    #[ts(optional)]
    pub issue_id: Option<Uuid>,
    #[ts(type = "number | null")]
    pub issue_status: Option<IssueStatus>,
    pub issue_images: Vec<String>,
    pub issue_videos: Vec<String>,
}

/// Worker submission. Insert-or-overwrite keyed on `(proCode, caseCode)`;
/// a fresh submission always starts unaudited.
#[derive(Debug, Clone, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
pub struct CreateIssueRequest {
    pub pro_code: String,
    pub case_code: Uuid,
    pub create_user: String,
    pub images: Vec<String>,
    pub videos: Vec<String>,
}

#[derive(Debug, Clone, Copy, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
pub struct AuditIssueRequest {
    pub issue_id: Uuid,
    #[ts(type = "number")]
    pub issue_status: IssueStatus,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FindIssueQuery {
    pub pro_code: String,
    pub case_code: Uuid,
}
