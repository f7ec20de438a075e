use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::types::GeoPoint;

/// Case as presented at the API boundary, media lists expanded to arrays.
#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Case {
    pub id: Uuid,
    pub case_snap: String,
    pub case_desc: String,
    pub case_method: String,
    pub create_user: String,
    pub images: Vec<String>,
    pub videos: Vec<String>,
    pub marker: GeoPoint,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Case list row annotated with the combined media count.
#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CaseSummary {
    pub id: Uuid,
    pub case_snap: String,
    pub case_desc: String,
    pub case_method: String,
    pub create_user: String,
    pub images: Vec<String>,
    pub videos: Vec<String>,
    pub marker: GeoPoint,
    pub media_length: usize,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One row of the manager dashboard join: a case alongside the issue (if
/// any) submitted for it under the requested project.
#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CaseIssueRow {
    pub case_code: Uuid,
    pub case_snap: String,
    pub case_desc: String,
    pub case_media_length: usize,
    pub pro_code: String,
    pub pro_media_length: usize,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
pub struct CreateCaseRequest {
    #[serde(default)]
    pub case_snap: String,
    #[serde(default)]
    pub case_desc: String,
    #[serde(default)]
    pub case_method: String,
    pub create_user: String,
    pub images: Vec<String>,
    pub videos: Vec<String>,
    /// Defaults to a zero-coordinate point when absent.
    #[ts(optional)]
    pub marker: Option<GeoPoint>,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCaseRequest {
    pub id: Uuid,
    #[serde(default)]
    pub case_snap: String,
    #[serde(default)]
    pub case_desc: String,
    #[serde(default)]
    pub case_method: String,
    pub create_user: String,
    pub images: Vec<String>,
    pub videos: Vec<String>,
    #[ts(optional)]
    pub marker: Option<GeoPoint>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListDetailQuery {
    pub project_code: String,
    pub page_size: Option<u32>,
    pub page_num: Option<u32>,
}

impl ListDetailQuery {
    pub fn page(&self) -> crate::types::PageQuery {
        crate::types::PageQuery {
            page_size: self.page_size,
            page_num: self.page_num,
        }
    }
}
