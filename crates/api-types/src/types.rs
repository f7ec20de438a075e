//! Shared API types used across the case and issue surfaces.

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Audit state of an issue. Integer-encoded on the wire and in storage.
///
/// Every state is reachable from every other state through the audit
/// operation; there is no enforced transition graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[repr(i32)]
#[serde(into = "i32", try_from = "i32")]
pub enum IssueStatus {
    Unaudited = 0,
    Approved = 1,
    Rejected = 2,
    ForceDisabled = 3,
    ForceExpired = 4,
}

impl From<IssueStatus> for i32 {
    fn from(status: IssueStatus) -> Self {
        status as i32
    }
}

impl TryFrom<i32> for IssueStatus {
    type Error = String;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Unaudited),
            1 => Ok(Self::Approved),
            2 => Ok(Self::Rejected),
            3 => Ok(Self::ForceDisabled),
            4 => Ok(Self::ForceExpired),
            other => Err(format!("unknown issue status {other}")),
        }
    }
}

/// GeoJSON-style point marker attached to a case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GeoPoint {
    #[serde(rename = "type", default = "point_kind")]
    pub kind: String,
    pub coordinates: [f64; 2],
}

fn point_kind() -> String {
    "Point".to_string()
}

impl Default for GeoPoint {
    fn default() -> Self {
        Self {
            kind: point_kind(),
            coordinates: [0.0, 0.0],
        }
    }
}

/// Optional offset pagination. Both parameters must be present for a window
/// to apply; otherwise the full result set is returned.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageQuery {
    pub page_size: Option<u32>,
    pub page_num: Option<u32>,
}

impl PageQuery {
    /// `(limit, offset)` with offset = (pageNum - 1) * pageSize.
    pub fn window(&self) -> Option<(i64, i64)> {
        match (self.page_size, self.page_num) {
            (Some(size), Some(num)) if size > 0 && num > 0 => {
                Some((i64::from(size), i64::from(size) * (i64::from(num) - 1)))
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct IdQuery {
    pub id: Uuid,
}

/// Single-object result payload, wrapped the way the legacy clients expect.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct DataResult<T> {
    pub data: T,
}

/// Paginated result payload. `total` counts the whole table, not the page.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct PageResult<T> {
    pub data: Vec<T>,
    pub total: i64,
}
