//! Wire-level types shared by the HTTP adapter and the domain services.

pub mod case;
pub mod issue;
pub mod types;

pub use case::{
    Case, CaseIssueRow, CaseSummary, CreateCaseRequest, ListDetailQuery, UpdateCaseRequest,
};
pub use issue::{AuditIssueRequest, CreateIssueRequest, FindIssueQuery, Issue, IssueDetail};
pub use types::{DataResult, GeoPoint, IdQuery, IssueStatus, PageQuery, PageResult};
