//! Domain services composing the case and issue tables.

pub mod case;
pub mod error;
pub mod issue;
pub mod media_store;

pub use case::CaseService;
pub use error::{ServiceError, ServiceResult};
pub use issue::{IssueService, UpsertOutcome};
pub use media_store::{CASE_MEDIA_DIR, ISSUE_MEDIA_DIR, MediaStore};
