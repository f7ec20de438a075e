use thiserror::Error;
use utils::media::MediaListError;
use uuid::Uuid;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Failures surfaced by the case and issue services.
///
/// Expected domain misses carry their own variants so the HTTP layer can
/// fold them into the failure envelope; `Database` and `Io` cover
/// unexpected faults and map to a 500.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("case {0} does not exist")]
    CaseNotFound(Uuid),
    #[error("issue {0} does not exist")]
    IssueNotFound(Uuid),
    #[error(transparent)]
    InvalidMedia(#[from] MediaListError),
    #[error(transparent)]
    Database(#[from] sqlx::Error),
    #[error("failed to store upload: {0}")]
    Io(#[from] std::io::Error),
}

impl ServiceError {
    /// Expected misses report through the envelope; everything else is an
    /// internal fault.
    pub fn is_domain(&self) -> bool {
        !matches!(self, Self::Database(_) | Self::Io(_))
    }
}
