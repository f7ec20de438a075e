//! Filesystem-backed storage for uploaded case and issue media.
//!
//! Uploads are renamed to generated identifiers, so a stored name can never
//! carry the media list delimiter regardless of the client's filename.

use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::error::ServiceResult;

pub const CASE_MEDIA_DIR: &str = "images/case";
pub const ISSUE_MEDIA_DIR: &str = "images/issue";

#[derive(Debug, Clone)]
pub struct MediaStore {
    root: PathBuf,
}

impl MediaStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Persist one uploaded file under `subdir`, returning the stored name.
    /// The original name only contributes its extension, and only when the
    /// extension is plain alphanumeric.
    pub async fn store(
        &self,
        subdir: &str,
        original_name: &str,
        bytes: &[u8],
    ) -> ServiceResult<String> {
        let dir = self.root.join(subdir);
        tokio::fs::create_dir_all(&dir).await?;
        let stored = stored_name(original_name);
        tokio::fs::write(dir.join(&stored), bytes).await?;
        Ok(stored)
    }
}

fn stored_name(original_name: &str) -> String {
    let ext = Path::new(original_name)
        .extension()
        .and_then(|e| e.to_str())
        .filter(|e| !e.is_empty() && e.chars().all(|c| c.is_ascii_alphanumeric()));
    match ext {
        Some(ext) => format!("{}.{}", Uuid::new_v4(), ext),
        None => Uuid::new_v4().to_string(),
    }
}
