//! Media list codec.
//!
//! Image and video lists are stored as a single delimiter-joined string and
//! presented as arrays at the API boundary. The round trip is lossless as
//! long as no name contains the delimiter, so names are validated on join.

use thiserror::Error;

/// Separator used by the on-disk encoding.
pub const MEDIA_DELIMITER: char = ',';

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MediaListError {
    #[error("media name {0:?} contains the reserved delimiter {MEDIA_DELIMITER:?}")]
    DelimiterInName(String),
    #[error("media name must not be empty")]
    EmptyName,
}

/// Join media names into the stored form. An empty list becomes the empty
/// string.
pub fn join_media(names: &[String]) -> Result<String, MediaListError> {
    for name in names {
        if name.is_empty() {
            return Err(MediaListError::EmptyName);
        }
        if name.contains(MEDIA_DELIMITER) {
            return Err(MediaListError::DelimiterInName(name.clone()));
        }
    }
    Ok(names.join(&MEDIA_DELIMITER.to_string()))
}

/// Split the stored form back into names. The empty string decodes to an
/// empty list, never `vec![""]`.
pub fn split_media(joined: &str) -> Vec<String> {
    if joined.is_empty() {
        return Vec::new();
    }
    joined.split(MEDIA_DELIMITER).map(str::to_owned).collect()
}
