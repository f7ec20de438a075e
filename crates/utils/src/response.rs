//! Uniform response envelope shared by every endpoint.
//!
//! Clients distinguish success from failure solely via `errorCode`; the HTTP
//! status stays 200 for expected domain misses.

use serde::Serialize;
use ts_rs::TS;

pub const SUCCESS: i32 = 0;
pub const FAILURE: i32 = -1;

#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ApiEnvelope<T> {
    pub error_code: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
    pub message: String,
}

impl<T> ApiEnvelope<T> {
    pub fn ok(result: T, message: impl Into<String>) -> Self {
        Self {
            error_code: SUCCESS,
            result: Some(result),
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            error_code: FAILURE,
            result: None,
            message: message.into(),
        }
    }
}

impl ApiEnvelope<()> {
    /// Success without a result payload, for mutations that only report.
    pub fn ok_message(message: impl Into<String>) -> Self {
        Self {
            error_code: SUCCESS,
            result: None,
            message: message.into(),
        }
    }
}
