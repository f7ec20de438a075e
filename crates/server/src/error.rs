use axum::{
    Json,
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use services::ServiceError;
use utils::response::ApiEnvelope;

/// Failures crossing the HTTP boundary.
///
/// Expected domain misses stay HTTP 200 and report through the envelope's
/// `errorCode`; storage faults are logged and become a 500; malformed
/// uploads are the client's fault and get a 422.
#[derive(Debug)]
pub enum ApiError {
    Service(ServiceError),
    BadRequest(String),
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        Self::Service(err)
    }
}

impl From<MultipartError> for ApiError {
    fn from(err: MultipartError) -> Self {
        Self::BadRequest(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Service(err) if err.is_domain() => {
                Json(ApiEnvelope::<()>::error(err.to_string())).into_response()
            }
            Self::Service(err) => {
                tracing::error!(error = %err, "storage failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ApiEnvelope::<()>::error("internal server error")),
                )
                    .into_response()
            }
            Self::BadRequest(message) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ApiEnvelope::<()>::error(message)),
            )
                .into_response(),
        }
    }
}
