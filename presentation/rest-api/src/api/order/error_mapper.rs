use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::order::errors::OrderError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response};

impl IntoErrorResponse for OrderError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            OrderError::UserIdMissing
            | OrderError::ItemsEmpty
            | OrderError::InvalidItem
            | OrderError::InlineImageNotAllowed
            | OrderError::InvalidTotal
            | OrderError::InvalidStatusTransition => (StatusCode::BAD_REQUEST, "ValidationError"),
            OrderError::NotFound => (StatusCode::NOT_FOUND, "NotFound"),
            OrderError::SlipUpload(_) => (StatusCode::INTERNAL_SERVER_ERROR, "UpstreamError"),
            OrderError::Repository(_) => (StatusCode::INTERNAL_SERVER_ERROR, "InternalError"),
        };

        error_response(status, name, &self)
    }
}
