use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::design::errors::DesignError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response};

impl IntoErrorResponse for DesignError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            DesignError::PromptEmpty | DesignError::ImageUrlMissing => {
                (StatusCode::BAD_REQUEST, "ValidationError")
            }
            DesignError::BackgroundRemovalUnavailable => {
                (StatusCode::INTERNAL_SERVER_ERROR, "ConfigError")
            }
            DesignError::EnhancementFailed
            | DesignError::BackgroundRemovalFailed
            | DesignError::AssetUpload(_) => (StatusCode::INTERNAL_SERVER_ERROR, "UpstreamError"),
            DesignError::Repository(_) => (StatusCode::INTERNAL_SERVER_ERROR, "InternalError"),
        };

        error_response(status, name, &self)
    }
}
