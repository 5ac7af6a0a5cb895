use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            ProductError::NameEmpty | ProductError::InvalidPrice => {
                (StatusCode::BAD_REQUEST, "ValidationError")
            }
            ProductError::NotFound => (StatusCode::NOT_FOUND, "NotFound"),
            ProductError::ImageUpload(_) => (StatusCode::INTERNAL_SERVER_ERROR, "UpstreamError"),
            ProductError::Repository(_) => (StatusCode::INTERNAL_SERVER_ERROR, "InternalError"),
        };

        error_response(status, name, &self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::shared::assets::AssetError;

    #[test]
    fn should_map_upload_failure_to_upstream_error() {
        let (status, json) =
            ProductError::ImageUpload(AssetError::UploadFailed).into_error_response();

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json.0.name, "UpstreamError");
        assert_eq!(json.0.message, "product.image_upload_failed");
    }

    #[test]
    fn should_map_not_found() {
        let (status, json) = ProductError::NotFound.into_error_response();

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json.0.message, "product.not_found");
    }
}
