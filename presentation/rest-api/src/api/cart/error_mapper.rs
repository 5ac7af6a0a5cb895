use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::cart::errors::CartError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response};

impl IntoErrorResponse for CartError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            CartError::UserIdMissing
            | CartError::CustomProductMissing
            | CartError::InvalidCustomProduct
            | CartError::InlineImageNotAllowed
            | CartError::InvalidQuantity
            | CartError::ItemTargetMissing => (StatusCode::BAD_REQUEST, "ValidationError"),
            CartError::NotFound | CartError::ItemNotFound | CartError::ProductNotFound => {
                (StatusCode::NOT_FOUND, "NotFound")
            }
            CartError::ImageUpload(_) => (StatusCode::INTERNAL_SERVER_ERROR, "UpstreamError"),
            CartError::Repository(_) => (StatusCode::INTERNAL_SERVER_ERROR, "InternalError"),
        };

        error_response(status, name, &self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_zero_quantity_to_validation_error() {
        let (status, json) = CartError::InvalidQuantity.into_error_response();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json.0.message, "cart.invalid_quantity");
    }

    #[test]
    fn should_map_missing_cart_to_not_found() {
        let (status, json) = CartError::NotFound.into_error_response();

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json.0.name, "NotFound");
    }
}
