use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::user::errors::UserError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response};

impl IntoErrorResponse for UserError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            UserError::UsernameEmpty
            | UserError::PasswordEmpty
            | UserError::IdentifierMissing
            | UserError::UsernameTaken
            | UserError::EmailTaken => (StatusCode::BAD_REQUEST, "ValidationError"),
            UserError::InvalidCredentials => (StatusCode::BAD_REQUEST, "AuthError"),
            UserError::NotFound => (StatusCode::NOT_FOUND, "NotFound"),
            UserError::PasswordHash | UserError::TokenIssuance | UserError::Repository(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "InternalError")
            }
        };

        error_response(status, name, &self)
    }
}
