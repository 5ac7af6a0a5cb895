use std::sync::Arc;

use poem::Request;
use poem::http::StatusCode;
use poem_openapi::payload::Json;
use poem_openapi::{SecurityScheme, auth::ApiKey};

use business::domain::user::model::Role;
use business::domain::user::services::{TokenClaims, TokenError, TokenService};

use crate::api::error::{ErrorResponse, IntoErrorResponse};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessError {
    MissingToken,
    InvalidToken,
    ExpiredToken,
    Forbidden,
}

impl AccessError {
    fn parts(&self) -> (StatusCode, &'static str) {
        match self {
            AccessError::MissingToken => (StatusCode::UNAUTHORIZED, "auth.missing_token"),
            AccessError::InvalidToken => (StatusCode::BAD_REQUEST, "auth.invalid_token"),
            AccessError::ExpiredToken => (StatusCode::BAD_REQUEST, "auth.expired_token"),
            AccessError::Forbidden => (StatusCode::FORBIDDEN, "auth.forbidden"),
        }
    }
}

impl IntoErrorResponse for AccessError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, message) = self.parts();
        (status, ErrorResponse::new("AuthError", message))
    }
}

/// Verifies a raw `Authorization` header value.
pub fn authenticate(tokens: &dyn TokenService, header: &str) -> Result<TokenClaims, AccessError> {
    // The prefix goes before trimming so a bare "Bearer " counts as missing.
    let raw = header.trim_start();
    let token = raw.strip_prefix("Bearer ").unwrap_or(raw).trim();
    if token.is_empty() {
        return Err(AccessError::MissingToken);
    }

    tokens.verify(token).map_err(|e| match e {
        TokenError::Expired => AccessError::ExpiredToken,
        TokenError::Invalid | TokenError::Issuance => AccessError::InvalidToken,
    })
}

pub fn authorize_admin(claims: &TokenClaims) -> Result<(), AccessError> {
    if claims.role == Role::Admin {
        Ok(())
    } else {
        Err(AccessError::Forbidden)
    }
}

/// Admins may act on any user's resources.
pub fn authorize_owner(claims: &TokenClaims, user_id: &str) -> Result<(), AccessError> {
    if claims.role == Role::Admin || claims.user_id.as_str() == user_id.trim() {
        Ok(())
    } else {
        Err(AccessError::Forbidden)
    }
}

/// Bearer token authentication; the `Bearer ` prefix is optional.
#[derive(SecurityScheme)]
#[oai(
    ty = "api_key",
    key_name = "Authorization",
    key_in = "header",
    checker = "access_checker"
)]
pub struct Authenticated(pub TokenClaims);

async fn access_checker(req: &Request, api_key: ApiKey) -> poem::Result<TokenClaims> {
    let Some(tokens) = req.data::<Arc<dyn TokenService>>() else {
        tracing::error!(target: "PromptPrint -- ", "token service missing from request data");
        return Err(poem::Error::from_status(StatusCode::INTERNAL_SERVER_ERROR));
    };

    authenticate(tokens.as_ref(), &api_key.key).map_err(|err| {
        let (status, message) = err.parts();
        tracing::warn!(target: "PromptPrint -- ", "rejected credential: {}", message);
        let body = serde_json::json!({ "name": "AuthError", "message": message });
        poem::Error::from_response(
            poem::Response::builder()
                .status(status)
                .content_type("application/json")
                .body(body.to_string()),
        )
    })
}
