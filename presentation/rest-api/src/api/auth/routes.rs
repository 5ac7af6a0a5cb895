use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::user::use_cases::login::{LoginParams, LoginUseCase};
use business::domain::user::use_cases::register::{RegisterUserParams, RegisterUserUseCase};

use crate::api::auth::dto::{LoginRequest, LoginResponse, RegisterRequest};
use crate::api::error::{ErrorResponse, IntoErrorResponse, MessageResponse};
use crate::api::tags::ApiTags;

pub struct AuthApi {
    register_use_case: Arc<dyn RegisterUserUseCase>,
    login_use_case: Arc<dyn LoginUseCase>,
}

impl AuthApi {
    pub fn new(
        register_use_case: Arc<dyn RegisterUserUseCase>,
        login_use_case: Arc<dyn LoginUseCase>,
    ) -> Self {
        Self {
            register_use_case,
            login_use_case,
        }
    }
}

/// Account registration and login
#[OpenApi]
impl AuthApi {
    /// Register a new account
    ///
    /// New accounts always get the `user` role.
    #[oai(path = "/register", method = "post", tag = "ApiTags::Auth")]
    async fn register(&self, body: Json<RegisterRequest>) -> RegisterResponse {
        let params = RegisterUserParams {
            username: body.0.username,
            email: body.0.email,
            password: body.0.password,
        };

        match self.register_use_case.execute(params).await {
            Ok(_) => RegisterResponse::Created(MessageResponse::new("User created successfully")),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => RegisterResponse::BadRequest(json),
                    _ => RegisterResponse::InternalError(json),
                }
            }
        }
    }

    /// Log in with username or email
    #[oai(path = "/login", method = "post", tag = "ApiTags::Auth")]
    async fn login(&self, body: Json<LoginRequest>) -> LoginApiResponse {
        let params = LoginParams {
            identifier: body.0.identifier(),
            password: body.0.password,
        };

        match self.login_use_case.execute(params).await {
            Ok(session) => LoginApiResponse::Ok(Json(LoginResponse {
                token: session.token,
                username: session.user.username,
                role: session.user.role.into(),
                user_id: session.user.id.to_string(),
            })),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => LoginApiResponse::BadRequest(json),
                    _ => LoginApiResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum RegisterResponse {
    #[oai(status = 201)]
    Created(Json<MessageResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum LoginApiResponse {
    #[oai(status = 200)]
    Ok(Json<LoginResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
