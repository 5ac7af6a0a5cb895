use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::user::use_cases::delete::{DeleteUserParams, DeleteUserUseCase};
use business::domain::user::use_cases::get_all::GetAllUsersUseCase;
use business::domain::user::use_cases::update_role::{UpdateUserRoleParams, UpdateUserRoleUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse, MessageResponse, invalid_id};
use crate::api::security::{Authenticated, authorize_admin};
use crate::api::tags::ApiTags;
use crate::api::user::dto::{UpdateRoleRequest, UserResponse};

pub struct UserApi {
    get_all_use_case: Arc<dyn GetAllUsersUseCase>,
    delete_use_case: Arc<dyn DeleteUserUseCase>,
    update_role_use_case: Arc<dyn UpdateUserRoleUseCase>,
}

impl UserApi {
    pub fn new(
        get_all_use_case: Arc<dyn GetAllUsersUseCase>,
        delete_use_case: Arc<dyn DeleteUserUseCase>,
        update_role_use_case: Arc<dyn UpdateUserRoleUseCase>,
    ) -> Self {
        Self {
            get_all_use_case,
            delete_use_case,
            update_role_use_case,
        }
    }
}

/// Account administration (admin only)
#[OpenApi]
impl UserApi {
    /// List all accounts, newest first
    #[oai(path = "/users", method = "get", tag = "ApiTags::Users")]
    async fn get_all_users(&self, auth: Authenticated) -> GetAllUsersResponse {
        if let Err(err) = authorize_admin(&auth.0) {
            return GetAllUsersResponse::Forbidden(err.into_error_response().1);
        }

        match self.get_all_use_case.execute().await {
            Ok(users) => {
                GetAllUsersResponse::Ok(Json(users.into_iter().map(Into::into).collect()))
            }
            Err(err) => GetAllUsersResponse::InternalError(err.into_error_response().1),
        }
    }

    /// Delete an account
    #[oai(path = "/users/:id", method = "delete", tag = "ApiTags::Users")]
    async fn delete_user(&self, auth: Authenticated, id: Path<String>) -> DeleteUserResponse {
        if let Err(err) = authorize_admin(&auth.0) {
            return DeleteUserResponse::Forbidden(err.into_error_response().1);
        }
        let Ok(uuid) = Uuid::parse_str(&id.0) else {
            return DeleteUserResponse::BadRequest(invalid_id("user.invalid_id"));
        };

        match self.delete_use_case.execute(DeleteUserParams { id: uuid }).await {
            Ok(()) => DeleteUserResponse::Ok(MessageResponse::new("User deleted successfully")),
            Err(err) => DeleteUserResponse::InternalError(err.into_error_response().1),
        }
    }

    /// Change an account's role
    #[oai(path = "/users/:id/role", method = "put", tag = "ApiTags::Users")]
    async fn update_role(
        &self,
        auth: Authenticated,
        id: Path<String>,
        body: Json<UpdateRoleRequest>,
    ) -> UpdateRoleResponse {
        if let Err(err) = authorize_admin(&auth.0) {
            return UpdateRoleResponse::Forbidden(err.into_error_response().1);
        }
        let Ok(uuid) = Uuid::parse_str(&id.0) else {
            return UpdateRoleResponse::BadRequest(invalid_id("user.invalid_id"));
        };

        let params = UpdateUserRoleParams {
            id: uuid,
            role: body.0.role.into(),
        };

        match self.update_role_use_case.execute(params).await {
            Ok(user) => UpdateRoleResponse::Ok(Json(user.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => UpdateRoleResponse::NotFound(json),
                    _ => UpdateRoleResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllUsersResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<UserResponse>>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteUserResponse {
    #[oai(status = 200)]
    Ok(Json<MessageResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateRoleResponse {
    #[oai(status = 200)]
    Ok(Json<UserResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
