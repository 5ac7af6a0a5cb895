use chrono::{DateTime, Utc};
use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

use business::domain::user::model::{Role, User};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Enum)]
pub enum RoleDto {
    #[oai(rename = "user")]
    User,
    #[oai(rename = "admin")]
    Admin,
}

impl From<Role> for RoleDto {
    fn from(role: Role) -> Self {
        match role {
            Role::User => RoleDto::User,
            Role::Admin => RoleDto::Admin,
        }
    }
}

impl From<RoleDto> for Role {
    fn from(dto: RoleDto) -> Self {
        match dto {
            RoleDto::User => Role::User,
            RoleDto::Admin => Role::Admin,
        }
    }
}

/// Account without its password hash.
#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    #[oai(skip_serializing_if_is_none)]
    pub email: Option<String>,
    pub role: RoleDto,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username,
            email: user.email,
            role: user.role.into(),
            created_at: user.created_at,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct UpdateRoleRequest {
    pub role: RoleDto,
}
