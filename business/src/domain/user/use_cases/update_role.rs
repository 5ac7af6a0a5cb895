use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::user::errors::UserError;
use crate::domain::user::model::{Role, User};

pub struct UpdateUserRoleParams {
    pub id: Uuid,
    pub role: Role,
}

#[async_trait]
pub trait UpdateUserRoleUseCase: Send + Sync {
    async fn execute(&self, params: UpdateUserRoleParams) -> Result<User, UserError>;
}
