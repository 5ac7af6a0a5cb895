use async_trait::async_trait;

use crate::domain::user::errors::UserError;
use crate::domain::user::model::User;

pub struct LoginParams {
    /// Username or email.
    pub identifier: Option<String>,
    pub password: String,
}

#[derive(Debug)]
pub struct AuthSession {
    pub token: String,
    pub user: User,
}

#[async_trait]
pub trait LoginUseCase: Send + Sync {
    async fn execute(&self, params: LoginParams) -> Result<AuthSession, UserError>;
}
