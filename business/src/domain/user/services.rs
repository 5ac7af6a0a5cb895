use async_trait::async_trait;

use crate::domain::shared::value_objects::UserId;

use super::errors::UserError;
use super::model::{Role, User};

/// Identity carried by a verified bearer token.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenClaims {
    pub user_id: UserId,
    pub role: Role,
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum TokenError {
    #[error("auth.invalid_token")]
    Invalid,
    #[error("auth.expired_token")]
    Expired,
    #[error("auth.token_issuance_failed")]
    Issuance,
}

/// Service port for signing and verifying session tokens.
pub trait TokenService: Send + Sync {
    fn issue(&self, user: &User) -> Result<String, TokenError>;
    fn verify(&self, token: &str) -> Result<TokenClaims, TokenError>;
}

/// Service port for adaptive password hashing.
#[async_trait]
pub trait PasswordHasherService: Send + Sync {
    async fn hash(&self, password: &str) -> Result<String, UserError>;
    async fn verify(&self, password: &str, hash: &str) -> bool;
}
