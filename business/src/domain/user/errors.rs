#[derive(Debug, thiserror::Error)]
pub enum UserError {
    #[error("user.username_empty")]
    UsernameEmpty,
    #[error("user.password_empty")]
    PasswordEmpty,
    #[error("user.identifier_missing")]
    IdentifierMissing,
    #[error("user.username_taken")]
    UsernameTaken,
    #[error("user.email_taken")]
    EmailTaken,
    #[error("user.invalid_credentials")]
    InvalidCredentials,
    #[error("user.not_found")]
    NotFound,
    #[error("user.password_hash_failed")]
    PasswordHash,
    #[error("user.token_issuance_failed")]
    TokenIssuance,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
