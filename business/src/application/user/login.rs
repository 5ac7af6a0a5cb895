use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::user::errors::UserError;
use crate::domain::user::repository::UserRepository;
use crate::domain::user::services::{PasswordHasherService, TokenService};
use crate::domain::user::use_cases::login::{AuthSession, LoginParams, LoginUseCase};

pub struct LoginUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub password_hasher: Arc<dyn PasswordHasherService>,
    pub token_service: Arc<dyn TokenService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl LoginUseCase for LoginUseCaseImpl {
    async fn execute(&self, params: LoginParams) -> Result<AuthSession, UserError> {
        let identifier = params
            .identifier
            .map(|i| i.trim().to_string())
            .filter(|i| !i.is_empty())
            .ok_or(UserError::IdentifierMissing)?;

        // Unknown account and wrong password are indistinguishable to the caller.
        let Some(user) = self.repository.find_by_identifier(&identifier).await? else {
            self.logger
                .warn(&format!("Login attempt for unknown account: {}", identifier));
            return Err(UserError::InvalidCredentials);
        };

        if !self
            .password_hasher
            .verify(&params.password, &user.password_hash)
            .await
        {
            self.logger
                .warn(&format!("Invalid password for user: {}", user.id));
            return Err(UserError::InvalidCredentials);
        }

        let token = self.token_service.issue(&user).map_err(|e| {
            self.logger
                .error(&format!("Token issuance failed for {}: {}", user.id, e));
            UserError::TokenIssuance
        })?;

        self.logger.info(&format!("User logged in: {}", user.id));
        Ok(AuthSession { token, user })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::user::model::{Role, User};
    use crate::domain::user::services::{TokenClaims, TokenError};
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub UserRepo {}

        #[async_trait]
        impl UserRepository for UserRepo {
            async fn get_all(&self) -> Result<Vec<User>, RepositoryError>;
            async fn get_by_id(&self, id: Uuid) -> Result<User, RepositoryError>;
            async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError>;
            async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError>;
            async fn find_by_identifier(&self, identifier: &str) -> Result<Option<User>, RepositoryError>;
            async fn save(&self, user: &User) -> Result<(), RepositoryError>;
            async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
            async fn count_by_role(&self, role: Role) -> Result<u64, RepositoryError>;
        }
    }

    mock! {
        pub Hasher {}

        #[async_trait]
        impl PasswordHasherService for Hasher {
            async fn hash(&self, password: &str) -> Result<String, UserError>;
            async fn verify(&self, password: &str, hash: &str) -> bool;
        }
    }

    mock! {
        pub Tokens {}

        impl TokenService for Tokens {
            fn issue(&self, user: &User) -> Result<String, TokenError>;
            fn verify(&self, token: &str) -> Result<TokenClaims, TokenError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn stored_user() -> User {
        User::from_repository(
            Uuid::new_v4(),
            "maria".to_string(),
            Some("maria@example.com".to_string()),
            "stored-hash".to_string(),
            Role::Admin,
            chrono::Utc::now(),
        )
    }

    #[tokio::test]
    async fn should_issue_token_for_valid_credentials() {
        let mut repo = MockUserRepo::new();
        repo.expect_find_by_identifier()
            .withf(|i| i == "maria@example.com")
            .returning(|_| Ok(Some(stored_user())));
        let mut hasher = MockHasher::new();
        hasher
            .expect_verify()
            .withf(|p, h| p == "secret" && h == "stored-hash")
            .returning(|_, _| true);
        let mut tokens = MockTokens::new();
        tokens
            .expect_issue()
            .returning(|_| Ok("signed.jwt".to_string()));

        let use_case = LoginUseCaseImpl {
            repository: Arc::new(repo),
            password_hasher: Arc::new(hasher),
            token_service: Arc::new(tokens),
            logger: mock_logger(),
        };

        let session = use_case
            .execute(LoginParams {
                identifier: Some("maria@example.com".to_string()),
                password: "secret".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(session.token, "signed.jwt");
        assert_eq!(session.user.username, "maria");
        assert_eq!(session.user.role, Role::Admin);
    }

    #[tokio::test]
    async fn should_reject_missing_identifier() {
        let use_case = LoginUseCaseImpl {
            repository: Arc::new(MockUserRepo::new()),
            password_hasher: Arc::new(MockHasher::new()),
            token_service: Arc::new(MockTokens::new()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(LoginParams {
                identifier: Some("   ".to_string()),
                password: "secret".to_string(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), UserError::IdentifierMissing));
    }

    #[tokio::test]
    async fn should_reject_unknown_account() {
        let mut repo = MockUserRepo::new();
        repo.expect_find_by_identifier().returning(|_| Ok(None));

        let use_case = LoginUseCaseImpl {
            repository: Arc::new(repo),
            password_hasher: Arc::new(MockHasher::new()),
            token_service: Arc::new(MockTokens::new()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(LoginParams {
                identifier: Some("ghost".to_string()),
                password: "secret".to_string(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), UserError::InvalidCredentials));
    }

    #[tokio::test]
    async fn should_reject_wrong_password() {
        let mut repo = MockUserRepo::new();
        repo.expect_find_by_identifier()
            .returning(|_| Ok(Some(stored_user())));
        let mut hasher = MockHasher::new();
        hasher.expect_verify().returning(|_, _| false);
        let mut tokens = MockTokens::new();
        tokens.expect_issue().never();

        let use_case = LoginUseCaseImpl {
            repository: Arc::new(repo),
            password_hasher: Arc::new(hasher),
            token_service: Arc::new(tokens),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(LoginParams {
                identifier: Some("maria".to_string()),
                password: "wrong".to_string(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), UserError::InvalidCredentials));
    }
}
