use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::user::errors::UserError;
use crate::domain::user::model::{NewUserProps, User, normalize_email};
use crate::domain::user::repository::UserRepository;
use crate::domain::user::services::PasswordHasherService;
use crate::domain::user::use_cases::register::{RegisterUserParams, RegisterUserUseCase};

pub struct RegisterUserUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub password_hasher: Arc<dyn PasswordHasherService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RegisterUserUseCase for RegisterUserUseCaseImpl {
    async fn execute(&self, params: RegisterUserParams) -> Result<User, UserError> {
        let username = params.username.trim().to_string();
        if username.is_empty() {
            return Err(UserError::UsernameEmpty);
        }
        if params.password.is_empty() {
            return Err(UserError::PasswordEmpty);
        }

        self.logger.info(&format!("Registering user: {}", username));

        if self.repository.find_by_username(&username).await?.is_some() {
            return Err(UserError::UsernameTaken);
        }

        let email = normalize_email(params.email);
        if let Some(ref email) = email
            && self.repository.find_by_email(email).await?.is_some()
        {
            return Err(UserError::EmailTaken);
        }

        let password_hash = self.password_hasher.hash(&params.password).await?;

        let user = User::new(NewUserProps {
            username,
            email,
            password_hash,
        })?;

        // A concurrent registration can still win the unique index.
        self.repository.save(&user).await.map_err(|e| match e {
            RepositoryError::Duplicated => UserError::UsernameTaken,
            other => UserError::Repository(other),
        })?;

        self.logger.info(&format!("User registered with id: {}", user.id));
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::model::Role;
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

    fn existing_user(username: &str) -> User {
        User::from_repository(
            Uuid::new_v4(),
            username.to_string(),
            None,
            "hash".to_string(),
            Role::User,
            chrono::Utc::now(),
        )
    }

    fn hasher() -> MockHasher {
        let mut hasher = MockHasher::new();
        hasher
            .expect_hash()
            .returning(|p| Ok(format!("hashed:{}", p)));
        hasher
    }

    #[tokio::test]
    async fn should_register_user_with_hashed_password() {
        let mut repo = MockUserRepo::new();
        repo.expect_find_by_username().returning(|_| Ok(None));
        repo.expect_find_by_email().returning(|_| Ok(None));
        repo.expect_save().times(1).returning(|_| Ok(()));

        let use_case = RegisterUserUseCaseImpl {
            repository: Arc::new(repo),
            password_hasher: Arc::new(hasher()),
            logger: mock_logger(),
        };

        let user = use_case
            .execute(RegisterUserParams {
                username: " maria ".to_string(),
                email: Some("Maria@Example.com".to_string()),
                password: "secret".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(user.username, "maria");
        assert_eq!(user.email.as_deref(), Some("maria@example.com"));
        assert_eq!(user.password_hash, "hashed:secret");
        assert_eq!(user.role, Role::User);
    }

    #[tokio::test]
    async fn should_reject_taken_username() {
        let mut repo = MockUserRepo::new();
        repo.expect_find_by_username()
            .returning(|u| Ok(Some(existing_user(u))));
        repo.expect_save().never();

        let use_case = RegisterUserUseCaseImpl {
            repository: Arc::new(repo),
            password_hasher: Arc::new(MockHasher::new()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(RegisterUserParams {
                username: "maria".to_string(),
                email: None,
                password: "secret".to_string(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), UserError::UsernameTaken));
    }

    #[tokio::test]
    async fn should_reject_taken_email() {
        let mut repo = MockUserRepo::new();
        repo.expect_find_by_username().returning(|_| Ok(None));
        repo.expect_find_by_email()
            .returning(|_| Ok(Some(existing_user("other"))));

        let use_case = RegisterUserUseCaseImpl {
            repository: Arc::new(repo),
            password_hasher: Arc::new(MockHasher::new()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(RegisterUserParams {
                username: "maria".to_string(),
                email: Some("taken@example.com".to_string()),
                password: "secret".to_string(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), UserError::EmailTaken));
    }

    #[tokio::test]
    async fn should_skip_email_check_when_email_blank() {
        let mut repo = MockUserRepo::new();
        repo.expect_find_by_username().returning(|_| Ok(None));
        repo.expect_find_by_email().never();
        repo.expect_save().returning(|_| Ok(()));

        let use_case = RegisterUserUseCaseImpl {
            repository: Arc::new(repo),
            password_hasher: Arc::new(hasher()),
            logger: mock_logger(),
        };

        let user = use_case
            .execute(RegisterUserParams {
                username: "maria".to_string(),
                email: Some("  ".to_string()),
                password: "secret".to_string(),
            })
            .await
            .unwrap();

        assert!(user.email.is_none());
    }

    #[tokio::test]
    async fn should_reject_empty_password() {
        let use_case = RegisterUserUseCaseImpl {
            repository: Arc::new(MockUserRepo::new()),
            password_hasher: Arc::new(MockHasher::new()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(RegisterUserParams {
                username: "maria".to_string(),
                email: None,
                password: String::new(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), UserError::PasswordEmpty));
    }

    #[tokio::test]
    async fn should_map_duplicate_insert_to_username_taken() {
        let mut repo = MockUserRepo::new();
        repo.expect_find_by_username().returning(|_| Ok(None));
        repo.expect_save()
            .returning(|_| Err(RepositoryError::Duplicated));

        let use_case = RegisterUserUseCaseImpl {
            repository: Arc::new(repo),
            password_hasher: Arc::new(hasher()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(RegisterUserParams {
                username: "maria".to_string(),
                email: None,
                password: "secret".to_string(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), UserError::UsernameTaken));
    }
}
