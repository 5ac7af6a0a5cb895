use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::user::errors::UserError;
use crate::domain::user::model::User;
use crate::domain::user::repository::UserRepository;
use crate::domain::user::use_cases::update_role::{UpdateUserRoleParams, UpdateUserRoleUseCase};

pub struct UpdateUserRoleUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateUserRoleUseCase for UpdateUserRoleUseCaseImpl {
    async fn execute(&self, params: UpdateUserRoleParams) -> Result<User, UserError> {
        let mut user = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => UserError::NotFound,
                other => UserError::Repository(other),
            })?;

        if user.role == params.role {
            return Ok(user);
        }

        user.role = params.role;
        self.repository.save(&user).await?;

        self.logger
            .info(&format!("User {} is now {}", user.id, user.role));
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

    #[tokio::test]
    async fn should_promote_user_to_admin() {
        let id = Uuid::new_v4();
        let mut repo = MockUserRepo::new();
        repo.expect_get_by_id().returning(|id| {
            Ok(User::from_repository(
                id,
                "maria".to_string(),
                None,
                "hash".to_string(),
                Role::User,
                chrono::Utc::now(),
            ))
        });
        repo.expect_save()
            .withf(|u| u.role == Role::Admin)
            .times(1)
            .returning(|_| Ok(()));

        let use_case = UpdateUserRoleUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let user = use_case
            .execute(UpdateUserRoleParams {
                id,
                role: Role::Admin,
            })
            .await
            .unwrap();

        assert!(user.is_admin());
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_user() {
        let mut repo = MockUserRepo::new();
        repo.expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = UpdateUserRoleUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateUserRoleParams {
                id: Uuid::new_v4(),
                role: Role::Admin,
            })
            .await;

        assert!(matches!(result.unwrap_err(), UserError::NotFound));
    }
}
