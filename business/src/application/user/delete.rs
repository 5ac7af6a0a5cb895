use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::user::errors::UserError;
use crate::domain::user::repository::UserRepository;
use crate::domain::user::use_cases::delete::{DeleteUserParams, DeleteUserUseCase};

pub struct DeleteUserUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteUserUseCase for DeleteUserUseCaseImpl {
    async fn execute(&self, params: DeleteUserParams) -> Result<(), UserError> {
        self.logger.info(&format!("Deleting user: {}", params.id));

        match self.repository.delete(params.id).await {
            Ok(()) | Err(RepositoryError::NotFound) => {}
            Err(other) => return Err(UserError::Repository(other)),
        }

        self.logger.info(&format!("User deleted: {}", params.id));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::model::{Role, User};
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
    async fn should_acknowledge_delete_of_missing_user() {
        let mut repo = MockUserRepo::new();
        repo.expect_delete()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = DeleteUserUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteUserParams { id: Uuid::new_v4() })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_propagate_database_failure() {
        let mut repo = MockUserRepo::new();
        repo.expect_delete()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let use_case = DeleteUserUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteUserParams { id: Uuid::new_v4() })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            UserError::Repository(RepositoryError::DatabaseError)
        ));
    }
}
