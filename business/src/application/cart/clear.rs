use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::clear::{ClearCartParams, ClearCartUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct ClearCartUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ClearCartUseCase for ClearCartUseCaseImpl {
    async fn execute(&self, params: ClearCartParams) -> Result<(), CartError> {
        match self.repository.delete_by_user(&params.user_id).await {
            Ok(()) | Err(RepositoryError::NotFound) => {}
            Err(other) => return Err(CartError::Repository(other)),
        }

        self.logger
            .info(&format!("Cart cleared for user: {}", params.user_id));
        Ok(())
    }
}
