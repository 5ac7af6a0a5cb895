use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::Design;

#[async_trait]
pub trait DesignRepository: Send + Sync {
    async fn save(&self, design: &Design) -> Result<(), RepositoryError>;
}
