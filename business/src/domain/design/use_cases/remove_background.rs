use async_trait::async_trait;

use crate::domain::design::errors::DesignError;

pub struct RemoveBackgroundParams {
    pub image_url: String,
}

#[async_trait]
pub trait RemoveBackgroundUseCase: Send + Sync {
    /// Returns the durable URL of the transparent image.
    async fn execute(&self, params: RemoveBackgroundParams) -> Result<String, DesignError>;
}
