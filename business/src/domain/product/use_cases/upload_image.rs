use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::shared::assets::AssetSource;

pub struct UploadProductImageParams {
    pub image: AssetSource,
}

#[async_trait]
pub trait UploadProductImageUseCase: Send + Sync {
    /// Returns the durable URL of the uploaded image.
    async fn execute(&self, params: UploadProductImageParams) -> Result<String, ProductError>;
}
