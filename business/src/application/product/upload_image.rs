use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::use_cases::upload_image::{
    UploadProductImageParams, UploadProductImageUseCase,
};
use crate::domain::shared::assets::{AssetFolder, AssetStoreService};

pub struct UploadProductImageUseCaseImpl {
    pub asset_store: Arc<dyn AssetStoreService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UploadProductImageUseCase for UploadProductImageUseCaseImpl {
    async fn execute(&self, params: UploadProductImageParams) -> Result<String, ProductError> {
        let image = params.image;
        let uploaded = self.asset_store.upload(&image, AssetFolder::Products).await;
        drop(image);

        let url = uploaded.map_err(|e| {
            self.logger
                .error(&format!("Standalone image upload failed: {}", e));
            ProductError::ImageUpload(e)
        })?;

        self.logger.info(&format!("Image uploaded: {}", url));
        Ok(url)
    }
}
