use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{Product, ProductChanges};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};
use crate::domain::shared::assets::{AssetFolder, AssetStoreService};

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub asset_store: Arc<dyn AssetStoreService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        self.logger.info(&format!("Updating product: {}", params.id));

        let mut product = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::NotFound,
                other => ProductError::Repository(other),
            })?;

        let mut changes = ProductChanges {
            name: params.name,
            description: params.description,
            price: params.price,
            image_url: None,
            category: params.category,
        };

        // Validate on a scratch copy so a bad field never costs an upload.
        product.clone().apply(changes.clone())?;

        if let Some(image) = params.image {
            let uploaded = self.asset_store.upload(&image, AssetFolder::Products).await;
            drop(image);
            let url = uploaded.map_err(|e| {
                self.logger
                    .error(&format!("Product image upload failed: {}", e));
                ProductError::ImageUpload(e)
            })?;
            changes.image_url = Some(url);
        }

        product.apply(changes)?;
        self.repository.save(&product).await?;

        self.logger.info(&format!("Product updated: {}", product.id));
        Ok(product)
    }
}
