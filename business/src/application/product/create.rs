use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{NewProductProps, Product};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use crate::domain::shared::assets::{AssetFolder, AssetStoreService};

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub asset_store: Arc<dyn AssetStoreService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Creating product: {}", params.name));

        let mut product = Product::new(NewProductProps {
            name: params.name,
            description: params.description,
            price: params.price,
            image_url: None,
            category: params.category,
        })?;

        if let Some(image) = params.image {
            let uploaded = self.asset_store.upload(&image, AssetFolder::Products).await;
            drop(image);
            let url = uploaded.map_err(|e| {
                self.logger
                    .error(&format!("Product image upload failed: {}", e));
                ProductError::ImageUpload(e)
            })?;
            product.image_url = Some(url);
        }

        self.repository.save(&product).await?;

        self.logger
            .info(&format!("Product created with id: {}", product.id));
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::shared::assets::{AssetError, AssetSource};
    use crate::domain::shared::temp_file::TempFile;
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
            async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError>;
            async fn get_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Product>, RepositoryError>;
            async fn save(&self, product: &Product) -> Result<(), RepositoryError>;
            async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
            async fn count(&self) -> Result<u64, RepositoryError>;
        }
    }

    mock! {
        pub AssetStore {}

        #[async_trait]
        impl AssetStoreService for AssetStore {
            async fn upload(&self, source: &AssetSource, folder: AssetFolder) -> Result<String, AssetError>;
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

    fn spooled_upload() -> (std::path::PathBuf, AssetSource) {
        let path = std::env::temp_dir().join(format!("product-upload-{}", Uuid::new_v4()));
        std::fs::write(&path, b"png-bytes").unwrap();
        (path.clone(), AssetSource::TempFile(TempFile::adopt(path)))
    }

    fn params(image: Option<AssetSource>) -> CreateProductParams {
        CreateProductParams {
            name: "Classic White Tee".to_string(),
            description: Some("Soft cotton".to_string()),
            price: 29.99,
            category: Some("Best Seller".to_string()),
            image,
        }
    }

    #[tokio::test]
    async fn should_create_product_without_image() {
        let mut repo = MockProductRepo::new();
        repo.expect_save().times(1).returning(|_| Ok(()));
        let mut store = MockAssetStore::new();
        store.expect_upload().never();

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(repo),
            asset_store: Arc::new(store),
            logger: mock_logger(),
        };

        let product = use_case.execute(params(None)).await.unwrap();

        assert_eq!(product.name, "Classic White Tee");
        assert_eq!(product.price, 29.99);
        assert!(product.image_url.is_none());
    }

    #[tokio::test]
    async fn should_store_uploaded_url_and_remove_temp_file() {
        let (path, image) = spooled_upload();
        let mut repo = MockProductRepo::new();
        repo.expect_save()
            .withf(|p| p.image_url.as_deref() == Some("https://cdn/tee.webp"))
            .returning(|_| Ok(()));
        let mut store = MockAssetStore::new();
        store
            .expect_upload()
            .withf(|source, folder| {
                matches!(source, AssetSource::TempFile(_)) && *folder == AssetFolder::Products
            })
            .returning(|_, _| Ok("https://cdn/tee.webp".to_string()));

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(repo),
            asset_store: Arc::new(store),
            logger: mock_logger(),
        };

        let product = use_case.execute(params(Some(image))).await.unwrap();

        assert_eq!(product.image_url.as_deref(), Some("https://cdn/tee.webp"));
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn should_remove_temp_file_when_upload_fails() {
        let (path, image) = spooled_upload();
        let mut repo = MockProductRepo::new();
        repo.expect_save().never();
        let mut store = MockAssetStore::new();
        store
            .expect_upload()
            .returning(|_, _| Err(AssetError::UploadFailed));

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(repo),
            asset_store: Arc::new(store),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(Some(image))).await;

        assert!(matches!(result.unwrap_err(), ProductError::ImageUpload(_)));
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn should_reject_blank_name_before_uploading() {
        let (path, image) = spooled_upload();
        let mut store = MockAssetStore::new();
        store.expect_upload().never();

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(MockProductRepo::new()),
            asset_store: Arc::new(store),
            logger: mock_logger(),
        };

        let mut invalid = params(Some(image));
        invalid.name = "  ".to_string();
        let result = use_case.execute(invalid).await;

        assert!(matches!(result.unwrap_err(), ProductError::NameEmpty));
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn should_reject_negative_price() {
        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(MockProductRepo::new()),
            asset_store: Arc::new(MockAssetStore::new()),
            logger: mock_logger(),
        };

        let mut invalid = params(None);
        invalid.price = -1.0;
        let result = use_case.execute(invalid).await;

        assert!(matches!(result.unwrap_err(), ProductError::InvalidPrice));
    }
}
