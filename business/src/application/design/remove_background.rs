use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::design::errors::DesignError;
use crate::domain::design::services::BackgroundRemoverService;
use crate::domain::design::use_cases::remove_background::{
    RemoveBackgroundParams, RemoveBackgroundUseCase,
};
use crate::domain::logger::Logger;
use crate::domain::shared::assets::{AssetFolder, AssetSource, AssetStoreService};

pub struct RemoveBackgroundUseCaseImpl {
    /// `None` when no provider key is configured.
    pub remover: Option<Arc<dyn BackgroundRemoverService>>,
    pub asset_store: Arc<dyn AssetStoreService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveBackgroundUseCase for RemoveBackgroundUseCaseImpl {
    async fn execute(&self, params: RemoveBackgroundParams) -> Result<String, DesignError> {
        let image_url = params.image_url.trim();
        if image_url.is_empty() {
            return Err(DesignError::ImageUrlMissing);
        }

        let Some(remover) = &self.remover else {
            self.logger
                .error("Background removal requested but no provider key is configured");
            return Err(DesignError::BackgroundRemovalUnavailable);
        };

        self.logger
            .info(&format!("Removing background of {}", image_url));
        let png = remover.remove_background(image_url).await?;

        let url = self
            .asset_store
            .upload(&AssetSource::from_bytes("image/png", &png), AssetFolder::Designs)
            .await
            .map_err(|e| {
                self.logger
                    .error(&format!("Transparent image upload failed: {}", e));
                DesignError::AssetUpload(e)
            })?;

        self.logger.info(&format!("Transparent image stored: {}", url));
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::assets::AssetError;
    use mockall::mock;

    mock! {
        pub Remover {}

        #[async_trait]
        impl BackgroundRemoverService for Remover {
            async fn remove_background(&self, image_url: &str) -> Result<Vec<u8>, DesignError>;
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

    #[tokio::test]
    async fn should_upload_png_as_data_uri() {
        let mut remover = MockRemover::new();
        remover
            .expect_remove_background()
            .withf(|url| url == "https://cdn/design.webp")
            .returning(|_| Ok(vec![137, 80, 78, 71]));
        let mut store = MockAssetStore::new();
        store
            .expect_upload()
            .withf(|source, folder| {
                matches!(source, AssetSource::DataUri(d) if d.starts_with("data:image/png;base64,"))
                    && *folder == AssetFolder::Designs
            })
            .returning(|_, _| Ok("https://cdn/transparent.webp".to_string()));

        let use_case = RemoveBackgroundUseCaseImpl {
            remover: Some(Arc::new(remover)),
            asset_store: Arc::new(store),
            logger: mock_logger(),
        };

        let url = use_case
            .execute(RemoveBackgroundParams {
                image_url: "https://cdn/design.webp".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(url, "https://cdn/transparent.webp");
    }

    #[tokio::test]
    async fn should_fail_without_calling_out_when_unconfigured() {
        let mut store = MockAssetStore::new();
        store.expect_upload().never();

        let use_case = RemoveBackgroundUseCaseImpl {
            remover: None,
            asset_store: Arc::new(store),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(RemoveBackgroundParams {
                image_url: "https://cdn/design.webp".to_string(),
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            DesignError::BackgroundRemovalUnavailable
        ));
    }

    #[tokio::test]
    async fn should_reject_empty_url_before_config_check() {
        let use_case = RemoveBackgroundUseCaseImpl {
            remover: None,
            asset_store: Arc::new(MockAssetStore::new()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(RemoveBackgroundParams {
                image_url: " ".to_string(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), DesignError::ImageUrlMissing));
    }

    #[tokio::test]
    async fn should_propagate_provider_failure() {
        let mut remover = MockRemover::new();
        remover
            .expect_remove_background()
            .returning(|_| Err(DesignError::BackgroundRemovalFailed));

        let use_case = RemoveBackgroundUseCaseImpl {
            remover: Some(Arc::new(remover)),
            asset_store: Arc::new(MockAssetStore::new()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(RemoveBackgroundParams {
                image_url: "https://cdn/design.webp".to_string(),
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            DesignError::BackgroundRemovalFailed
        ));
    }
}
