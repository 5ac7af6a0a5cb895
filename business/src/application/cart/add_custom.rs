use std::sync::Arc;

use async_trait::async_trait;

use super::resolve::resolve_cart;
use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{Cart, CartView};
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::add_custom::{AddCustomToCartParams, AddCustomToCartUseCase};
use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductRepository;
use crate::domain::shared::assets::{AssetFolder, AssetSource, AssetStoreService, is_inline_image};

pub struct AddCustomToCartUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub product_repository: Arc<dyn ProductRepository>,
    pub asset_store: Arc<dyn AssetStoreService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddCustomToCartUseCase for AddCustomToCartUseCaseImpl {
    async fn execute(&self, params: AddCustomToCartParams) -> Result<CartView, CartError> {
        let user_id = params
            .user_id
            .filter(|id| !id.is_blank())
            .ok_or(CartError::UserIdMissing)?;
        let mut custom = params
            .custom_product
            .ok_or(CartError::CustomProductMissing)?;
        if params.quantity == 0 {
            return Err(CartError::InvalidQuantity);
        }
        custom.validate()?;

        let inline = custom.image_url.clone().filter(|i| is_inline_image(i));
        if let Some(image) = inline {
            self.logger
                .info(&format!("Uploading inline design image for {}", user_id));
            let url = self
                .asset_store
                .upload(&AssetSource::DataUri(image), AssetFolder::CartDesigns)
                .await
                .map_err(|e| {
                    self.logger
                        .error(&format!("Custom design upload failed: {}", e));
                    CartError::ImageUpload(e)
                })?;
            custom.image_url = Some(url);
        }

        let mut cart = self
            .repository
            .find_by_user(&user_id)
            .await?
            .unwrap_or_else(|| Cart::new(user_id.clone()));

        let item_id = cart.add_custom(custom, params.quantity)?;
        self.repository.save(&cart).await?;

        self.logger
            .info(&format!("Custom item {} added to cart of {}", item_id, user_id));
        resolve_cart(self.product_repository.as_ref(), cart).await
    }
}
