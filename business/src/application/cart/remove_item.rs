use std::sync::Arc;

use async_trait::async_trait;

use super::resolve::resolve_cart;
use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartView;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::remove_item::{RemoveCartItemParams, RemoveCartItemUseCase};
use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductRepository;

pub struct RemoveCartItemUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub product_repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveCartItemUseCase for RemoveCartItemUseCaseImpl {
    async fn execute(&self, params: RemoveCartItemParams) -> Result<CartView, CartError> {
        let mut cart = self
            .repository
            .find_by_user(&params.user_id)
            .await?
            .ok_or(CartError::NotFound)?;

        if cart.remove_item(params.item_id) {
            self.repository.save(&cart).await?;
            self.logger.info(&format!(
                "Removed item {} from cart of {}",
                params.item_id, params.user_id
            ));
        } else {
            self.logger.debug(&format!(
                "Item {} not in cart of {}, nothing removed",
                params.item_id, params.user_id
            ));
        }

        resolve_cart(self.product_repository.as_ref(), cart).await
    }
}
