use std::sync::Arc;

use async_trait::async_trait;

use super::resolve::resolve_cart;
use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartView;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::update_quantity::{
    UpdateCartQuantityParams, UpdateCartQuantityUseCase,
};
use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductRepository;

pub struct UpdateCartQuantityUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub product_repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateCartQuantityUseCase for UpdateCartQuantityUseCaseImpl {
    async fn execute(&self, params: UpdateCartQuantityParams) -> Result<CartView, CartError> {
        if params.quantity == 0 {
            return Err(CartError::InvalidQuantity);
        }

        let mut cart = self
            .repository
            .find_by_user(&params.user_id)
            .await?
            .ok_or(CartError::NotFound)?;

        cart.update_quantity(params.selector, params.quantity)?;
        self.repository.save(&cart).await?;

        self.logger.debug(&format!(
            "Cart of {} updated to quantity {}",
            params.user_id, params.quantity
        ));
        resolve_cart(self.product_repository.as_ref(), cart).await
    }
}
