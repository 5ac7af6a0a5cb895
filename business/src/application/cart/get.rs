use std::sync::Arc;

use async_trait::async_trait;

use super::resolve::resolve_cart;
use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartView;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::get::{GetCartParams, GetCartUseCase};
use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductRepository;

pub struct GetCartUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub product_repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCartUseCase for GetCartUseCaseImpl {
    async fn execute(&self, params: GetCartParams) -> Result<CartView, CartError> {
        match self.repository.find_by_user(&params.user_id).await? {
            Some(cart) => resolve_cart(self.product_repository.as_ref(), cart).await,
            None => {
                self.logger
                    .debug(&format!("No cart yet for user: {}", params.user_id));
                Ok(CartView::empty(params.user_id))
            }
        }
    }
}
