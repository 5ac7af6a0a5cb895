use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{CartItemSelector, CartView};
use crate::domain::shared::value_objects::UserId;

pub struct UpdateCartQuantityParams {
    pub user_id: UserId,
    pub selector: CartItemSelector,
    pub quantity: u32,
}

#[async_trait]
pub trait UpdateCartQuantityUseCase: Send + Sync {
    async fn execute(&self, params: UpdateCartQuantityParams) -> Result<CartView, CartError>;
}
