use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{CartView, CustomProduct};
use crate::domain::shared::value_objects::UserId;

pub struct AddCustomToCartParams {
    pub user_id: Option<UserId>,
    /// `image_url` may still be an inline data URI here.
    pub custom_product: Option<CustomProduct>,
    pub quantity: u32,
}

#[async_trait]
pub trait AddCustomToCartUseCase: Send + Sync {
    async fn execute(&self, params: AddCustomToCartParams) -> Result<CartView, CartError>;
}
