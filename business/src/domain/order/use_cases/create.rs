use async_trait::async_trait;

use crate::domain::order::errors::OrderError;
use crate::domain::order::model::{CustomerDetails, Order, OrderItem};
use crate::domain::shared::value_objects::UserId;

pub struct CreateOrderParams {
    pub user_id: Option<UserId>,
    pub customer: CustomerDetails,
    pub items: Vec<OrderItem>,
    pub total_amount: f64,
}

#[async_trait]
pub trait CreateOrderUseCase: Send + Sync {
    async fn execute(&self, params: CreateOrderParams) -> Result<Order, OrderError>;
}
