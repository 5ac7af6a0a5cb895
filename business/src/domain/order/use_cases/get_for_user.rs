use async_trait::async_trait;

use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;
use crate::domain::shared::value_objects::UserId;

pub struct GetUserOrdersParams {
    pub user_id: UserId,
}

#[async_trait]
pub trait GetUserOrdersUseCase: Send + Sync {
    async fn execute(&self, params: GetUserOrdersParams) -> Result<Vec<Order>, OrderError>;
}
