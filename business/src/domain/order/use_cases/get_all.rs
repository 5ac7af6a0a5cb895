use async_trait::async_trait;

use crate::domain::order::errors::OrderError;
use crate::domain::order::model::OrderWithCustomer;

#[async_trait]
pub trait GetAllOrdersUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<OrderWithCustomer>, OrderError>;
}
