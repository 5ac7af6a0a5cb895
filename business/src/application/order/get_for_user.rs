use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;
use crate::domain::order::repository::OrderRepository;
use crate::domain::order::use_cases::get_for_user::{GetUserOrdersParams, GetUserOrdersUseCase};

pub struct GetUserOrdersUseCaseImpl {
    pub repository: Arc<dyn OrderRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetUserOrdersUseCase for GetUserOrdersUseCaseImpl {
    async fn execute(&self, params: GetUserOrdersParams) -> Result<Vec<Order>, OrderError> {
        let orders = self.repository.get_by_user(&params.user_id).await?;
        self.logger.debug(&format!(
            "Fetched {} orders for user {}",
            orders.len(),
            params.user_id
        ));
        Ok(orders)
    }
}
