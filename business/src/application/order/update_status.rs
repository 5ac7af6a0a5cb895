use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;
use crate::domain::order::repository::OrderRepository;
use crate::domain::order::use_cases::update_status::{
    UpdateOrderStatusParams, UpdateOrderStatusUseCase,
};

pub struct UpdateOrderStatusUseCaseImpl {
    pub repository: Arc<dyn OrderRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateOrderStatusUseCase for UpdateOrderStatusUseCaseImpl {
    async fn execute(&self, params: UpdateOrderStatusParams) -> Result<Order, OrderError> {
        let mut order = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => OrderError::NotFound,
                other => OrderError::Repository(other),
            })?;

        let previous = order.status;
        if previous == params.status {
            return Ok(order);
        }

        order.transition_to(params.status).inspect_err(|_| {
            self.logger.warn(&format!(
                "Rejected status change {} -> {} for order {}",
                previous, params.status, order.id
            ));
        })?;
        self.repository.save(&order).await?;

        self.logger.info(&format!(
            "Order {} moved from {} to {}",
            order.id, previous, order.status
        ));
        Ok(order)
    }
}
