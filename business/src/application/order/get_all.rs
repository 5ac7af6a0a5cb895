use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::order::errors::OrderError;
use crate::domain::order::model::OrderWithCustomer;
use crate::domain::order::repository::OrderRepository;
use crate::domain::order::use_cases::get_all::GetAllOrdersUseCase;

pub struct GetAllOrdersUseCaseImpl {
    pub repository: Arc<dyn OrderRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllOrdersUseCase for GetAllOrdersUseCaseImpl {
    async fn execute(&self) -> Result<Vec<OrderWithCustomer>, OrderError> {
        let orders = self.repository.get_all_with_customers().await?;
        let orphaned = orders.iter().filter(|o| o.customer.is_none()).count();
        if orphaned > 0 {
            self.logger
                .warn(&format!("{} orders reference unknown accounts", orphaned));
        }
        Ok(orders)
    }
}
