use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::order::repository::OrderRepository;
use crate::domain::product::repository::ProductRepository;
use crate::domain::stats::errors::StatsError;
use crate::domain::stats::model::Stats;
use crate::domain::stats::use_cases::get::GetStatsUseCase;
use crate::domain::user::model::Role;
use crate::domain::user::repository::UserRepository;

pub struct GetStatsUseCaseImpl {
    pub user_repository: Arc<dyn UserRepository>,
    pub order_repository: Arc<dyn OrderRepository>,
    pub product_repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetStatsUseCase for GetStatsUseCaseImpl {
    async fn execute(&self) -> Result<Stats, StatsError> {
        let stats = Stats {
            total_users: self.user_repository.count_by_role(Role::User).await?,
            total_orders: self.order_repository.count().await?,
            total_revenue: self.order_repository.total_revenue().await?,
            products_count: self.product_repository.count().await?,
        };

        self.logger.debug(&format!("Dashboard stats: {:?}", stats));
        Ok(stats)
    }
}
