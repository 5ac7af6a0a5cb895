use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::model::{Order, OrderWithCustomer};

#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn get_by_id(&self, id: Uuid) -> Result<Order, RepositoryError>;
    /// Newest first.
    async fn get_by_user(&self, user_id: &UserId) -> Result<Vec<Order>, RepositoryError>;
    /// Newest first, with the placing account resolved when it exists.
    async fn get_all_with_customers(&self) -> Result<Vec<OrderWithCustomer>, RepositoryError>;
    async fn save(&self, order: &Order) -> Result<(), RepositoryError>;
    async fn count(&self) -> Result<u64, RepositoryError>;
    async fn total_revenue(&self) -> Result<f64, RepositoryError>;
}
