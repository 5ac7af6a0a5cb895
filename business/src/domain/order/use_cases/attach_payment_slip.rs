use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;
use crate::domain::shared::assets::AssetSource;
use crate::domain::shared::value_objects::UserId;

pub struct AttachPaymentSlipParams {
    pub order_id: Uuid,
    /// When set, the order must belong to this user.
    pub owner: Option<UserId>,
    pub slip: AssetSource,
}

#[async_trait]
pub trait AttachPaymentSlipUseCase: Send + Sync {
    async fn execute(&self, params: AttachPaymentSlipParams) -> Result<Order, OrderError>;
}
