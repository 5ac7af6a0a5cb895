use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;
use crate::domain::order::repository::OrderRepository;
use crate::domain::order::use_cases::attach_payment_slip::{
    AttachPaymentSlipParams, AttachPaymentSlipUseCase,
};
use crate::domain::shared::assets::{AssetFolder, AssetStoreService};

pub struct AttachPaymentSlipUseCaseImpl {
    pub repository: Arc<dyn OrderRepository>,
    pub asset_store: Arc<dyn AssetStoreService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AttachPaymentSlipUseCase for AttachPaymentSlipUseCaseImpl {
    async fn execute(&self, params: AttachPaymentSlipParams) -> Result<Order, OrderError> {
        let slip = params.slip;

        let mut order = self
            .repository
            .get_by_id(params.order_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => OrderError::NotFound,
                other => OrderError::Repository(other),
            })?;

        // Someone else's order is reported exactly like a missing one.
        if let Some(owner) = &params.owner
            && !order.belongs_to(owner)
        {
            self.logger.warn(&format!(
                "User {} tried to attach a slip to order {}",
                owner, order.id
            ));
            return Err(OrderError::NotFound);
        }

        if !order.accepts_payment_slip() {
            return Err(OrderError::InvalidStatusTransition);
        }

        let uploaded = self
            .asset_store
            .upload(&slip, AssetFolder::PaymentSlips)
            .await;
        drop(slip);
        let url = uploaded.map_err(|e| {
            self.logger
                .error(&format!("Payment slip upload failed: {}", e));
            OrderError::SlipUpload(e)
        })?;

        order.attach_payment_slip(url)?;
        self.repository.save(&order).await?;

        self.logger
            .info(&format!("Payment slip attached to order {}", order.id));
        Ok(order)
    }
}
