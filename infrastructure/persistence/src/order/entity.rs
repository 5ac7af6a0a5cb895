use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use sqlx::types::Json;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::order::model::{
    Order, OrderCustomer, OrderStatus, OrderWithCustomer, PaymentSlip, PaymentStatus,
};
use business::domain::shared::value_objects::UserId;

use super::document::{CustomerDocument, OrderItemDocument};
use crate::money::from_numeric;

#[derive(Debug, FromRow)]
pub struct OrderEntity {
    pub id: Uuid,
    pub user_id: String,
    pub customer: Json<CustomerDocument>,
    pub items: Json<Vec<OrderItemDocument>>,
    pub total_amount: BigDecimal,
    pub status: String,
    pub payment_slip_url: Option<String>,
    pub payment_status: Option<String>,
    pub payment_uploaded_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl OrderEntity {
    pub fn into_domain(self) -> Result<Order, RepositoryError> {
        let status = self
            .status
            .parse::<OrderStatus>()
            .map_err(|_| RepositoryError::CorruptedDocument)?;

        let payment_slip = match (self.payment_slip_url, self.payment_uploaded_at) {
            (Some(url), Some(uploaded_at)) => Some(PaymentSlip {
                url,
                status: self
                    .payment_status
                    .and_then(|s| s.parse::<PaymentStatus>().ok())
                    .unwrap_or(PaymentStatus::PendingVerification),
                uploaded_at,
            }),
            _ => None,
        };

        Ok(Order::from_repository(
            self.id,
            UserId::new(self.user_id),
            self.customer.0.into(),
            self.items.0.into_iter().map(Into::into).collect(),
            from_numeric(&self.total_amount)?,
            status,
            payment_slip,
            self.created_at,
            self.updated_at,
        ))
    }
}

/// Order row joined with the account that placed it.
#[derive(Debug, FromRow)]
pub struct OrderWithCustomerEntity {
    #[sqlx(flatten)]
    pub order: OrderEntity,
    pub customer_username: Option<String>,
    pub customer_email: Option<String>,
}

impl OrderWithCustomerEntity {
    pub fn into_domain(self) -> Result<OrderWithCustomer, RepositoryError> {
        let customer = self.customer_username.map(|username| OrderCustomer {
            username,
            email: self.customer_email,
        });
        Ok(OrderWithCustomer {
            order: self.order.into_domain()?,
            customer,
        })
    }
}
