use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::errors::OrderError;
use crate::domain::cart::model::CustomProduct;
use crate::domain::shared::assets::is_inline_image;
use crate::domain::shared::value_objects::UserId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Pending,
    PaymentVerification,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }

    /// Allowed lifecycle moves. Staying in the same status is handled by the caller.
    pub fn can_transition_to(&self, next: OrderStatus) -> bool {
        use OrderStatus::*;
        matches!(
            (self, next),
            (Pending, PaymentVerification)
                | (Pending, Processing)
                | (Pending, Cancelled)
                | (PaymentVerification, Pending)
                | (PaymentVerification, Processing)
                | (PaymentVerification, Cancelled)
                | (Processing, Shipped)
                | (Processing, Cancelled)
                | (Shipped, Delivered)
        )
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStatus::Pending => write!(f, "Pending"),
            OrderStatus::PaymentVerification => write!(f, "Payment Verification"),
            OrderStatus::Processing => write!(f, "Processing"),
            OrderStatus::Shipped => write!(f, "Shipped"),
            OrderStatus::Delivered => write!(f, "Delivered"),
            OrderStatus::Cancelled => write!(f, "Cancelled"),
        }
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(OrderStatus::Pending),
            "Payment Verification" => Ok(OrderStatus::PaymentVerification),
            "Processing" => Ok(OrderStatus::Processing),
            "Shipped" => Ok(OrderStatus::Shipped),
            "Delivered" => Ok(OrderStatus::Delivered),
            "Cancelled" => Ok(OrderStatus::Cancelled),
            _ => Err(format!("Invalid order status: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    PendingVerification,
    Verified,
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentStatus::PendingVerification => write!(f, "pending_verification"),
            PaymentStatus::Verified => write!(f, "verified"),
        }
    }
}

impl std::str::FromStr for PaymentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending_verification" => Ok(PaymentStatus::PendingVerification),
            "verified" => Ok(PaymentStatus::Verified),
            _ => Err(format!("Invalid payment status: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaymentSlip {
    pub url: String,
    pub status: PaymentStatus,
    pub uploaded_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomerDetails {
    pub name: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub zip: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum OrderItemSource {
    Catalog { product_id: Uuid },
    Custom(CustomProduct),
}

/// Line item frozen at checkout time.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    pub source: OrderItemSource,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
}

#[derive(Debug, Clone)]
pub struct Order {
    pub id: Uuid,
    pub user_id: UserId,
    pub customer: CustomerDetails,
    pub items: Vec<OrderItem>,
    pub total_amount: f64,
    pub status: OrderStatus,
    pub payment_slip: Option<PaymentSlip>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewOrderProps {
    pub user_id: Option<UserId>,
    pub customer: CustomerDetails,
    pub items: Vec<OrderItem>,
    pub total_amount: f64,
}

impl Order {
    pub fn new(props: NewOrderProps) -> Result<Self, OrderError> {
        let user_id = props
            .user_id
            .filter(|id| !id.is_blank())
            .ok_or(OrderError::UserIdMissing)?;

        if props.items.is_empty() {
            return Err(OrderError::ItemsEmpty);
        }

        if props
            .items
            .iter()
            .any(|item| item.quantity == 0 || !item.price.is_finite() || item.price < 0.0)
        {
            return Err(OrderError::InvalidItem);
        }

        // Custom lines must point at a hosted image, never an inline payload.
        if props.items.iter().any(|item| match &item.source {
            OrderItemSource::Custom(custom) => {
                custom.image_url.as_deref().is_some_and(is_inline_image)
            }
            OrderItemSource::Catalog { .. } => false,
        }) {
            return Err(OrderError::InlineImageNotAllowed);
        }

        if !props.total_amount.is_finite() || props.total_amount < 0.0 {
            return Err(OrderError::InvalidTotal);
        }

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            user_id,
            customer: props.customer,
            items: props.items,
            total_amount: props.total_amount,
            status: OrderStatus::Pending,
            payment_slip: None,
            created_at: now,
            updated_at: now,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: Uuid,
        user_id: UserId,
        customer: CustomerDetails,
        items: Vec<OrderItem>,
        total_amount: f64,
        status: OrderStatus,
        payment_slip: Option<PaymentSlip>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            customer,
            items,
            total_amount,
            status,
            payment_slip,
            created_at,
            updated_at,
        }
    }

    pub fn transition_to(&mut self, next: OrderStatus) -> Result<(), OrderError> {
        if self.status == next {
            return Ok(());
        }
        if !self.status.can_transition_to(next) {
            return Err(OrderError::InvalidStatusTransition);
        }

        if self.status == OrderStatus::PaymentVerification
            && next == OrderStatus::Processing
            && let Some(slip) = self.payment_slip.as_mut()
        {
            slip.status = PaymentStatus::Verified;
        }

        self.status = next;
        self.updated_at = Utc::now();
        Ok(())
    }

    pub fn accepts_payment_slip(&self) -> bool {
        matches!(
            self.status,
            OrderStatus::Pending | OrderStatus::PaymentVerification
        )
    }

    /// Records a payment slip and moves the order into verification.
    pub fn attach_payment_slip(&mut self, url: String) -> Result<(), OrderError> {
        if !self.accepts_payment_slip() {
            return Err(OrderError::InvalidStatusTransition);
        }

        let now = Utc::now();
        self.payment_slip = Some(PaymentSlip {
            url,
            status: PaymentStatus::PendingVerification,
            uploaded_at: now,
        });
        self.status = OrderStatus::PaymentVerification;
        self.updated_at = now;
        Ok(())
    }

    pub fn belongs_to(&self, user_id: &UserId) -> bool {
        &self.user_id == user_id
    }
}

/// Display identity of the account that placed an order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderCustomer {
    pub username: String,
    pub email: Option<String>,
}

#[derive(Debug, Clone)]
pub struct OrderWithCustomer {
    pub order: Order,
    /// `None` when the order's user id matches no account.
    pub customer: Option<OrderCustomer>,
}
