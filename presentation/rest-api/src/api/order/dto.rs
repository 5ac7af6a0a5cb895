use chrono::{DateTime, Utc};
use poem_openapi::types::multipart::Upload;
use poem_openapi::{Enum, Multipart, Object};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use business::domain::order::errors::OrderError;
use business::domain::order::model::{
    CustomerDetails, Order, OrderCustomer, OrderItem, OrderItemSource, OrderStatus, PaymentSlip,
    OrderWithCustomer,
};

use crate::api::cart::dto::CustomProductDto;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Enum)]
pub enum OrderStatusDto {
    #[oai(rename = "Pending")]
    Pending,
    #[oai(rename = "Payment Verification")]
    PaymentVerification,
    #[oai(rename = "Processing")]
    Processing,
    #[oai(rename = "Shipped")]
    Shipped,
    #[oai(rename = "Delivered")]
    Delivered,
    #[oai(rename = "Cancelled")]
    Cancelled,
}

impl From<OrderStatus> for OrderStatusDto {
    fn from(status: OrderStatus) -> Self {
        match status {
            OrderStatus::Pending => OrderStatusDto::Pending,
            OrderStatus::PaymentVerification => OrderStatusDto::PaymentVerification,
            OrderStatus::Processing => OrderStatusDto::Processing,
            OrderStatus::Shipped => OrderStatusDto::Shipped,
            OrderStatus::Delivered => OrderStatusDto::Delivered,
            OrderStatus::Cancelled => OrderStatusDto::Cancelled,
        }
    }
}

impl From<OrderStatusDto> for OrderStatus {
    fn from(dto: OrderStatusDto) -> Self {
        match dto {
            OrderStatusDto::Pending => OrderStatus::Pending,
            OrderStatusDto::PaymentVerification => OrderStatus::PaymentVerification,
            OrderStatusDto::Processing => OrderStatus::Processing,
            OrderStatusDto::Shipped => OrderStatus::Shipped,
            OrderStatusDto::Delivered => OrderStatus::Delivered,
            OrderStatusDto::Cancelled => OrderStatus::Cancelled,
        }
    }
}

#[derive(Debug, Clone, Default, Object)]
pub struct CustomerDetailsDto {
    #[oai(skip_serializing_if_is_none)]
    pub name: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub email: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub address: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub city: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub zip: Option<String>,
}

impl From<CustomerDetailsDto> for CustomerDetails {
    fn from(dto: CustomerDetailsDto) -> Self {
        Self {
            name: dto.name,
            email: dto.email,
            address: dto.address,
            city: dto.city,
            zip: dto.zip,
        }
    }
}

impl From<CustomerDetails> for CustomerDetailsDto {
    fn from(details: CustomerDetails) -> Self {
        Self {
            name: details.name,
            email: details.email,
            address: details.address,
            city: details.city,
            zip: details.zip,
        }
    }
}

/// Exactly one of `productId` and `customProduct` must be set.
#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct OrderItemRequest {
    #[oai(skip_serializing_if_is_none)]
    pub product_id: Option<Uuid>,
    #[oai(skip_serializing_if_is_none)]
    pub custom_product: Option<CustomProductDto>,
    /// Display name at checkout; defaults to the custom product name
    #[oai(skip_serializing_if_is_none)]
    pub name: Option<String>,
    pub price: f64,
    pub quantity: u32,
}

impl TryFrom<OrderItemRequest> for OrderItem {
    type Error = OrderError;

    fn try_from(request: OrderItemRequest) -> Result<Self, Self::Error> {
        let source = match (request.product_id, request.custom_product) {
            (Some(product_id), None) => OrderItemSource::Catalog { product_id },
            (None, Some(custom)) => OrderItemSource::Custom(custom.into()),
            _ => return Err(OrderError::InvalidItem),
        };

        let name = match (&source, request.name) {
            (_, Some(name)) => name,
            (OrderItemSource::Custom(custom), None) => custom.name.clone(),
            (OrderItemSource::Catalog { .. }, None) => String::new(),
        };

        Ok(Self {
            source,
            name,
            price: request.price,
            quantity: request.quantity,
        })
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    #[oai(skip_serializing_if_is_none)]
    pub user_id: Option<String>,
    #[oai(default)]
    pub customer_details: CustomerDetailsDto,
    #[oai(default)]
    pub items: Vec<OrderItemRequest>,
    pub total_amount: f64,
}

#[derive(Debug, Clone, Object)]
pub struct UpdateOrderStatusRequest {
    pub status: OrderStatusDto,
}

#[derive(Multipart)]
pub struct PaymentSlipForm {
    /// Image of the bank transfer slip
    pub slip: Upload,
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct PaymentSlipResponse {
    pub url: String,
    /// `pending_verification` or `verified`
    pub status: String,
    pub uploaded_at: DateTime<Utc>,
}

impl From<PaymentSlip> for PaymentSlipResponse {
    fn from(slip: PaymentSlip) -> Self {
        Self {
            url: slip.url,
            status: slip.status.to_string(),
            uploaded_at: slip.uploaded_at,
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct OrderItemResponse {
    #[oai(skip_serializing_if_is_none)]
    pub product_id: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub custom_product: Option<CustomProductDto>,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
}

impl From<OrderItem> for OrderItemResponse {
    fn from(item: OrderItem) -> Self {
        let (product_id, custom_product) = match item.source {
            OrderItemSource::Catalog { product_id } => (Some(product_id.to_string()), None),
            OrderItemSource::Custom(custom) => (None, Some(custom.into())),
        };

        Self {
            product_id,
            custom_product,
            name: item.name,
            price: item.price,
            quantity: item.quantity,
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct OrderResponse {
    pub id: String,
    pub user_id: String,
    pub customer_details: CustomerDetailsDto,
    pub items: Vec<OrderItemResponse>,
    pub total_amount: f64,
    pub status: OrderStatusDto,
    #[oai(skip_serializing_if_is_none)]
    pub payment_slip: Option<PaymentSlipResponse>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            id: order.id.to_string(),
            user_id: order.user_id.to_string(),
            customer_details: order.customer.into(),
            items: order.items.into_iter().map(Into::into).collect(),
            total_amount: order.total_amount,
            status: order.status.into(),
            payment_slip: order.payment_slip.map(Into::into),
            created_at: order.created_at,
            updated_at: order.updated_at,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct OrderCustomerResponse {
    pub username: String,
    #[oai(skip_serializing_if_is_none)]
    pub email: Option<String>,
}

impl From<OrderCustomer> for OrderCustomerResponse {
    fn from(customer: OrderCustomer) -> Self {
        Self {
            username: customer.username,
            email: customer.email,
        }
    }
}

/// Order plus the owning account, absent for guest or deleted accounts.
#[derive(Debug, Clone, Object)]
pub struct AdminOrderResponse {
    #[oai(flatten)]
    pub order: OrderResponse,
    #[oai(skip_serializing_if_is_none)]
    pub customer: Option<OrderCustomerResponse>,
}

impl From<OrderWithCustomer> for AdminOrderResponse {
    fn from(entry: OrderWithCustomer) -> Self {
        Self {
            order: entry.order.into(),
            customer: entry.customer.map(Into::into),
        }
    }
}
