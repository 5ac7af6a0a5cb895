use serde::{Deserialize, Serialize};
use uuid::Uuid;

use business::domain::order::model::{CustomerDetails, OrderItem, OrderItemSource};

use crate::cart::document::CustomProductDocument;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CustomerDocument {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub zip: Option<String>,
}

impl From<&CustomerDetails> for CustomerDocument {
    fn from(details: &CustomerDetails) -> Self {
        Self {
            name: details.name.clone(),
            email: details.email.clone(),
            address: details.address.clone(),
            city: details.city.clone(),
            zip: details.zip.clone(),
        }
    }
}

impl From<CustomerDocument> for CustomerDetails {
    fn from(document: CustomerDocument) -> Self {
        CustomerDetails {
            name: document.name,
            email: document.email,
            address: document.address,
            city: document.city,
            zip: document.zip,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OrderItemSourceDocument {
    Catalog { product_id: Uuid },
    Custom { product: CustomProductDocument },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderItemDocument {
    pub source: OrderItemSourceDocument,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
}

impl From<&OrderItem> for OrderItemDocument {
    fn from(item: &OrderItem) -> Self {
        let source = match &item.source {
            OrderItemSource::Catalog { product_id } => OrderItemSourceDocument::Catalog {
                product_id: *product_id,
            },
            OrderItemSource::Custom(product) => OrderItemSourceDocument::Custom {
                product: product.into(),
            },
        };
        Self {
            source,
            name: item.name.clone(),
            price: item.price,
            quantity: item.quantity,
        }
    }
}

impl From<OrderItemDocument> for OrderItem {
    fn from(document: OrderItemDocument) -> Self {
        let source = match document.source {
            OrderItemSourceDocument::Catalog { product_id } => {
                OrderItemSource::Catalog { product_id }
            }
            OrderItemSourceDocument::Custom { product } => OrderItemSource::Custom(product.into()),
        };
        OrderItem {
            source,
            name: document.name,
            price: document.price,
            quantity: document.quantity,
        }
    }
}
