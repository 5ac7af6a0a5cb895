use serde::{Deserialize, Serialize};
use uuid::Uuid;

use business::domain::cart::model::{CartItem, CartLine, CustomProduct};

/// Custom product snapshot as stored inside cart and order documents.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CustomProductDocument {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl From<&CustomProduct> for CustomProductDocument {
    fn from(product: &CustomProduct) -> Self {
        Self {
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price,
            image_url: product.image_url.clone(),
        }
    }
}

impl From<CustomProductDocument> for CustomProduct {
    fn from(document: CustomProductDocument) -> Self {
        CustomProduct {
            name: document.name,
            description: document.description,
            price: document.price,
            image_url: document.image_url,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CartLineDocument {
    Catalog { product_id: Uuid },
    Custom { product: CustomProductDocument },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItemDocument {
    pub id: Uuid,
    pub quantity: u32,
    pub line: CartLineDocument,
}

impl From<&CartItem> for CartItemDocument {
    fn from(item: &CartItem) -> Self {
        let line = match &item.line {
            CartLine::Catalog { product_id } => CartLineDocument::Catalog {
                product_id: *product_id,
            },
            CartLine::Custom(product) => CartLineDocument::Custom {
                product: product.into(),
            },
        };
        Self {
            id: item.id,
            quantity: item.quantity,
            line,
        }
    }
}

impl From<CartItemDocument> for CartItem {
    fn from(document: CartItemDocument) -> Self {
        let line = match document.line {
            CartLineDocument::Catalog { product_id } => CartLine::Catalog { product_id },
            CartLineDocument::Custom { product } => CartLine::Custom(product.into()),
        };
        CartItem {
            id: document.id,
            line,
            quantity: document.quantity,
        }
    }
}
