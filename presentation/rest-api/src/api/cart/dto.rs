use chrono::{DateTime, Utc};
use poem_openapi::Object;
use uuid::Uuid;

use business::domain::cart::model::{CartView, CustomProduct, ResolvedCartLine};

use crate::api::product::dto::ProductResponse;

/// Snapshot of an ad-hoc product, typically a generated design.
#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct CustomProductDto {
    pub name: String,
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    pub price: f64,
    /// Durable URL or inline `data:` URI; inline images are uploaded before storing
    #[oai(skip_serializing_if_is_none)]
    pub image_url: Option<String>,
    /// Always true on responses
    #[oai(default = "default_is_custom")]
    pub is_custom: bool,
}

fn default_is_custom() -> bool {
    true
}

impl From<CustomProductDto> for CustomProduct {
    fn from(dto: CustomProductDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
            price: dto.price,
            image_url: dto.image_url,
        }
    }
}

impl From<CustomProduct> for CustomProductDto {
    fn from(product: CustomProduct) -> Self {
        Self {
            name: product.name,
            description: product.description,
            price: product.price,
            image_url: product.image_url,
            is_custom: true,
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct AddToCartRequest {
    pub user_id: String,
    pub product_id: Uuid,
    /// Defaults to 1
    #[oai(default = "default_quantity")]
    pub quantity: u32,
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct AddCustomToCartRequest {
    #[oai(skip_serializing_if_is_none)]
    pub user_id: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub custom_product: Option<CustomProductDto>,
    /// Defaults to 1
    #[oai(default = "default_quantity")]
    pub quantity: u32,
}

/// The line is located by `itemId` first, then by `productId`.
#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct UpdateCartRequest {
    pub user_id: String,
    #[oai(skip_serializing_if_is_none)]
    pub item_id: Option<Uuid>,
    #[oai(skip_serializing_if_is_none)]
    pub product_id: Option<Uuid>,
    pub quantity: u32,
}

fn default_quantity() -> u32 {
    1
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct CartItemResponse {
    /// Line item identifier
    pub id: String,
    pub quantity: u32,
    pub is_custom: bool,
    #[oai(skip_serializing_if_is_none)]
    pub product_id: Option<String>,
    /// Absent when the catalog product no longer exists
    #[oai(skip_serializing_if_is_none)]
    pub product: Option<ProductResponse>,
    #[oai(skip_serializing_if_is_none)]
    pub custom_product: Option<CustomProductDto>,
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct CartResponse {
    pub user_id: String,
    pub items: Vec<CartItemResponse>,
    #[oai(skip_serializing_if_is_none)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<CartView> for CartResponse {
    fn from(view: CartView) -> Self {
        let items = view
            .items
            .into_iter()
            .map(|item| match item.line {
                ResolvedCartLine::Catalog {
                    product_id,
                    product,
                } => CartItemResponse {
                    id: item.id.to_string(),
                    quantity: item.quantity,
                    is_custom: false,
                    product_id: Some(product_id.to_string()),
                    product: product.map(Into::into),
                    custom_product: None,
                },
                ResolvedCartLine::Custom(custom) => CartItemResponse {
                    id: item.id.to_string(),
                    quantity: item.quantity,
                    is_custom: true,
                    product_id: None,
                    product: None,
                    custom_product: Some(custom.into()),
                },
            })
            .collect();

        Self {
            user_id: view.user_id.to_string(),
            items,
            updated_at: view.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::cart::model::ResolvedCartItem;
    use business::domain::shared::value_objects::UserId;

    #[test]
    fn should_flag_custom_lines_and_missing_products() {
        let view = CartView {
            user_id: UserId::new("u1"),
            items: vec![
                ResolvedCartItem {
                    id: Uuid::new_v4(),
                    line: ResolvedCartLine::Catalog {
                        product_id: Uuid::new_v4(),
                        product: None,
                    },
                    quantity: 2,
                },
                ResolvedCartItem {
                    id: Uuid::new_v4(),
                    line: ResolvedCartLine::Custom(CustomProduct {
                        name: "Neon fox tee".to_string(),
                        description: None,
                        price: 24.0,
                        image_url: Some("https://cdn.example.com/fox.webp".to_string()),
                    }),
                    quantity: 1,
                },
            ],
            updated_at: None,
        };

        let response = CartResponse::from(view);

        assert_eq!(response.user_id, "u1");
        assert!(!response.items[0].is_custom);
        assert!(response.items[0].product.is_none());
        assert!(response.items[0].product_id.is_some());
        assert!(response.items[1].is_custom);
        assert!(response.items[1].custom_product.as_ref().unwrap().is_custom);
    }

    #[test]
    fn should_render_empty_cart() {
        let response = CartResponse::from(CartView::empty(UserId::new("u2")));

        assert!(response.items.is_empty());
        assert!(response.updated_at.is_none());
    }
}
