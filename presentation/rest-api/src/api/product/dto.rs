use chrono::{DateTime, Utc};
use poem_openapi::types::multipart::Upload;
use poem_openapi::{Multipart, Object};

use business::domain::product::errors::ProductError;
use business::domain::product::model::Product;

#[derive(Multipart)]
pub struct CreateProductForm {
    /// Product name (cannot be empty)
    pub name: String,
    pub description: Option<String>,
    /// Decimal price, at least 0
    pub price: String,
    pub category: Option<String>,
    /// Optional product image
    pub image: Option<Upload>,
}

/// Every field is optional; only supplied fields change.
#[derive(Multipart)]
pub struct UpdateProductForm {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<String>,
    pub category: Option<String>,
    pub image: Option<Upload>,
}

#[derive(Multipart)]
pub struct UploadImageForm {
    pub image: Upload,
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ImageUrlResponse {
    pub image_url: String,
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ProductResponse {
    /// Product unique identifier
    pub id: String,
    pub name: String,
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    pub price: f64,
    #[oai(skip_serializing_if_is_none)]
    pub image_url: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub category: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name,
            description: product.description,
            price: product.price,
            image_url: product.image_url,
            category: product.category,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

/// Multipart text fields carry the price as a string.
pub fn parse_price(raw: &str) -> Result<f64, ProductError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|price| price.is_finite())
        .ok_or(ProductError::InvalidPrice)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_price_text() {
        assert_eq!(parse_price(" 19.99 ").unwrap(), 19.99);
        assert_eq!(parse_price("0").unwrap(), 0.0);
    }

    #[test]
    fn should_reject_non_numeric_price() {
        assert!(matches!(parse_price("cheap"), Err(ProductError::InvalidPrice)));
        assert!(matches!(parse_price("NaN"), Err(ProductError::InvalidPrice)));
        assert!(matches!(parse_price(""), Err(ProductError::InvalidPrice)));
    }
}
