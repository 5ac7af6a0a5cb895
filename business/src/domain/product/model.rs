use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::ProductError;

/// Catalog entry. Cart and order lines reference it by id only.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub image_url: Option<String>,
    pub category: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewProductProps {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub image_url: Option<String>,
    pub category: Option<String>,
}

/// Partial update: `None` leaves the current value untouched.
#[derive(Debug, Default, Clone)]
pub struct ProductChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub image_url: Option<String>,
    pub category: Option<String>,
}

impl Product {
    pub fn new(props: NewProductProps) -> Result<Self, ProductError> {
        let name = validate_name(&props.name)?;
        let price = validate_price(props.price)?;

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            name,
            description: props.description,
            price,
            image_url: props.image_url,
            category: props.category,
            created_at: now,
            updated_at: now,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: Uuid,
        name: String,
        description: Option<String>,
        price: f64,
        image_url: Option<String>,
        category: Option<String>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            price,
            image_url,
            category,
            created_at,
            updated_at,
        }
    }

    /// Merges the supplied fields. Nothing is modified when validation fails.
    pub fn apply(&mut self, changes: ProductChanges) -> Result<(), ProductError> {
        let name = changes.name.as_deref().map(validate_name).transpose()?;
        let price = changes.price.map(validate_price).transpose()?;

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(price) = price {
            self.price = price;
        }
        if let Some(description) = changes.description {
            self.description = Some(description);
        }
        if let Some(category) = changes.category {
            self.category = Some(category);
        }
        if let Some(image_url) = changes.image_url {
            self.image_url = Some(image_url);
        }
        self.updated_at = Utc::now();
        Ok(())
    }
}

fn validate_name(name: &str) -> Result<String, ProductError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ProductError::NameEmpty);
    }
    Ok(trimmed.to_string())
}

fn validate_price(price: f64) -> Result<f64, ProductError> {
    if !price.is_finite() || price < 0.0 {
        return Err(ProductError::InvalidPrice);
    }
    Ok(price)
}

/// Coerces a price submitted as text (multipart forms carry no numbers).
pub fn parse_price(raw: &str) -> Result<f64, ProductError> {
    let price = raw
        .trim()
        .parse::<f64>()
        .map_err(|_| ProductError::InvalidPrice)?;
    validate_price(price)
}
