use chrono::{DateTime, Utc};
use sqlx::FromRow;
use sqlx::types::Json;
use uuid::Uuid;

use business::domain::cart::model::Cart;
use business::domain::shared::value_objects::UserId;

use super::document::CartItemDocument;

#[derive(Debug, FromRow)]
pub struct CartEntity {
    pub id: Uuid,
    pub user_id: String,
    pub items: Json<Vec<CartItemDocument>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CartEntity {
    pub fn into_domain(self) -> Cart {
        Cart::from_repository(
            self.id,
            UserId::new(self.user_id),
            self.items.0.into_iter().map(Into::into).collect(),
            self.created_at,
            self.updated_at,
        )
    }
}
