use async_trait::async_trait;
use bigdecimal::BigDecimal;
use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::order::model::{Order, OrderWithCustomer};
use business::domain::order::repository::OrderRepository;
use business::domain::shared::value_objects::UserId;

use super::document::{CustomerDocument, OrderItemDocument};
use super::entity::{OrderEntity, OrderWithCustomerEntity};
use crate::errors::map_sqlx_error;
use crate::money::{from_numeric, to_numeric};

const ORDER_COLUMNS: &str = "o.id, o.user_id, o.customer, o.items, o.total_amount, o.status, o.payment_slip_url, o.payment_status, o.payment_uploaded_at, o.created_at, o.updated_at";

pub struct OrderRepositoryPostgres {
    pool: PgPool,
}

impl OrderRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrderRepository for OrderRepositoryPostgres {
    async fn get_by_id(&self, id: Uuid) -> Result<Order, RepositoryError> {
        let entity = sqlx::query_as::<_, OrderEntity>(&format!(
            "SELECT {} FROM orders o WHERE o.id = $1",
            ORDER_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?
        .ok_or(RepositoryError::NotFound)?;

        entity.into_domain()
    }

    async fn get_by_user(&self, user_id: &UserId) -> Result<Vec<Order>, RepositoryError> {
        let entities = sqlx::query_as::<_, OrderEntity>(&format!(
            "SELECT {} FROM orders o WHERE o.user_id = $1 ORDER BY o.created_at DESC",
            ORDER_COLUMNS
        ))
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        entities.into_iter().map(|e| e.into_domain()).collect()
    }

    async fn get_all_with_customers(&self) -> Result<Vec<OrderWithCustomer>, RepositoryError> {
        let entities = sqlx::query_as::<_, OrderWithCustomerEntity>(&format!(
            r#"SELECT {}, u.username AS customer_username, u.email AS customer_email
            FROM orders o
            LEFT JOIN users u ON u.id::text = o.user_id
            ORDER BY o.created_at DESC"#,
            ORDER_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        entities.into_iter().map(|e| e.into_domain()).collect()
    }

    async fn save(&self, order: &Order) -> Result<(), RepositoryError> {
        let items: Vec<OrderItemDocument> = order.items.iter().map(Into::into).collect();
        let slip = order.payment_slip.as_ref();

        sqlx::query(
            r#"INSERT INTO orders (id, user_id, customer, items, total_amount, status, payment_slip_url, payment_status, payment_uploaded_at, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            ON CONFLICT (id) DO UPDATE SET
                status = EXCLUDED.status,
                payment_slip_url = EXCLUDED.payment_slip_url,
                payment_status = EXCLUDED.payment_status,
                payment_uploaded_at = EXCLUDED.payment_uploaded_at,
                updated_at = EXCLUDED.updated_at"#,
        )
        .bind(order.id)
        .bind(order.user_id.as_str())
        .bind(Json(CustomerDocument::from(&order.customer)))
        .bind(Json(items))
        .bind(to_numeric(order.total_amount)?)
        .bind(order.status.to_string())
        .bind(slip.map(|s| s.url.clone()))
        .bind(slip.map(|s| s.status.to_string()))
        .bind(slip.map(|s| s.uploaded_at))
        .bind(order.created_at)
        .bind(order.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(())
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM orders")
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(count.max(0) as u64)
    }

    async fn total_revenue(&self) -> Result<f64, RepositoryError> {
        let total: BigDecimal =
            sqlx::query_scalar("SELECT COALESCE(SUM(total_amount), 0) FROM orders")
                .fetch_one(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

        from_numeric(&total)
    }
}
