use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::order::errors::OrderError;
use crate::domain::order::model::{NewOrderProps, Order};
use crate::domain::order::repository::OrderRepository;
use crate::domain::order::use_cases::create::{CreateOrderParams, CreateOrderUseCase};

pub struct CreateOrderUseCaseImpl {
    pub repository: Arc<dyn OrderRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateOrderUseCase for CreateOrderUseCaseImpl {
    async fn execute(&self, params: CreateOrderParams) -> Result<Order, OrderError> {
        let order = Order::new(NewOrderProps {
            user_id: params.user_id,
            customer: params.customer,
            items: params.items,
            total_amount: params.total_amount,
        })?;

        // The cart is left alone; clients clear it explicitly after checkout.
        self.repository.save(&order).await?;

        self.logger.info(&format!(
            "Order {} placed by {} for {:.2}",
            order.id, order.user_id, order.total_amount
        ));
        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::order::model::{
        CustomerDetails, OrderItem, OrderItemSource, OrderStatus, OrderWithCustomer,
    };
    use crate::domain::product::model::{NewProductProps, Product, ProductChanges};
    use crate::domain::shared::value_objects::UserId;
    use mockall::mock;
    use std::sync::Mutex;
    use uuid::Uuid;

    mock! {
        pub OrderRepo {}

        #[async_trait]
        impl OrderRepository for OrderRepo {
            async fn get_by_id(&self, id: Uuid) -> Result<Order, RepositoryError>;
            async fn get_by_user(&self, user_id: &UserId) -> Result<Vec<Order>, RepositoryError>;
            async fn get_all_with_customers(&self) -> Result<Vec<OrderWithCustomer>, RepositoryError>;
            async fn save(&self, order: &Order) -> Result<(), RepositoryError>;
            async fn count(&self) -> Result<u64, RepositoryError>;
            async fn total_revenue(&self) -> Result<f64, RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn mug_line() -> OrderItem {
        OrderItem {
            source: OrderItemSource::Catalog {
                product_id: Uuid::new_v4(),
            },
            name: "Ceramic Mug".to_string(),
            price: 14.99,
            quantity: 2,
        }
    }

    #[tokio::test]
    async fn should_place_pending_order() {
        let mut repo = MockOrderRepo::new();
        repo.expect_save()
            .withf(|o| o.status == OrderStatus::Pending)
            .times(1)
            .returning(|_| Ok(()));

        let use_case = CreateOrderUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let order = use_case
            .execute(CreateOrderParams {
                user_id: Some(UserId::new("u1")),
                customer: CustomerDetails {
                    name: Some("Maria".to_string()),
                    city: Some("Lisbon".to_string()),
                    ..Default::default()
                },
                items: vec![mug_line()],
                total_amount: 29.98,
            })
            .await
            .unwrap();

        assert_eq!(order.items.len(), 1);
        assert_eq!(order.total_amount, 29.98);
        assert_eq!(order.customer.city.as_deref(), Some("Lisbon"));
    }

    #[tokio::test]
    async fn should_reject_order_without_items() {
        let mut repo = MockOrderRepo::new();
        repo.expect_save().never();

        let use_case = CreateOrderUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateOrderParams {
                user_id: Some(UserId::new("u1")),
                customer: CustomerDetails::default(),
                items: vec![],
                total_amount: 0.0,
            })
            .await;

        assert!(matches!(result.unwrap_err(), OrderError::ItemsEmpty));
    }

    #[tokio::test]
    async fn should_reject_order_without_user() {
        let use_case = CreateOrderUseCaseImpl {
            repository: Arc::new(MockOrderRepo::new()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateOrderParams {
                user_id: None,
                customer: CustomerDetails::default(),
                items: vec![mug_line()],
                total_amount: 29.98,
            })
            .await;

        assert!(matches!(result.unwrap_err(), OrderError::UserIdMissing));
    }

    #[tokio::test]
    async fn should_keep_line_snapshot_when_catalog_product_changes() {
        let mut product = Product::new(NewProductProps {
            name: "Ceramic Mug".to_string(),
            description: None,
            price: 14.99,
            image_url: None,
            category: Some("Home".to_string()),
        })
        .unwrap();
        let line = OrderItem {
            source: OrderItemSource::Catalog {
                product_id: product.id,
            },
            name: product.name.clone(),
            price: product.price,
            quantity: 1,
        };

        let stored: Arc<Mutex<Option<Order>>> = Arc::new(Mutex::new(None));
        let on_save = stored.clone();
        let mut repo = MockOrderRepo::new();
        repo.expect_save().times(1).returning(move |order| {
            *on_save.lock().unwrap() = Some(order.clone());
            Ok(())
        });

        let use_case = CreateOrderUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };
        use_case
            .execute(CreateOrderParams {
                user_id: Some(UserId::new("u1")),
                customer: CustomerDetails::default(),
                items: vec![line],
                total_amount: 14.99,
            })
            .await
            .unwrap();

        product
            .apply(ProductChanges {
                name: Some("Travel Mug".to_string()),
                price: Some(24.0),
                ..Default::default()
            })
            .unwrap();

        let order = stored.lock().unwrap().clone().unwrap();
        assert_eq!(order.items[0].name, "Ceramic Mug");
        assert_eq!(order.items[0].price, 14.99);
        assert_ne!(order.items[0].name, product.name);
    }
}
