use std::sync::Arc;

use async_trait::async_trait;

use super::resolve::resolve_cart;
use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{Cart, CartView};
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::add_product::{
    AddProductToCartParams, AddProductToCartUseCase,
};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductRepository;

pub struct AddProductToCartUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub product_repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddProductToCartUseCase for AddProductToCartUseCaseImpl {
    async fn execute(&self, params: AddProductToCartParams) -> Result<CartView, CartError> {
        if params.user_id.is_blank() {
            return Err(CartError::UserIdMissing);
        }
        if params.quantity == 0 {
            return Err(CartError::InvalidQuantity);
        }

        self.product_repository
            .get_by_id(params.product_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CartError::ProductNotFound,
                other => CartError::Repository(other),
            })?;

        let mut cart = self
            .repository
            .find_by_user(&params.user_id)
            .await?
            .unwrap_or_else(|| Cart::new(params.user_id.clone()));

        cart.add_product(params.product_id, params.quantity)?;
        self.repository.save(&cart).await?;

        self.logger.info(&format!(
            "Added {} x {} to cart of {}",
            params.quantity, params.product_id, params.user_id
        ));
        resolve_cart(self.product_repository.as_ref(), cart).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::model::{NewProductProps, Product};
    use crate::domain::shared::value_objects::UserId;
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub CartRepo {}

        #[async_trait]
        impl CartRepository for CartRepo {
            async fn find_by_user(&self, user_id: &UserId) -> Result<Option<Cart>, RepositoryError>;
            async fn save(&self, cart: &Cart) -> Result<(), RepositoryError>;
            async fn delete_by_user(&self, user_id: &UserId) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
            async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError>;
            async fn get_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Product>, RepositoryError>;
            async fn save(&self, product: &Product) -> Result<(), RepositoryError>;
            async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
            async fn count(&self) -> Result<u64, RepositoryError>;
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

    fn tote() -> Product {
        Product::new(NewProductProps {
            name: "Canvas Tote".to_string(),
            description: None,
            price: 19.99,
            image_url: None,
            category: Some("Eco".to_string()),
        })
        .unwrap()
    }

    fn catalog_with(product: Product) -> MockProductRepo {
        let mut products = MockProductRepo::new();
        let single = product.clone();
        products
            .expect_get_by_id()
            .returning(move |_| Ok(single.clone()));
        products
            .expect_get_by_ids()
            .returning(move |_| Ok(vec![product.clone()]));
        products
    }

    #[tokio::test]
    async fn should_create_cart_on_first_add() {
        let product = tote();
        let product_id = product.id;
        let mut repo = MockCartRepo::new();
        repo.expect_find_by_user().returning(|_| Ok(None));
        repo.expect_save()
            .withf(move |c| c.items.len() == 1 && c.items[0].quantity == 2)
            .times(1)
            .returning(|_| Ok(()));

        let use_case = AddProductToCartUseCaseImpl {
            repository: Arc::new(repo),
            product_repository: Arc::new(catalog_with(product)),
            logger: mock_logger(),
        };

        let view = use_case
            .execute(AddProductToCartParams {
                user_id: UserId::new("u1"),
                product_id,
                quantity: 2,
            })
            .await
            .unwrap();

        assert_eq!(view.items.len(), 1);
        assert_eq!(view.items[0].quantity, 2);
    }

    #[tokio::test]
    async fn should_increment_existing_line() {
        let product = tote();
        let product_id = product.id;
        let mut existing = Cart::new(UserId::new("u1"));
        existing.add_product(product_id, 1).unwrap();

        let mut repo = MockCartRepo::new();
        repo.expect_find_by_user()
            .returning(move |_| Ok(Some(existing.clone())));
        repo.expect_save().returning(|_| Ok(()));

        let use_case = AddProductToCartUseCaseImpl {
            repository: Arc::new(repo),
            product_repository: Arc::new(catalog_with(product)),
            logger: mock_logger(),
        };

        let view = use_case
            .execute(AddProductToCartParams {
                user_id: UserId::new("u1"),
                product_id,
                quantity: 3,
            })
            .await
            .unwrap();

        assert_eq!(view.items.len(), 1);
        assert_eq!(view.items[0].quantity, 4);
    }

    #[tokio::test]
    async fn should_reject_unknown_product() {
        let mut products = MockProductRepo::new();
        products
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));
        let mut repo = MockCartRepo::new();
        repo.expect_save().never();

        let use_case = AddProductToCartUseCaseImpl {
            repository: Arc::new(repo),
            product_repository: Arc::new(products),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(AddProductToCartParams {
                user_id: UserId::new("u1"),
                product_id: Uuid::new_v4(),
                quantity: 1,
            })
            .await;

        assert!(matches!(result.unwrap_err(), CartError::ProductNotFound));
    }

    #[tokio::test]
    async fn should_reject_zero_quantity() {
        let use_case = AddProductToCartUseCaseImpl {
            repository: Arc::new(MockCartRepo::new()),
            product_repository: Arc::new(MockProductRepo::new()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(AddProductToCartParams {
                user_id: UserId::new("u1"),
                product_id: Uuid::new_v4(),
                quantity: 0,
            })
            .await;

        assert!(matches!(result.unwrap_err(), CartError::InvalidQuantity));
    }
}
