use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{Cart, CartView};
use crate::domain::product::repository::ProductRepository;

/// Looks up every catalog reference of the cart in one round trip.
pub async fn resolve_cart(
    products: &dyn ProductRepository,
    cart: Cart,
) -> Result<CartView, CartError> {
    let ids = cart.product_ids();
    let found = if ids.is_empty() {
        Vec::new()
    } else {
        products.get_by_ids(&ids).await?
    };
    Ok(CartView::resolve(cart, &found))
}
