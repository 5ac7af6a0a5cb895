use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::CartError;
use crate::domain::product::model::Product;
use crate::domain::shared::assets::is_inline_image;
use crate::domain::shared::value_objects::UserId;

/// Ad-hoc product snapshot, typically an AI generated design.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomProduct {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub image_url: Option<String>,
}

impl CustomProduct {
    pub fn validate(&self) -> Result<(), CartError> {
        if self.name.trim().is_empty() || !self.price.is_finite() || self.price < 0.0 {
            return Err(CartError::InvalidCustomProduct);
        }
        Ok(())
    }
}

/// What a cart line points at: a catalog product or a custom snapshot.
#[derive(Debug, Clone, PartialEq)]
pub enum CartLine {
    Catalog { product_id: Uuid },
    Custom(CustomProduct),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    pub id: Uuid,
    pub line: CartLine,
    pub quantity: u32,
}

impl CartItem {
    pub fn product_id(&self) -> Option<Uuid> {
        match &self.line {
            CartLine::Catalog { product_id } => Some(*product_id),
            CartLine::Custom(_) => None,
        }
    }
}

/// Identifies a line either by its own id or by the catalog product it holds.
#[derive(Debug, Clone, Copy, Default)]
pub struct CartItemSelector {
    pub item_id: Option<Uuid>,
    pub product_id: Option<Uuid>,
}

/// The single live cart of a user.
#[derive(Debug, Clone)]
pub struct Cart {
    pub id: Uuid,
    pub user_id: UserId,
    pub items: Vec<CartItem>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Cart {
    pub fn new(user_id: UserId) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            items: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        user_id: UserId,
        items: Vec<CartItem>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            items,
            created_at,
            updated_at,
        }
    }

    /// Adds `quantity` of a catalog product, merging into an existing line.
    pub fn add_product(&mut self, product_id: Uuid, quantity: u32) -> Result<(), CartError> {
        ensure_quantity(quantity)?;

        match self
            .items
            .iter_mut()
            .find(|item| item.product_id() == Some(product_id))
        {
            Some(existing) => {
                existing.quantity = existing
                    .quantity
                    .checked_add(quantity)
                    .ok_or(CartError::InvalidQuantity)?;
            }
            None => self.items.push(CartItem {
                id: Uuid::new_v4(),
                line: CartLine::Catalog { product_id },
                quantity,
            }),
        }
        self.touch();
        Ok(())
    }

    /// Custom lines are never merged: every design is its own line.
    pub fn add_custom(&mut self, product: CustomProduct, quantity: u32) -> Result<Uuid, CartError> {
        ensure_quantity(quantity)?;
        product.validate()?;
        if product.image_url.as_deref().is_some_and(is_inline_image) {
            return Err(CartError::InlineImageNotAllowed);
        }

        let id = Uuid::new_v4();
        self.items.push(CartItem {
            id,
            line: CartLine::Custom(product),
            quantity,
        });
        self.touch();
        Ok(id)
    }

    /// Overwrites the quantity of the selected line.
    pub fn update_quantity(
        &mut self,
        selector: CartItemSelector,
        quantity: u32,
    ) -> Result<(), CartError> {
        ensure_quantity(quantity)?;
        if selector.item_id.is_none() && selector.product_id.is_none() {
            return Err(CartError::ItemTargetMissing);
        }

        let position = selector
            .item_id
            .and_then(|id| self.items.iter().position(|item| item.id == id))
            .or_else(|| {
                selector.product_id.and_then(|product_id| {
                    self.items
                        .iter()
                        .position(|item| item.product_id() == Some(product_id))
                })
            })
            .ok_or(CartError::ItemNotFound)?;

        self.items[position].quantity = quantity;
        self.touch();
        Ok(())
    }

    /// Returns false when no line carries `item_id`.
    pub fn remove_item(&mut self, item_id: Uuid) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != item_id);
        let removed = self.items.len() != before;
        if removed {
            self.touch();
        }
        removed
    }

    pub fn product_ids(&self) -> Vec<Uuid> {
        let mut ids: Vec<Uuid> = self.items.iter().filter_map(|i| i.product_id()).collect();
        ids.sort();
        ids.dedup();
        ids
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

fn ensure_quantity(quantity: u32) -> Result<(), CartError> {
    if quantity == 0 {
        return Err(CartError::InvalidQuantity);
    }
    Ok(())
}

/// Cart line with its catalog reference looked up.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedCartLine {
    /// `product` is `None` when the referenced product was deleted.
    Catalog {
        product_id: Uuid,
        product: Option<Product>,
    },
    Custom(CustomProduct),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedCartItem {
    pub id: Uuid,
    pub line: ResolvedCartLine,
    pub quantity: u32,
}

/// Read model returned by every cart operation.
#[derive(Debug, Clone)]
pub struct CartView {
    pub user_id: UserId,
    pub items: Vec<ResolvedCartItem>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl CartView {
    /// View of a cart that was never persisted.
    pub fn empty(user_id: UserId) -> Self {
        Self {
            user_id,
            items: Vec::new(),
            updated_at: None,
        }
    }

    pub fn resolve(cart: Cart, products: &[Product]) -> Self {
        let items = cart
            .items
            .into_iter()
            .map(|item| {
                let line = match item.line {
                    CartLine::Catalog { product_id } => ResolvedCartLine::Catalog {
                        product_id,
                        product: products.iter().find(|p| p.id == product_id).cloned(),
                    },
                    CartLine::Custom(custom) => ResolvedCartLine::Custom(custom),
                };
                ResolvedCartItem {
                    id: item.id,
                    line,
                    quantity: item.quantity,
                }
            })
            .collect();

        Self {
            user_id: cart.user_id,
            items,
            updated_at: Some(cart.updated_at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn design(image_url: Option<&str>) -> CustomProduct {
        CustomProduct {
            name: "Neon cat tee".to_string(),
            description: Some("AI design".to_string()),
            price: 35.0,
            image_url: image_url.map(|u| u.to_string()),
        }
    }

    #[test]
    fn should_append_line_for_new_product() {
        let mut cart = Cart::new(UserId::new("u1"));
        let product_id = Uuid::new_v4();

        cart.add_product(product_id, 2).unwrap();

        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].quantity, 2);
        assert_eq!(cart.items[0].product_id(), Some(product_id));
    }

    #[test]
    fn should_reject_zero_quantity() {
        let mut cart = Cart::new(UserId::new("u1"));

        let result = cart.add_product(Uuid::new_v4(), 0);

        assert!(matches!(result.unwrap_err(), CartError::InvalidQuantity));
    }

    #[test]
    fn should_reject_merge_that_overflows_quantity() {
        let mut cart = Cart::new(UserId::new("u1"));
        let product_id = Uuid::new_v4();
        cart.add_product(product_id, u32::MAX).unwrap();

        let result = cart.add_product(product_id, 1);

        assert!(matches!(result.unwrap_err(), CartError::InvalidQuantity));
        assert_eq!(cart.items[0].quantity, u32::MAX);
    }

    #[test]
    fn should_keep_custom_lines_separate() {
        let mut cart = Cart::new(UserId::new("u1"));

        cart.add_custom(design(Some("https://cdn/a.webp")), 1).unwrap();
        cart.add_custom(design(Some("https://cdn/a.webp")), 1).unwrap();

        assert_eq!(cart.items.len(), 2);
    }

    #[test]
    fn should_refuse_inline_image_on_custom_line() {
        let mut cart = Cart::new(UserId::new("u1"));

        let result = cart.add_custom(design(Some("data:image/png;base64,AAAA")), 1);

        assert!(matches!(result.unwrap_err(), CartError::InlineImageNotAllowed));
        assert!(cart.items.is_empty());
    }

    #[test]
    fn should_update_quantity_by_item_id() {
        let mut cart = Cart::new(UserId::new("u1"));
        let item_id = cart.add_custom(design(None), 1).unwrap();

        cart.update_quantity(
            CartItemSelector {
                item_id: Some(item_id),
                product_id: None,
            },
            5,
        )
        .unwrap();

        assert_eq!(cart.items[0].quantity, 5);
    }

    #[test]
    fn should_fall_back_to_product_reference_when_item_id_unknown() {
        let mut cart = Cart::new(UserId::new("u1"));
        let product_id = Uuid::new_v4();
        cart.add_product(product_id, 3).unwrap();

        cart.update_quantity(
            CartItemSelector {
                item_id: Some(Uuid::new_v4()),
                product_id: Some(product_id),
            },
            1,
        )
        .unwrap();

        assert_eq!(cart.items[0].quantity, 1);
    }

    #[test]
    fn should_fail_update_when_no_line_matches() {
        let mut cart = Cart::new(UserId::new("u1"));
        cart.add_product(Uuid::new_v4(), 1).unwrap();

        let result = cart.update_quantity(
            CartItemSelector {
                item_id: None,
                product_id: Some(Uuid::new_v4()),
            },
            4,
        );

        assert!(matches!(result.unwrap_err(), CartError::ItemNotFound));
    }

    #[test]
    fn should_report_unknown_item_on_remove() {
        let mut cart = Cart::new(UserId::new("u1"));
        cart.add_product(Uuid::new_v4(), 1).unwrap();

        assert!(!cart.remove_item(Uuid::new_v4()));
        assert_eq!(cart.items.len(), 1);
    }

    #[test]
    fn should_resolve_deleted_product_as_unavailable() {
        let mut cart = Cart::new(UserId::new("u1"));
        cart.add_product(Uuid::new_v4(), 1).unwrap();

        let view = CartView::resolve(cart, &[]);

        assert!(matches!(
            view.items[0].line,
            ResolvedCartLine::Catalog { product: None, .. }
        ));
    }

    proptest! {
        #[test]
        fn should_merge_repeated_additions_into_one_line(quantities in prop::collection::vec(1u32..50, 1..20)) {
            let mut cart = Cart::new(UserId::new("u1"));
            let product_id = Uuid::new_v4();

            for quantity in &quantities {
                cart.add_product(product_id, *quantity).unwrap();
            }

            prop_assert_eq!(cart.items.len(), 1);
            prop_assert_eq!(cart.items[0].quantity, quantities.iter().sum::<u32>());
        }
    }
}
