use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::cart::model::CartItemSelector;
use business::domain::cart::use_cases::add_custom::{AddCustomToCartParams, AddCustomToCartUseCase};
use business::domain::cart::use_cases::add_product::{
    AddProductToCartParams, AddProductToCartUseCase,
};
use business::domain::cart::use_cases::clear::{ClearCartParams, ClearCartUseCase};
use business::domain::cart::use_cases::get::{GetCartParams, GetCartUseCase};
use business::domain::cart::use_cases::remove_item::{RemoveCartItemParams, RemoveCartItemUseCase};
use business::domain::cart::use_cases::update_quantity::{
    UpdateCartQuantityParams, UpdateCartQuantityUseCase,
};
use business::domain::shared::value_objects::UserId;

use crate::api::cart::dto::{
    AddCustomToCartRequest, AddToCartRequest, CartResponse, UpdateCartRequest,
};
use crate::api::error::{ErrorResponse, IntoErrorResponse, MessageResponse, invalid_id};
use crate::api::security::{Authenticated, authorize_owner};
use crate::api::tags::ApiTags;

pub struct CartApi {
    get_use_case: Arc<dyn GetCartUseCase>,
    add_product_use_case: Arc<dyn AddProductToCartUseCase>,
    add_custom_use_case: Arc<dyn AddCustomToCartUseCase>,
    update_quantity_use_case: Arc<dyn UpdateCartQuantityUseCase>,
    remove_item_use_case: Arc<dyn RemoveCartItemUseCase>,
    clear_use_case: Arc<dyn ClearCartUseCase>,
}

impl CartApi {
    pub fn new(
        get_use_case: Arc<dyn GetCartUseCase>,
        add_product_use_case: Arc<dyn AddProductToCartUseCase>,
        add_custom_use_case: Arc<dyn AddCustomToCartUseCase>,
        update_quantity_use_case: Arc<dyn UpdateCartQuantityUseCase>,
        remove_item_use_case: Arc<dyn RemoveCartItemUseCase>,
        clear_use_case: Arc<dyn ClearCartUseCase>,
    ) -> Self {
        Self {
            get_use_case,
            add_product_use_case,
            add_custom_use_case,
            update_quantity_use_case,
            remove_item_use_case,
            clear_use_case,
        }
    }
}

fn cart_error(err: business::domain::cart::errors::CartError) -> CartApiResponse {
    let (status, json) = err.into_error_response();
    match status.as_u16() {
        400 => CartApiResponse::BadRequest(json),
        404 => CartApiResponse::NotFound(json),
        _ => CartApiResponse::InternalError(json),
    }
}

/// Shopping cart API
///
/// Each user owns one cart; callers may only touch their own unless they are admins.
#[OpenApi]
impl CartApi {
    /// Get a user's cart
    ///
    /// Returns an empty cart when none exists yet.
    #[oai(path = "/cart/:user_id", method = "get", tag = "ApiTags::Cart")]
    async fn get_cart(&self, auth: Authenticated, user_id: Path<String>) -> CartApiResponse {
        if let Err(err) = authorize_owner(&auth.0, &user_id.0) {
            return CartApiResponse::Forbidden(err.into_error_response().1);
        }

        match self
            .get_use_case
            .execute(GetCartParams {
                user_id: UserId::new(user_id.0),
            })
            .await
        {
            Ok(view) => CartApiResponse::Ok(Json(view.into())),
            Err(err) => cart_error(err),
        }
    }

    /// Add a catalog product
    ///
    /// Adding a product already in the cart increases its quantity.
    #[oai(path = "/cart", method = "post", tag = "ApiTags::Cart")]
    async fn add_product(&self, auth: Authenticated, body: Json<AddToCartRequest>) -> CartApiResponse {
        if let Err(err) = authorize_owner(&auth.0, &body.0.user_id) {
            return CartApiResponse::Forbidden(err.into_error_response().1);
        }

        let params = AddProductToCartParams {
            user_id: UserId::new(body.0.user_id),
            product_id: body.0.product_id,
            quantity: body.0.quantity,
        };

        match self.add_product_use_case.execute(params).await {
            Ok(view) => CartApiResponse::Ok(Json(view.into())),
            Err(err) => cart_error(err),
        }
    }

    /// Add a custom design
    ///
    /// Inline images are uploaded to the asset host before the line is stored.
    #[oai(path = "/cart/custom", method = "post", tag = "ApiTags::Cart")]
    async fn add_custom(
        &self,
        auth: Authenticated,
        body: Json<AddCustomToCartRequest>,
    ) -> CartApiResponse {
        if let Some(user_id) = body.0.user_id.as_deref()
            && let Err(err) = authorize_owner(&auth.0, user_id)
        {
            return CartApiResponse::Forbidden(err.into_error_response().1);
        }

        let params = AddCustomToCartParams {
            user_id: body.0.user_id.map(UserId::new),
            custom_product: body.0.custom_product.map(Into::into),
            quantity: body.0.quantity,
        };

        match self.add_custom_use_case.execute(params).await {
            Ok(view) => CartApiResponse::Ok(Json(view.into())),
            Err(err) => cart_error(err),
        }
    }

    /// Set the quantity of a line
    #[oai(path = "/cart", method = "put", tag = "ApiTags::Cart")]
    async fn update_quantity(
        &self,
        auth: Authenticated,
        body: Json<UpdateCartRequest>,
    ) -> CartApiResponse {
        if let Err(err) = authorize_owner(&auth.0, &body.0.user_id) {
            return CartApiResponse::Forbidden(err.into_error_response().1);
        }

        let params = UpdateCartQuantityParams {
            user_id: UserId::new(body.0.user_id),
            selector: CartItemSelector {
                item_id: body.0.item_id,
                product_id: body.0.product_id,
            },
            quantity: body.0.quantity,
        };

        match self.update_quantity_use_case.execute(params).await {
            Ok(view) => CartApiResponse::Ok(Json(view.into())),
            Err(err) => cart_error(err),
        }
    }

    /// Empty the cart
    ///
    /// Deletes the whole cart; succeeds when there is none.
    #[oai(path = "/cart/:user_id/clear", method = "delete", tag = "ApiTags::Cart")]
    async fn clear(&self, auth: Authenticated, user_id: Path<String>) -> ClearCartResponse {
        if let Err(err) = authorize_owner(&auth.0, &user_id.0) {
            return ClearCartResponse::Forbidden(err.into_error_response().1);
        }

        match self
            .clear_use_case
            .execute(ClearCartParams {
                user_id: UserId::new(user_id.0),
            })
            .await
        {
            Ok(()) => ClearCartResponse::Ok(MessageResponse::new("Cart cleared")),
            Err(err) => ClearCartResponse::InternalError(err.into_error_response().1),
        }
    }

    /// Remove a line
    ///
    /// An unknown item id leaves the cart unchanged.
    #[oai(path = "/cart/:user_id/:item_id", method = "delete", tag = "ApiTags::Cart")]
    async fn remove_item(
        &self,
        auth: Authenticated,
        user_id: Path<String>,
        item_id: Path<String>,
    ) -> CartApiResponse {
        if let Err(err) = authorize_owner(&auth.0, &user_id.0) {
            return CartApiResponse::Forbidden(err.into_error_response().1);
        }
        let Ok(item_id) = Uuid::parse_str(&item_id.0) else {
            return CartApiResponse::BadRequest(invalid_id("cart.invalid_item_id"));
        };

        let params = RemoveCartItemParams {
            user_id: UserId::new(user_id.0),
            item_id,
        };

        match self.remove_item_use_case.execute(params).await {
            Ok(view) => CartApiResponse::Ok(Json(view.into())),
            Err(err) => cart_error(err),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CartApiResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ClearCartResponse {
    #[oai(status = 200)]
    Ok(Json<MessageResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
