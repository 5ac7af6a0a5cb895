use std::path::PathBuf;
use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::order::errors::OrderError;
use business::domain::order::model::OrderItem;
use business::domain::order::use_cases::attach_payment_slip::{
    AttachPaymentSlipParams, AttachPaymentSlipUseCase,
};
use business::domain::order::use_cases::create::{CreateOrderParams, CreateOrderUseCase};
use business::domain::order::use_cases::get_all::GetAllOrdersUseCase;
use business::domain::order::use_cases::get_for_user::{GetUserOrdersParams, GetUserOrdersUseCase};
use business::domain::order::use_cases::update_status::{
    UpdateOrderStatusParams, UpdateOrderStatusUseCase,
};
use business::domain::shared::assets::AssetSource;
use business::domain::shared::value_objects::UserId;
use business::domain::user::model::Role;

use crate::api::error::{ErrorResponse, IntoErrorResponse, invalid_id};
use crate::api::order::dto::{
    AdminOrderResponse, CreateOrderRequest, OrderResponse, PaymentSlipForm,
    UpdateOrderStatusRequest,
};
use crate::api::security::{Authenticated, authorize_admin, authorize_owner};
use crate::api::tags::ApiTags;
use crate::api::upload::{persist_upload, upload_failed};

pub struct OrderApi {
    create_use_case: Arc<dyn CreateOrderUseCase>,
    get_for_user_use_case: Arc<dyn GetUserOrdersUseCase>,
    get_all_use_case: Arc<dyn GetAllOrdersUseCase>,
    update_status_use_case: Arc<dyn UpdateOrderStatusUseCase>,
    attach_payment_slip_use_case: Arc<dyn AttachPaymentSlipUseCase>,
    upload_dir: PathBuf,
}

impl OrderApi {
    pub fn new(
        create_use_case: Arc<dyn CreateOrderUseCase>,
        get_for_user_use_case: Arc<dyn GetUserOrdersUseCase>,
        get_all_use_case: Arc<dyn GetAllOrdersUseCase>,
        update_status_use_case: Arc<dyn UpdateOrderStatusUseCase>,
        attach_payment_slip_use_case: Arc<dyn AttachPaymentSlipUseCase>,
        upload_dir: PathBuf,
    ) -> Self {
        Self {
            create_use_case,
            get_for_user_use_case,
            get_all_use_case,
            update_status_use_case,
            attach_payment_slip_use_case,
            upload_dir,
        }
    }
}

fn order_error(err: OrderError) -> OrderApiResponse {
    let (status, json) = err.into_error_response();
    match status.as_u16() {
        400 => OrderApiResponse::BadRequest(json),
        404 => OrderApiResponse::NotFound(json),
        _ => OrderApiResponse::InternalError(json),
    }
}

/// Orders API
#[OpenApi]
impl OrderApi {
    /// Place an order
    ///
    /// Items are copied by value; the cart is not cleared.
    #[oai(path = "/orders", method = "post", tag = "ApiTags::Orders")]
    async fn create_order(
        &self,
        auth: Authenticated,
        body: Json<CreateOrderRequest>,
    ) -> CreateOrderResponse {
        let request = body.0;
        if let Some(user_id) = request.user_id.as_deref()
            && let Err(err) = authorize_owner(&auth.0, user_id)
        {
            return CreateOrderResponse::Forbidden(err.into_error_response().1);
        }

        let items: Result<Vec<OrderItem>, OrderError> =
            request.items.into_iter().map(OrderItem::try_from).collect();
        let items = match items {
            Ok(items) => items,
            Err(err) => return CreateOrderResponse::BadRequest(err.into_error_response().1),
        };

        let params = CreateOrderParams {
            user_id: request.user_id.map(UserId::new),
            customer: request.customer_details.into(),
            items,
            total_amount: request.total_amount,
        };

        match self.create_use_case.execute(params).await {
            Ok(order) => CreateOrderResponse::Created(Json(order.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateOrderResponse::BadRequest(json),
                    _ => CreateOrderResponse::InternalError(json),
                }
            }
        }
    }

    /// List a user's orders, newest first
    #[oai(path = "/orders/:user_id", method = "get", tag = "ApiTags::Orders")]
    async fn get_user_orders(
        &self,
        auth: Authenticated,
        user_id: Path<String>,
    ) -> GetUserOrdersResponse {
        if let Err(err) = authorize_owner(&auth.0, &user_id.0) {
            return GetUserOrdersResponse::Forbidden(err.into_error_response().1);
        }

        match self
            .get_for_user_use_case
            .execute(GetUserOrdersParams {
                user_id: UserId::new(user_id.0),
            })
            .await
        {
            Ok(orders) => {
                GetUserOrdersResponse::Ok(Json(orders.into_iter().map(Into::into).collect()))
            }
            Err(err) => GetUserOrdersResponse::InternalError(err.into_error_response().1),
        }
    }

    /// Attach a payment slip
    ///
    /// Moves the order to payment verification. Non-admin callers may only
    /// attach to their own orders.
    #[oai(path = "/orders/:id/payment", method = "post", tag = "ApiTags::Orders")]
    async fn attach_payment_slip(
        &self,
        auth: Authenticated,
        id: Path<String>,
        form: PaymentSlipForm,
    ) -> OrderApiResponse {
        let Ok(order_id) = Uuid::parse_str(&id.0) else {
            return OrderApiResponse::BadRequest(invalid_id("order.invalid_id"));
        };

        let file = match persist_upload(form.slip, &self.upload_dir).await {
            Ok(file) => file,
            Err(err) => return OrderApiResponse::InternalError(upload_failed(err)),
        };

        let owner = match auth.0.role {
            Role::Admin => None,
            Role::User => Some(auth.0.user_id),
        };

        let params = AttachPaymentSlipParams {
            order_id,
            owner,
            slip: AssetSource::TempFile(file),
        };

        match self.attach_payment_slip_use_case.execute(params).await {
            Ok(order) => OrderApiResponse::Ok(Json(order.into())),
            Err(err) => order_error(err),
        }
    }

    /// List every order with its customer, newest first
    #[oai(path = "/admin/orders", method = "get", tag = "ApiTags::Orders")]
    async fn get_all_orders(&self, auth: Authenticated) -> GetAllOrdersResponse {
        if let Err(err) = authorize_admin(&auth.0) {
            return GetAllOrdersResponse::Forbidden(err.into_error_response().1);
        }

        match self.get_all_use_case.execute().await {
            Ok(orders) => {
                GetAllOrdersResponse::Ok(Json(orders.into_iter().map(Into::into).collect()))
            }
            Err(err) => GetAllOrdersResponse::InternalError(err.into_error_response().1),
        }
    }

    /// Change an order's status
    ///
    /// Moves outside the order lifecycle are rejected.
    #[oai(path = "/admin/orders/:id/status", method = "put", tag = "ApiTags::Orders")]
    async fn update_status(
        &self,
        auth: Authenticated,
        id: Path<String>,
        body: Json<UpdateOrderStatusRequest>,
    ) -> OrderApiResponse {
        if let Err(err) = authorize_admin(&auth.0) {
            return OrderApiResponse::Forbidden(err.into_error_response().1);
        }
        let Ok(order_id) = Uuid::parse_str(&id.0) else {
            return OrderApiResponse::BadRequest(invalid_id("order.invalid_id"));
        };

        let params = UpdateOrderStatusParams {
            id: order_id,
            status: body.0.status.into(),
        };

        match self.update_status_use_case.execute(params).await {
            Ok(order) => OrderApiResponse::Ok(Json(order.into())),
            Err(err) => order_error(err),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateOrderResponse {
    #[oai(status = 201)]
    Created(Json<OrderResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetUserOrdersResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<OrderResponse>>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllOrdersResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<AdminOrderResponse>>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum OrderApiResponse {
    #[oai(status = 200)]
    Ok(Json<OrderResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
