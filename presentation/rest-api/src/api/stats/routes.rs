use std::sync::Arc;

use poem::http::StatusCode;
use poem_openapi::{Object, OpenApi, payload::Json};

use business::domain::stats::errors::StatsError;
use business::domain::stats::model::Stats;
use business::domain::stats::use_cases::get::GetStatsUseCase;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response};
use crate::api::security::{Authenticated, authorize_admin};
use crate::api::tags::ApiTags;

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct StatsResponse {
    /// Accounts with the `user` role
    pub total_users: u64,
    pub total_orders: u64,
    pub total_revenue: f64,
    pub products_count: u64,
}

impl From<Stats> for StatsResponse {
    fn from(stats: Stats) -> Self {
        Self {
            total_users: stats.total_users,
            total_orders: stats.total_orders,
            total_revenue: stats.total_revenue,
            products_count: stats.products_count,
        }
    }
}

impl IntoErrorResponse for StatsError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        error_response(StatusCode::INTERNAL_SERVER_ERROR, "InternalError", &self)
    }
}

pub struct StatsApi {
    get_use_case: Arc<dyn GetStatsUseCase>,
}

impl StatsApi {
    pub fn new(get_use_case: Arc<dyn GetStatsUseCase>) -> Self {
        Self { get_use_case }
    }
}

/// Admin dashboard API
#[OpenApi]
impl StatsApi {
    /// Dashboard counters
    #[oai(path = "/admin/stats", method = "get", tag = "ApiTags::Stats")]
    async fn get_stats(&self, auth: Authenticated) -> GetStatsResponse {
        if let Err(err) = authorize_admin(&auth.0) {
            return GetStatsResponse::Forbidden(err.into_error_response().1);
        }

        match self.get_use_case.execute().await {
            Ok(stats) => GetStatsResponse::Ok(Json(stats.into())),
            Err(err) => GetStatsResponse::InternalError(err.into_error_response().1),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetStatsResponse {
    #[oai(status = 200)]
    Ok(Json<StatsResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
