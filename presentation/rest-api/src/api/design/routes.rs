use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::design::use_cases::generate::{GenerateDesignParams, GenerateDesignUseCase};
use business::domain::design::use_cases::remove_background::{
    RemoveBackgroundParams, RemoveBackgroundUseCase,
};

use crate::api::design::dto::{
    GenerateDesignRequest, GenerateDesignResponse, RemoveBackgroundRequest,
    RemoveBackgroundResponse,
};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct DesignApi {
    generate_use_case: Arc<dyn GenerateDesignUseCase>,
    remove_background_use_case: Arc<dyn RemoveBackgroundUseCase>,
}

impl DesignApi {
    pub fn new(
        generate_use_case: Arc<dyn GenerateDesignUseCase>,
        remove_background_use_case: Arc<dyn RemoveBackgroundUseCase>,
    ) -> Self {
        Self {
            generate_use_case,
            remove_background_use_case,
        }
    }
}

/// AI design generation API
#[OpenApi]
impl DesignApi {
    /// Generate a design from a prompt
    ///
    /// The prompt is enhanced when an enhancement key is configured, rendered
    /// to an image and stored on the asset host.
    #[oai(path = "/generate-design", method = "post", tag = "ApiTags::Designs")]
    async fn generate_design(&self, body: Json<GenerateDesignRequest>) -> GenerateDesignApiResponse {
        let params = GenerateDesignParams {
            prompt: body.0.prompt,
            style: body.0.style,
            remove_background: body.0.remove_background,
            user_id: body.0.user_id,
        };

        match self.generate_use_case.execute(params).await {
            Ok(design) => GenerateDesignApiResponse::Ok(Json(design.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => GenerateDesignApiResponse::BadRequest(json),
                    _ => GenerateDesignApiResponse::InternalError(json),
                }
            }
        }
    }

    /// Remove the background of an image
    #[oai(path = "/remove-background", method = "post", tag = "ApiTags::Designs")]
    async fn remove_background(
        &self,
        body: Json<RemoveBackgroundRequest>,
    ) -> RemoveBackgroundApiResponse {
        match self
            .remove_background_use_case
            .execute(RemoveBackgroundParams {
                image_url: body.0.image_url,
            })
            .await
        {
            Ok(transparent_image_url) => RemoveBackgroundApiResponse::Ok(Json(
                RemoveBackgroundResponse {
                    transparent_image_url,
                },
            )),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => RemoveBackgroundApiResponse::BadRequest(json),
                    _ => RemoveBackgroundApiResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GenerateDesignApiResponse {
    #[oai(status = 200)]
    Ok(Json<GenerateDesignResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum RemoveBackgroundApiResponse {
    #[oai(status = 200)]
    Ok(Json<RemoveBackgroundResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
