use std::path::PathBuf;
use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::shared::assets::AssetSource;
use business::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::product::use_cases::get_all::GetAllProductsUseCase;
use business::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};
use business::domain::product::use_cases::upload_image::{
    UploadProductImageParams, UploadProductImageUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse, MessageResponse, invalid_id};
use crate::api::product::dto::{
    CreateProductForm, ImageUrlResponse, ProductResponse, UpdateProductForm, UploadImageForm,
    parse_price,
};
use crate::api::security::{Authenticated, authorize_admin};
use crate::api::tags::ApiTags;
use crate::api::upload::{persist_upload, upload_failed};

pub struct ProductApi {
    get_all_use_case: Arc<dyn GetAllProductsUseCase>,
    create_use_case: Arc<dyn CreateProductUseCase>,
    update_use_case: Arc<dyn UpdateProductUseCase>,
    delete_use_case: Arc<dyn DeleteProductUseCase>,
    upload_image_use_case: Arc<dyn UploadProductImageUseCase>,
    upload_dir: PathBuf,
}

impl ProductApi {
    pub fn new(
        get_all_use_case: Arc<dyn GetAllProductsUseCase>,
        create_use_case: Arc<dyn CreateProductUseCase>,
        update_use_case: Arc<dyn UpdateProductUseCase>,
        delete_use_case: Arc<dyn DeleteProductUseCase>,
        upload_image_use_case: Arc<dyn UploadProductImageUseCase>,
        upload_dir: PathBuf,
    ) -> Self {
        Self {
            get_all_use_case,
            create_use_case,
            update_use_case,
            delete_use_case,
            upload_image_use_case,
            upload_dir,
        }
    }
}

/// Product catalog API
///
/// Listing is public; every mutation requires an admin token.
#[OpenApi]
impl ProductApi {
    /// List the catalog, newest first
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    async fn get_all_products(&self) -> GetAllProductsResponse {
        match self.get_all_use_case.execute().await {
            Ok(products) => {
                let responses: Vec<ProductResponse> =
                    products.into_iter().map(|p| p.into()).collect();
                GetAllProductsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllProductsResponse::InternalError(json)
            }
        }
    }

    /// Create a product
    ///
    /// An attached image is uploaded to the asset host first.
    #[oai(path = "/admin/products", method = "post", tag = "ApiTags::Products")]
    async fn create_product(
        &self,
        auth: Authenticated,
        form: CreateProductForm,
    ) -> CreateProductResponse {
        if let Err(err) = authorize_admin(&auth.0) {
            return CreateProductResponse::Forbidden(err.into_error_response().1);
        }

        let price = match parse_price(&form.price) {
            Ok(price) => price,
            Err(err) => return CreateProductResponse::BadRequest(err.into_error_response().1),
        };

        let image = match form.image {
            Some(upload) => match persist_upload(upload, &self.upload_dir).await {
                Ok(file) => Some(AssetSource::TempFile(file)),
                Err(err) => return CreateProductResponse::InternalError(upload_failed(err)),
            },
            None => None,
        };

        let params = CreateProductParams {
            name: form.name,
            description: form.description,
            price,
            category: form.category,
            image,
        };

        match self.create_use_case.execute(params).await {
            Ok(product) => CreateProductResponse::Created(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateProductResponse::BadRequest(json),
                    _ => CreateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Update a product
    ///
    /// Only the supplied fields change.
    #[oai(path = "/admin/products/:id", method = "put", tag = "ApiTags::Products")]
    async fn update_product(
        &self,
        auth: Authenticated,
        id: Path<String>,
        form: UpdateProductForm,
    ) -> UpdateProductResponse {
        if let Err(err) = authorize_admin(&auth.0) {
            return UpdateProductResponse::Forbidden(err.into_error_response().1);
        }
        let Ok(uuid) = Uuid::parse_str(&id.0) else {
            return UpdateProductResponse::BadRequest(invalid_id("product.invalid_id"));
        };

        let price = match form.price.as_deref().map(parse_price).transpose() {
            Ok(price) => price,
            Err(err) => return UpdateProductResponse::BadRequest(err.into_error_response().1),
        };

        let image = match form.image {
            Some(upload) => match persist_upload(upload, &self.upload_dir).await {
                Ok(file) => Some(AssetSource::TempFile(file)),
                Err(err) => return UpdateProductResponse::InternalError(upload_failed(err)),
            },
            None => None,
        };

        let params = UpdateProductParams {
            id: uuid,
            name: form.name,
            description: form.description,
            price,
            category: form.category,
            image,
        };

        match self.update_use_case.execute(params).await {
            Ok(product) => UpdateProductResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateProductResponse::BadRequest(json),
                    404 => UpdateProductResponse::NotFound(json),
                    _ => UpdateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a product
    ///
    /// Succeeds whether or not the product exists.
    #[oai(path = "/admin/products/:id", method = "delete", tag = "ApiTags::Products")]
    async fn delete_product(&self, auth: Authenticated, id: Path<String>) -> DeleteProductResponse {
        if let Err(err) = authorize_admin(&auth.0) {
            return DeleteProductResponse::Forbidden(err.into_error_response().1);
        }
        let Ok(uuid) = Uuid::parse_str(&id.0) else {
            return DeleteProductResponse::BadRequest(invalid_id("product.invalid_id"));
        };

        match self
            .delete_use_case
            .execute(DeleteProductParams { id: uuid })
            .await
        {
            Ok(()) => DeleteProductResponse::Ok(MessageResponse::new("Product deleted")),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                DeleteProductResponse::InternalError(json)
            }
        }
    }

    /// Upload a standalone product image
    #[oai(path = "/admin/uploads", method = "post", tag = "ApiTags::Products")]
    async fn upload_image(&self, auth: Authenticated, form: UploadImageForm) -> UploadImageResponse {
        if let Err(err) = authorize_admin(&auth.0) {
            return UploadImageResponse::Forbidden(err.into_error_response().1);
        }

        let file = match persist_upload(form.image, &self.upload_dir).await {
            Ok(file) => file,
            Err(err) => return UploadImageResponse::InternalError(upload_failed(err)),
        };

        match self
            .upload_image_use_case
            .execute(UploadProductImageParams {
                image: AssetSource::TempFile(file),
            })
            .await
        {
            Ok(image_url) => UploadImageResponse::Ok(Json(ImageUrlResponse { image_url })),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                UploadImageResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllProductsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateProductResponse {
    #[oai(status = 201)]
    Created(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
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
pub enum DeleteProductResponse {
    #[oai(status = 200)]
    Ok(Json<MessageResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UploadImageResponse {
    #[oai(status = 200)]
    Ok(Json<ImageUrlResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
