#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("cart.user_id_missing")]
    UserIdMissing,
    #[error("cart.custom_product_missing")]
    CustomProductMissing,
    #[error("cart.invalid_custom_product")]
    InvalidCustomProduct,
    #[error("cart.inline_image_not_allowed")]
    InlineImageNotAllowed,
    #[error("cart.invalid_quantity")]
    InvalidQuantity,
    #[error("cart.item_target_missing")]
    ItemTargetMissing,
    #[error("cart.not_found")]
    NotFound,
    #[error("cart.item_not_found")]
    ItemNotFound,
    #[error("cart.product_not_found")]
    ProductNotFound,
    #[error("cart.image_upload_failed")]
    ImageUpload(#[source] crate::domain::shared::assets::AssetError),
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
