#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("order.user_id_missing")]
    UserIdMissing,
    #[error("order.items_empty")]
    ItemsEmpty,
    #[error("order.invalid_item")]
    InvalidItem,
    #[error("order.inline_image_not_allowed")]
    InlineImageNotAllowed,
    #[error("order.invalid_total")]
    InvalidTotal,
    #[error("order.not_found")]
    NotFound,
    #[error("order.invalid_status_transition")]
    InvalidStatusTransition,
    #[error("order.slip_upload_failed")]
    SlipUpload(#[source] crate::domain::shared::assets::AssetError),
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
