#[derive(Debug, thiserror::Error)]
pub enum DesignError {
    #[error("design.prompt_empty")]
    PromptEmpty,
    #[error("design.image_url_missing")]
    ImageUrlMissing,
    #[error("design.enhancement_failed")]
    EnhancementFailed,
    #[error("design.background_removal_unavailable")]
    BackgroundRemovalUnavailable,
    #[error("design.background_removal_failed")]
    BackgroundRemovalFailed,
    #[error("design.asset_upload_failed")]
    AssetUpload(#[source] crate::domain::shared::assets::AssetError),
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
