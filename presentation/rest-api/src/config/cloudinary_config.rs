use anyhow::Context;
use cloudinary::CloudinaryCredentials;
use std::env;

/// Cloudinary credentials, all required:
/// CLOUDINARY_CLOUD_NAME, CLOUDINARY_API_KEY, CLOUDINARY_API_SECRET
pub fn credentials_from_env() -> anyhow::Result<CloudinaryCredentials> {
    Ok(CloudinaryCredentials {
        cloud_name: env::var("CLOUDINARY_CLOUD_NAME").context("CLOUDINARY_CLOUD_NAME must be set")?,
        api_key: env::var("CLOUDINARY_API_KEY").context("CLOUDINARY_API_KEY must be set")?,
        api_secret: env::var("CLOUDINARY_API_SECRET")
            .context("CLOUDINARY_API_SECRET must be set")?,
    })
}
