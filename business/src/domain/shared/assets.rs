use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use super::temp_file::TempFile;

/// Where an image comes from before the asset host makes it durable.
#[derive(Debug)]
pub enum AssetSource {
    /// Publicly fetchable URL; the asset host downloads it.
    RemoteUrl(String),
    /// Inline `data:` URI.
    DataUri(String),
    /// Upload spooled to local disk.
    TempFile(TempFile),
}

impl AssetSource {
    /// Wraps raw bytes into an inline data URI source.
    pub fn from_bytes(content_type: &str, bytes: &[u8]) -> Self {
        AssetSource::DataUri(format!(
            "data:{};base64,{}",
            content_type,
            STANDARD.encode(bytes)
        ))
    }

    /// Classifies a client supplied image reference.
    pub fn from_reference(reference: &str) -> Self {
        if is_inline_image(reference) {
            AssetSource::DataUri(reference.to_string())
        } else {
            AssetSource::RemoteUrl(reference.to_string())
        }
    }
}

/// True for `data:` URIs, which must never be persisted verbatim.
pub fn is_inline_image(reference: &str) -> bool {
    reference.trim_start().starts_with("data:")
}

/// Logical destination folder on the asset host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetFolder {
    Products,
    CartDesigns,
    Designs,
    PaymentSlips,
}

impl std::fmt::Display for AssetFolder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetFolder::Products => write!(f, "promptprint-products"),
            AssetFolder::CartDesigns => write!(f, "promptprint-cart-designs"),
            AssetFolder::Designs => write!(f, "promptprint-designs"),
            AssetFolder::PaymentSlips => write!(f, "promptprint-payment-slips"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("asset.unreadable_source")]
    UnreadableSource,
    #[error("asset.upload_failed")]
    UploadFailed,
    #[error("asset.invalid_response")]
    InvalidResponse,
}

/// Service port for the cloud asset host.
///
/// Returns a durable, publicly addressable URL for the uploaded image.
#[async_trait]
pub trait AssetStoreService: Send + Sync {
    async fn upload(&self, source: &AssetSource, folder: AssetFolder)
    -> Result<String, AssetError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_classify_data_uri_as_inline() {
        let source = AssetSource::from_reference("data:image/png;base64,AAAA");
        assert!(matches!(source, AssetSource::DataUri(_)));
    }

    #[test]
    fn should_classify_https_url_as_remote() {
        let source = AssetSource::from_reference("https://cdn.example.com/a.png");
        assert!(matches!(source, AssetSource::RemoteUrl(_)));
    }

    #[test]
    fn should_encode_bytes_as_data_uri() {
        let source = AssetSource::from_bytes("image/png", b"png");
        match source {
            AssetSource::DataUri(uri) => assert_eq!(uri, "data:image/png;base64,cG5n"),
            other => panic!("unexpected source: {:?}", other),
        }
    }

    #[test]
    fn should_name_folders_with_project_prefix() {
        assert_eq!(AssetFolder::Designs.to_string(), "promptprint-designs");
        assert_eq!(
            AssetFolder::CartDesigns.to_string(),
            "promptprint-cart-designs"
        );
    }
}
