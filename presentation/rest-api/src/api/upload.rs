use std::path::Path;

use poem_openapi::payload::Json;
use poem_openapi::types::multipart::Upload;
use uuid::Uuid;

use business::domain::shared::temp_file::TempFile;

use crate::api::error::ErrorResponse;

/// Spools a multipart upload to `dir`.
///
/// The returned guard deletes the file when dropped, including when writing fails.
pub async fn persist_upload(upload: Upload, dir: &Path) -> std::io::Result<TempFile> {
    let file = TempFile::adopt(dir.join(spool_name(upload.file_name())));
    let bytes = upload.into_vec().await?;
    tokio::fs::write(file.path(), bytes).await?;
    Ok(file)
}

pub fn upload_failed(err: std::io::Error) -> Json<ErrorResponse> {
    tracing::error!(target: "PromptPrint -- ", error = %err, "failed to spool upload");
    ErrorResponse::new("InternalError", "upload.unreadable")
}

fn spool_name(original: Option<&str>) -> String {
    let extension = original
        .and_then(|name| Path::new(name).extension())
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()))
        .map(|ext| format!(".{}", ext.to_ascii_lowercase()))
        .unwrap_or_default();

    format!("promptprint-upload-{}{}", Uuid::new_v4(), extension)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_keep_lowercased_extension() {
        let name = spool_name(Some("Slip.PNG"));

        assert!(name.starts_with("promptprint-upload-"));
        assert!(name.ends_with(".png"));
    }

    #[test]
    fn should_drop_suspicious_extension() {
        assert!(!spool_name(Some("evil.p/../x")).contains(".."));
        assert!(!spool_name(None).contains('.'));
    }

    #[test]
    fn should_never_reuse_names() {
        assert_ne!(spool_name(Some("a.jpg")), spool_name(Some("a.jpg")));
    }
}
