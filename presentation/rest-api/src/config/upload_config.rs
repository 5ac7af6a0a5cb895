use std::env;
use std::path::PathBuf;

/// Directory where multipart uploads are spooled before reaching the asset host.
///
/// Environment variables:
/// - UPLOAD_DIR: spool directory (default: OS temp dir)
#[derive(Debug, Clone)]
pub struct UploadConfig {
    pub dir: PathBuf,
}

impl UploadConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let dir = env::var("UPLOAD_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| env::temp_dir());
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }
}
