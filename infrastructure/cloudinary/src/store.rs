use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use reqwest::multipart::{Form, Part};

use business::domain::shared::assets::{AssetError, AssetFolder, AssetSource, AssetStoreService};

use crate::signature::sign;

const CLOUDINARY_BASE_URL: &str = "https://api.cloudinary.com/v1_1";

pub struct CloudinaryCredentials {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
}

/// Signed image uploads to Cloudinary; every asset is stored as WebP.
pub struct CloudinaryAssetStore {
    client: Client,
    credentials: CloudinaryCredentials,
    base_url: String,
}

impl CloudinaryAssetStore {
    pub fn new(credentials: CloudinaryCredentials) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_default();

        Self {
            client,
            credentials,
            base_url: CLOUDINARY_BASE_URL.to_string(),
        }
    }

    fn upload_url(&self) -> String {
        format!(
            "{}/{}/image/upload",
            self.base_url, self.credentials.cloud_name
        )
    }

    fn signed_params(&self, folder: AssetFolder, timestamp: i64) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("folder", folder.to_string()),
            ("format", "webp".to_string()),
            ("timestamp", timestamp.to_string()),
        ];
        let signature = sign(&params, &self.credentials.api_secret);
        params.push(("signature", signature));
        params
    }

    async fn file_part(source: &AssetSource) -> Result<Part, AssetError> {
        match source {
            AssetSource::RemoteUrl(url) | AssetSource::DataUri(url) => Ok(Part::text(url.clone())),
            AssetSource::TempFile(file) => {
                let bytes = tokio::fs::read(file.path())
                    .await
                    .map_err(|_| AssetError::UnreadableSource)?;
                let name = file
                    .path()
                    .file_name()
                    .and_then(|n| n.to_str())
                    .unwrap_or("upload")
                    .to_string();
                Ok(Part::bytes(bytes).file_name(name))
            }
        }
    }
}

#[async_trait]
impl AssetStoreService for CloudinaryAssetStore {
    async fn upload(
        &self,
        source: &AssetSource,
        folder: AssetFolder,
    ) -> Result<String, AssetError> {
        let mut form = Form::new()
            .part("file", Self::file_part(source).await?)
            .text("api_key", self.credentials.api_key.clone())
            .text("signature_algorithm", "sha256");
        for (name, value) in self.signed_params(folder, Utc::now().timestamp()) {
            form = form.text(name, value);
        }

        let response = self
            .client
            .post(self.upload_url())
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(target: "PromptPrint -- ", "cloudinary request failed: {}", e);
                AssetError::UploadFailed
            })?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            tracing::warn!(target: "PromptPrint -- ", "cloudinary answered {}: {}", status, detail);
            return Err(AssetError::UploadFailed);
        }

        let data: serde_json::Value = response
            .json()
            .await
            .map_err(|_| AssetError::InvalidResponse)?;

        secure_url(&data).ok_or(AssetError::InvalidResponse)
    }
}

fn secure_url(data: &serde_json::Value) -> Option<String> {
    data["secure_url"]
        .as_str()
        .filter(|url| !url.is_empty())
        .map(str::to_string)
}
