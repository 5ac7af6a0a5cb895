use async_trait::async_trait;
use serde_json::json;

use business::domain::design::errors::DesignError;
use business::domain::design::services::BackgroundRemoverService;

use crate::client::RemoveBgClient;

pub struct BackgroundRemoverRemoveBg {
    client: RemoveBgClient,
}

impl BackgroundRemoverRemoveBg {
    pub fn new(client: RemoveBgClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl BackgroundRemoverService for BackgroundRemoverRemoveBg {
    async fn remove_background(&self, image_url: &str) -> Result<Vec<u8>, DesignError> {
        let response = self
            .client
            .client
            .post(self.client.remove_bg_url())
            .header("X-Api-Key", &self.client.api_key)
            .json(&json!({ "image_url": image_url, "size": "auto" }))
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(target: "PromptPrint -- ", "remove.bg request failed: {}", e);
                DesignError::BackgroundRemovalFailed
            })?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            tracing::warn!(target: "PromptPrint -- ", "remove.bg answered {}: {}", status, detail);
            return Err(DesignError::BackgroundRemovalFailed);
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|_| DesignError::BackgroundRemovalFailed)?;

        Ok(bytes.to_vec())
    }
}
