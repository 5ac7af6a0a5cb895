use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::design::errors::DesignError;
use crate::domain::design::model::{
    DEFAULT_STYLE, Design, EnhancementRequest, GeneratedDesign, NewDesignProps,
};
use crate::domain::design::repository::DesignRepository;
use crate::domain::design::services::{ImageSynthesizerService, PromptEnhancerService};
use crate::domain::design::use_cases::generate::{GenerateDesignParams, GenerateDesignUseCase};
use crate::domain::logger::Logger;
use crate::domain::shared::assets::{AssetFolder, AssetSource, AssetStoreService};

pub struct GenerateDesignUseCaseImpl {
    pub repository: Arc<dyn DesignRepository>,
    /// `None` when no enhancement credential is configured.
    pub enhancer: Option<Arc<dyn PromptEnhancerService>>,
    pub synthesizer: Arc<dyn ImageSynthesizerService>,
    pub asset_store: Arc<dyn AssetStoreService>,
    pub logger: Arc<dyn Logger>,
}

impl GenerateDesignUseCaseImpl {
    async fn enhance(&self, request: EnhancementRequest) -> String {
        let Some(enhancer) = &self.enhancer else {
            self.logger.debug("Prompt enhancement disabled, using raw prompt");
            return request.prompt;
        };

        match enhancer.enhance(&request).await {
            Ok(text) if !text.trim().is_empty() => {
                let enhanced = text.trim().to_string();
                self.logger.info(&format!("Enhanced prompt: {}", enhanced));
                enhanced
            }
            Ok(_) => {
                self.logger
                    .warn("Prompt enhancer returned no text, using raw prompt");
                request.prompt
            }
            Err(e) => {
                self.logger
                    .warn(&format!("Prompt enhancement failed ({}), using raw prompt", e));
                request.prompt
            }
        }
    }

    fn owner(&self, raw: Option<&str>) -> Option<Uuid> {
        let raw = raw.map(str::trim).filter(|r| !r.is_empty());
        match raw.map(Uuid::parse_str) {
            Some(Ok(id)) => Some(id),
            Some(Err(_)) => {
                self.logger.warn(&format!(
                    "Invalid user id {:?}, recording design anonymously",
                    raw
                ));
                None
            }
            None => {
                self.logger
                    .warn("No user id supplied, recording design anonymously");
                None
            }
        }
    }
}

#[async_trait]
impl GenerateDesignUseCase for GenerateDesignUseCaseImpl {
    async fn execute(&self, params: GenerateDesignParams) -> Result<GeneratedDesign, DesignError> {
        let prompt = params.prompt.trim().to_string();
        if prompt.is_empty() {
            return Err(DesignError::PromptEmpty);
        }
        let style = params
            .style
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_STYLE.to_string());

        self.logger.info(&format!(
            "Generating design (style: {}, isolate subject: {}): {}",
            style, params.remove_background, prompt
        ));

        let enhanced_prompt = self
            .enhance(EnhancementRequest {
                prompt: prompt.clone(),
                style: style.clone(),
                isolate_subject: params.remove_background,
            })
            .await;

        let synthesized = self.synthesizer.synthesize(&enhanced_prompt);
        self.logger
            .debug(&format!("Synthesized image URL: {}", synthesized));

        let image_url = self
            .asset_store
            .upload(&AssetSource::RemoteUrl(synthesized), AssetFolder::Designs)
            .await
            .map_err(|e| {
                self.logger
                    .error(&format!("Design upload failed: {}", e));
                DesignError::AssetUpload(e)
            })?;

        let design = Design::new(NewDesignProps {
            user_id: self.owner(params.user_id.as_deref()),
            prompt,
            enhanced_prompt,
            image_url,
            style,
        });
        self.repository.save(&design).await?;

        self.logger.info(&format!("Design recorded: {}", design.id));
        Ok(GeneratedDesign {
            image_url: design.image_url,
            enhanced_prompt: design.enhanced_prompt,
            design_id: design.id,
        })
    }
}
