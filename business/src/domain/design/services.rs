use async_trait::async_trait;

use super::errors::DesignError;
use super::model::EnhancementRequest;

/// Service port for the text LLM that rewrites user prompts.
#[async_trait]
pub trait PromptEnhancerService: Send + Sync {
    async fn enhance(&self, request: &EnhancementRequest) -> Result<String, DesignError>;
}

/// Service port for the image generator.
///
/// Produces a URL that renders the image on fetch; nothing is called here.
pub trait ImageSynthesizerService: Send + Sync {
    fn synthesize(&self, prompt: &str) -> String;
}

/// Service port for the background removal provider. Returns PNG bytes.
#[async_trait]
pub trait BackgroundRemoverService: Send + Sync {
    async fn remove_background(&self, image_url: &str) -> Result<Vec<u8>, DesignError>;
}
