use async_trait::async_trait;
use serde_json::json;

use business::domain::design::errors::DesignError;
use business::domain::design::model::EnhancementRequest;
use business::domain::design::services::PromptEnhancerService;

use crate::client::GeminiClient;

const ISOLATE_SUBJECT_DIRECTIVE: &str = r#"CRITICAL INSTRUCTION: The image MUST have a CLEAN WHITE BACKGROUND. No scenery, no landscape, no complex background elements. The subject must be ISOLATED (die-cut style). Use keywords: "white background", "simple background", "minimalist", "vector", "sticker"."#;

pub struct PromptEnhancerGemini {
    client: GeminiClient,
}

impl PromptEnhancerGemini {
    pub fn new(client: GeminiClient) -> Self {
        Self { client }
    }

    fn build_prompt(request: &EnhancementRequest) -> String {
        let directive = if request.isolate_subject {
            ISOLATE_SUBJECT_DIRECTIVE
        } else {
            ""
        };

        format!(
            r#"As an AI art prompt generator, please rewrite the following description into a detailed, creative, and high-quality image generation prompt in English, suitable for a T-shirt design. Focus on visual details, style, and mood. Keep it under 50 words. The description is: "{}". The desired art style is: "{}". {} Force the prompt to start with "A sticker of..." or "A vector design of..." if background removal is requested."#,
            request.prompt, request.style, directive
        )
    }

    fn extract_text(data: &serde_json::Value) -> Option<String> {
        data["candidates"]
            .as_array()
            .and_then(|candidates| candidates.first())
            .and_then(|candidate| candidate["content"]["parts"].as_array())
            .and_then(|parts| parts.first())
            .and_then(|part| part["text"].as_str())
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .map(str::to_string)
    }
}

#[async_trait]
impl PromptEnhancerService for PromptEnhancerGemini {
    async fn enhance(&self, request: &EnhancementRequest) -> Result<String, DesignError> {
        let body = json!({
            "contents": [
                { "parts": [ { "text": Self::build_prompt(request) } ] }
            ]
        });

        let response = self
            .client
            .client
            .post(self.client.generate_content_url())
            .header("Content-Type", "application/json")
            .header("x-goog-api-key", &self.client.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(target: "PromptPrint -- ", "gemini request failed: {}", e);
                DesignError::EnhancementFailed
            })?;

        if !response.status().is_success() {
            tracing::warn!(target: "PromptPrint -- ", "gemini answered {}", response.status());
            return Err(DesignError::EnhancementFailed);
        }

        let data: serde_json::Value = response
            .json()
            .await
            .map_err(|_| DesignError::EnhancementFailed)?;

        Self::extract_text(&data).ok_or(DesignError::EnhancementFailed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(isolate_subject: bool) -> EnhancementRequest {
        EnhancementRequest {
            prompt: "a fox in neon".to_string(),
            style: "Cyberpunk".to_string(),
            isolate_subject,
        }
    }

    #[test]
    fn should_embed_prompt_and_style() {
        let prompt = PromptEnhancerGemini::build_prompt(&request(false));

        assert!(prompt.contains(r#"The description is: "a fox in neon""#));
        assert!(prompt.contains(r#"The desired art style is: "Cyberpunk""#));
        assert!(!prompt.contains("CLEAN WHITE BACKGROUND"));
    }

    #[test]
    fn should_add_isolation_directive_when_requested() {
        let prompt = PromptEnhancerGemini::build_prompt(&request(true));

        assert!(prompt.contains("CLEAN WHITE BACKGROUND"));
    }

    #[test]
    fn should_extract_first_candidate_text() {
        let data = json!({
            "candidates": [
                { "content": { "parts": [ { "text": "  A sticker of a neon fox \n" } ] } }
            ]
        });

        assert_eq!(
            PromptEnhancerGemini::extract_text(&data).as_deref(),
            Some("A sticker of a neon fox")
        );
    }

    #[test]
    fn should_return_none_when_text_missing() {
        assert!(PromptEnhancerGemini::extract_text(&json!({ "candidates": [] })).is_none());
        assert!(PromptEnhancerGemini::extract_text(&json!({ "error": "quota" })).is_none());
        let blank = json!({ "candidates": [ { "content": { "parts": [ { "text": "  " } ] } } ] });
        assert!(PromptEnhancerGemini::extract_text(&blank).is_none());
    }
}
