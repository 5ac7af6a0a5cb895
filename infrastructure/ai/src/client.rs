use std::time::Duration;

use reqwest::Client;

const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const GEMINI_MODEL: &str = "gemini-flash-latest";
const REMOVE_BG_BASE_URL: &str = "https://api.remove.bg/v1.0";

fn http_client() -> Client {
    Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .unwrap_or_default()
}

/// Shared Gemini HTTP client configuration.
pub struct GeminiClient {
    pub client: Client,
    pub api_key: String,
    pub base_url: String,
    pub model: String,
}

impl GeminiClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: http_client(),
            api_key,
            base_url: GEMINI_BASE_URL.to_string(),
            model: GEMINI_MODEL.to_string(),
        }
    }

    /// Returns the generateContent endpoint URL for the configured model.
    pub fn generate_content_url(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }
}

/// Shared remove.bg HTTP client configuration.
pub struct RemoveBgClient {
    pub client: Client,
    pub api_key: String,
    pub base_url: String,
}

impl RemoveBgClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: http_client(),
            api_key,
            base_url: REMOVE_BG_BASE_URL.to_string(),
        }
    }

    pub fn remove_bg_url(&self) -> String {
        format!("{}/removebg", self.base_url)
    }
}
