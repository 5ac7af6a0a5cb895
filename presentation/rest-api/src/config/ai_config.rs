use std::env;

/// Optional credentials for the AI providers.
///
/// A missing key disables the matching capability instead of failing startup:
/// - GEMINI_API_KEY: prompt enhancement
/// - REMOVE_BG_API_KEY: background removal
pub struct AiConfig {
    pub gemini_api_key: Option<String>,
    pub remove_bg_api_key: Option<String>,
}

impl AiConfig {
    pub fn from_env() -> Self {
        Self {
            gemini_api_key: non_blank_var("GEMINI_API_KEY"),
            remove_bg_api_key: non_blank_var("REMOVE_BG_API_KEY"),
        }
    }
}

fn non_blank_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
