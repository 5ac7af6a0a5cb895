use rand::Rng;
use url::Url;

use business::domain::design::services::ImageSynthesizerService;

pub const POLLINATIONS_BASE_URL: &str = "https://image.pollinations.ai/prompt";

/// Renders prompts through the Pollinations URL scheme; the image is produced on first fetch.
pub struct ImageSynthesizerPollinations {
    base_url: Url,
    size: u32,
    model: String,
}

impl ImageSynthesizerPollinations {
    pub fn new(base_url: &str) -> Result<Self, url::ParseError> {
        Ok(Self {
            base_url: Url::parse(base_url)?,
            size: 1024,
            model: "flux".to_string(),
        })
    }

    fn url_for(&self, prompt: &str, seed: u32) -> String {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(prompt);
        }
        url.query_pairs_mut()
            .append_pair("width", &self.size.to_string())
            .append_pair("height", &self.size.to_string())
            .append_pair("nologo", "true")
            .append_pair("seed", &seed.to_string())
            .append_pair("model", &self.model);
        url.into()
    }
}

impl ImageSynthesizerService for ImageSynthesizerPollinations {
    fn synthesize(&self, prompt: &str) -> String {
        let seed = rand::rng().random_range(0..1_000_000);
        self.url_for(prompt, seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn synthesizer() -> ImageSynthesizerPollinations {
        ImageSynthesizerPollinations::new(POLLINATIONS_BASE_URL).unwrap()
    }

    #[test]
    fn should_build_templated_url() {
        let url = synthesizer().url_for("a neon fox", 42);

        assert_eq!(
            url,
            "https://image.pollinations.ai/prompt/a%20neon%20fox?width=1024&height=1024&nologo=true&seed=42&model=flux"
        );
    }

    #[test]
    fn should_encode_slashes_inside_prompt() {
        let url = synthesizer().url_for("black/white cat?", 1);

        assert!(url.starts_with("https://image.pollinations.ai/prompt/black%2Fwhite%20cat%3F?"));
    }

    #[test]
    fn should_pick_seed_in_range() {
        let url = Url::parse(&synthesizer().synthesize("mug")).unwrap();
        let seed: u32 = url
            .query_pairs()
            .find(|(k, _)| k == "seed")
            .map(|(_, v)| v.parse().unwrap())
            .unwrap();

        assert!(seed < 1_000_000);
    }
}
