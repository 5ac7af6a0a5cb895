use poem_openapi::Object;

use business::domain::design::model::GeneratedDesign;

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct GenerateDesignRequest {
    /// Free text description of the design
    #[oai(default)]
    pub prompt: String,
    /// Art style, "Realistic" when omitted
    #[oai(skip_serializing_if_is_none)]
    pub style: Option<String>,
    /// Ask for an isolated subject on a plain background
    #[oai(default)]
    pub remove_background: bool,
    /// Owner of the recorded design; omitted for anonymous generation
    #[oai(skip_serializing_if_is_none)]
    pub user_id: Option<String>,
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct GenerateDesignResponse {
    pub image_url: String,
    pub enhanced_prompt: String,
    pub design_id: String,
}

impl From<GeneratedDesign> for GenerateDesignResponse {
    fn from(design: GeneratedDesign) -> Self {
        Self {
            image_url: design.image_url,
            enhanced_prompt: design.enhanced_prompt,
            design_id: design.design_id.to_string(),
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct RemoveBackgroundRequest {
    #[oai(default)]
    pub image_url: String,
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct RemoveBackgroundResponse {
    pub transparent_image_url: String,
}
