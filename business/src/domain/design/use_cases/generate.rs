use async_trait::async_trait;

use crate::domain::design::errors::DesignError;
use crate::domain::design::model::GeneratedDesign;

pub struct GenerateDesignParams {
    pub prompt: String,
    pub style: Option<String>,
    pub remove_background: bool,
    /// Raw owner id as sent by the client; invalid values yield an orphaned design.
    pub user_id: Option<String>,
}

#[async_trait]
pub trait GenerateDesignUseCase: Send + Sync {
    async fn execute(&self, params: GenerateDesignParams) -> Result<GeneratedDesign, DesignError>;
}
