use chrono::{DateTime, Utc};
use uuid::Uuid;

pub const DEFAULT_STYLE: &str = "Realistic";

/// Write-once record of one generation event.
#[derive(Debug, Clone)]
pub struct Design {
    pub id: Uuid,
    /// `None` for orphaned designs.
    pub user_id: Option<Uuid>,
    pub prompt: String,
    pub enhanced_prompt: String,
    pub image_url: String,
    pub style: String,
    pub created_at: DateTime<Utc>,
}

pub struct NewDesignProps {
    pub user_id: Option<Uuid>,
    pub prompt: String,
    pub enhanced_prompt: String,
    pub image_url: String,
    pub style: String,
}

impl Design {
    pub fn new(props: NewDesignProps) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: props.user_id,
            prompt: props.prompt,
            enhanced_prompt: props.enhanced_prompt,
            image_url: props.image_url,
            style: props.style,
            created_at: Utc::now(),
        }
    }

    pub fn from_repository(
        id: Uuid,
        user_id: Option<Uuid>,
        prompt: String,
        enhanced_prompt: String,
        image_url: String,
        style: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            prompt,
            enhanced_prompt,
            image_url,
            style,
            created_at,
        }
    }

    pub fn is_orphaned(&self) -> bool {
        self.user_id.is_none()
    }
}

/// Input handed to the prompt enhancer.
#[derive(Debug, Clone, PartialEq)]
pub struct EnhancementRequest {
    pub prompt: String,
    pub style: String,
    pub isolate_subject: bool,
}

#[derive(Debug, Clone)]
pub struct GeneratedDesign {
    pub image_url: String,
    pub enhanced_prompt: String,
    pub design_id: Uuid,
}
