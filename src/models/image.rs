use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct ImageGenerationRequest {
    pub prompt: String,
    pub model_id: Option<String>,
    pub aspect_ratio: Option<String>,
}

impl ImageGenerationRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            model_id: None,
            aspect_ratio: None,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ImageGenerationResponse {
    #[serde(skip)]
    pub image_data: Vec<u8>,
    pub mime_type: String,
    pub model: String,
}
