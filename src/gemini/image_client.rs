use crate::{
    config::{Credential, GeminiConfig},
    error::{IconGenError, Result},
    gemini::ContentBackend,
    models::{GenerateContentRequest, ImageGenerationRequest, ImageGenerationResponse},
};
use base64::Engine;

#[derive(Clone)]
pub struct ImageClient<B> {
    backend: B,
    config: GeminiConfig,
}

impl<B: ContentBackend> ImageClient<B> {
    pub fn new(backend: B, config: GeminiConfig) -> Self {
        Self { backend, config }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Sends one request and returns the first inline image, decoded.
    pub async fn generate(
        &self,
        credential: &Credential,
        request: ImageGenerationRequest,
    ) -> Result<ImageGenerationResponse> {
        let model = request
            .model_id
            .unwrap_or_else(|| self.config.model.clone());
        let aspect_ratio = request
            .aspect_ratio
            .unwrap_or_else(|| self.config.aspect_ratio.clone());

        let payload = GenerateContentRequest::image_only(&request.prompt, &aspect_ratio);

        log::info!("Generating image with model: {}", model);

        let response = self
            .backend
            .generate_content(credential, &model, &payload)
            .await?;

        if let Some(reason) = response
            .prompt_feedback
            .as_ref()
            .and_then(|f| f.block_reason.as_deref())
        {
            log::warn!("Prompt feedback: {}", reason);
        }
        for reason in response
            .candidates
            .iter()
            .filter_map(|c| c.finish_reason.as_deref())
        {
            log::debug!("Finish reason: {}", reason);
        }

        let count = response.inline_image_count();
        if count > 1 {
            log::warn!("Response carried {} images, keeping the first", count);
        }

        let inline = response
            .first_inline_image()
            .ok_or(IconGenError::EmptyResponse)?;

        let image_data = base64::engine::general_purpose::STANDARD
            .decode(inline.data.as_bytes())
            .map_err(|e| IconGenError::Decode(e.to_string()))?;

        Ok(ImageGenerationResponse {
            image_data,
            mime_type: inline.mime_type.clone(),
            model,
        })
    }
}
