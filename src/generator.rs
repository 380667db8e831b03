use crate::{
    config::{self, CredentialSource, GeneratorConfig},
    error::{FailureKind, IconGenError, Result},
    gemini::{ContentBackend, ImageClient},
    logger,
    models::ImageGenerationRequest,
};
use std::fs;
use std::path::PathBuf;

/// Resolves a credential, requests one image and writes it to disk.
pub struct IconGenerator<B> {
    client: ImageClient<B>,
    config: GeneratorConfig,
}

impl<B: ContentBackend> IconGenerator<B> {
    pub fn new(backend: B, config: GeneratorConfig) -> Self {
        let client = ImageClient::new(backend, config.gemini.clone());
        Self { client, config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn backend(&self) -> &B {
        self.client.backend()
    }

    /// Runs the three phases and returns the path written.
    ///
    /// `primary_key` is the value of `GEMINI_API_KEY` as read by the caller;
    /// the configured env file is consulted only when it is absent.
    pub async fn run(&self, primary_key: Option<String>) -> Result<PathBuf> {
        let credential = config::resolve(primary_key, self.config.env_file.as_deref())?;
        if let CredentialSource::EnvFile(path) = credential.source() {
            log::debug!("Using API key from {}", path.display());
        }

        log::info!("Generating icon with Gemini...");

        let response = {
            let _timer = logger::timer("Gemini request");
            self.client
                .generate(&credential, ImageGenerationRequest::new(&self.config.prompt))
                .await?
        };

        log::debug!(
            "Received {} bytes of {}",
            response.image_data.len(),
            response.mime_type
        );

        let path = self.config.output_path.clone();
        fs::write(&path, &response.image_data).map_err(|source| IconGenError::Io {
            path: path.clone(),
            source,
        })?;

        Ok(path)
    }

    /// `run`, reported on the console as a plain success flag.
    pub async fn generate_icon(&self, primary_key: Option<String>) -> bool {
        match self.run(primary_key).await {
            Ok(path) => {
                log::info!("Icon saved to: {}", path.display());
                true
            }
            Err(e) => {
                report_failure(&e);
                false
            }
        }
    }
}

fn report_failure(error: &IconGenError) {
    match error.kind() {
        FailureKind::MissingCredential => log::error!("Error: {}", error),
        FailureKind::EmptyResponse => log::error!("{}", error),
        FailureKind::RequestError => log::error!("Error generating icon: {}", error),
    }
}
