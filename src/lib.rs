pub mod config;
pub mod error;
pub mod gemini;
pub mod generator;
pub mod logger;
pub mod models;
pub mod placeholder;
pub mod prompt;

pub use config::{Credential, CredentialSource, GeminiConfig, GeneratorConfig};
pub use error::{FailureKind, IconGenError, Result};
pub use gemini::{ContentBackend, GeminiClient, ImageClient};
pub use generator::IconGenerator;
pub use models::*;
