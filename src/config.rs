use crate::error::{IconGenError, Result};
use std::env;
use std::fmt;
use std::path::{Path, PathBuf};

pub const API_KEY_VAR: &str = "GEMINI_API_KEY";
pub const DEFAULT_MODEL: &str = "gemini-3-pro-image-preview";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_ASPECT_RATIO: &str = "1:1";
pub const OUTPUT_FILE_NAME: &str = "icon-generated.png";

/// Where a credential was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialSource {
    Environment,
    EnvFile(PathBuf),
}

/// An API key. Never printed in full.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    key: String,
    source: CredentialSource,
}

impl Credential {
    pub fn new(key: impl Into<String>, source: CredentialSource) -> Self {
        Self {
            key: key.into(),
            source,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.key
    }

    pub fn source(&self) -> &CredentialSource {
        &self.source
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("key", &"<redacted>")
            .field("source", &self.source)
            .finish()
    }
}

/// Resolves the API key from an already-read primary value, falling back to a
/// dotenv-style file. The process environment is never modified.
pub fn resolve(primary: Option<String>, fallback_file: Option<&Path>) -> Result<Credential> {
    if let Some(key) = primary.filter(|k| !k.is_empty()) {
        return Ok(Credential::new(key, CredentialSource::Environment));
    }

    let Some(path) = fallback_file else {
        return Err(IconGenError::MissingCredential);
    };

    let entries = match dotenv::from_path_iter(path) {
        Ok(entries) => entries,
        Err(e) => {
            log::debug!("Fallback env file {} not loaded: {}", path.display(), e);
            return Err(IconGenError::MissingCredential);
        }
    };

    log::debug!("Loading {} from {}", API_KEY_VAR, path.display());

    for entry in entries {
        match entry {
            Ok((name, value)) if name == API_KEY_VAR && !value.is_empty() => {
                return Ok(Credential::new(
                    value,
                    CredentialSource::EnvFile(path.to_path_buf()),
                ));
            }
            Ok(_) => {}
            Err(e) => log::warn!("Skipping unparsable line in {}: {}", path.display(), e),
        }
    }

    Err(IconGenError::MissingCredential)
}

/// `~/.claude/skills/ai-multimodal/.env`, or `None` when no home directory is known.
pub fn default_env_file() -> Option<PathBuf> {
    home_dir().map(|home| {
        home.join(".claude")
            .join("skills")
            .join("ai-multimodal")
            .join(".env")
    })
}

fn home_dir() -> Option<PathBuf> {
    env::var_os("HOME")
        .or_else(|| env::var_os("USERPROFILE"))
        .filter(|h| !h.is_empty())
        .map(PathBuf::from)
}

/// The generated icon lands next to the running executable.
pub fn default_output_path() -> PathBuf {
    let dir = env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .or_else(|| env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."));
    dir.join(OUTPUT_FILE_NAME)
}

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub model: String,
    pub base_url: String,
    pub aspect_ratio: String,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        GeminiConfig {
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            aspect_ratio: DEFAULT_ASPECT_RATIO.to_string(),
        }
    }
}

impl GeminiConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_aspect_ratio(mut self, aspect_ratio: impl Into<String>) -> Self {
        self.aspect_ratio = aspect_ratio.into();
        self
    }

    pub fn endpoint(&self) -> String {
        self.endpoint_for(&self.model)
    }

    pub fn endpoint_for(&self, model: &str) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            model
        )
    }
}

#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub prompt: String,
    pub output_path: PathBuf,
    pub env_file: Option<PathBuf>,
    pub gemini: GeminiConfig,
}

impl GeneratorConfig {
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        GeneratorConfig {
            prompt: crate::prompt::ICON_PROMPT.to_string(),
            output_path: output_path.into(),
            env_file: None,
            gemini: GeminiConfig::default(),
        }
    }

    /// The fixed configuration the binary runs with.
    pub fn from_env() -> Self {
        let mut config = Self::new(default_output_path());
        config.env_file = default_env_file();
        config
    }

    pub fn with_env_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.env_file = Some(path.into());
        self
    }

    pub fn with_gemini(mut self, gemini: GeminiConfig) -> Self {
        self.gemini = gemini;
        self
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_primary_wins() {
        let credential = resolve(Some("from-env".into()), None).unwrap();
        assert_eq!(credential.as_str(), "from-env");
        assert_eq!(credential.source(), &CredentialSource::Environment);
    }

    #[test]
    fn test_empty_primary_counts_as_absent() {
        let err = resolve(Some(String::new()), None).unwrap_err();
        assert!(matches!(err, IconGenError::MissingCredential));
    }

    #[test]
    fn test_fallback_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        fs::write(&path, "OTHER=1\nGEMINI_API_KEY=abc123\n").unwrap();

        let credential = resolve(None, Some(path.as_path())).unwrap();
        assert_eq!(credential.as_str(), "abc123");
        assert_eq!(credential.source(), &CredentialSource::EnvFile(path));
    }

    #[test]
    fn test_primary_skips_fallback_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        fs::write(&path, "GEMINI_API_KEY=abc123\n").unwrap();

        let credential = resolve(Some("from-env".into()), Some(path.as_path())).unwrap();
        assert_eq!(credential.as_str(), "from-env");
    }

    #[test]
    fn test_missing_file_is_missing_credential() {
        let dir = tempfile::tempdir().unwrap();
        let absent = dir.path().join("absent.env");
        let err = resolve(None, Some(absent.as_path())).unwrap_err();
        assert!(matches!(err, IconGenError::MissingCredential));
    }

    #[test]
    fn test_file_without_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        fs::write(&path, "OPENAI_API_KEY=nope\n").unwrap();

        let err = resolve(None, Some(path.as_path())).unwrap_err();
        assert!(matches!(err, IconGenError::MissingCredential));
    }

    #[test]
    fn test_credential_debug_is_redacted() {
        let credential = Credential::new("super-secret", CredentialSource::Environment);
        let printed = format!("{:?}", credential);
        assert!(!printed.contains("super-secret"));
        assert!(printed.contains("redacted"));
    }

    #[test]
    fn test_endpoint() {
        let config = GeminiConfig::new().with_base_url("http://127.0.0.1:9000/v1beta/");
        assert_eq!(
            config.endpoint(),
            "http://127.0.0.1:9000/v1beta/models/gemini-3-pro-image-preview:generateContent"
        );
    }

    #[test]
    fn test_default_output_file_name() {
        assert!(default_output_path().ends_with(OUTPUT_FILE_NAME));
    }
}
