use std::path::PathBuf;

/// The three ways a generation run can fail, as reported to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    MissingCredential,
    RequestError,
    EmptyResponse,
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::MissingCredential => "missing credential",
            FailureKind::RequestError => "request error",
            FailureKind::EmptyResponse => "empty response",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum IconGenError {
    #[error("GEMINI_API_KEY not found")]
    MissingCredential,

    #[error("Request error: {0}")]
    Request(String),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Response error: {0}")]
    Response(String),

    #[error("Failed to decode image data: {0}")]
    Decode(String),

    #[error("Failed to encode image: {0}")]
    Encode(String),

    #[error("No image data in response")]
    EmptyResponse,

    #[error("Failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl IconGenError {
    /// Collapses the detailed variant into the user-facing taxonomy.
    pub fn kind(&self) -> FailureKind {
        match self {
            IconGenError::MissingCredential => FailureKind::MissingCredential,
            IconGenError::EmptyResponse => FailureKind::EmptyResponse,
            IconGenError::Request(_)
            | IconGenError::Api { .. }
            | IconGenError::Response(_)
            | IconGenError::Decode(_)
            | IconGenError::Encode(_)
            | IconGenError::Io { .. } => FailureKind::RequestError,
        }
    }
}

impl From<reqwest::Error> for IconGenError {
    fn from(e: reqwest::Error) -> Self {
        IconGenError::Request(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, IconGenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_mapping() {
        assert_eq!(
            IconGenError::MissingCredential.kind(),
            FailureKind::MissingCredential
        );
        assert_eq!(IconGenError::EmptyResponse.kind(), FailureKind::EmptyResponse);
        assert_eq!(
            IconGenError::Api {
                status: 429,
                message: "rate limited".into()
            }
            .kind(),
            FailureKind::RequestError
        );
        assert_eq!(
            IconGenError::Decode("bad base64".into()).kind(),
            FailureKind::RequestError
        );
    }

    #[test]
    fn test_error_display() {
        let err = IconGenError::Api {
            status: 429,
            message: "rate limited".into(),
        };
        assert_eq!(err.to_string(), "API error: 429 - rate limited");
        assert_eq!(
            IconGenError::EmptyResponse.to_string(),
            "No image data in response"
        );
    }
}
