use thiserror::Error;

/// Startup failures. All of these stop the process before it serves anything.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} is not set. Add it to your environment or to a .env file.")]
    MissingCredential(String),

    #[error("failed to read configuration file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration in {path}: {message}")]
    Invalid { path: String, message: String },

    #[error("unsupported LLM provider: {0}")]
    UnsupportedProvider(String),
}

/// Failures of a single chat-completion call.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    #[error("request to the model timed out")]
    Timeout,

    #[error("model API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("could not parse model response: {0}")]
    Parse(String),

    #[error("model returned an empty response")]
    EmptyResponse,
}

/// A target-language label outside the dropdown's fixed set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported target language: {0}")]
pub struct UnsupportedLanguage(pub String);

impl From<reqwest::Error> for LlmError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout
        } else {
            Self::Network(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_credential_names_the_variable() {
        let err = ConfigError::MissingCredential("GEMINI_API_KEY".to_string());
        assert!(err.to_string().contains("GEMINI_API_KEY"));
    }

    #[test]
    fn api_error_display() {
        let err = LlmError::Api {
            status: 429,
            message: "quota exceeded".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("429"));
        assert!(text.contains("quota exceeded"));
    }
}
