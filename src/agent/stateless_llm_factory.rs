use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use crate::agent::stateless_llm::openai_compatible_llm::OpenAICompatibleLLM;
use crate::agent::stateless_llm::StatelessLLMInterface;
use crate::config::{Credential, LlmConfig};
use crate::error::ConfigError;

/// Factory for creating stateless LLM instances
pub struct StatelessLLMFactory;

impl StatelessLLMFactory {
    /// Create an LLM based on the configuration.
    ///
    /// # Arguments
    /// * `config` - LLM section of the service configuration
    /// * `credential` - API key loaded from the environment
    pub fn create_llm(
        config: &LlmConfig,
        credential: Credential,
    ) -> Result<Arc<dyn StatelessLLMInterface>, ConfigError> {
        info!("Initializing LLM: {}", config.llm_provider);

        match config.llm_provider.as_str() {
            "openai_compatible_llm" | "openai_llm" | "gemini_llm"
            | "deepseek_llm" | "groq_llm" | "mistral_llm" => {
                let llm = OpenAICompatibleLLM::new(
                    config.model.clone(),
                    config.base_url.clone(),
                    credential,
                    config.temperature,
                    config.timeout_secs.map(Duration::from_secs),
                )
                .map_err(|e| ConfigError::Invalid {
                    path: "llm_config".to_string(),
                    message: e.to_string(),
                })?;
                Ok(Arc::new(llm))
            }
            other => Err(ConfigError::UnsupportedProvider(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gemini_provider_uses_configured_model() {
        let llm = StatelessLLMFactory::create_llm(&LlmConfig::default(), Credential::new("k")).unwrap();
        assert_eq!(llm.model(), "gemini-2.0-flash");
    }

    #[test]
    fn unknown_provider_is_rejected() {
        let config = LlmConfig {
            llm_provider: "llama_cpp_llm".to_string(),
            ..LlmConfig::default()
        };
        let err = StatelessLLMFactory::create_llm(&config, Credential::new("k")).err().unwrap();
        assert!(matches!(err, ConfigError::UnsupportedProvider(ref p) if p == "llama_cpp_llm"));
    }
}
