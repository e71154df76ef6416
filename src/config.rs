use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use regex::Regex;
use tracing::{debug, info};

use crate::error::ConfigError;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub system_config: SystemConfig,
    #[serde(default)]
    pub llm_config: LlmConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8501
}

/// Settings for the chat-completion endpoint. The credential itself never
/// lives here; only the name of the variable holding it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    #[serde(default = "default_llm_provider")]
    pub llm_provider: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    #[serde(default)]
    pub temperature: Option<f32>,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_llm_provider() -> String {
    "gemini_llm".to_string()
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta/openai/".to_string()
}

fn default_model() -> String {
    "gemini-2.0-flash".to_string()
}

fn default_api_key_env() -> String {
    "GEMINI_API_KEY".to_string()
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            llm_provider: default_llm_provider(),
            base_url: default_base_url(),
            model: default_model(),
            api_key_env: default_api_key_env(),
            temperature: None,
            timeout_secs: None,
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_string(),
            source,
        })?;
        Self::parse(path, &raw)
    }

    /// Parse config text, picking the format from the file extension.
    pub fn parse(path: &str, raw: &str) -> Result<Self, ConfigError> {
        let content = substitute_env_vars(raw);
        let invalid = |message: String| ConfigError::Invalid {
            path: path.to_string(),
            message,
        };

        if path.to_lowercase().ends_with(".json") {
            serde_json::from_str(&content).map_err(|e| invalid(e.to_string()))
        } else {
            serde_yaml::from_str(&content).map_err(|e| invalid(e.to_string()))
        }
    }

    /// Load `CONFIG_PATH` when set, else the first default file found, else the defaults.
    pub fn discover() -> Result<Self, ConfigError> {
        Self::discover_from(std::env::var("CONFIG_PATH").ok())
    }

    /// An explicitly requested file must exist; the fallbacks are optional.
    fn discover_from(explicit: Option<String>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            let config = Self::load(&path)?;
            info!("Loaded configuration from: {}", path);
            return Ok(config);
        }

        for path in ["conf.yaml", "conf.json"] {
            if Path::new(path).exists() {
                let config = Self::load(path)?;
                info!("Loaded configuration from: {}", path);
                return Ok(config);
            }
            debug!("No config file at {}", path);
        }

        info!("No configuration file found, using defaults");
        Ok(Self::default())
    }
}

/// Replace `${VAR_NAME}` with the variable's value; unknown variables stay as written.
fn substitute_env_vars(content: &str) -> String {
    let pattern = Regex::new(r"\$\{(\w+)\}").expect("static regex");
    pattern
        .replace_all(content, |caps: &regex::Captures| {
            std::env::var(&caps[1]).unwrap_or_else(|_| caps[0].to_string())
        })
        .into_owned()
}

/// Bearer token for the model API.
#[derive(Clone)]
pub struct Credential(String);

impl Credential {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}

/// Read the API credential from the environment. Missing or blank is fatal.
pub fn load_credential(var_name: &str) -> Result<Credential, ConfigError> {
    credential_from(var_name, std::env::var(var_name).ok())
}

fn credential_from(var_name: &str, value: Option<String>) -> Result<Credential, ConfigError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(Credential::new(v.trim())),
        _ => Err(ConfigError::MissingCredential(var_name.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_gemini_endpoint() {
        let config = Config::default();
        assert_eq!(config.llm_config.model, "gemini-2.0-flash");
        assert_eq!(config.llm_config.api_key_env, "GEMINI_API_KEY");
        assert!(config.llm_config.base_url.starts_with("https://generativelanguage.googleapis.com"));
        assert_eq!(config.system_config.port, 8501);
    }

    #[test]
    fn yaml_fills_missing_fields_with_defaults() {
        let raw = "system_config:\n  port: 9000\nllm_config:\n  model: gemini-1.5-pro\n";
        let config = Config::parse("conf.yaml", raw).unwrap();
        assert_eq!(config.system_config.port, 9000);
        assert_eq!(config.system_config.host, "0.0.0.0");
        assert_eq!(config.llm_config.model, "gemini-1.5-pro");
        assert_eq!(config.llm_config.llm_provider, "gemini_llm");
        assert!(config.llm_config.temperature.is_none());
    }

    #[test]
    fn json_is_chosen_by_extension() {
        let raw = r#"{"llm_config": {"temperature": 0.2, "timeout_secs": 30}}"#;
        let config = Config::parse("conf.json", raw).unwrap();
        assert_eq!(config.llm_config.temperature, Some(0.2));
        assert_eq!(config.llm_config.timeout_secs, Some(30));
    }

    #[test]
    fn invalid_file_reports_path() {
        let err = Config::parse("broken.yaml", "system_config: [").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { ref path, .. } if path == "broken.yaml"));
    }

    #[test]
    fn explicit_config_path_must_exist() {
        let err = Config::discover_from(Some("does/not/exist/conf.yaml".to_string())).unwrap_err();
        assert!(matches!(err, ConfigError::Read { ref path, .. } if path == "does/not/exist/conf.yaml"));
    }

    #[test]
    fn explicit_config_path_is_loaded() {
        let path = std::env::temp_dir().join(format!("gemini-translator-{}.json", uuid::Uuid::new_v4()));
        fs::write(&path, r#"{"system_config": {"port": 9100}}"#).unwrap();

        let config = Config::discover_from(Some(path.to_string_lossy().into_owned())).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(config.system_config.port, 9100);
        assert_eq!(config.llm_config.model, "gemini-2.0-flash");
    }

    #[test]
    fn unknown_placeholders_are_left_alone() {
        let out = substitute_env_vars("model: ${GEMINI_TRANSLATOR_SURELY_UNSET_VAR}");
        assert_eq!(out, "model: ${GEMINI_TRANSLATOR_SURELY_UNSET_VAR}");
    }

    #[test]
    fn missing_or_blank_credential_is_rejected() {
        for value in [None, Some(String::new()), Some("   ".to_string())] {
            let err = credential_from("GEMINI_API_KEY", value).unwrap_err();
            assert!(matches!(err, ConfigError::MissingCredential(ref v) if v == "GEMINI_API_KEY"));
        }
    }

    #[test]
    fn credential_is_redacted_in_debug() {
        let credential = credential_from("GEMINI_API_KEY", Some("secret-key\n".to_string())).unwrap();
        assert_eq!(credential.expose(), "secret-key");
        assert!(!format!("{:?}", credential).contains("secret"));
    }
}
