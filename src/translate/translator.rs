use tracing::{info, warn};
use uuid::Uuid;

use crate::agent::{AgentDefinition, AgentRunner};
use crate::error::LlmError;
use crate::translate::interface::TargetLanguage;

const TRANSLATOR_NAME: &str = "Translator Agent";

const TRANSLATOR_INSTRUCTIONS: &str = "You are a translator agent. Your job is to translate any given text \
from one language to another as per the user's request. Maintain the correct grammar, tone, and meaning \
of the original text. Only return the translated result without explanation or extra output.";

/// The fixed agent used for every translation.
pub fn translator_agent() -> AgentDefinition {
    AgentDefinition::new(TRANSLATOR_NAME, TRANSLATOR_INSTRUCTIONS)
}

pub fn build_prompt(source_text: &str, target: TargetLanguage) -> String {
    format!("Translate to {}: \"{}\"", target, source_text)
}

/// Turns (text, language) into one model call.
pub struct Translator {
    agent: AgentDefinition,
    runner: AgentRunner,
}

impl Translator {
    pub fn new(runner: AgentRunner) -> Self {
        Self {
            agent: translator_agent(),
            runner,
        }
    }

    /// Translate `source_text`. Callers reject blank input before getting here.
    pub async fn translate(
        &self,
        source_text: &str,
        target: TargetLanguage,
    ) -> Result<String, LlmError> {
        let request_id = Uuid::new_v4();
        info!(%request_id, target = %target, chars = source_text.chars().count(), "Translating");

        let prompt = build_prompt(source_text, target);
        match self.runner.run(&self.agent, &prompt).await {
            Ok(text) => {
                info!(%request_id, "Translation completed");
                Ok(text)
            }
            Err(e) => {
                warn!(%request_id, error = %e, "Translation failed");
                Err(e)
            }
        }
    }

    pub fn model(&self) -> &str {
        self.runner.model()
    }
}
