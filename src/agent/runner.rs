use std::sync::Arc;
use tracing::debug;

use crate::agent::interface::{AgentDefinition, Message};
use crate::agent::stateless_llm::StatelessLLMInterface;
use crate::error::LlmError;

/// Runs an agent's single capability: prompt in, final text out.
#[derive(Clone)]
pub struct AgentRunner {
    llm: Arc<dyn StatelessLLMInterface>,
}

impl AgentRunner {
    pub fn new(llm: Arc<dyn StatelessLLMInterface>) -> Self {
        Self { llm }
    }

    /// Blank model output counts as a failure, whichever backend produced it.
    pub async fn run(&self, agent: &AgentDefinition, prompt: &str) -> Result<String, LlmError> {
        debug!("Running agent '{}' on {}", agent.name, self.llm.model());
        let output = self
            .llm
            .chat_completion(vec![Message::user(prompt)], Some(agent.instructions.as_str()))
            .await?;

        let output = output.trim();
        if output.is_empty() {
            return Err(LlmError::EmptyResponse);
        }
        Ok(output.to_string())
    }

    pub fn model(&self) -> &str {
        self.llm.model()
    }
}
