use std::sync::Arc;

use crate::agent::{AgentRunner, StatelessLLMInterface};
use crate::config::Config;
use crate::translate::Translator;

/// Everything a handler needs. Built once in `main`, never mutated.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub translator: Arc<Translator>,
}

impl AppState {
    pub fn new(config: Config, llm: Arc<dyn StatelessLLMInterface>) -> Self {
        Self {
            config: Arc::new(config),
            translator: Arc::new(Translator::new(AgentRunner::new(llm))),
        }
    }
}
