//! Barista agent assembly
//!
//! Wires configuration, the order store and the tool executor together and
//! produces the manifest a host runtime needs to start a session.

use std::sync::Arc;

use serde::Serialize;

use crate::config::{Config, VoiceConfig};
use crate::menu::MENU;
use crate::order::OrderValidator;
use crate::prompt;
use crate::store::{self, SharedOrderStore};
use crate::tools::{SubmitOrderTool, ToolDefinition, ToolExecutor};
use crate::Result;

/// Everything a host runtime needs to run the barista
#[derive(Debug, Clone, Serialize)]
pub struct AgentManifest {
    /// Persona identifier
    pub persona_id: String,

    /// Shop name
    pub shop: String,

    /// Persona instructions
    pub instructions: String,

    /// Menu announcement to open the conversation with
    pub greeting: String,

    /// Tools the agent may call
    pub tools: Vec<ToolDefinition>,

    /// Voice pipeline hints
    pub voice: VoiceConfig,
}

/// The assembled barista agent
#[derive(Clone)]
pub struct BaristaAgent {
    config: Arc<Config>,
    store: SharedOrderStore,
    executor: ToolExecutor,
}

impl BaristaAgent {
    /// Build the agent, opening the configured order store
    ///
    /// # Errors
    ///
    /// Returns error if the order store cannot be opened
    pub fn new(config: Config) -> Result<Self> {
        let store = store::open(&config.store)?;
        Ok(Self::with_store(config, store))
    }

    /// Build the agent over an existing order store
    #[must_use]
    pub fn with_store(config: Config, store: SharedOrderStore) -> Self {
        let tool = SubmitOrderTool::new(store.clone())
            .with_validator(OrderValidator::new(config.validation, &MENU));
        let executor = ToolExecutor::new().with_handler(Arc::new(tool));

        tracing::debug!(
            persona = %config.persona.id(),
            store = %store.describe(),
            validation = %config.validation,
            "barista agent assembled"
        );

        Self {
            config: Arc::new(config),
            store,
            executor,
        }
    }

    /// Active configuration
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Order store the tools write to
    #[must_use]
    pub fn store(&self) -> &SharedOrderStore {
        &self.store
    }

    /// Tool executor
    #[must_use]
    pub const fn executor(&self) -> &ToolExecutor {
        &self.executor
    }

    /// Full system prompt: instructions plus menu announcement
    #[must_use]
    pub fn system_prompt(&self) -> String {
        prompt::build_system_prompt(&self.config.persona, &MENU)
    }

    /// Session manifest for the host runtime
    #[must_use]
    pub fn manifest(&self) -> AgentManifest {
        AgentManifest {
            persona_id: self.config.persona.id().to_string(),
            shop: self.config.persona.shop().to_string(),
            instructions: prompt::build_instructions(&self.config.persona),
            greeting: MENU.format_menu_text(),
            tools: self.executor.list_tools(),
            voice: self.config.voice.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::file::BaristaConfigFile;
    use crate::store::MemoryOrderStore;
    use crate::tools::ToolContext;

    fn test_config() -> Config {
        Config::from_sources(BaristaConfigFile::default(), |_| None).unwrap()
    }

    #[test]
    fn manifest_lists_submit_order() {
        let agent = BaristaAgent::with_store(test_config(), Arc::new(MemoryOrderStore::new()));
        let manifest = agent.manifest();

        assert_eq!(manifest.persona_id, "java-gen-barista");
        assert_eq!(manifest.shop, "Java Gen");
        assert_eq!(manifest.tools.len(), 1);
        assert_eq!(manifest.tools[0].name(), "submit_order");
        assert_eq!(manifest.greeting, MENU.format_menu_text());
        assert!(manifest.instructions.contains("submit_order"));
        assert_eq!(manifest.voice.tts_voice, "en-US-matthew");
    }

    #[tokio::test]
    async fn executor_writes_to_agent_store() {
        let agent = BaristaAgent::with_store(test_config(), Arc::new(MemoryOrderStore::new()));
        agent
            .executor()
            .execute(
                "submit_order",
                r#"{"drink_type":"Flat White","size":"Tall","milk":"Whole","extras":[],"name":"Rae"}"#,
                &ToolContext::default(),
            )
            .await
            .unwrap();

        let saved = agent.store().load().await.unwrap().unwrap();
        assert_eq!(saved.drink_type, "Flat White");
        assert_eq!(saved.name, "Rae");
    }

    #[test]
    fn new_opens_configured_store() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = test_config();
        config.store.order_path = dir.path().join("order.json");

        let agent = BaristaAgent::new(config).unwrap();
        assert!(agent.store().describe().ends_with("order.json"));
        assert!(agent.system_prompt().contains("Welcome to Java Gen!"));
    }
}
