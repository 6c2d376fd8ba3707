//! Barista persona
//!
//! A persona describes who the agent is, which order fields it must collect
//! and how it should run the conversation. The built-in Java Gen barista is
//! used unless a persona file is configured.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Identity, voice and ordering script for the agent
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Persona {
    /// Semantic version of this persona file
    pub version: String,

    /// Core identity (required)
    pub identity: Identity,

    /// Voice hints passed through to the host pipeline
    pub voice: Option<Voice>,

    /// Behavior and communication style
    pub personality: Option<Personality>,

    /// What to collect and how
    #[serde(default)]
    pub ordering: OrderingScript,
}

/// Core identity of the agent
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    /// Unique identifier
    pub id: String,

    /// Role the agent plays, e.g. "barista"
    pub name: String,

    /// Shop the agent works at
    pub shop: String,

    /// Short descriptive phrase
    pub tagline: Option<String>,
}

/// Voice hints for the host pipeline
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Voice {
    /// Text-to-speech voice identifier
    pub tts_voice: Option<String>,

    /// Text-to-speech speaking style
    pub tts_style: Option<String>,

    /// Speech-to-text model
    pub stt_model: Option<String>,
}

/// Behavior and communication style
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Personality {
    /// Opening description of the character
    pub description: Option<String>,

    /// Personality traits
    #[serde(default)]
    pub traits: Vec<String>,
}

/// Order fields and the conversation process
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderingScript {
    /// Fields that must be known before submitting
    #[serde(default)]
    pub fields: Vec<OrderField>,

    /// Process rules, in order
    #[serde(default)]
    pub process: Vec<String>,
}

/// One required order field
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderField {
    /// Field label, e.g. "Drink Type"
    pub label: String,

    /// Example values given to the model
    #[serde(default)]
    pub examples: Vec<String>,
}

impl OrderField {
    fn new(label: &str, examples: &[&str]) -> Self {
        Self {
            label: label.to_string(),
            examples: examples.iter().map(ToString::to_string).collect(),
        }
    }
}

impl Default for Persona {
    fn default() -> Self {
        Self {
            version: "1.0.0".to_string(),
            identity: Identity {
                id: "java-gen-barista".to_string(),
                name: "barista".to_string(),
                shop: "Java Gen".to_string(),
                tagline: Some("the coolest coffee shop in the cloud".to_string()),
            },
            voice: Some(Voice {
                tts_voice: Some("en-US-matthew".to_string()),
                tts_style: Some("Conversation".to_string()),
                stt_model: Some("nova-3".to_string()),
            }),
            personality: Some(Personality {
                description: None,
                traits: vec!["friendly".to_string(), "high-energy".to_string()],
            }),
            ordering: OrderingScript {
                fields: vec![
                    OrderField::new("Drink Type", &["Latte", "Cappuccino", "Cold Brew"]),
                    OrderField::new("Size", &["Short", "Tall", "Grande", "Venti"]),
                    OrderField::new("Milk preference", &["Whole", "Oat", "Almond", "None"]),
                    OrderField::new("Extras", &["syrups", "extra shots", "\"none\""]),
                    OrderField::new("Customer Name", &[]),
                ],
                process: vec![
                    "Greet the user warmly.".to_string(),
                    "Ask clarifying questions if information is missing. Do not ask for everything at once; be conversational.".to_string(),
                    "If the user doesn't want extras or specific milk, confirm that explicitly (e.g., \"Just black?\").".to_string(),
                    "Once you have ALL the required information, immediately use the 'submit_order' tool.".to_string(),
                    "After the tool returns success, thank the customer by name and tell them their order is coming right up.".to_string(),
                ],
            },
        }
    }
}

// Convenience methods

impl Persona {
    /// Load a persona from a JSON or TOML file
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or parsed
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Persona(format!("failed to read {}: {e}", path.display())))?;

        let persona: Self = if path.extension().is_some_and(|ext| ext == "toml") {
            toml::from_str(&content)
                .map_err(|e| Error::Persona(format!("failed to parse {}: {e}", path.display())))?
        } else {
            serde_json::from_str(&content)
                .map_err(|e| Error::Persona(format!("failed to parse {}: {e}", path.display())))?
        };

        tracing::debug!(path = %path.display(), id = %persona.id(), "loaded persona");
        Ok(persona)
    }

    /// Get the unique identifier
    #[must_use]
    pub fn id(&self) -> &str {
        &self.identity.id
    }

    /// Get the shop name
    #[must_use]
    pub fn shop(&self) -> &str {
        &self.identity.shop
    }

    /// Get the TTS voice identifier
    #[must_use]
    pub fn tts_voice(&self) -> Option<&str> {
        self.voice.as_ref()?.tts_voice.as_deref()
    }

    /// Get the TTS speaking style
    #[must_use]
    pub fn tts_style(&self) -> Option<&str> {
        self.voice.as_ref()?.tts_style.as_deref()
    }

    /// Get the STT model
    #[must_use]
    pub fn stt_model(&self) -> Option<&str> {
        self.voice.as_ref()?.stt_model.as_deref()
    }

    /// Get the personality traits
    #[must_use]
    pub fn traits(&self) -> &[String] {
        self.personality
            .as_ref()
            .map(|p| p.traits.as_slice())
            .unwrap_or_default()
    }
}
