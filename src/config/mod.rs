//! Configuration management for the barista agent

pub mod file;

use std::path::PathBuf;

use serde::Serialize;

use crate::order::ValidationMode;
use crate::store::{DEFAULT_ORDER_PATH, StoreBackend};
use crate::{Persona, Result};

use file::BaristaConfigFile;

/// Default HTTP port for the tool server
pub const DEFAULT_PORT: u16 = 18790;

/// Barista agent configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Active persona
    pub persona: Persona,

    /// Where the persona came from, if not built in
    pub persona_path: Option<PathBuf>,

    /// Order store configuration
    pub store: StoreConfig,

    /// Pre-persistence validation
    pub validation: ValidationMode,

    /// Voice pipeline hints for the host runtime
    pub voice: VoiceConfig,

    /// HTTP API server configuration
    pub api_server: ApiServerConfig,
}

/// Order store configuration
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Selected backend
    pub backend: StoreBackend,

    /// JSON order file (default `order.json` in the working directory)
    pub order_path: PathBuf,

    /// `SQLite` database file
    pub db_path: PathBuf,
}

/// Voice pipeline hints
///
/// Not used by this crate; reported to the host runtime which owns the
/// STT, LLM and TTS services.
#[derive(Debug, Clone, Serialize)]
pub struct VoiceConfig {
    /// STT model (e.g. "nova-3")
    pub stt_model: String,

    /// LLM model (e.g. "gemini-1.5-flash")
    pub llm_model: String,

    /// TTS voice identifier
    pub tts_voice: String,

    /// TTS speaking style
    pub tts_style: String,

    /// Minimum sentence length for TTS chunking
    pub min_sentence_len: usize,

    /// Start generating before end of turn is confirmed
    pub preemptive_generation: bool,
}

/// HTTP API server configuration
#[derive(Debug, Clone)]
pub struct ApiServerConfig {
    /// Port to listen on
    pub port: u16,
}

/// Command-line overrides, applied above the environment
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// Persona file
    pub persona_path: Option<PathBuf>,

    /// Store backend
    pub store: Option<StoreBackend>,

    /// JSON order file
    pub order_path: Option<PathBuf>,

    /// HTTP port
    pub port: Option<u16>,
}

impl Overrides {
    /// Lookup layered over `env`: override values win where set
    fn lookup(&self, key: &str) -> Option<String> {
        match key {
            "BARISTA_PERSONA_PATH" => self.persona_path.as_ref().map(|p| p.display().to_string()),
            "BARISTA_STORE" => self.store.map(|b| b.to_string()),
            "BARISTA_ORDER_PATH" => self.order_path.as_ref().map(|p| p.display().to_string()),
            "BARISTA_PORT" => self.port.map(|p| p.to_string()),
            _ => None,
        }
    }
}

/// Default data directory: `~/.local/share/javagen/barista`
fn default_data_dir() -> PathBuf {
    directories::BaseDirs::new().map_or_else(
        || PathBuf::from(".local/share/javagen/barista"),
        |d| d.data_dir().join("javagen").join("barista"),
    )
}

impl Config {
    /// Load configuration from the environment and the TOML config file
    ///
    /// # Errors
    ///
    /// Returns error if the persona file cannot be loaded or a setting is invalid
    pub fn load() -> Result<Self> {
        Self::from_sources(file::load_config_file(), |key| std::env::var(key).ok())
    }

    /// Load configuration with command-line overrides on top
    ///
    /// # Errors
    ///
    /// Returns error if the persona file cannot be loaded or a setting is invalid
    pub fn load_with_options(overrides: &Overrides) -> Result<Self> {
        Self::from_sources(file::load_config_file(), |key| {
            overrides.lookup(key).or_else(|| std::env::var(key).ok())
        })
    }

    /// Build configuration from a parsed config file and an env lookup
    ///
    /// Priority: env > toml > persona > default.
    ///
    /// # Errors
    ///
    /// Returns error if the persona file cannot be loaded or a setting is invalid
    pub fn from_sources<F>(fc: BaristaConfigFile, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Persona (env > toml > built-in)
        let persona_path = env("BARISTA_PERSONA_PATH")
            .or(fc.persona.path)
            .map(PathBuf::from);
        let persona = match &persona_path {
            Some(path) => Persona::load(path)?,
            None => Persona::default(),
        };

        // Store (env > toml > default)
        let backend = env("BARISTA_STORE")
            .or(fc.store.backend)
            .map(|s| s.parse::<StoreBackend>())
            .transpose()?
            .unwrap_or_default();
        let store = StoreConfig {
            backend,
            order_path: env("BARISTA_ORDER_PATH")
                .or(fc.store.order_path)
                .map_or_else(|| PathBuf::from(DEFAULT_ORDER_PATH), PathBuf::from),
            db_path: env("BARISTA_DB_PATH")
                .or(fc.store.db_path)
                .map_or_else(|| default_data_dir().join("orders.db"), PathBuf::from),
        };

        let validation = env("BARISTA_VALIDATION")
            .or(fc.ordering.validation)
            .map(|s| s.parse::<ValidationMode>())
            .transpose()?
            .unwrap_or_default();

        // Voice hints (env > toml > persona > default)
        let voice = VoiceConfig {
            stt_model: env("BARISTA_STT_MODEL")
                .or(fc.voice.stt_model)
                .or_else(|| persona.stt_model().map(ToString::to_string))
                .unwrap_or_else(|| "nova-3".to_string()),
            llm_model: env("BARISTA_LLM_MODEL")
                .or(fc.voice.llm_model)
                .unwrap_or_else(|| "gemini-1.5-flash".to_string()),
            tts_voice: env("BARISTA_TTS_VOICE")
                .or(fc.voice.tts_voice)
                .or_else(|| persona.tts_voice().map(ToString::to_string))
                .unwrap_or_else(|| "en-US-matthew".to_string()),
            tts_style: fc
                .voice
                .tts_style
                .or_else(|| persona.tts_style().map(ToString::to_string))
                .unwrap_or_else(|| "Conversation".to_string()),
            min_sentence_len: 2,
            preemptive_generation: fc.voice.preemptive_generation.unwrap_or(true),
        };

        let api_server = ApiServerConfig {
            port: env("BARISTA_PORT")
                .and_then(|s| s.parse().ok())
                .or(fc.server.port)
                .unwrap_or(DEFAULT_PORT),
        };

        Ok(Self {
            persona,
            persona_path,
            store,
            validation,
            voice,
            api_server,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::Error;
    use super::file::{OrderingFileConfig, ServerFileConfig, StoreFileConfig, VoiceFileConfig};

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> + use<> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_sources() {
        let config = Config::from_sources(BaristaConfigFile::default(), env_from(&[])).unwrap();

        assert_eq!(config.store.backend, StoreBackend::Json);
        assert_eq!(config.store.order_path, PathBuf::from("order.json"));
        assert!(config.store.db_path.ends_with("orders.db"));
        assert_eq!(config.validation, ValidationMode::Off);
        assert_eq!(config.voice.stt_model, "nova-3");
        assert_eq!(config.voice.llm_model, "gemini-1.5-flash");
        assert_eq!(config.voice.tts_voice, "en-US-matthew");
        assert_eq!(config.voice.tts_style, "Conversation");
        assert!(config.voice.preemptive_generation);
        assert_eq!(config.api_server.port, DEFAULT_PORT);
        assert_eq!(config.persona.id(), "java-gen-barista");
        assert!(config.persona_path.is_none());
    }

    #[test]
    fn env_overrides_file() {
        let fc = BaristaConfigFile {
            store: StoreFileConfig {
                backend: Some("sqlite".to_string()),
                order_path: Some("/srv/file-order.json".to_string()),
                db_path: None,
            },
            ordering: OrderingFileConfig {
                validation: Some("presence".to_string()),
            },
            voice: VoiceFileConfig {
                llm_model: Some("file-model".to_string()),
                ..VoiceFileConfig::default()
            },
            server: ServerFileConfig { port: Some(9000) },
            ..BaristaConfigFile::default()
        };
        let env = env_from(&[
            ("BARISTA_ORDER_PATH", "/tmp/env-order.json"),
            ("BARISTA_VALIDATION", "menu"),
            ("BARISTA_PORT", "9100"),
        ]);

        let config = Config::from_sources(fc, env).unwrap();
        assert_eq!(config.store.backend, StoreBackend::Sqlite);
        assert_eq!(config.store.order_path, PathBuf::from("/tmp/env-order.json"));
        assert_eq!(config.validation, ValidationMode::Menu);
        assert_eq!(config.voice.llm_model, "file-model");
        assert_eq!(config.api_server.port, 9100);
    }

    #[test]
    fn unparseable_port_falls_back() {
        let config =
            Config::from_sources(BaristaConfigFile::default(), env_from(&[("BARISTA_PORT", "coffee")]))
                .unwrap();
        assert_eq!(config.api_server.port, DEFAULT_PORT);
    }

    #[test]
    fn unknown_store_is_config_error() {
        let err = Config::from_sources(
            BaristaConfigFile::default(),
            env_from(&[("BARISTA_STORE", "kafka")]),
        )
        .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn persona_file_feeds_voice_hints() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("persona.json");
        std::fs::write(
            &path,
            r#"{
                "version": "1.0.0",
                "identity": { "id": "kiosk", "name": "barista", "shop": "Kiosk" },
                "voice": { "ttsVoice": "en-GB-ruby", "sttModel": "nova-2" }
            }"#,
        )
        .unwrap();

        let env = env_from(&[("BARISTA_PERSONA_PATH", path.to_str().unwrap())]);
        let config = Config::from_sources(BaristaConfigFile::default(), env).unwrap();

        assert_eq!(config.persona.id(), "kiosk");
        assert_eq!(config.persona_path.as_deref(), Some(path.as_path()));
        assert_eq!(config.voice.tts_voice, "en-GB-ruby");
        assert_eq!(config.voice.stt_model, "nova-2");
        assert_eq!(config.voice.tts_style, "Conversation");
    }

    #[test]
    fn overrides_win_over_env() {
        let overrides = Overrides {
            store: Some(StoreBackend::Memory),
            order_path: Some(PathBuf::from("/tmp/cli-order.json")),
            ..Overrides::default()
        };
        let env = env_from(&[
            ("BARISTA_STORE", "sqlite"),
            ("BARISTA_ORDER_PATH", "/tmp/env-order.json"),
            ("BARISTA_PORT", "9100"),
        ]);

        let config = Config::from_sources(BaristaConfigFile::default(), |key| {
            overrides.lookup(key).or_else(|| env(key))
        })
        .unwrap();
        assert_eq!(config.store.backend, StoreBackend::Memory);
        assert_eq!(config.store.order_path, PathBuf::from("/tmp/cli-order.json"));
        assert_eq!(config.api_server.port, 9100);
    }

    #[test]
    fn missing_persona_file_is_error() {
        let env = env_from(&[("BARISTA_PERSONA_PATH", "/no/such/persona.json")]);
        let err = Config::from_sources(BaristaConfigFile::default(), env).unwrap_err();
        assert!(matches!(err, Error::Persona(_)));
    }
}
