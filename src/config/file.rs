//! TOML configuration file loading
//!
//! Supports `~/.config/javagen/barista/config.toml` as a persistent config source.
//! All fields are optional; the file is a partial overlay on top of defaults.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Top-level TOML configuration file schema
#[derive(Debug, Default, Deserialize)]
pub struct BaristaConfigFile {
    /// Order store configuration
    #[serde(default)]
    pub store: StoreFileConfig,

    /// Persona override
    #[serde(default)]
    pub persona: PersonaFileConfig,

    /// Order handling
    #[serde(default)]
    pub ordering: OrderingFileConfig,

    /// Voice pipeline hints
    #[serde(default)]
    pub voice: VoiceFileConfig,

    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerFileConfig,
}

/// Order store configuration
#[derive(Debug, Default, Deserialize)]
pub struct StoreFileConfig {
    /// Backend name ("json", "sqlite", "memory")
    pub backend: Option<String>,

    /// Path of the JSON order file
    pub order_path: Option<String>,

    /// Path of the `SQLite` database
    pub db_path: Option<String>,
}

/// Persona override
#[derive(Debug, Default, Deserialize)]
pub struct PersonaFileConfig {
    /// Path to a persona JSON or TOML file
    pub path: Option<String>,
}

/// Order handling
#[derive(Debug, Default, Deserialize)]
pub struct OrderingFileConfig {
    /// Validation mode ("off", "presence", "menu")
    pub validation: Option<String>,
}

/// Voice pipeline hints handed to the host runtime
#[derive(Debug, Default, Deserialize)]
pub struct VoiceFileConfig {
    /// STT model (e.g. "nova-3")
    pub stt_model: Option<String>,

    /// LLM model (e.g. "gemini-1.5-flash")
    pub llm_model: Option<String>,

    /// TTS voice identifier (e.g. "en-US-matthew")
    pub tts_voice: Option<String>,

    /// TTS speaking style
    pub tts_style: Option<String>,

    /// Start generating before end of turn is confirmed
    pub preemptive_generation: Option<bool>,
}

/// Server configuration
#[derive(Debug, Default, Deserialize)]
pub struct ServerFileConfig {
    /// API server port
    pub port: Option<u16>,
}

/// Load the TOML config file from the standard path
///
/// Returns `BaristaConfigFile::default()` if the file doesn't exist or can't be parsed.
pub fn load_config_file() -> BaristaConfigFile {
    config_file_path().map_or_else(BaristaConfigFile::default, |path| load_config_file_from(&path))
}

/// Load a TOML config file from an explicit path
///
/// Missing or unparseable files yield the defaults.
pub fn load_config_file_from(path: &Path) -> BaristaConfigFile {
    if !path.exists() {
        return BaristaConfigFile::default();
    }

    match std::fs::read_to_string(path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(config) => {
                tracing::info!(path = %path.display(), "loaded config file");
                config
            }
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "failed to parse config file, using defaults"
                );
                BaristaConfigFile::default()
            }
        },
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "failed to read config file"
            );
            BaristaConfigFile::default()
        }
    }
}

/// Return the config file path: `~/.config/javagen/barista/config.toml`
pub fn config_file_path() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|d| {
        d.config_dir()
            .join("javagen")
            .join("barista")
            .join("config.toml")
    })
}
