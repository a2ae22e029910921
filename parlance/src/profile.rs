//! Profile-based construction: credentials and session settings loaded from
//! config files, the environment, or a value map, then applied through the
//! validated setters.

use std::collections::HashMap;
use std::env;
use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use parlance_core::{Result, SpeechError};

use crate::translation::SpeechTranslationConfig;

type Builder = config::ConfigBuilder<config::builder::DefaultState>;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpeechProfile {
    pub subscription_key: Option<String>,
    pub region: Option<String>,
    pub endpoint: Option<String>,
    pub authorization_token: Option<String>,
    pub recognition_language: Option<String>,
    #[serde(default)]
    pub target_languages: Vec<String>,
    pub voice: Option<String>,
    #[serde(default)]
    pub properties: HashMap<String, String>,
}

impl SpeechProfile {
    /// Loads from the standard locations: a `parlance/config.*` file in the
    /// user config directory, then `parlance.*` in the current directory,
    /// then environment variables. Later sources win.
    pub fn load() -> Result<Self> {
        let mut builder = Config::builder();

        if let Some(config_dir) = dirs::config_dir() {
            let base = config_dir.join("parlance").join("config");
            for ext in &["toml", "json", "yaml", "yml"] {
                let path = base.with_extension(ext);
                if path.exists() {
                    builder = builder.add_source(File::from(path));
                }
            }
        }

        for ext in &["toml", "json", "yaml", "yml"] {
            let path = PathBuf::from(format!("parlance.{ext}"));
            if path.exists() {
                builder = builder.add_source(File::from(path));
            }
        }

        build(add_env_sources(builder))
    }

    /// Environment only, no file probing.
    pub fn from_env() -> Result<Self> {
        build(add_env_sources(Config::builder()))
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        build(Config::builder().add_source(File::from(path.as_ref())))
    }

    pub fn from_map(map: HashMap<String, serde_json::Value>) -> Result<Self> {
        Ok(serde_json::from_value(serde_json::Value::Object(
            map.into_iter().collect(),
        ))?)
    }

    pub fn has_credentials(&self) -> bool {
        self.endpoint.is_some()
            || self.subscription_key.is_some()
            || self.authorization_token.is_some()
    }
}

fn add_env_sources(mut builder: Builder) -> Builder {
    builder = builder.add_source(
        Environment::with_prefix("PARLANCE")
            .separator("__")
            .try_parsing(true),
    );

    // SPEECH_* variables take precedence over the prefixed sources.
    if let Ok(key) = env::var("SPEECH_KEY") {
        builder = builder
            .set_override("subscription_key", key)
            .expect("Failed to set subscription key override");
    }
    if let Ok(region) = env::var("SPEECH_REGION") {
        builder = builder
            .set_override("region", region)
            .expect("Failed to set region override");
    }
    if let Ok(endpoint) = env::var("SPEECH_ENDPOINT") {
        builder = builder
            .set_override("endpoint", endpoint)
            .expect("Failed to set endpoint override");
    }

    builder
}

fn build(builder: Builder) -> Result<SpeechProfile> {
    builder
        .build()
        .and_then(|c| c.try_deserialize())
        .map_err(|e| SpeechError::Profile(e.to_string()))
}

impl SpeechTranslationConfig {
    /// Builds a configuration from a profile. The endpoint wins over a
    /// subscription key, which wins over a bare authorization token; the
    /// remaining settings go through the validated setters.
    pub fn from_profile(profile: &SpeechProfile) -> Result<Self> {
        let mut config = if let Some(endpoint) = &profile.endpoint {
            let key = profile.subscription_key.as_deref().unwrap_or("");
            let mut config = Self::from_endpoint(endpoint, key)?;
            if let Some(token) = &profile.authorization_token {
                config.set_authorization_token(token)?;
            }
            config
        } else if let Some(key) = &profile.subscription_key {
            let region = required_region(profile, "subscription_key")?;
            Self::from_subscription(key, region)?
        } else if let Some(token) = &profile.authorization_token {
            let region = required_region(profile, "authorization_token")?;
            Self::from_authorization_token(token, region)?
        } else {
            return Err(SpeechError::Profile(
                "no credentials: set endpoint, subscription_key, or authorization_token"
                    .to_string(),
            ));
        };

        if let Some(language) = &profile.recognition_language {
            config.set_speech_recognition_language(language)?;
        }
        for tag in &profile.target_languages {
            config.add_target_language(tag)?;
        }
        if let Some(voice) = &profile.voice {
            config.set_voice_name(voice)?;
        }
        for (name, value) in &profile.properties {
            config.set_property(name, value)?;
        }

        Ok(config)
    }
}

fn required_region<'a>(profile: &'a SpeechProfile, with: &str) -> Result<&'a str> {
    profile
        .region
        .as_deref()
        .ok_or_else(|| SpeechError::Profile(format!("region is required with {with}")))
}
