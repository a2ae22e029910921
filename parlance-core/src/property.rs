use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Well-known settings understood by the speech service connection.
///
/// The string form of each id is the wire name the service expects.
/// Settings outside this list travel through [`PropertyCollection::set`]
/// under their raw names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyId {
    SubscriptionKey,
    Region,
    AuthorizationToken,
    Endpoint,
    RecognitionLanguage,
    TranslationTargetLanguages,
    TranslationVoice,
    TranslationFeatures,
}

impl PropertyId {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SubscriptionKey => "SpeechServiceConnection_Key",
            Self::Region => "SpeechServiceConnection_Region",
            Self::AuthorizationToken => "SpeechServiceAuthorization_Token",
            Self::Endpoint => "SpeechServiceConnection_Endpoint",
            Self::RecognitionLanguage => "SpeechServiceConnection_RecoLanguage",
            Self::TranslationTargetLanguages => {
                "SpeechServiceConnection_TranslationToLanguages"
            }
            Self::TranslationVoice => "SpeechServiceConnection_TranslationVoice",
            Self::TranslationFeatures => "SpeechServiceConnection_TranslationFeatures",
        }
    }
}

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// String key/value bag backing a configuration object.
#[derive(Debug, Clone, Default)]
pub struct PropertyCollection {
    entries: HashMap<String, String>,
}

impl PropertyCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(name.into(), value.into());
    }

    pub fn set_id(&mut self, id: PropertyId, value: impl Into<String>) {
        self.set(id.as_str(), value);
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn get_id(&self, id: PropertyId) -> Option<&str> {
        self.get(id.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
