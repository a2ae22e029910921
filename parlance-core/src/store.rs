use crate::property::{PropertyCollection, PropertyId};

/// The configuration object a [`ConfigHandle`](crate::ConfigHandle)
/// addresses: a property bag seeded by one of the three construction paths.
///
/// Target languages live comma-joined under
/// [`PropertyId::TranslationTargetLanguages`]; appends preserve order and
/// duplicates.
#[derive(Debug, Clone, Default)]
pub struct NativeSpeechConfig {
    properties: PropertyCollection,
}

impl NativeSpeechConfig {
    pub fn from_subscription(subscription_key: &str, region: &str) -> Self {
        let mut config = Self::default();
        config
            .properties
            .set_id(PropertyId::SubscriptionKey, subscription_key);
        config.properties.set_id(PropertyId::Region, region);
        config
    }

    pub fn from_authorization_token(authorization_token: &str, region: &str) -> Self {
        let mut config = Self::default();
        config
            .properties
            .set_id(PropertyId::AuthorizationToken, authorization_token);
        config.properties.set_id(PropertyId::Region, region);
        config
    }

    /// `subscription_key` may be empty when the caller authenticates with an
    /// authorization token set later.
    pub fn from_endpoint(endpoint: &str, subscription_key: &str) -> Self {
        let mut config = Self::default();
        config.properties.set_id(PropertyId::Endpoint, endpoint);
        config
            .properties
            .set_id(PropertyId::SubscriptionKey, subscription_key);
        config
    }

    pub fn set_property(&mut self, name: &str, value: &str) {
        self.properties.set(name, value);
    }

    pub fn set_property_id(&mut self, id: PropertyId, value: &str) {
        self.properties.set_id(id, value);
    }

    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties.get(name)
    }

    pub fn property_id(&self, id: PropertyId) -> Option<&str> {
        self.properties.get_id(id)
    }

    /// Appends to the target list. The list is append-only: order is
    /// preserved and duplicates are kept.
    pub fn add_target_language(&mut self, tag: &str) {
        let joined = match self.properties.get_id(PropertyId::TranslationTargetLanguages) {
            Some(current) if !current.is_empty() => format!("{current},{tag}"),
            _ => tag.to_string(),
        };
        self.properties
            .set_id(PropertyId::TranslationTargetLanguages, joined);
    }

    pub fn target_languages(&self) -> Vec<String> {
        match self.properties.get_id(PropertyId::TranslationTargetLanguages) {
            Some(joined) if !joined.is_empty() => {
                joined.split(',').map(str::to_string).collect()
            }
            _ => Vec::new(),
        }
    }

    /// Selecting a voice also turns on synthesized audio output for the
    /// translation session.
    pub fn set_voice_name(&mut self, value: &str) {
        self.properties.set_id(PropertyId::TranslationVoice, value);
        self.properties
            .set_id(PropertyId::TranslationFeatures, "textToSpeech");
    }

    /// Empty string when no voice has been selected.
    pub fn voice_name(&self) -> String {
        self.properties
            .get_id(PropertyId::TranslationVoice)
            .unwrap_or_default()
            .to_string()
    }
}
