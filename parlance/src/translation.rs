use tracing::{debug, warn};

use parlance_core::{
    runtime, ConfigHandle, HandleTable, NativeSpeechConfig, PropertyId, Result, SpeechError,
};

use crate::validate;

/// Configuration for a speech-translation session.
///
/// Owns the runtime handle it is constructed with and releases it exactly
/// once, either through [`close`](Self::close) or on drop. Every setter
/// validates its input before anything reaches the runtime; failures from
/// the runtime itself are surfaced unmodified.
///
/// After [`close`](Self::close), every operation fails with
/// [`SpeechError::HandleClosed`].
#[derive(Debug)]
pub struct SpeechTranslationConfig {
    handle: Option<ConfigHandle>,
}

impl SpeechTranslationConfig {
    /// Builds a configuration from a subscription key and service region.
    pub fn from_subscription(subscription_key: &str, region: &str) -> Result<Self> {
        validate::subscription_key(subscription_key)?;
        validate::non_blank(region, "region")?;
        Self::register(NativeSpeechConfig::from_subscription(
            subscription_key,
            region,
        ))
    }

    /// Builds a configuration from an authorization token and service
    /// region. The token expires; refresh it through
    /// [`set_authorization_token`](Self::set_authorization_token) before it
    /// does.
    pub fn from_authorization_token(authorization_token: &str, region: &str) -> Result<Self> {
        validate::non_blank(authorization_token, "authorization_token")?;
        validate::non_blank(region, "region")?;
        Self::register(NativeSpeechConfig::from_authorization_token(
            authorization_token,
            region,
        ))
    }

    /// Builds a configuration from a service endpoint, for non-standard
    /// endpoints or query parameters.
    ///
    /// Query parameters embedded in `endpoint` keep precedence over values
    /// set later through this config; the service connection honors the URI
    /// as given. Pass an empty `subscription_key` to authenticate with
    /// [`set_authorization_token`](Self::set_authorization_token) instead.
    pub fn from_endpoint(endpoint: &str, subscription_key: &str) -> Result<Self> {
        let uri = validate::endpoint(endpoint)?;
        if !subscription_key.is_empty() {
            validate::subscription_key(subscription_key)?;
        }
        Self::register(NativeSpeechConfig::from_endpoint(
            uri.as_str(),
            subscription_key,
        ))
    }

    fn register(config: NativeSpeechConfig) -> Result<Self> {
        let handle = Self::table()?.insert(config)?;
        debug!(%handle, "translation config created");
        Ok(Self {
            handle: Some(handle),
        })
    }

    /// Replaces the authorization token.
    ///
    /// Sessions already created from this config hold a copy of its values;
    /// a refreshed token reaches new sessions only.
    pub fn set_authorization_token(&mut self, value: &str) -> Result<()> {
        let handle = self.guard()?;
        validate::non_blank(value, "authorization_token")?;
        Self::table()?
            .with_mut(handle, |config| {
                config.set_property_id(PropertyId::AuthorizationToken, value)
            })
    }

    pub fn authorization_token(&self) -> Result<Option<String>> {
        self.property_id(PropertyId::AuthorizationToken)
    }

    pub fn set_speech_recognition_language(&mut self, value: &str) -> Result<()> {
        let handle = self.guard()?;
        validate::non_blank(value, "language")?;
        Self::table()?.with_mut(handle, |config| {
            config.set_property_id(PropertyId::RecognitionLanguage, value)
        })
    }

    pub fn speech_recognition_language(&self) -> Result<Option<String>> {
        self.property_id(PropertyId::RecognitionLanguage)
    }

    /// Adds a translation target language, a BCP-47 tag such as `de-DE`.
    /// The tag is not validated beyond being non-blank. The target list is
    /// append-only: order is preserved and duplicates are kept.
    pub fn add_target_language(&mut self, value: &str) -> Result<()> {
        let handle = self.guard()?;
        validate::non_blank(value, "language")?;
        Self::table()?.with_mut(handle, |config| config.add_target_language(value))
    }

    /// Snapshot of the target languages at call time, in insertion order.
    pub fn target_languages(&self) -> Result<Vec<String>> {
        let handle = self.guard()?;
        Self::table()?.with(handle, |config| config.target_languages())
    }

    /// Selects the voice used for synthesized translation output, which
    /// also enables that output on the session.
    pub fn set_voice_name(&mut self, value: &str) -> Result<()> {
        let handle = self.guard()?;
        validate::non_blank(value, "voice")?;
        Self::table()?.with_mut(handle, |config| config.set_voice_name(value))
    }

    /// Empty string when no voice has been selected.
    pub fn voice_name(&self) -> Result<String> {
        let handle = self.guard()?;
        Self::table()?.with(handle, |config| config.voice_name())
    }

    /// Sets a named property. The name is opaque to this layer; only the
    /// value is validated.
    pub fn set_property(&mut self, name: &str, value: &str) -> Result<()> {
        let handle = self.guard()?;
        validate::non_blank(value, "value")?;
        Self::table()?.with_mut(handle, |config| config.set_property(name, value))
    }

    pub fn set_property_by_id(&mut self, id: PropertyId, value: &str) -> Result<()> {
        let handle = self.guard()?;
        validate::non_blank(value, "value")?;
        Self::table()?.with_mut(handle, |config| config.set_property_id(id, value))
    }

    pub fn property(&self, name: &str) -> Result<Option<String>> {
        let handle = self.guard()?;
        Self::table()?.with(handle, |config| config.property(name).map(str::to_string))
    }

    pub fn subscription_key(&self) -> Result<Option<String>> {
        self.property_id(PropertyId::SubscriptionKey)
    }

    pub fn region(&self) -> Result<Option<String>> {
        self.property_id(PropertyId::Region)
    }

    pub fn endpoint(&self) -> Result<Option<String>> {
        self.property_id(PropertyId::Endpoint)
    }

    /// The raw runtime handle, for building sessions on top of this config.
    /// `None` once closed.
    pub fn handle(&self) -> Option<ConfigHandle> {
        self.handle
    }

    pub fn is_closed(&self) -> bool {
        self.handle.is_none()
    }

    /// Releases the underlying handle. Safe to call more than once; only
    /// the first call releases.
    pub fn close(&mut self) {
        if let Some(handle) = self.handle.take() {
            // A config only exists after init(), so the runtime lookup
            // cannot fail here.
            if let Ok(rt) = runtime() {
                if let Err(err) = rt.configs().release(handle) {
                    warn!(%handle, %err, "release failed");
                }
            }
        }
    }

    fn guard(&self) -> Result<ConfigHandle> {
        self.handle.ok_or(SpeechError::HandleClosed)
    }

    fn property_id(&self, id: PropertyId) -> Result<Option<String>> {
        let handle = self.guard()?;
        Self::table()?.with(handle, |config| config.property_id(id).map(str::to_string))
    }

    fn table() -> Result<&'static HandleTable> {
        Ok(runtime()?.configs())
    }
}

impl Drop for SpeechTranslationConfig {
    fn drop(&mut self) {
        self.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "2ea223cd9f2d4dd6bb62f6f35e0f0ffe";

    fn config() -> SpeechTranslationConfig {
        parlance_core::init();
        SpeechTranslationConfig::from_subscription(KEY, "westeurope").unwrap()
    }

    #[test]
    fn test_from_subscription() {
        let config = config();
        assert_eq!(config.subscription_key().unwrap().as_deref(), Some(KEY));
        assert_eq!(config.region().unwrap().as_deref(), Some("westeurope"));
    }

    #[test]
    fn test_from_subscription_rejects_bad_input() {
        parlance_core::init();
        assert!(matches!(
            SpeechTranslationConfig::from_subscription("", "westeurope"),
            Err(SpeechError::InvalidArgument(_))
        ));
        assert!(matches!(
            SpeechTranslationConfig::from_subscription("  ", "westeurope"),
            Err(SpeechError::InvalidArgument(_))
        ));
        assert!(matches!(
            SpeechTranslationConfig::from_subscription("bad key", "westeurope"),
            Err(SpeechError::InvalidArgument(_))
        ));
        assert!(matches!(
            SpeechTranslationConfig::from_subscription(KEY, " "),
            Err(SpeechError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_failed_construction_creates_nothing() {
        parlance_core::init();
        let live_before = parlance_core::runtime().unwrap().configs().live();
        let result = SpeechTranslationConfig::from_subscription("", "westeurope");
        assert!(result.is_err());
        assert_eq!(
            parlance_core::runtime().unwrap().configs().live(),
            live_before
        );
    }

    #[test]
    fn test_from_authorization_token() {
        parlance_core::init();
        let config =
            SpeechTranslationConfig::from_authorization_token("eyJhbGci.token", "eastus").unwrap();
        assert_eq!(
            config.authorization_token().unwrap().as_deref(),
            Some("eyJhbGci.token")
        );
        assert!(config.subscription_key().unwrap().is_none());

        assert!(SpeechTranslationConfig::from_authorization_token("", "eastus").is_err());
        assert!(SpeechTranslationConfig::from_authorization_token("token", "").is_err());
    }

    #[test]
    fn test_from_endpoint_allows_empty_key() {
        parlance_core::init();
        let config = SpeechTranslationConfig::from_endpoint(
            "wss://westeurope.example.com/speech/translation?language=de-DE",
            "",
        )
        .unwrap();
        assert_eq!(config.subscription_key().unwrap().as_deref(), Some(""));
        assert!(config
            .endpoint()
            .unwrap()
            .unwrap()
            .contains("language=de-DE"));
    }

    #[test]
    fn test_from_endpoint_rejects_bad_uri() {
        parlance_core::init();
        assert!(SpeechTranslationConfig::from_endpoint("", KEY).is_err());
        assert!(SpeechTranslationConfig::from_endpoint("not a uri", KEY).is_err());
    }

    #[test]
    fn test_target_languages_ordered_with_duplicates() {
        let mut config = config();
        config.add_target_language("en-US").unwrap();
        config.add_target_language("de-DE").unwrap();
        config.add_target_language("en-US").unwrap();

        assert_eq!(
            config.target_languages().unwrap(),
            vec!["en-US", "de-DE", "en-US"]
        );
    }

    #[test]
    fn test_target_languages_snapshot() {
        let mut config = config();
        config.add_target_language("en-US").unwrap();
        let snapshot = config.target_languages().unwrap();
        config.add_target_language("de-DE").unwrap();

        assert_eq!(snapshot, vec!["en-US"]);
        assert_eq!(config.target_languages().unwrap().len(), 2);
    }

    #[test]
    fn test_voice_name_round_trip() {
        let mut config = config();
        assert_eq!(config.voice_name().unwrap(), "");

        config.set_voice_name("en-US-AriaNeural").unwrap();
        assert_eq!(config.voice_name().unwrap(), "en-US-AriaNeural");
    }

    #[test]
    fn test_setters_reject_blank_values() {
        let mut config = config();
        assert!(config.set_authorization_token(" ").is_err());
        assert!(config.set_speech_recognition_language("").is_err());
        assert!(config.add_target_language("\t").is_err());
        assert!(config.set_voice_name("").is_err());
        assert!(config.set_property("AnyName", "  ").is_err());

        assert!(config.target_languages().unwrap().is_empty());
        assert_eq!(config.voice_name().unwrap(), "");
    }

    #[test]
    fn test_property_round_trip() {
        let mut config = config();
        config
            .set_property("TranslationServiceApi_Version", "v3")
            .unwrap();
        assert_eq!(
            config
                .property("TranslationServiceApi_Version")
                .unwrap()
                .as_deref(),
            Some("v3")
        );

        config
            .set_property_by_id(PropertyId::RecognitionLanguage, "fr-FR")
            .unwrap();
        assert_eq!(
            config.speech_recognition_language().unwrap().as_deref(),
            Some("fr-FR")
        );
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut config = config();
        let handle = config.handle().unwrap();
        let table = parlance_core::runtime().unwrap().configs();

        config.close();
        assert!(config.is_closed());
        assert!(config.handle().is_none());
        assert!(matches!(
            table.with(handle, |_| ()),
            Err(SpeechError::UnknownHandle(_))
        ));

        config.close();
        assert!(config.is_closed());
    }

    #[test]
    fn test_operations_after_close_fail_fast() {
        let mut config = config();
        config.close();

        assert!(matches!(
            config.set_voice_name("en-US-AriaNeural"),
            Err(SpeechError::HandleClosed)
        ));
        assert!(matches!(
            config.add_target_language("de"),
            Err(SpeechError::HandleClosed)
        ));
        assert!(matches!(
            config.target_languages(),
            Err(SpeechError::HandleClosed)
        ));
        assert!(matches!(config.voice_name(), Err(SpeechError::HandleClosed)));
        assert!(matches!(
            config.set_property("Name", "value"),
            Err(SpeechError::HandleClosed)
        ));
    }

    #[test]
    fn test_drop_releases_the_handle() {
        parlance_core::init();
        let table = parlance_core::runtime().unwrap().configs();

        let handle = {
            let config = config();
            config.handle().unwrap()
        };

        assert!(matches!(
            table.with(handle, |_| ()),
            Err(SpeechError::UnknownHandle(_))
        ));
    }

    #[test]
    fn test_drop_after_close_does_not_double_release() {
        let mut config = config();
        config.close();
        drop(config);
    }
}
