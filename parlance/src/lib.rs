//! Speech-translation session configuration
//!
//! `parlance` is the configuration surface for speech-translation sessions:
//! subscription credentials, recognition and target languages, voice
//! selection, and endpoint overrides, validated here and carried by an
//! opaque handle into the speech runtime. All the heavy lifting (audio,
//! protocol, translation itself) happens behind that handle; this crate
//! validates inputs, forwards them, and releases the handle exactly once.
//!
//! Bring up the runtime once at process start, then build configs:
//!
//! ```
//! use parlance::SpeechTranslationConfig;
//!
//! parlance::init();
//!
//! let mut config = SpeechTranslationConfig::from_subscription(
//!     "2ea223cd9f2d4dd6bb62f6f35e0f0ffe",
//!     "westeurope",
//! )?;
//! config.set_speech_recognition_language("en-US")?;
//! config.add_target_language("de-DE")?;
//! config.set_voice_name("de-DE-KatjaNeural")?;
//!
//! assert_eq!(config.target_languages()?, vec!["de-DE"]);
//! # Ok::<(), parlance::SpeechError>(())
//! ```

pub mod profile;
pub mod translation;

mod validate;

// Re-export core types
pub use parlance_core::{
    init, ConfigHandle, PropertyId, Result, SpeechError,
};

// Re-export main types
pub use profile::SpeechProfile;
pub use translation::SpeechTranslationConfig;
