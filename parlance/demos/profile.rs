//! Loads a speech profile from the environment and standard config-file
//! locations, then builds a translation configuration from it.
//!
//! ```text
//! $ SPEECH_KEY=... SPEECH_REGION=westeurope cargo run --example profile
//! ```

use parlance::{Result, SpeechProfile, SpeechTranslationConfig};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    parlance::init();

    let profile = SpeechProfile::load()?;
    if !profile.has_credentials() {
        eprintln!("no credentials found; set SPEECH_KEY and SPEECH_REGION");
        std::process::exit(1);
    }

    let config = SpeechTranslationConfig::from_profile(&profile)?;
    println!("handle:    {:?}", config.handle());
    println!("region:    {:?}", config.region()?);
    println!("targets:   {:?}", config.target_languages()?);

    Ok(())
}
