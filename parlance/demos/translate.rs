//! Builds a speech-translation configuration end to end and prints it.

use parlance::{Result, SpeechTranslationConfig};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .init();

    parlance::init();

    let mut config = SpeechTranslationConfig::from_subscription(
        "2ea223cd9f2d4dd6bb62f6f35e0f0ffe",
        "westeurope",
    )?;

    config.set_speech_recognition_language("en-US")?;
    config.add_target_language("de-DE")?;
    config.add_target_language("fr-FR")?;
    config.set_voice_name("de-DE-KatjaNeural")?;

    println!("region:     {:?}", config.region()?);
    println!("recognize:  {:?}", config.speech_recognition_language()?);
    println!("targets:    {:?}", config.target_languages()?);
    println!("voice:      {}", config.voice_name()?);

    config.close();
    Ok(())
}
