//! Input contracts applied before any delegation to the runtime.

use parlance_core::{Result, SpeechError};
use url::Url;

pub(crate) fn non_blank(value: &str, name: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(invalid(name, "must not be empty or whitespace"));
    }
    Ok(())
}

/// Keys are opaque to this layer but still have a shape: printable ASCII
/// with no embedded whitespace.
pub(crate) fn subscription_key(value: &str) -> Result<()> {
    non_blank(value, "subscription_key")?;
    if !value.chars().all(|c| c.is_ascii_graphic()) {
        return Err(invalid(
            "subscription_key",
            "must be printable ASCII without whitespace",
        ));
    }
    Ok(())
}

pub(crate) fn endpoint(value: &str) -> Result<Url> {
    Url::parse(value).map_err(|e| invalid("endpoint", &format!("not a valid URI ({e})")))
}

fn invalid(name: &str, reason: &str) -> SpeechError {
    SpeechError::InvalidArgument(format!("{name} {reason}"))
}
