use thiserror::Error;

use crate::handle::ConfigHandle;

#[derive(Error, Debug)]
pub enum SpeechError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Configuration was closed")]
    HandleClosed,

    #[error("Unknown or released handle: {0}")]
    UnknownHandle(ConfigHandle),

    #[error("Speech runtime is not initialized")]
    NotInitialized,

    #[error("Native error: {0}")]
    Native(String),

    #[error("Profile error: {0}")]
    Profile(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SpeechError>;
