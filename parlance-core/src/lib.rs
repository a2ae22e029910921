//! Core types for the parlance speech-translation configuration stack
//!
//! This crate provides the pieces the user-facing `parlance` crate builds
//! on: the error taxonomy, well-known property identifiers, the property
//! store behind every configuration object, and the process-wide handle
//! table with its explicit initialization entry point.

pub mod error;
pub mod handle;
pub mod property;
pub mod store;

pub use error::{Result, SpeechError};
pub use handle::{init, runtime, ConfigHandle, HandleTable, Runtime};
pub use property::{PropertyCollection, PropertyId};
pub use store::NativeSpeechConfig;
