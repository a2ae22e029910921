use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, OnceLock};

use tracing::debug;

use crate::error::{Result, SpeechError};
use crate::store::NativeSpeechConfig;

/// Opaque id addressing a live configuration object in the runtime table.
///
/// Copying the id does not copy ownership; the facade type that allocated it
/// is responsible for releasing it exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConfigHandle(u64);

impl fmt::Display for ConfigHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cfg#{}", self.0)
    }
}

/// Table of live configuration objects, keyed by handle.
pub struct HandleTable {
    next: AtomicU64,
    entries: Mutex<HashMap<u64, NativeSpeechConfig>>,
}

impl HandleTable {
    fn new() -> Self {
        Self {
            next: AtomicU64::new(1),
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn insert(&self, config: NativeSpeechConfig) -> Result<ConfigHandle> {
        let id = self.next.fetch_add(1, Ordering::Relaxed);
        self.lock()?.insert(id, config);
        let handle = ConfigHandle(id);
        debug!(%handle, "configuration allocated");
        Ok(handle)
    }

    pub fn with<R>(
        &self,
        handle: ConfigHandle,
        f: impl FnOnce(&NativeSpeechConfig) -> R,
    ) -> Result<R> {
        let entries = self.lock()?;
        let config = entries
            .get(&handle.0)
            .ok_or(SpeechError::UnknownHandle(handle))?;
        Ok(f(config))
    }

    pub fn with_mut<R>(
        &self,
        handle: ConfigHandle,
        f: impl FnOnce(&mut NativeSpeechConfig) -> R,
    ) -> Result<R> {
        let mut entries = self.lock()?;
        let config = entries
            .get_mut(&handle.0)
            .ok_or(SpeechError::UnknownHandle(handle))?;
        Ok(f(config))
    }

    /// Removes the entry. Releasing the same handle again fails with
    /// [`SpeechError::UnknownHandle`].
    pub fn release(&self, handle: ConfigHandle) -> Result<()> {
        self.lock()?
            .remove(&handle.0)
            .ok_or(SpeechError::UnknownHandle(handle))?;
        debug!(%handle, "configuration released");
        Ok(())
    }

    /// Number of live configuration objects.
    pub fn live(&self) -> usize {
        self.lock().map(|entries| entries.len()).unwrap_or(0)
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<u64, NativeSpeechConfig>>> {
        self.entries
            .lock()
            .map_err(|_| SpeechError::Native("configuration table lock poisoned".to_string()))
    }
}

/// Process-wide state standing in for the native speech stack.
pub struct Runtime {
    configs: HandleTable,
}

impl Runtime {
    fn new() -> Self {
        Self {
            configs: HandleTable::new(),
        }
    }

    pub fn configs(&self) -> &HandleTable {
        &self.configs
    }
}

static RUNTIME: OnceLock<Runtime> = OnceLock::new();

/// Brings up the process-wide speech runtime.
///
/// Call once at process start, before creating the first configuration.
/// Idempotent; later calls are no-ops.
pub fn init() {
    let mut fresh = false;
    RUNTIME.get_or_init(|| {
        fresh = true;
        Runtime::new()
    });
    if fresh {
        debug!("speech runtime initialized");
    }
}

/// The live runtime, or [`SpeechError::NotInitialized`] when [`init`] has
/// not run yet.
pub fn runtime() -> Result<&'static Runtime> {
    RUNTIME.get().ok_or(SpeechError::NotInitialized)
}
