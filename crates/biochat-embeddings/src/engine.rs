//! Process-wide encoder cell.
//!
//! The encoder is loaded once, on first use, and shared for the life of the
//! process. `teardown` drops it and the next request reloads. A failed load
//! is not cached, so provisioning the model files later heals the very next
//! turn.

use std::sync::{Arc, OnceLock, RwLock};

use tracing::debug;

use biochat_core::config::ModelConfig;
use biochat_core::errors::{BioChatResult, ModelError};
use biochat_core::traits::SequenceEncoder;

use crate::providers;

static GLOBAL_CELL: OnceLock<EncoderCell> = OnceLock::new();

/// The cell shared by every chat session in this process.
pub fn global() -> &'static EncoderCell {
    GLOBAL_CELL.get_or_init(EncoderCell::new)
}

/// Lazily-initialized slot holding the active encoder.
///
/// Clones share the slot. The first successful load wins; a different
/// config passed on a later call is ignored until `teardown`.
#[derive(Clone, Default)]
pub struct EncoderCell {
    slot: Arc<RwLock<Option<Arc<dyn SequenceEncoder>>>>,
}

impl EncoderCell {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the shared encoder, loading it on first call.
    ///
    /// Concurrent first calls race to the write lock; exactly one loads,
    /// the rest observe the stored encoder.
    pub fn get_or_load(&self, config: &ModelConfig) -> BioChatResult<Arc<dyn SequenceEncoder>> {
        if let Some(encoder) = self.read_slot()?.as_ref() {
            return Ok(Arc::clone(encoder));
        }

        let mut slot = self.write_slot()?;
        if let Some(encoder) = slot.as_ref() {
            // Lost the race; someone else loaded meanwhile.
            return Ok(Arc::clone(encoder));
        }

        let encoder = providers::create_encoder(config)?;
        debug!(encoder = encoder.name(), "encoder cell initialized");
        *slot = Some(Arc::clone(&encoder));
        Ok(encoder)
    }

    /// Preload an already-built encoder, replacing any cached one.
    pub fn install(&self, encoder: Arc<dyn SequenceEncoder>) -> BioChatResult<()> {
        *self.write_slot()? = Some(encoder);
        Ok(())
    }

    /// Drop the cached encoder. The next `get_or_load` reloads from config.
    pub fn teardown(&self) {
        if let Ok(mut slot) = self.slot.write() {
            *slot = None;
        }
    }

    /// Whether an encoder is currently cached.
    pub fn is_loaded(&self) -> bool {
        self.slot.read().map(|slot| slot.is_some()).unwrap_or(false)
    }

    fn read_slot(
        &self,
    ) -> Result<std::sync::RwLockReadGuard<'_, Option<Arc<dyn SequenceEncoder>>>, ModelError> {
        self.slot.read().map_err(|e| ModelError::InferenceFailed {
            reason: format!("encoder cell poisoned: {e}"),
        })
    }

    fn write_slot(
        &self,
    ) -> Result<std::sync::RwLockWriteGuard<'_, Option<Arc<dyn SequenceEncoder>>>, ModelError> {
        self.slot.write().map_err(|e| ModelError::InferenceFailed {
            reason: format!("encoder cell poisoned: {e}"),
        })
    }
}
