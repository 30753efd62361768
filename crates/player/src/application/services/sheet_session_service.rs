//! Sheet Session Service - loads and saves the character build
//!
//! Loading never fails: a missing record or an unreachable store yields a fresh
//! default build. Saving reports failures to the caller and leaves the build alone.

use std::sync::Arc;

use charsheet_domain::CharacterBuild;

use crate::ports::outbound::{RecordStorePort, StoreError};

/// Session service over a record store
#[derive(Clone)]
pub struct SheetSessionService {
    store: Arc<dyn RecordStorePort>,
}

impl SheetSessionService {
    pub fn new(store: Arc<dyn RecordStorePort>) -> Self {
        Self { store }
    }

    /// Start a session from the stored record, or from defaults.
    pub async fn load(&self) -> CharacterBuild {
        match self.store.fetch().await {
            Ok(Some(snapshot)) => {
                let build = CharacterBuild::from_snapshot(&snapshot);
                tracing::info!(
                    attribute_total = build.attributes().total(),
                    "Loaded character record"
                );
                build
            }
            Ok(None) => {
                tracing::info!("No character record stored, starting from defaults");
                CharacterBuild::new()
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load character record, starting from defaults");
                CharacterBuild::new()
            }
        }
    }

    /// Persist the current build.
    pub async fn save(&self, build: &CharacterBuild) -> Result<(), StoreError> {
        let snapshot = build.snapshot();
        self.store.store(&snapshot).await?;
        tracing::info!("Saved character record");
        Ok(())
    }
}
