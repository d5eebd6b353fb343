use std::fmt;
use std::sync::Arc;

use tokio::sync::OnceCell;
use tracing::{info, warn};

use conjuga_core::Conjugator;

use super::source::DictionarySource;
use crate::error::DictionaryLoadError;

/// One-shot initialization barrier in front of the conjugation engine.
///
/// The first successful load is kept for the rest of the session. A failed
/// load leaves the gate closed, so a later call may try again.
pub struct DictionaryGate {
    source: Arc<dyn DictionarySource>,
    engine: OnceCell<Arc<Conjugator>>,
}

impl DictionaryGate {
    #[must_use]
    pub fn new(source: Arc<dyn DictionarySource>) -> Self {
        Self {
            source,
            engine: OnceCell::new(),
        }
    }

    /// Wait for the dictionary, loading it on first use.
    ///
    /// # Errors
    ///
    /// Returns `DictionaryLoadError` if the source fails; nothing is cached then.
    pub async fn ready(&self) -> Result<Arc<Conjugator>, DictionaryLoadError> {
        let engine = self
            .engine
            .get_or_try_init(|| async {
                let origin = self.source.describe();
                match self.source.load().await {
                    Ok(dictionary) => {
                        info!(
                            origin = %origin,
                            verbs = dictionary.len(),
                            irregular = dictionary.irregular_count(),
                            "verb dictionary loaded"
                        );
                        Ok(Arc::new(Conjugator::new(Arc::new(dictionary))))
                    }
                    Err(err) => {
                        warn!(origin = %origin, error = %err, "verb dictionary failed to load");
                        Err(err)
                    }
                }
            })
            .await?;
        Ok(Arc::clone(engine))
    }

    /// Engine if the barrier has already been passed.
    #[must_use]
    pub fn get(&self) -> Option<Arc<Conjugator>> {
        self.engine.get().map(Arc::clone)
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.engine.initialized()
    }
}

impl fmt::Debug for DictionaryGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DictionaryGate")
            .field("source", &self.source.describe())
            .field("ready", &self.is_ready())
            .finish()
    }
}
