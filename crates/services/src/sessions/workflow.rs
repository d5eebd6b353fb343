use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

use conjuga_core::Conjugator;
use conjuga_core::model::{ConjugationTable, VerbDictionary};

use super::service::PracticeSession;
use crate::dictionary::DictionaryGate;
use crate::error::SessionError;
use crate::settings::PracticeSettings;

/// Orchestrates dictionary readiness and session start.
#[derive(Clone, Debug)]
pub struct SessionLoopService {
    gate: Arc<DictionaryGate>,
    settings: PracticeSettings,
}

impl SessionLoopService {
    #[must_use]
    pub fn new(gate: Arc<DictionaryGate>, settings: PracticeSettings) -> Self {
        Self { gate, settings }
    }

    #[must_use]
    pub fn settings(&self) -> &PracticeSettings {
        &self.settings
    }

    #[must_use]
    pub fn gate(&self) -> &Arc<DictionaryGate> {
        &self.gate
    }

    /// Engine behind the dictionary barrier.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Dictionary` if the dictionary cannot be loaded.
    pub async fn conjugator(&self) -> Result<Arc<Conjugator>, SessionError> {
        Ok(self.gate.ready().await?)
    }

    /// # Errors
    ///
    /// Returns `SessionError::Dictionary` if the dictionary cannot be loaded.
    pub async fn dictionary(&self) -> Result<Arc<VerbDictionary>, SessionError> {
        let engine = self.conjugator().await?;
        Ok(Arc::clone(engine.dictionary()))
    }

    /// Start a new session using the configured length, tenses and seed.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if the dictionary fails to load, is empty, or
    /// contains a drawn verb with an unsupported ending.
    pub async fn start_session(&self) -> Result<PracticeSession, SessionError> {
        let engine = self.conjugator().await?;
        let tenses = self.settings.tenses();
        let length = self.settings.sequence_length();

        let session = match self.settings.seed() {
            Some(seed) => {
                let mut rng = StdRng::seed_from_u64(seed);
                PracticeSession::start(engine, tenses, length, &mut rng)?
            }
            None => PracticeSession::start(engine, tenses, length, &mut rand::rng())?,
        };

        info!(
            len = session.len(),
            seeded = self.settings.seed().is_some(),
            "practice session ready"
        );
        Ok(session)
    }

    /// Full conjugation table for any verb.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Dictionary` if the dictionary cannot be loaded and
    /// `SessionError::Conjugation` for unsupported infinitives.
    pub async fn conjugate(&self, verb: &str) -> Result<Arc<ConjugationTable>, SessionError> {
        let engine = self.conjugator().await?;
        Ok(engine.conjugate(verb)?)
    }
}
