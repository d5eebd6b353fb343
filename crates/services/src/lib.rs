#![forbid(unsafe_code)]

pub mod dictionary;
pub mod error;
pub mod sessions;
pub mod settings;

pub use dictionary::{
    CacheHint, DictionaryGate, DictionarySource, FileSource, HttpSource, StaticSource,
};
pub use error::{DictionaryLoadError, SessionError, SettingsError};
pub use settings::PracticeSettings;

pub use sessions::{
    PracticeSession, PracticeSnapshot, SessionLoopService, SessionProgress, SessionState,
};
