mod gate;
mod source;

pub use gate::DictionaryGate;
pub use source::{CacheHint, DictionarySource, FileSource, HttpSource, StaticSource};
