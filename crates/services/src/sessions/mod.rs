mod plan;
mod progress;
mod service;
mod state;
mod view;
mod workflow;

// Public API of the session subsystem.
pub use crate::error::SessionError;
pub use plan::{SequenceEntry, build_sequence, decode_index};
pub use progress::SessionProgress;
pub use service::PracticeSession;
pub use state::SessionState;
pub use view::PracticeSnapshot;
pub use workflow::SessionLoopService;
