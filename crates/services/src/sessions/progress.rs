/// Aggregated view of session progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionProgress {
    /// Zero-based cursor.
    pub position: usize,
    pub total: usize,
    /// Sequence entries whose answers currently match their targets.
    pub completed: usize,
}

impl SessionProgress {
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} / {}", self.position + 1, self.total)
    }
}
