use conjuga_core::model::{Exercise, ExerciseStatus, FieldStatus, Forms, Person};

use super::progress::SessionProgress;

/// Render input for one frame of the practice screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PracticeSnapshot {
    pub exercise: Exercise,
    pub answers: Forms,
    pub fields: [FieldStatus; Person::COUNT],
    pub status: ExerciseStatus,
    pub is_complete: bool,
    pub can_go_previous: bool,
    pub can_go_next: bool,
    pub progress: SessionProgress,
}
