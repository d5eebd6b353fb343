use std::fmt;
use std::sync::Arc;

use rand::Rng;
use tracing::debug;

use conjuga_core::Conjugator;
use conjuga_core::model::{Exercise, ExerciseStatus, FieldStatus, Forms, Person, Tense};

use super::plan::{build_sequence, decode_index};
use super::progress::SessionProgress;
use super::state::SessionState;
use super::view::PracticeSnapshot;
use crate::error::SessionError;

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// In-memory practice session over a drawn sequence of exercises.
///
/// `move_by` is unrestricted; `next` is the caller-facing policy and only
/// moves forward once the current exercise is complete.
pub struct PracticeSession {
    conjugator: Arc<Conjugator>,
    exercises: Vec<Exercise>,
    state: SessionState,
}

impl PracticeSession {
    /// Draw a sequence of `length` exercises and decode each one.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::EmptyDictionary` if there is nothing to draw from,
    /// `SessionError::Empty` if `length` or `tenses` is empty, and
    /// `SessionError::Conjugation` if a drawn verb has an unsupported ending.
    pub fn start<R: Rng + ?Sized>(
        conjugator: Arc<Conjugator>,
        tenses: &[Tense],
        length: usize,
        rng: &mut R,
    ) -> Result<Self, SessionError> {
        let dictionary_size = conjugator.dictionary().len();
        if dictionary_size == 0 {
            return Err(SessionError::EmptyDictionary);
        }
        let sequence = build_sequence(dictionary_size, tenses.len(), length, rng);
        Self::from_sequence(conjugator, tenses, sequence)
    }

    /// Build a session from an already drawn sequence.
    ///
    /// # Errors
    ///
    /// See [`PracticeSession::start`]; additionally returns
    /// `SessionError::IndexOutOfRange` for an index outside the verb × tense grid.
    pub fn from_sequence(
        conjugator: Arc<Conjugator>,
        tenses: &[Tense],
        sequence: Vec<usize>,
    ) -> Result<Self, SessionError> {
        let dictionary = Arc::clone(conjugator.dictionary());
        if dictionary.is_empty() {
            return Err(SessionError::EmptyDictionary);
        }
        let mut state = SessionState::new(sequence).ok_or(SessionError::Empty)?;

        let mut exercises = Vec::with_capacity(state.len());
        for &index in state.sequence() {
            let entry = decode_index(index, dictionary.len());
            let (Some(verb), Some(tense)) = (
                dictionary.verb(entry.verb_index),
                tenses.get(entry.tense_index).copied(),
            ) else {
                return Err(SessionError::IndexOutOfRange { index });
            };
            exercises.push(conjugator.exercise(verb, tense)?);
        }
        for exercise in &exercises {
            state.track_verb(exercise.verb());
        }

        debug!(
            len = exercises.len(),
            tenses = tenses.len(),
            verbs = dictionary.len(),
            "practice session started"
        );

        Ok(Self {
            conjugator,
            exercises,
            state,
        })
    }

    #[must_use]
    pub fn conjugator(&self) -> &Arc<Conjugator> {
        &self.conjugator
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.state.cursor()
    }

    #[must_use]
    pub fn current_exercise(&self) -> &Exercise {
        &self.exercises[self.state.cursor()]
    }

    #[must_use]
    pub fn exercises(&self) -> &[Exercise] {
        &self.exercises
    }

    /// Answer buffer for the current verb.
    #[must_use]
    pub fn current_answers(&self) -> &Forms {
        self.answers_for(self.current_exercise())
    }

    /// Replace one answer for `verb`. The cursor and other verbs are untouched.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::VerbNotInSequence` for verbs this session never drew.
    pub fn update_answer(
        &mut self,
        verb: &str,
        person: Person,
        value: impl Into<String>,
    ) -> Result<(), SessionError> {
        if self.state.set_answer(verb, person, value) {
            Ok(())
        } else {
            Err(SessionError::VerbNotInSequence {
                verb: verb.to_owned(),
            })
        }
    }

    /// Replace one answer for the verb under the cursor.
    pub fn update_current(&mut self, person: Person, value: impl Into<String>) {
        let verb = self.current_exercise().verb().to_owned();
        // Every drawn verb is tracked at construction.
        let _ = self.state.set_answer(&verb, person, value);
    }

    #[must_use]
    pub fn field_statuses(&self) -> [FieldStatus; Person::COUNT] {
        self.current_exercise()
            .field_statuses(self.current_answers())
    }

    #[must_use]
    pub fn status(&self) -> ExerciseStatus {
        self.current_exercise().status(self.current_answers())
    }

    /// True iff all five answers match the current targets after normalization.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.current_exercise()
            .is_solved_by(self.current_answers())
    }

    /// Unguarded, clamped cursor move. Returns the new cursor.
    pub fn move_by(&mut self, delta: isize) -> usize {
        self.state.move_by(delta)
    }

    pub fn previous(&mut self) -> usize {
        self.state.move_by(-1)
    }

    /// Step forward, refusing while the current exercise is unsolved.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Incomplete` if `is_complete` is false.
    pub fn next(&mut self) -> Result<usize, SessionError> {
        if !self.is_complete() {
            return Err(SessionError::Incomplete);
        }
        Ok(self.state.move_by(1))
    }

    #[must_use]
    pub fn can_go_previous(&self) -> bool {
        self.state.cursor() > 0
    }

    #[must_use]
    pub fn can_go_next(&self) -> bool {
        self.state.cursor() + 1 < self.state.len() && self.is_complete()
    }

    /// Fill the current verb's buffer with the exact targets.
    pub fn reveal(&mut self) {
        let exercise = self.current_exercise();
        let verb = exercise.verb().to_owned();
        let forms = exercise.forms().clone();
        let _ = self.state.fill(&verb, forms);
    }

    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        let completed = self
            .exercises
            .iter()
            .filter(|exercise| exercise.is_solved_by(self.answers_for(exercise)))
            .count();
        SessionProgress {
            position: self.state.cursor(),
            total: self.state.len(),
            completed,
        }
    }

    /// Everything a renderer needs for one frame.
    #[must_use]
    pub fn snapshot(&self) -> PracticeSnapshot {
        PracticeSnapshot {
            exercise: self.current_exercise().clone(),
            answers: self.current_answers().clone(),
            fields: self.field_statuses(),
            status: self.status(),
            is_complete: self.is_complete(),
            can_go_previous: self.can_go_previous(),
            can_go_next: self.can_go_next(),
            progress: self.progress(),
        }
    }

    fn answers_for(&self, exercise: &Exercise) -> &Forms {
        // Tracked for every drawn verb in `from_sequence`.
        self.state
            .answers(exercise.verb())
            .unwrap_or(&EMPTY_FORMS)
    }
}

static EMPTY_FORMS: Forms = [
    String::new(),
    String::new(),
    String::new(),
    String::new(),
    String::new(),
];

impl fmt::Debug for PracticeSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PracticeSession")
            .field("len", &self.exercises.len())
            .field("cursor", &self.state.cursor())
            .field("current", &self.current_exercise().verb())
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use conjuga_core::model::VerbDictionary;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn conjugator() -> Arc<Conjugator> {
        let dictionary = VerbDictionary::from_json(
            r#"{
                "regular": ["hablar", "comer"],
                "irregular": { "ser": { "presente": ["soy", "eres", "es", "somos", "son"] } }
            }"#,
        )
        .unwrap();
        Arc::new(Conjugator::new(Arc::new(dictionary)))
    }

    // Verbs decode as hablar=0, comer=1, ser=2.
    fn session(sequence: Vec<usize>) -> PracticeSession {
        PracticeSession::from_sequence(conjugator(), &Tense::ALL, sequence).unwrap()
    }

    fn type_all(session: &mut PracticeSession, forms: [&str; 5]) {
        for person in Person::ALL {
            session.update_current(person, forms[person.index()]);
        }
    }

    #[test]
    fn decodes_sequence_into_exercises() {
        let session = session(vec![0, 5, 2]);
        let verbs: Vec<_> = session.exercises().iter().map(Exercise::verb).collect();
        let tenses: Vec<_> = session.exercises().iter().map(Exercise::tense).collect();
        assert_eq!(verbs, ["hablar", "ser", "ser"]);
        assert_eq!(tenses, [Tense::Presente, Tense::Imperfecto, Tense::Presente]);
        assert_eq!(session.current_exercise().form(Person::Yo), "hablo");
    }

    #[test]
    fn normalized_answers_complete_the_exercise() {
        let mut session = session(vec![0, 1]);
        type_all(&mut session, ["hablo", " HABLAS ", "habla", "hablamos", "hablan"]);
        assert!(session.is_complete());
        assert_eq!(session.status(), ExerciseStatus::Correct);
    }

    #[test]
    fn one_wrong_field_blocks_next() {
        let mut session = session(vec![0, 1]);
        type_all(&mut session, ["hablo", "hablas", "habla", "hablamos", "hablam"]);
        assert!(!session.is_complete());
        assert!(!session.can_go_next());
        assert!(matches!(session.next(), Err(SessionError::Incomplete)));
        assert_eq!(session.cursor(), 0);

        session.update_current(Person::Ellos, "hablan");
        assert_eq!(session.next().unwrap(), 1);
    }

    #[test]
    fn move_by_ignores_completion_and_clamps() {
        let mut session = session(vec![0, 1, 3]);
        assert_eq!(session.move_by(10), 2);
        assert_eq!(session.move_by(-10), 0);
        assert!(!session.can_go_previous());
    }

    #[test]
    fn reveal_always_completes() {
        let mut session = session(vec![2, 1]);
        session.update_current(Person::Yo, "nope");
        session.reveal();
        assert!(session.is_complete());
        assert_eq!(
            session.current_answers(),
            &["soy", "eres", "es", "somos", "son"].map(String::from)
        );
    }

    #[test]
    fn answers_are_restored_when_returning() {
        let mut session = session(vec![0, 1]);
        session.reveal();
        session.next().unwrap();
        session.update_current(Person::Yo, "como");
        session.previous();
        assert!(session.is_complete());
        session.move_by(1);
        assert_eq!(session.current_answers()[0], "como");
    }

    #[test]
    fn updates_for_unknown_verbs_are_rejected() {
        let mut session = session(vec![0]);
        let err = session
            .update_answer("comer", Person::Yo, "como")
            .unwrap_err();
        assert!(matches!(err, SessionError::VerbNotInSequence { verb } if verb == "comer"));
        session.update_answer("hablar", Person::Yo, "hablo").unwrap();
        assert_eq!(session.current_answers()[0], "hablo");
    }

    #[test]
    fn tense_subset_decodes_into_subset() {
        let tenses = [Tense::Futuro];
        let mut rng = StdRng::seed_from_u64(9);
        let session = PracticeSession::start(conjugator(), &tenses, 12, &mut rng).unwrap();
        assert_eq!(session.len(), 12);
        assert!(
            session
                .exercises()
                .iter()
                .all(|exercise| exercise.tense() == Tense::Futuro)
        );
    }

    #[test]
    fn empty_dictionary_cannot_start() {
        let engine = Arc::new(Conjugator::new(Arc::new(VerbDictionary::default())));
        let mut rng = StdRng::seed_from_u64(1);
        let err = PracticeSession::start(engine, &Tense::ALL, 5, &mut rng).unwrap_err();
        assert!(matches!(err, SessionError::EmptyDictionary));
    }

    #[test]
    fn out_of_grid_index_is_rejected() {
        let err = PracticeSession::from_sequence(conjugator(), &[Tense::Presente], vec![3])
            .unwrap_err();
        assert!(matches!(err, SessionError::IndexOutOfRange { index: 3 }));
    }

    #[test]
    fn unsupported_verb_surfaces_on_decode() {
        let dictionary = VerbDictionary::from_json(r#"{ "regular": ["reír"] }"#).unwrap();
        let engine = Arc::new(Conjugator::new(Arc::new(dictionary)));
        let err = PracticeSession::from_sequence(engine, &Tense::ALL, vec![0]).unwrap_err();
        assert!(matches!(err, SessionError::Conjugation(_)));
    }

    #[test]
    fn progress_counts_completed_entries() {
        let mut session = session(vec![0, 1, 0]);
        session.reveal();
        let progress = session.progress();
        assert_eq!(progress.position, 0);
        assert_eq!(progress.total, 3);
        // Entries 0 and 2 share hablar/presente.
        assert_eq!(progress.completed, 2);
        assert_eq!(progress.label(), "1 / 3");
    }
}
