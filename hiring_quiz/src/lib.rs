mod config;
pub mod manual;
pub mod results;
pub mod view;

use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

pub use crate::config::*;

/// The state of one quiz session.
///
/// The session is a plain value: everything needed to render the current screen or to
/// resume the quiz is stored here. It is mutated only through the methods below.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct SessionState {
    pub rules: QuizRules,
    pub sample: Vec<CandidateRecord>,
    /// Invariant: `current_index <= sample.len()`.
    pub current_index: usize,
    /// Only meaningful while `current_index < sample.len()`.
    pub current_stage: Stage,
    pub answer_log: Vec<AnsweredStep>,
    /// An answer was given and the "next" action is offered.
    pub awaiting_advance: bool,
    pub answer_submitted: bool,
}

/// What happened after an answer was submitted.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct SubmitOutcome {
    pub step: AnsweredStep,
    pub correct_answer: Answer,
    /// No more questions for this candidate.
    pub candidate_finished: bool,
    /// No more candidates in the sample.
    pub quiz_complete: bool,
}

/// Draws `min(size, records.len())` records uniformly at random, without replacement.
///
/// The order of the returned records is random as well. With a seed, the draw is
/// reproducible.
pub fn draw_sample(
    records: &[CandidateRecord],
    size: usize,
    seed: Option<u64>,
) -> Vec<CandidateRecord> {
    let amount = size.min(records.len());
    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };
    let indexes = rand::seq::index::sample(&mut rng, records.len(), amount);
    debug!("draw_sample: indexes: {:?}", indexes);
    indexes.iter().map(|idx| records[idx].clone()).collect()
}

/// Creates the session in the slot, unless one is already there.
///
/// Returns the session held by the slot. Fails with `EmptyDataset` and leaves the slot
/// empty when there is no record to draw from.
pub fn initialize_session<'a>(
    slot: &'a mut Option<SessionState>,
    records: &[CandidateRecord],
    rules: &QuizRules,
) -> Result<&'a mut SessionState, QuizErrors> {
    if slot.is_none() {
        *slot = Some(SessionState::new(records, rules)?);
    } else {
        debug!("initialize_session: session already present, keeping it");
    }
    slot.as_mut().ok_or(QuizErrors::EmptyDataset)
}

impl SessionState {
    pub fn new(records: &[CandidateRecord], rules: &QuizRules) -> Result<SessionState, QuizErrors> {
        if records.is_empty() {
            return Err(QuizErrors::EmptyDataset);
        }
        let sample = draw_sample(records, rules.sample_size, rules.random_seed);
        info!(
            "Drew {} candidates out of {} (seed: {:?})",
            sample.len(),
            records.len(),
            rules.random_seed
        );
        Ok(SessionState {
            rules: rules.clone(),
            sample,
            current_index: 0,
            current_stage: Stage::FIRST,
            answer_log: Vec::new(),
            awaiting_advance: false,
            answer_submitted: false,
        })
    }

    pub fn is_complete(&self) -> bool {
        self.current_index >= self.sample.len()
    }

    pub fn current_candidate(&self) -> Option<&CandidateRecord> {
        self.sample.get(self.current_index)
    }

    /// Skips the current candidate if it has nothing to display.
    ///
    /// Returns true if the candidate was skipped. No answer is recorded for it.
    pub fn skip_incomplete(&mut self) -> bool {
        let incomplete = match self.current_candidate() {
            Some(c) => c.is_incomplete(&self.rules.excluded_fields),
            None => false,
        };
        if incomplete {
            warn!(
                "Candidate {} has no data to display, skipping it",
                self.current_index + 1
            );
            self.advance_candidate();
        }
        incomplete
    }

    /// Applies the answer of the user to the current question.
    ///
    /// A question whose expected answer is YES always moves on to the next stage (or
    /// to the next candidate after the last stage), whether the user was right or not.
    /// A question whose expected answer is NO ends the questions for this candidate.
    pub fn submit(&mut self, answer: Answer) -> Result<SubmitOutcome, QuizErrors> {
        let candidate = self.current_candidate().ok_or(QuizErrors::QuizComplete)?;
        if candidate.is_incomplete(&self.rules.excluded_fields) {
            return Err(QuizErrors::IncompleteCandidate);
        }
        let ordinal = self.current_index + 1;
        let asked_stage = self.current_stage;
        let correct_answer = Answer::from_flag(candidate.outcome(asked_stage));
        let summary = candidate.summary(&self.rules.summary_fields);
        let verdict = if answer == correct_answer {
            Verdict::Correct
        } else {
            Verdict::Incorrect
        };

        let candidate_finished = match (correct_answer, asked_stage.next()) {
            (Answer::Yes, Some(next_stage)) => {
                self.current_stage = next_stage;
                false
            }
            (Answer::Yes, None) | (Answer::No, _) => {
                self.advance_candidate();
                true
            }
        };

        // The step is labeled with the stage reached after the transition.
        let step = AnsweredStep {
            candidate: ordinal,
            stage: self.current_stage,
            asked_stage,
            answer,
            summary,
            verdict,
        };
        debug!("submit: {:?}", step);
        self.answer_log.push(step.clone());
        self.awaiting_advance = true;
        self.answer_submitted = true;

        Ok(SubmitOutcome {
            step,
            correct_answer,
            candidate_finished,
            quiz_complete: self.is_complete(),
        })
    }

    /// The "next" action: clears the gating flags once an answer was submitted.
    pub fn acknowledge(&mut self) -> Result<(), QuizErrors> {
        if !self.answer_submitted {
            return Err(QuizErrors::NotReady);
        }
        self.awaiting_advance = false;
        self.answer_submitted = false;
        Ok(())
    }

    fn advance_candidate(&mut self) {
        self.current_index += 1;
        self.current_stage = Stage::FIRST;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn candidate(name: &str, flags: (bool, bool, bool)) -> CandidateRecord {
        CandidateRecord {
            fields: vec![
                ("name".to_string(), name.to_string()),
                ("career_summary".to_string(), format!("summary of {}", name)),
                ("target_employer".to_string(), "ACME".to_string()),
            ],
            matching: flags.0,
            document_passed: flags.1,
            offer_accepted: flags.2,
        }
    }

    fn table(n: usize) -> Vec<CandidateRecord> {
        (0..n)
            .map(|i| candidate(&format!("c{}", i), (true, false, false)))
            .collect()
    }

    fn seeded() -> QuizRules {
        QuizRules {
            random_seed: Some(42),
            ..QuizRules::default()
        }
    }

    fn session_of(records: Vec<CandidateRecord>) -> SessionState {
        let rules = seeded();
        SessionState {
            rules,
            sample: records,
            current_index: 0,
            current_stage: Stage::FIRST,
            answer_log: Vec::new(),
            awaiting_advance: false,
            answer_submitted: false,
        }
    }

    #[test]
    fn sample_is_bounded_by_table_size() {
        init();
        assert_eq!(draw_sample(&table(10), 30, Some(1)).len(), 10);
        assert_eq!(draw_sample(&table(1000), 30, Some(1)).len(), 30);
        assert_eq!(draw_sample(&table(1000), 30, None).len(), 30);
    }

    #[test]
    fn sample_has_no_duplicates() {
        let records = table(50);
        let sample = draw_sample(&records, 30, Some(7));
        let mut names: Vec<&str> = sample.iter().filter_map(|c| c.field("name")).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 30);
    }

    #[test]
    fn seeded_sample_is_reproducible() {
        let records = table(100);
        assert_eq!(
            draw_sample(&records, 30, Some(3)),
            draw_sample(&records, 30, Some(3))
        );
    }

    #[test]
    fn empty_table_creates_no_session() {
        let mut slot: Option<SessionState> = None;
        let res = initialize_session(&mut slot, &[], &seeded());
        assert_eq!(res.err(), Some(QuizErrors::EmptyDataset));
        assert!(slot.is_none());
    }

    #[test]
    fn initialization_is_idempotent() {
        let mut slot: Option<SessionState> = None;
        let rules = QuizRules::default();
        {
            let s = initialize_session(&mut slot, &table(40), &rules).unwrap();
            assert_eq!(s.sample.len(), 30);
            s.submit(Answer::Yes).unwrap();
        }
        let first = slot.clone();
        let s = initialize_session(&mut slot, &table(5), &rules).unwrap();
        assert_eq!(s.sample.len(), 30);
        assert_eq!(s.answer_log.len(), 1);
        assert_eq!(Some(s.clone()), first);
    }

    #[test]
    fn fresh_session_starts_at_first_stage() {
        let s = SessionState::new(&table(3), &seeded()).unwrap();
        assert_eq!(s.current_index, 0);
        assert_eq!(s.current_stage, Stage::Matching);
        assert!(s.answer_log.is_empty());
        assert!(!s.awaiting_advance);
        assert!(!s.answer_submitted);
    }

    #[test]
    fn all_yes_on_hired_candidate() {
        init();
        let mut s = session_of(vec![
            candidate("a", (true, true, true)),
            candidate("b", (true, true, true)),
        ]);
        let o1 = s.submit(Answer::Yes).unwrap();
        assert!(!o1.candidate_finished);
        assert_eq!(s.current_stage, Stage::DocumentPassed);
        assert_eq!(s.current_index, 0);
        s.submit(Answer::Yes).unwrap();
        assert_eq!(s.current_stage, Stage::OfferAccepted);
        assert_eq!(s.current_index, 0);
        let o3 = s.submit(Answer::Yes).unwrap();
        assert!(o3.candidate_finished);
        assert!(!o3.quiz_complete);
        assert_eq!(s.current_index, 1);
        assert_eq!(s.current_stage, Stage::Matching);

        assert_eq!(s.answer_log.len(), 3);
        assert!(s
            .answer_log
            .iter()
            .all(|st| st.verdict == Verdict::Correct && st.candidate == 1));
    }

    #[test]
    fn recorded_stage_is_the_stage_after_transition() {
        let mut s = session_of(vec![candidate("a", (true, true, true))]);
        s.submit(Answer::Yes).unwrap();
        s.submit(Answer::Yes).unwrap();
        s.submit(Answer::Yes).unwrap();
        let recorded: Vec<Stage> = s.answer_log.iter().map(|st| st.stage).collect();
        let asked: Vec<Stage> = s.answer_log.iter().map(|st| st.asked_stage).collect();
        assert_eq!(
            recorded,
            vec![Stage::DocumentPassed, Stage::OfferAccepted, Stage::Matching]
        );
        assert_eq!(asked, Stage::ALL.to_vec());
    }

    #[test]
    fn expected_no_ends_candidate_whatever_the_answer() {
        for answer in [Answer::Yes, Answer::No] {
            let mut s = session_of(vec![
                candidate("a", (true, false, false)),
                candidate("b", (false, false, false)),
            ]);
            s.submit(Answer::Yes).unwrap();
            assert_eq!(s.current_stage, Stage::DocumentPassed);
            let o = s.submit(answer).unwrap();
            assert!(o.candidate_finished);
            assert_eq!(o.correct_answer, Answer::No);
            assert_eq!(s.current_index, 1);
            assert_eq!(s.current_stage, Stage::Matching);
            assert_eq!(s.answer_log.len(), 2);
            let expected = if answer == Answer::No {
                Verdict::Correct
            } else {
                Verdict::Incorrect
            };
            assert_eq!(s.answer_log[1].verdict, expected);
        }
    }

    #[test]
    fn wrong_answer_on_expected_yes_still_progresses() {
        let mut s = session_of(vec![candidate("a", (true, true, false))]);
        let o = s.submit(Answer::No).unwrap();
        assert_eq!(o.step.verdict, Verdict::Incorrect);
        assert_eq!(s.current_stage, Stage::DocumentPassed);
        assert_eq!(s.current_index, 0);
    }

    #[test]
    fn step_carries_summary_and_ordinal() {
        let mut s = session_of(vec![
            candidate("a", (false, false, false)),
            candidate("b", (false, false, false)),
        ]);
        s.submit(Answer::No).unwrap();
        let o = s.submit(Answer::Yes).unwrap();
        assert_eq!(o.step.candidate, 2);
        assert_eq!(o.step.summary, "summary of b");
        assert_eq!(o.step.answer, Answer::Yes);
        assert!(o.quiz_complete);
    }

    #[test]
    fn submit_after_completion_fails() {
        let mut s = session_of(vec![candidate("a", (false, false, false))]);
        s.submit(Answer::No).unwrap();
        assert!(s.is_complete());
        assert_eq!(s.submit(Answer::No), Err(QuizErrors::QuizComplete));
        assert_eq!(s.answer_log.len(), 1);
    }

    #[test]
    fn acknowledge_requires_an_answer() {
        let mut s = session_of(vec![candidate("a", (true, true, true))]);
        assert_eq!(s.acknowledge(), Err(QuizErrors::NotReady));
        s.submit(Answer::Yes).unwrap();
        assert!(s.awaiting_advance);
        assert!(s.answer_submitted);
        assert_eq!(s.acknowledge(), Ok(()));
        assert!(!s.awaiting_advance);
        assert!(!s.answer_submitted);
        assert_eq!(s.acknowledge(), Err(QuizErrors::NotReady));
    }

    #[test]
    fn incomplete_candidate_is_skipped_silently() {
        let empty = CandidateRecord {
            fields: vec![
                ("name".to_string(), "".to_string()),
                ("career_summary".to_string(), " ".to_string()),
                // Excluded, does not count as data.
                ("target_employer".to_string(), "ACME".to_string()),
            ],
            matching: true,
            document_passed: true,
            offer_accepted: true,
        };
        let mut s = session_of(vec![empty, candidate("b", (true, false, false))]);
        assert_eq!(s.submit(Answer::Yes), Err(QuizErrors::IncompleteCandidate));
        assert!(s.skip_incomplete());
        assert_eq!(s.current_index, 1);
        assert!(s.answer_log.is_empty());
        assert!(!s.skip_incomplete());
        assert_eq!(s.current_index, 1);
    }

    #[test]
    fn zero_is_data_and_spaces_are_not() {
        let excluded = QuizRules::default().excluded_fields;
        let with_zero = CandidateRecord {
            fields: vec![("age".to_string(), "0".to_string())],
            matching: false,
            document_passed: false,
            offer_accepted: false,
        };
        assert!(!with_zero.is_incomplete(&excluded));
        let blank = CandidateRecord {
            fields: vec![("age".to_string(), "  ".to_string())],
            ..with_zero
        };
        assert!(blank.is_incomplete(&excluded));
    }

    #[test]
    fn skip_on_finished_session_is_a_noop() {
        let mut s = session_of(vec![]);
        assert!(!s.skip_incomplete());
        assert_eq!(s.current_index, 0);
    }
}
