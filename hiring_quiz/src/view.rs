//! Rendering of a session into the screen shown to the user.
//!
//! `render` only reads the session: front-ends call it again after every mutation.

use crate::config::{AnsweredStep, Stage};
use crate::results::{summarize, QuizSummary};
use crate::SessionState;

#[derive(PartialEq, Debug, Clone)]
pub enum Screen<'a> {
    /// A question about the current candidate.
    Question {
        /// 1-based.
        ordinal: usize,
        total: usize,
        fields: Vec<(&'a str, &'a str)>,
        stage: Stage,
        prompt: &'static str,
        /// An answer was just given and the "next" action is available.
        show_next: bool,
    },
    /// The current candidate has nothing to show and will be skipped.
    IncompleteCandidate { ordinal: usize, total: usize },
    Finished {
        summary: QuizSummary,
        steps: &'a [AnsweredStep],
    },
}

pub fn render(state: &SessionState) -> Screen<'_> {
    let total = state.sample.len();
    match state.current_candidate() {
        None => Screen::Finished {
            summary: summarize(&state.answer_log),
            steps: &state.answer_log,
        },
        Some(c) if c.is_incomplete(&state.rules.excluded_fields) => Screen::IncompleteCandidate {
            ordinal: state.current_index + 1,
            total,
        },
        Some(c) => Screen::Question {
            ordinal: state.current_index + 1,
            total,
            fields: c.displayed_fields(&state.rules.excluded_fields),
            stage: state.current_stage,
            prompt: state.current_stage.question(),
            show_next: state.awaiting_advance,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Answer, CandidateRecord, QuizRules};

    fn state(records: Vec<CandidateRecord>) -> SessionState {
        SessionState {
            rules: QuizRules::default(),
            sample: records,
            current_index: 0,
            current_stage: Stage::FIRST,
            answer_log: vec![],
            awaiting_advance: false,
            answer_submitted: false,
        }
    }

    fn record(age: &str) -> CandidateRecord {
        CandidateRecord {
            fields: vec![
                ("age".to_string(), age.to_string()),
                ("入社企業".to_string(), "ACME".to_string()),
            ],
            matching: true,
            document_passed: true,
            offer_accepted: false,
        }
    }

    #[test]
    fn question_hides_excluded_fields() {
        let s = state(vec![record("34")]);
        match render(&s) {
            Screen::Question {
                ordinal,
                total,
                fields,
                stage,
                prompt,
                show_next,
            } => {
                assert_eq!((ordinal, total), (1, 1));
                assert_eq!(fields, vec![("age", "34")]);
                assert_eq!(stage, Stage::Matching);
                assert_eq!(prompt, "Was this candidate matched?");
                assert!(!show_next);
            }
            x => panic!("unexpected screen {:?}", x),
        }
    }

    #[test]
    fn next_action_shows_after_answer() {
        let mut s = state(vec![record("34")]);
        s.submit(Answer::Yes).unwrap();
        assert!(matches!(
            render(&s),
            Screen::Question {
                show_next: true,
                stage: Stage::DocumentPassed,
                ..
            }
        ));
    }

    #[test]
    fn incomplete_candidate_screen() {
        let s = state(vec![record(""), record("40")]);
        assert_eq!(
            render(&s),
            Screen::IncompleteCandidate {
                ordinal: 1,
                total: 2
            }
        );
    }

    #[test]
    fn finished_screen_summarizes_log() {
        let mut s = state(vec![record("34")]);
        s.submit(Answer::Yes).unwrap();
        s.submit(Answer::Yes).unwrap();
        s.submit(Answer::Yes).unwrap();
        match render(&s) {
            Screen::Finished { summary, steps } => {
                assert_eq!(steps.len(), 3);
                assert_eq!(summary.correct_count, 2);
                assert_eq!(summary.incorrect_count, 1);
            }
            x => panic!("unexpected screen {:?}", x),
        }
    }
}
