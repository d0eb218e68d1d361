// ******** Output data structures *********

use crate::config::{AnsweredStep, Verdict};

/// Aggregated statistics over the answer log.
#[derive(PartialEq, Debug, Clone, Copy)]
pub struct QuizSummary {
    pub correct_count: usize,
    pub incorrect_count: usize,
    pub total: usize,
    /// Percentage of correct answers, between 0 and 100. Zero for an empty log.
    pub accuracy: f64,
}

impl QuizSummary {
    /// The accuracy, rounded to two decimals, as displayed to the user.
    pub fn accuracy_display(&self) -> String {
        format!("{:.2}%", self.accuracy)
    }
}

pub fn summarize(log: &[AnsweredStep]) -> QuizSummary {
    let correct_count = log
        .iter()
        .filter(|st| st.verdict == Verdict::Correct)
        .count();
    let incorrect_count = log
        .iter()
        .filter(|st| st.verdict == Verdict::Incorrect)
        .count();
    let total = log.len();
    let accuracy = if total > 0 {
        (correct_count as f64 / total as f64) * 100.0
    } else {
        0.0
    };
    QuizSummary {
        correct_count,
        incorrect_count,
        total,
        accuracy,
    }
}
