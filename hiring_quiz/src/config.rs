// ********* Input data structures ***********

use std::error::Error;
use std::fmt::Display;

/// The three screening stages a candidate goes through, in order.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash)]
pub enum Stage {
    Matching,
    DocumentPassed,
    OfferAccepted,
}

impl Stage {
    pub const FIRST: Stage = Stage::Matching;

    pub const ALL: [Stage; 3] = [Stage::Matching, Stage::DocumentPassed, Stage::OfferAccepted];

    /// The canonical column name for this stage.
    pub fn column(&self) -> &'static str {
        match self {
            Stage::Matching => "matching",
            Stage::DocumentPassed => "document_passed",
            Stage::OfferAccepted => "offer_accepted",
        }
    }

    /// All the header names accepted for this stage. The canonical name comes first,
    /// followed by the labels used by older exports of the recruiting sheet.
    pub fn column_aliases(&self) -> &'static [&'static str] {
        match self {
            Stage::Matching => &["matching", "マッチング"],
            Stage::DocumentPassed => &["document_passed", "書類通過"],
            Stage::OfferAccepted => &["offer_accepted", "承諾"],
        }
    }

    /// The following stage, or None for the last one.
    pub fn next(&self) -> Option<Stage> {
        match self {
            Stage::Matching => Some(Stage::DocumentPassed),
            Stage::DocumentPassed => Some(Stage::OfferAccepted),
            Stage::OfferAccepted => None,
        }
    }

    pub fn question(&self) -> &'static str {
        match self {
            Stage::Matching => "Was this candidate matched?",
            Stage::DocumentPassed => "Did this candidate pass document screening?",
            Stage::OfferAccepted => "Did this candidate accept the offer?",
        }
    }
}

impl Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.column())
    }
}

#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash)]
pub enum Answer {
    Yes,
    No,
}

impl Answer {
    pub fn from_flag(flag: bool) -> Answer {
        if flag {
            Answer::Yes
        } else {
            Answer::No
        }
    }

    /// Parses the answers typed by a user. Accepts `y`, `yes`, `n`, `no` in any case.
    pub fn parse(s: &str) -> Option<Answer> {
        match s.trim().to_lowercase().as_str() {
            "y" | "yes" => Some(Answer::Yes),
            "n" | "no" => Some(Answer::No),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Answer::Yes => "YES",
            Answer::No => "NO",
        }
    }
}

impl Display for Answer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash)]
pub enum Verdict {
    Correct,
    Incorrect,
}

impl Verdict {
    pub fn label(&self) -> &'static str {
        match self {
            Verdict::Correct => "correct",
            Verdict::Incorrect => "incorrect",
        }
    }
}

impl Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One row of the candidate sheet, after cleaning.
///
/// The descriptive fields keep the column order of the sheet. Their values are already
/// rendered as text: missing cells are empty strings and dates are `YYYY/MM/DD`.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct CandidateRecord {
    pub fields: Vec<(String, String)>,
    pub matching: bool,
    pub document_passed: bool,
    pub offer_accepted: bool,
}

impl CandidateRecord {
    pub fn outcome(&self, stage: Stage) -> bool {
        match stage {
            Stage::Matching => self.matching,
            Stage::DocumentPassed => self.document_passed,
            Stage::OfferAccepted => self.offer_accepted,
        }
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// The fields shown to the user: everything except the excluded labels.
    pub fn displayed_fields(&self, excluded: &[String]) -> Vec<(&str, &str)> {
        self.fields
            .iter()
            .filter(|(k, _)| !excluded.contains(k))
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect()
    }

    /// A candidate with nothing to show cannot be quizzed.
    pub fn is_incomplete(&self, excluded: &[String]) -> bool {
        self.displayed_fields(excluded)
            .iter()
            .all(|(_, v)| v.trim().is_empty())
    }

    /// The free-text summary of the candidate. The first of the given columns that is
    /// present wins; an absent column gives an empty summary.
    pub fn summary(&self, summary_fields: &[String]) -> String {
        summary_fields
            .iter()
            .find_map(|name| self.field(name))
            .unwrap_or("")
            .to_string()
    }
}

/// A scored answer, as recorded in the log.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct AnsweredStep {
    /// 1-based position of the candidate in the sample.
    pub candidate: usize,
    /// The stage of the session right after the answer was applied.
    /// For the stage the question was actually about, see `asked_stage`.
    pub stage: Stage,
    pub asked_stage: Stage,
    pub answer: Answer,
    pub summary: String,
    pub verdict: Verdict,
}

/// Errors raised by the quiz session.
#[derive(Eq, PartialEq, Debug, Clone)]
pub enum QuizErrors {
    /// No candidate available to build a session.
    EmptyDataset,
    /// The user asked for the next question before answering the current one.
    NotReady,
    /// All the candidates of the sample have been processed.
    QuizComplete,
    /// The current candidate has no data to show and must be skipped first.
    IncompleteCandidate,
}

impl Error for QuizErrors {}

impl Display for QuizErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuizErrors::EmptyDataset => write!(
                f,
                "Could not initialize the quiz: the candidate data is empty or invalid"
            ),
            QuizErrors::NotReady => write!(f, "Please answer the question first"),
            QuizErrors::QuizComplete => write!(f, "The quiz is already finished"),
            QuizErrors::IncompleteCandidate => {
                write!(f, "The current candidate has no data and must be skipped")
            }
        }
    }
}

// ********* Configuration **********

#[derive(Eq, PartialEq, Debug, Clone)]
pub struct QuizRules {
    /// Upper bound on the number of candidates drawn for a session.
    pub sample_size: usize,
    /// None draws a different sample on every session.
    pub random_seed: Option<u64>,
    /// Columns never shown to the user (the hiring company gives the answer away).
    pub excluded_fields: Vec<String>,
    /// Candidate columns holding the career summary, by order of preference.
    pub summary_fields: Vec<String>,
}

impl QuizRules {
    pub const DEFAULT_SAMPLE_SIZE: usize = 30;
}

impl Default for QuizRules {
    fn default() -> Self {
        QuizRules {
            sample_size: QuizRules::DEFAULT_SAMPLE_SIZE,
            random_seed: None,
            excluded_fields: vec!["target_employer".to_string(), "入社企業".to_string()],
            summary_fields: vec!["career_summary".to_string(), "キャリアサマリ".to_string()],
        }
    }
}
