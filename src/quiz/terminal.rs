// The interactive front-end of the quiz, on a terminal.

use std::io::{self, BufRead, Write};
use std::path::Path;

use hiring_quiz::view::{render, Screen};

use crate::quiz::io_results::RESULTS_MIME;
use crate::quiz::*;

pub const TITLE: &str = "Candidate Screening Quiz";

#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum SessionEnd {
    /// All the candidates have been processed.
    Finished,
    /// The user stopped, or the input was closed.
    Quit,
}

#[derive(Eq, PartialEq, Debug, Clone, Copy)]
enum Command {
    Answer(Answer),
    Next,
    Quit,
    Unknown,
}

impl Command {
    fn parse(line: &str) -> Command {
        if let Some(a) = Answer::parse(line) {
            return Command::Answer(a);
        }
        match line.trim().to_lowercase().as_str() {
            "next" => Command::Next,
            "q" | "quit" | "exit" => Command::Quit,
            _ => Command::Unknown,
        }
    }
}

enum Action {
    Skip,
    Input(Command),
    Closed,
}

pub fn show_banner<W: Write>(out: &mut W, settings: &QuizSettings) -> io::Result<()> {
    writeln!(out, "{}", TITLE)?;
    writeln!(out, "{}", "=".repeat(TITLE.len()))?;
    if Path::new(&settings.logo_path).exists() {
        writeln!(out, "[{}]", settings.logo_path)?;
    } else {
        warn!("Logo image not found: {}", settings.logo_path);
    }
    Ok(())
}

pub fn show_download<W: Write>(out: &mut W, path: &Path) -> io::Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "Results saved to {} ({})",
        path.display(),
        RESULTS_MIME
    )
}

/// Runs the question loop until the quiz is finished or the user quits.
///
/// The screen is rendered again from the session after every action of the user.
pub fn run_terminal<R: BufRead, W: Write>(
    state: &mut SessionState,
    input: &mut R,
    out: &mut W,
) -> io::Result<SessionEnd> {
    loop {
        let action = match render(state) {
            Screen::IncompleteCandidate { ordinal, total } => {
                writeln!(
                    out,
                    "Candidate {} / {}: the data is incomplete, moving to the next candidate.",
                    ordinal, total
                )?;
                Action::Skip
            }
            Screen::Finished { summary, steps } => {
                write_final_screen(out, &summary, steps)?;
                return Ok(SessionEnd::Finished);
            }
            Screen::Question {
                ordinal,
                total,
                fields,
                prompt,
                show_next,
                ..
            } => {
                writeln!(out)?;
                writeln!(out, "Candidate {} / {}", ordinal, total)?;
                for (k, v) in fields.iter() {
                    writeln!(out, "  - {}: {}", k, v)?;
                }
                writeln!(out, "{} [yes/no]", prompt)?;
                if show_next {
                    writeln!(out, "(type 'next' to continue)")?;
                }
                out.flush()?;
                match read_line(input)? {
                    Some(line) => Action::Input(Command::parse(&line)),
                    None => Action::Closed,
                }
            }
        };

        match action {
            Action::Skip => {
                state.skip_incomplete();
            }
            Action::Closed | Action::Input(Command::Quit) => {
                info!(
                    "Session stopped at candidate {} after {} answers",
                    state.current_index + 1,
                    state.answer_log.len()
                );
                return Ok(SessionEnd::Quit);
            }
            Action::Input(Command::Next) => {
                if let Err(e) = state.acknowledge() {
                    writeln!(out, "Warning: {}", e)?;
                }
            }
            Action::Input(Command::Answer(_)) if state.awaiting_advance => {
                writeln!(out, "Type 'next' to see the next question.")?;
            }
            Action::Input(Command::Answer(answer)) => match state.submit(answer) {
                Ok(outcome) => write_feedback(out, &outcome)?,
                Err(e) => writeln!(out, "Warning: {}", e)?,
            },
            Action::Input(Command::Unknown) => {
                writeln!(out, "Please type yes, no, next or quit.")?;
            }
        }
    }
}

fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn write_feedback<W: Write>(out: &mut W, outcome: &SubmitOutcome) -> io::Result<()> {
    let verdict = match outcome.step.verdict {
        Verdict::Correct => "Correct!",
        Verdict::Incorrect => "Incorrect.",
    };
    let next = if outcome.quiz_complete {
        "That was the last question."
    } else if outcome.candidate_finished {
        "Moving to the next candidate."
    } else {
        "Moving to the next step."
    };
    writeln!(
        out,
        "{} The answer was {}. {}",
        verdict, outcome.correct_answer, next
    )
}

fn write_final_screen<W: Write>(
    out: &mut W,
    summary: &results::QuizSummary,
    steps: &[AnsweredStep],
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "The quiz is over!")?;
    writeln!(out, "Correct answers: {}", summary.correct_count)?;
    writeln!(out, "Incorrect answers: {}", summary.incorrect_count)?;
    writeln!(out, "Accuracy: {}", summary.accuracy_display())?;
    writeln!(out)?;
    writeln!(out, "Detailed results:")?;
    writeln!(out, "{}", io_results::RESULTS_HEADER.join("\t"))?;
    for step in steps {
        writeln!(
            out,
            "{}\t{}\t{}\t{}\t{}",
            step.candidate, step.stage, step.answer, step.summary, step.verdict
        )?;
    }
    out.flush()
}
