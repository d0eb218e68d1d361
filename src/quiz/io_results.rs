// Writing the results of a session.

use std::fs;
use std::path::PathBuf;

use hiring_quiz::results::QuizSummary;
use rust_xlsxwriter::{Format, Workbook};
use serde_json::json;
use serde_json::Value as JSValue;

use crate::quiz::*;

pub const RESULTS_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
pub const RESULTS_SHEET: &str = "results";
pub const RESULTS_HEADER: [&str; 5] = ["candidate", "stage", "answer", "career_summary", "verdict"];

/// Writes one row per answered step, and returns the path of the workbook.
pub fn export_results(log: &[AnsweredStep], path: &str) -> QuizResult<PathBuf> {
    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(RESULTS_SHEET)
        .context(WritingResultsSnafu { path })?;

    for (col, name) in RESULTS_HEADER.iter().enumerate() {
        worksheet
            .write_string_with_format(0, col as u16, *name, &bold)
            .context(WritingResultsSnafu { path })?;
    }

    for (idx, step) in log.iter().enumerate() {
        let row = (idx + 1) as u32;
        worksheet
            .write_number(row, 0, step.candidate as f64)
            .context(WritingResultsSnafu { path })?;
        worksheet
            .write_string(row, 1, step.stage.column())
            .context(WritingResultsSnafu { path })?;
        worksheet
            .write_string(row, 2, step.answer.label())
            .context(WritingResultsSnafu { path })?;
        worksheet
            .write_string(row, 3, step.summary.as_str())
            .context(WritingResultsSnafu { path })?;
        worksheet
            .write_string(row, 4, step.verdict.label())
            .context(WritingResultsSnafu { path })?;
    }

    workbook.save(path).context(WritingResultsSnafu { path })?;
    info!("Wrote {} answers to {}", log.len(), path);
    Ok(PathBuf::from(path))
}

pub fn build_summary_js(summary: &QuizSummary, log: &[AnsweredStep]) -> JSValue {
    let steps: Vec<JSValue> = log
        .iter()
        .map(|step| {
            json!({
                "candidate": step.candidate,
                "stage": step.stage.column(),
                "askedStage": step.asked_stage.column(),
                "answer": step.answer.label(),
                "careerSummary": step.summary,
                "verdict": step.verdict.label(),
            })
        })
        .collect();
    json!({
        "correctCount": summary.correct_count,
        "incorrectCount": summary.incorrect_count,
        "total": summary.total,
        "accuracy": format!("{:.2}", summary.accuracy),
        "results": steps,
    })
}

pub fn write_summary(path: &str, js: &JSValue) -> QuizResult<()> {
    let pretty_js = serde_json::to_string_pretty(js).context(SerializingSummarySnafu { path })?;
    fs::write(path, pretty_js).context(WritingSummarySnafu { path })?;
    info!("Wrote summary to {}", path);
    Ok(())
}
