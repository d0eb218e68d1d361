use log::{debug, info, warn};

use hiring_quiz::*;
use snafu::{prelude::*, Snafu};

use std::io;

use crate::args::Args;
use crate::quiz::config_reader::*;
use crate::quiz::terminal::SessionEnd;

pub mod config_reader;
pub mod io_common;
pub mod io_excel;
pub mod io_results;
pub mod terminal;

#[derive(Debug, Snafu)]
pub enum QuizError {
    #[snafu(display("File not found: one of {candidates} is required"))]
    MissingFile { candidates: String },
    #[snafu(display("Required columns are missing from the data: {columns}"))]
    MissingColumns { columns: String },
    #[snafu(display("Error while loading the data from {path}: {source}"))]
    Load {
        source: calamine::XlsxError,
        path: String,
    },
    #[snafu(display("No worksheet found in {path}"))]
    EmptyExcel { path: String },
    #[snafu(display("Worksheet {name} not found in {path}"))]
    MissingWorksheet { name: String, path: String },
    #[snafu(display("Error opening file {path}: {source}"))]
    OpeningJson { source: io::Error, path: String },
    #[snafu(display("Error parsing JSON: {source}"))]
    ParsingJson { source: serde_json::Error },
    #[snafu(display("Error writing the results to {path}: {source}"))]
    WritingResults {
        source: rust_xlsxwriter::XlsxError,
        path: String,
    },
    #[snafu(display("Error serializing the summary for {path}: {source}"))]
    SerializingSummary {
        source: serde_json::Error,
        path: String,
    },
    #[snafu(display("Error writing the summary to {path}: {source}"))]
    WritingSummary { source: io::Error, path: String },
    #[snafu(display("{source}"))]
    Session { source: QuizErrors },
    #[snafu(display("Terminal error: {source}"))]
    Terminal { source: io::Error },

    #[snafu(whatever, display("{message}"))]
    Whatever {
        message: String,
        #[snafu(source(from(Box<dyn std::error::Error>, Some)))]
        source: Option<Box<dyn std::error::Error>>,
    },
}

pub type QuizResult<T> = Result<T, QuizError>;

pub const DEFAULT_DATA_FILES: [&str; 2] = ["data.xlsx", "data.xlsx.xlsx"];
/// The sheet holds the history up to this row. Later rows are work in progress.
pub const DEFAULT_ROW_LIMIT: usize = 363;
pub const DEFAULT_OUTPUT_FILE: &str = "quiz_results.xlsx";
pub const DEFAULT_LOGO_PATH: &str = "logo.png";

/// The settings of a session, after merging the defaults, the configuration file and
/// the command line.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct QuizSettings {
    pub data_files: Vec<String>,
    pub excel_worksheet_name: Option<String>,
    pub row_limit: usize,
    pub output_file: String,
    pub summary_file: Option<String>,
    pub logo_path: String,
    pub rules: QuizRules,
}

impl Default for QuizSettings {
    fn default() -> Self {
        QuizSettings {
            data_files: DEFAULT_DATA_FILES.iter().map(|s| s.to_string()).collect(),
            excel_worksheet_name: None,
            row_limit: DEFAULT_ROW_LIMIT,
            output_file: DEFAULT_OUTPUT_FILE.to_string(),
            summary_file: None,
            logo_path: DEFAULT_LOGO_PATH.to_string(),
            rules: QuizRules::default(),
        }
    }
}

pub fn run_quiz(args: &Args) -> QuizResult<()> {
    let config = match args.config.clone() {
        Some(p) => read_config(&p)?,
        None => QuizConfig::default(),
    };
    let settings = build_settings(args, &config)?;
    info!("settings: {:?}", settings);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut output = stdout.lock();

    terminal::show_banner(&mut output, &settings).context(TerminalSnafu {})?;

    let path = io_common::find_data_file(&settings.data_files)?;
    let records = io_excel::read_candidates(&path, &settings)?;
    info!("Loaded {} candidates from {}", records.len(), path);

    let mut slot: Option<SessionState> = None;
    let state = initialize_session(&mut slot, &records, &settings.rules).context(SessionSnafu {})?;

    match terminal::run_terminal(state, &mut input, &mut output).context(TerminalSnafu {})? {
        SessionEnd::Quit => {
            warn!("Session stopped before the end of the quiz, nothing exported");
            Ok(())
        }
        SessionEnd::Finished => {
            let out_path = io_results::export_results(&state.answer_log, &settings.output_file)?;
            if let Some(summary_path) = settings.summary_file.clone() {
                let summary = results::summarize(&state.answer_log);
                let js = io_results::build_summary_js(&summary, &state.answer_log);
                io_results::write_summary(&summary_path, &js)?;
            }
            debug!("run_quiz: exported to {:?}", out_path);
            terminal::show_download(&mut output, &out_path).context(TerminalSnafu {})?;
            Ok(())
        }
    }
}
