use crate::args::Args;
use crate::quiz::*;

use serde::{Deserialize, Serialize};
use serde_json::Value as JSValue;
use std::fs;

#[derive(Eq, PartialEq, Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuizConfig {
    #[serde(rename = "dataFiles")]
    pub data_files: Option<Vec<String>>,
    #[serde(rename = "excelWorksheetName")]
    pub excel_worksheet_name: Option<String>,
    #[serde(rename = "rowLimit")]
    pub row_limit: Option<usize>,
    #[serde(rename = "sampleSize")]
    pub sample_size: Option<usize>,
    #[serde(rename = "randomSeed")]
    _random_seed: Option<JSValue>,
    #[serde(rename = "excludedFields")]
    pub excluded_fields: Option<Vec<String>>,
    #[serde(rename = "summaryFields")]
    pub summary_fields: Option<Vec<String>>,
    #[serde(rename = "outputFile")]
    pub output_file: Option<String>,
    #[serde(rename = "summaryFile")]
    pub summary_file: Option<String>,
    #[serde(rename = "logoPath")]
    pub logo_path: Option<String>,
}

impl QuizConfig {
    /// The seed may be written as a number or as a string.
    pub fn random_seed(&self) -> QuizResult<Option<u64>> {
        match &self._random_seed {
            None | Some(JSValue::Null) => Ok(None),
            Some(JSValue::Number(n)) => match n.as_u64() {
                Some(x) => Ok(Some(x)),
                None => whatever!("randomSeed must be a non-negative integer, got {}", n),
            },
            Some(JSValue::String(s)) => match s.trim().parse::<u64>() {
                Ok(x) => Ok(Some(x)),
                Err(_) => whatever!("randomSeed must be a non-negative integer, got {:?}", s),
            },
            Some(x) => whatever!("randomSeed must be a non-negative integer, got {}", x),
        }
    }
}

pub fn read_config(path: &str) -> QuizResult<QuizConfig> {
    let contents = fs::read_to_string(path).context(OpeningJsonSnafu { path })?;
    debug!("read_config: content: {:?}", contents);
    let config: QuizConfig = serde_json::from_str(contents.as_str()).context(ParsingJsonSnafu {})?;
    Ok(config)
}

/// Merges the command line, the configuration file and the defaults, in this order of
/// precedence.
pub fn build_settings(args: &Args, config: &QuizConfig) -> QuizResult<QuizSettings> {
    let defaults = QuizSettings::default();

    let data_files = match (&args.input, &config.data_files) {
        (Some(p), _) => vec![p.clone()],
        (None, Some(files)) if !files.is_empty() => files.clone(),
        (None, _) => defaults.data_files,
    };

    let sample_size = args
        .sample_size
        .or(config.sample_size)
        .unwrap_or(defaults.rules.sample_size);
    if sample_size == 0 {
        whatever!("The sample size must be at least 1");
    }

    let random_seed = match args.seed {
        Some(s) => Some(s),
        None => config.random_seed()?,
    };

    let rules = QuizRules {
        sample_size,
        random_seed,
        excluded_fields: config
            .excluded_fields
            .clone()
            .unwrap_or(defaults.rules.excluded_fields),
        summary_fields: config
            .summary_fields
            .clone()
            .unwrap_or(defaults.rules.summary_fields),
    };

    Ok(QuizSettings {
        data_files,
        excel_worksheet_name: args
            .excel_worksheet_name
            .clone()
            .or_else(|| config.excel_worksheet_name.clone()),
        row_limit: config.row_limit.unwrap_or(defaults.row_limit),
        output_file: args
            .out
            .clone()
            .or_else(|| config.output_file.clone())
            .unwrap_or(defaults.output_file),
        summary_file: args.summary.clone().or_else(|| config.summary_file.clone()),
        logo_path: config.logo_path.clone().unwrap_or(defaults.logo_path),
        rules,
    })
}
