use calamine::DataType;
use chrono::{Days, NaiveDate};
use std::path::Path;

use crate::quiz::*;

pub fn simplify_file_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or(path)
        .to_string()
}

/// Returns the first of the candidate files that exists.
pub fn find_data_file(candidates: &[String]) -> QuizResult<String> {
    for p in candidates {
        if Path::new(p).exists() {
            info!("Using data file {:?}", p);
            return Ok(p.clone());
        }
        debug!("find_data_file: {:?} does not exist", p);
    }
    MissingFileSnafu {
        candidates: candidates.join(", "),
    }
    .fail()
}

/// Converts an Excel serial date to `YYYY/MM/DD`. The time of day is dropped.
pub fn excel_date_to_string(serial: f64) -> Option<String> {
    if !serial.is_finite() || serial < 0.0 {
        return None;
    }
    // Serial 60 is the 1900-02-29 that does not exist. Past it, counting from
    // 1899-12-30 absorbs the extra day.
    let days = serial.floor() as u64;
    let epoch = if days < 61 {
        NaiveDate::from_ymd_opt(1899, 12, 31)?
    } else {
        NaiveDate::from_ymd_opt(1899, 12, 30)?
    };
    let date = epoch.checked_add_days(Days::new(days))?;
    Some(date.format("%Y/%m/%d").to_string())
}

/// The text displayed for a cell.
pub fn cell_to_string(cell: &DataType) -> String {
    match cell {
        DataType::String(s) => s.clone(),
        DataType::Empty => "".to_string(),
        DataType::Int(i) => i.to_string(),
        DataType::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", *f as i64),
        DataType::Float(f) => f.to_string(),
        DataType::Bool(b) => (if *b { "True" } else { "False" }).to_string(),
        DataType::DateTime(f) => excel_date_to_string(*f).unwrap_or_default(),
        DataType::Error(e) => {
            debug!("cell_to_string: error cell {:?}", e);
            "".to_string()
        }
        #[allow(unreachable_patterns)]
        _ => "".to_string(),
    }
}
