// Primitives for reading the candidate workbook.

use calamine::{open_workbook, DataType, Range, Reader, Xlsx};

use crate::quiz::{
    io_common::{cell_to_string, simplify_file_name},
    *,
};

/// The content of a worksheet: the header row and the data rows, untouched.
#[derive(PartialEq, Debug, Clone)]
pub struct RawTable {
    pub header: Vec<String>,
    pub rows: Vec<Vec<DataType>>,
}

pub fn read_candidates(path: &str, settings: &QuizSettings) -> QuizResult<Vec<CandidateRecord>> {
    let table = read_table(
        path,
        settings.excel_worksheet_name.as_deref(),
        settings.row_limit,
    )?;
    let records = build_records(&table)?;
    info!(
        "read_candidates: {}: {} candidates",
        simplify_file_name(path),
        records.len()
    );
    Ok(records)
}

/// Reads the header and at most `row_limit` data rows of the worksheet.
pub fn read_table(
    path: &str,
    worksheet_name: Option<&str>,
    row_limit: usize,
) -> QuizResult<RawTable> {
    let wrange = get_range(path, worksheet_name)?;
    let mut iter = wrange.rows();
    let header: Vec<String> = match iter.next() {
        Some(row) => row
            .iter()
            .enumerate()
            .map(|(idx, cell)| {
                let name = cell_to_string(cell).trim().to_string();
                if name.is_empty() {
                    format!("Unnamed: {}", idx)
                } else {
                    name
                }
            })
            .collect(),
        None => vec![],
    };
    debug!("read_table: header: {:?}", header);
    let rows: Vec<Vec<DataType>> = iter.take(row_limit).map(|row| row.to_vec()).collect();
    debug!("read_table: {} rows (limit {})", rows.len(), row_limit);
    Ok(RawTable { header, rows })
}

/// Validates the outcome columns and converts every row to a record.
pub fn build_records(table: &RawTable) -> QuizResult<Vec<CandidateRecord>> {
    let stage_cols: Vec<Option<usize>> = Stage::ALL
        .iter()
        .map(|stage| {
            stage
                .column_aliases()
                .iter()
                .find_map(|alias| table.header.iter().position(|h| h == alias))
        })
        .collect();

    let missing: Vec<&str> = Stage::ALL
        .iter()
        .zip(stage_cols.iter())
        .filter(|(_, col)| col.is_none())
        .map(|(stage, _)| stage.column())
        .collect();
    if !missing.is_empty() {
        return MissingColumnsSnafu {
            columns: missing.join(", "),
        }
        .fail();
    }
    let outcome_cols: Vec<usize> = stage_cols.into_iter().flatten().collect();
    // Every alias of an outcome column is hidden, not only the one that was read.
    let hidden_cols: Vec<usize> = table
        .header
        .iter()
        .enumerate()
        .filter(|(_, h)| {
            Stage::ALL
                .iter()
                .flat_map(|stage| stage.column_aliases().iter())
                .any(|alias| *alias == h.as_str())
        })
        .map(|(col, _)| col)
        .collect();
    debug!(
        "build_records: outcome columns: {:?} hidden: {:?}",
        outcome_cols, hidden_cols
    );

    let mut res: Vec<CandidateRecord> = Vec::new();
    for (idx, row) in table.rows.iter().enumerate() {
        let flag = |pos: usize| row.get(outcome_cols[pos]).map(read_flag).unwrap_or(false);
        let fields: Vec<(String, String)> = table
            .header
            .iter()
            .enumerate()
            .filter(|(col, _)| !hidden_cols.contains(col))
            .map(|(col, name)| {
                let value = row.get(col).map(cell_to_string).unwrap_or_default();
                (name.clone(), value)
            })
            .collect();
        let record = CandidateRecord {
            fields,
            matching: flag(0),
            document_passed: flag(1),
            offer_accepted: flag(2),
        };
        debug!("build_records: row {}: {:?}", idx + 2, record);
        res.push(record);
    }
    Ok(res)
}

/// Booleans, numbers and the text `True` count as 1. Everything else is 0.
fn read_flag(cell: &DataType) -> bool {
    match cell {
        DataType::Bool(b) => *b,
        DataType::Int(i) => *i != 0,
        DataType::Float(f) => *f != 0.0,
        DataType::String(s) => matches!(s.trim(), "True" | "true" | "TRUE" | "1"),
        _ => false,
    }
}

fn get_range(path: &str, worksheet_name_o: Option<&str>) -> QuizResult<Range<DataType>> {
    debug!(
        "get_range: path: {:?} worksheet: {:?}",
        path, worksheet_name_o
    );
    let mut workbook: Xlsx<_> = open_workbook(path).context(LoadSnafu { path })?;

    // A worksheet name was provided, use it.
    if let Some(name) = worksheet_name_o {
        workbook
            .worksheet_range(name)
            .context(MissingWorksheetSnafu { name, path })?
            .context(LoadSnafu { path })
    } else {
        workbook
            .worksheet_range_at(0)
            .context(EmptyExcelSnafu { path })?
            .context(LoadSnafu { path })
    }
}
