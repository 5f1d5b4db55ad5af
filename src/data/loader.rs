use std::path::Path;

use crate::error::FormatError;

/// Raw transcription of a source sheet: the header row plus every row
/// below it, all cells as strings. No semantic interpretation of values
/// happens at this stage.
#[derive(Debug, Clone)]
pub struct RawTable {
    pub headers: Vec<String>,
    /// Row-major data rows, each padded or truncated to the header width.
    pub rows: Vec<Vec<String>>,
}

/// Where to find the header row in the source.
#[derive(Debug, Clone, Copy)]
pub struct LoadConfig {
    /// 0-based index of the header row. The sample workbooks carry a title
    /// row above the headers, so the default is row 1.
    pub header_row: usize,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self { header_row: 1 }
    }
}

/// Load a CSV or spreadsheet file and return its raw table.
pub fn load_file(path: &Path, config: &LoadConfig) -> Result<RawTable, FormatError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "csv" => load_csv(path, config),
        "xls" | "xlsx" | "ods" => load_workbook(path, config),
        _ => Err(FormatError::UnsupportedFormat(ext)),
    }
}

fn load_csv(path: &Path, config: &LoadConfig) -> Result<RawTable, FormatError> {
    // Try UTF-8 first, then latin1 (each byte maps to the same code point)
    let content = std::fs::read(path).map_err(|e| FormatError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    let text = String::from_utf8(content.clone())
        .unwrap_or_else(|_| content.iter().map(|&b| b as char).collect());

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b',')
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut all_rows: Vec<Vec<String>> = Vec::new();
    for result in reader.records() {
        match result {
            Ok(record) => {
                all_rows.push(record.iter().map(|s| s.to_string()).collect());
            }
            Err(_) => continue,
        }
    }

    split_at_header(all_rows, config.header_row)
}

fn load_workbook(path: &Path, config: &LoadConfig) -> Result<RawTable, FormatError> {
    use calamine::{open_workbook_auto, Data, Reader};

    let mut workbook =
        open_workbook_auto(path).map_err(|e| FormatError::Workbook(e.to_string()))?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .ok_or_else(|| FormatError::Workbook("no sheets found".to_string()))?
        .clone();

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| FormatError::Workbook(e.to_string()))?;

    let all_rows: Vec<Vec<String>> = range
        .rows()
        .map(|row| {
            row.iter()
                .map(|cell| match cell {
                    Data::Empty => String::new(),
                    Data::String(s) => s.clone(),
                    Data::Float(f) => f.to_string(),
                    Data::Int(i) => i.to_string(),
                    Data::Bool(b) => b.to_string(),
                    Data::DateTime(dt) => dt.to_string(),
                    Data::DateTimeIso(s) => s.clone(),
                    Data::DurationIso(s) => s.clone(),
                    Data::Error(e) => format!("{e:?}"),
                })
                .collect()
        })
        .collect();

    split_at_header(all_rows, config.header_row)
}

/// Slice the raw rows at the configured header offset. Everything above
/// the header row is discarded; everything below becomes data, shaped to
/// the header width.
fn split_at_header(all_rows: Vec<Vec<String>>, header_row: usize) -> Result<RawTable, FormatError> {
    if header_row >= all_rows.len() {
        return Err(FormatError::MissingHeaderRow {
            header_row,
            row_count: all_rows.len(),
        });
    }

    let headers: Vec<String> = all_rows[header_row]
        .iter()
        .map(|s| s.trim().to_string())
        .collect();
    let num_cols = headers.len();

    let rows: Vec<Vec<String>> = all_rows[header_row + 1..]
        .iter()
        .map(|row| {
            let mut shaped = row.clone();
            shaped.resize(num_cols, String::new());
            shaped
        })
        .collect();

    tracing::debug!(
        headers = headers.len(),
        rows = rows.len(),
        "loaded raw table"
    );

    Ok(RawTable { headers, rows })
}
