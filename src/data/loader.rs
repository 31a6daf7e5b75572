use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};
use thiserror::Error;

use super::model::{Cell, DataTable};

// ---------------------------------------------------------------------------
// Failure taxonomy
// ---------------------------------------------------------------------------

/// Why a located stat sheet could not be read. Each variant is non-fatal to
/// multi-sheet operations: callers record the sheet and continue.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("unsupported file extension: .{0}")]
    Unsupported(String),
    #[error("workbook has no sheets")]
    EmptyWorkbook,
    #[error("reading workbook: {0}")]
    Workbook(#[from] calamine::Error),
    #[error("reading csv: {0}")]
    Csv(#[from] csv::Error),
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load one stat sheet. Dispatch by extension.
///
/// Supported formats:
/// * `.xlsx` – first worksheet, first row as headers
/// * `.csv`  – header row plus data rows
pub fn load_table(path: &Path) -> Result<DataTable, TableError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "xlsx" | "xls" => load_workbook(path),
        "csv" => load_csv(path),
        other => Err(TableError::Unsupported(other.to_string())),
    }
}

// ---------------------------------------------------------------------------
// Workbook loader
// ---------------------------------------------------------------------------

fn load_workbook(path: &Path) -> Result<DataTable, TableError> {
    let mut workbook = open_workbook_auto(path)?;

    // Stat sheets carry a single worksheet; read the first one.
    let sheet_names = workbook.sheet_names().to_vec();
    let sheet = sheet_names.first().ok_or(TableError::EmptyWorkbook)?;
    let range = workbook.worksheet_range(sheet)?;

    let mut rows = range.rows();
    let headers: Vec<String> = match rows.next() {
        Some(header_row) => header_row.iter().map(header_text).collect(),
        None => return Ok(DataTable::new(Vec::new(), Vec::new())),
    };

    let data: Vec<Vec<Cell>> = rows
        .map(|row| row.iter().map(data_cell).collect())
        .collect();

    Ok(DataTable::new(headers, data))
}

fn header_text(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.trim().to_string(),
        Data::Empty => String::new(),
        other => format!("{other}"),
    }
}

fn data_cell(cell: &Data) -> Cell {
    match cell {
        Data::String(s) => {
            if s.trim().is_empty() {
                Cell::Empty
            } else {
                Cell::Text(s.clone())
            }
        }
        Data::Float(f) => Cell::Number(*f),
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Bool(b) => Cell::Text(b.to_string()),
        Data::DateTime(dt) => Cell::Text(dt.to_string()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::Text(s.clone()),
        Data::Empty | Data::Error(_) => Cell::Empty,
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(path: &Path) -> Result<DataTable, TableError> {
    let mut reader = csv::Reader::from_path(path)?;
    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(csv_cell).collect());
    }

    Ok(DataTable::new(headers, rows))
}

/// Plain numeric fields become numbers; formatted values (`"1,234"`, `"85%"`)
/// stay textual and are handled by value normalization at read time.
fn csv_cell(field: &str) -> Cell {
    let trimmed = field.trim();
    if trimmed.is_empty() {
        return Cell::Empty;
    }
    match trimmed.parse::<f64>() {
        Ok(n) if n.is_finite() => Cell::Number(n),
        _ => Cell::Text(field.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::value::parse_numeric_str;
    use std::io::Write;

    fn write_csv(dir: &tempfile::TempDir, name: &str, body: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(body.as_bytes()).unwrap();
        path
    }

    #[test]
    fn csv_sheet_round_trips_headers_and_cells() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(
            &dir,
            "sheet.csv",
            "선수명,타율,볼넷\n구자욱,0.305,45\n김현수,0.288,\n",
        );
        let table = load_table(&path).unwrap();
        assert_eq!(table.headers, vec!["선수명", "타율", "볼넷"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows[0][1], Cell::Number(0.305));
        assert_eq!(table.rows[1][2], Cell::Empty);
    }

    #[test]
    fn formatted_fields_stay_textual() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(&dir, "sheet.csv", "선수명,출루율\n구자욱,38.5%\n");
        let table = load_table(&path).unwrap();
        assert_eq!(table.rows[0][1], Cell::Text("38.5%".into()));
        assert_eq!(parse_numeric_str("38.5%"), Some(0.385));
    }

    #[test]
    fn unknown_extension_is_its_own_failure() {
        let err = load_table(Path::new("stats.pdf")).unwrap_err();
        assert!(matches!(err, TableError::Unsupported(ext) if ext == "pdf"));
    }

    #[test]
    fn ragged_csv_is_a_parse_failure_not_a_panic() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(&dir, "broken.csv", "선수명,타율\n구자욱,0.305,extra\n");
        assert!(matches!(load_table(&path), Err(TableError::Csv(_))));
    }
}
