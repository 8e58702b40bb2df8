//! CSV ingest.
//!
//! Turns the two-column observation CSV into an `Observations` set that is
//! safe to fit.
//!
//! Design goals:
//! - **Strict schema**: the header must contain `x` and `y` columns
//!   (case-insensitive); extra columns are ignored
//! - **Fail fast**: a malformed or non-finite value aborts the run with the
//!   offending line number — a partially loaded point cloud would silently
//!   shift the t-grid correspondence of every later row
//! - **No fitting logic here**
//!
//! Row order matters: row i is assumed to correspond to the i-th t sample
//! (see `fit::t_grid`). The loader never reorders rows.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;

use crate::domain::Observations;
use crate::error::AppError;

/// Load the observation set from a CSV file.
pub fn load_observations(path: &Path) -> Result<Observations, AppError> {
    let file = File::open(path).map_err(|e| {
        AppError::input(format!(
            "Failed to open observation CSV '{}': {e}",
            path.display()
        ))
    })?;
    read_observations(file)
}

/// Parse observations from any reader (used directly by tests).
pub fn read_observations<R: Read>(reader: R) -> Result<Observations, AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader
        .headers()
        .map_err(|e| AppError::input(format!("Failed to read CSV headers: {e}")))?
        .clone();

    let x_idx = find_column(&headers, "x")
        .ok_or_else(|| AppError::input("Missing required column: `x`"))?;
    let y_idx = find_column(&headers, "y")
        .ok_or_else(|| AppError::input("Missing required column: `y`"))?;

    let mut xs = Vec::new();
    let mut ys = Vec::new();

    for (idx, result) in reader.records().enumerate() {
        // +2 because records() starts after the header row and CSV line
        // numbers are 1-based.
        let line = idx + 2;
        let record =
            result.map_err(|e| AppError::input(format!("CSV parse error at line {line}: {e}")))?;
        xs.push(parse_value(&record, x_idx, "x", line)?);
        ys.push(parse_value(&record, y_idx, "y", line)?);
    }

    if xs.len() < 2 {
        return Err(AppError::data(format!(
            "Observation file has {} data row(s); need at least 2 to fit.",
            xs.len()
        )));
    }

    Ok(Observations { xs, ys })
}

fn find_column(headers: &StringRecord, name: &str) -> Option<usize> {
    headers
        .iter()
        .position(|h| normalize_header_name(h) == name)
}

fn normalize_header_name(name: &str) -> String {
    // Excel and other tools sometimes emit UTF-8 CSVs with a BOM prefix on the
    // first header (e.g. "﻿x"). If we don't strip it, schema validation will
    // incorrectly report a missing column.
    let name = name.trim().trim_start_matches('\u{feff}');
    name.to_ascii_lowercase()
}

fn parse_value(
    record: &StringRecord,
    idx: usize,
    name: &str,
    line: usize,
) -> Result<f64, AppError> {
    let raw = record
        .get(idx)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::input(format!("Missing `{name}` value at line {line}.")))?;

    let v = raw
        .parse::<f64>()
        .map_err(|_| AppError::input(format!("Invalid `{name}` value '{raw}' at line {line}.")))?;

    if !v.is_finite() {
        return Err(AppError::input(format!(
            "Non-finite `{name}` value at line {line}."
        )));
    }
    Ok(v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn reads_two_columns_ignoring_extras_and_case() {
        let csv = "id,X,Y\na,1.5,42.0\nb,2.5,43.5\nc,3.5,41.0\n";
        let obs = read_observations(csv.as_bytes()).unwrap();
        assert_eq!(obs.len(), 3);
        assert_eq!(obs.xs, vec![1.5, 2.5, 3.5]);
        assert_eq!(obs.ys, vec![42.0, 43.5, 41.0]);
    }

    #[test]
    fn strips_utf8_bom_from_the_first_header() {
        let csv = "\u{feff}x,y\n1.0,2.0\n3.0,4.0\n";
        let obs = read_observations(csv.as_bytes()).unwrap();
        assert_eq!(obs.len(), 2);
    }

    #[test]
    fn missing_column_is_an_input_error() {
        let err = read_observations("x,z\n1.0,2.0\n".as_bytes()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Input);
        assert!(err.to_string().contains("`y`"));
    }

    #[test]
    fn malformed_value_reports_the_line_number() {
        let csv = "x,y\n1.0,2.0\nnope,3.0\n";
        let err = read_observations(csv.as_bytes()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Input);
        assert!(err.to_string().contains("line 3"));
    }

    #[test]
    fn non_finite_value_is_rejected() {
        let csv = "x,y\n1.0,2.0\n2.0,inf\n";
        let err = read_observations(csv.as_bytes()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Input);
    }

    #[test]
    fn header_only_file_is_a_data_error() {
        let err = read_observations("x,y\n".as_bytes()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Data);
    }

    #[test]
    fn single_row_is_a_data_error() {
        let err = read_observations("x,y\n1.0,2.0\n".as_bytes()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Data);
    }
}
