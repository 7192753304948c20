//! Loading of benchmark result tables.

use std::fs::File;
use std::io::{self, BufRead};
use std::path::Path;

use thiserror::Error;

/// Column holding the thread count in every result table.
pub const THREADS_COLUMN: &str = "threads";

/// Errors from parsing a result table.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("cannot read results file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("missing required column '{column}' in '{path}'")]
    MissingColumn { column: String, path: String },

    #[error("non-numeric value '{value}' in column '{column}' on line {line} of '{path}'")]
    NonNumeric {
        value: String,
        column: String,
        line: usize,
        path: String,
    },

    #[error("results file '{path}' has no data rows")]
    Empty { path: String },
}

/// One benchmark run: thread counts paired with the measured value.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub threads: Vec<f64>,
    pub values: Vec<f64>,
}

impl Series {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Last observed (threads, value) sample, if any.
    pub fn last(&self) -> Option<(f64, f64)> {
        match (self.threads.last(), self.values.last()) {
            (Some(&t), Some(&v)) => Some((t, v)),
            _ => None,
        }
    }

    /// Samples as (threads, value) pairs, in series order.
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.threads
            .iter()
            .copied()
            .zip(self.values.iter().copied())
            .collect()
    }
}

/// Reads a comma-delimited result table into a `Series`.
///
/// The first non-empty line is the header and must name both `threads` and
/// `value_column`. Field and header whitespace is trimmed, blank lines are
/// skipped, every remaining cell must parse as a number.
pub fn read_series<P: AsRef<Path>>(path: P, value_column: &str) -> Result<Series, InputError> {
    let display = path.as_ref().display().to_string();
    let file = File::open(path.as_ref()).map_err(|e| InputError::Io {
        path: display.clone(),
        source: e,
    })?;
    let reader = io::BufReader::new(file);

    let mut threads = Vec::new();
    let mut values = Vec::new();
    let mut columns: Option<(usize, usize)> = None;

    for (line_idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| InputError::Io {
            path: display.clone(),
            source: e,
        })?;
        if line.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();

        let Some((threads_idx, value_idx)) = columns else {
            columns = Some((
                find_column(&fields, THREADS_COLUMN, &display)?,
                find_column(&fields, value_column, &display)?,
            ));
            continue;
        };

        threads.push(parse_field(
            &fields,
            threads_idx,
            THREADS_COLUMN,
            line_idx + 1,
            &display,
        )?);
        values.push(parse_field(
            &fields,
            value_idx,
            value_column,
            line_idx + 1,
            &display,
        )?);
    }

    if values.is_empty() {
        return Err(InputError::Empty { path: display });
    }

    Ok(Series { threads, values })
}

fn find_column(fields: &[&str], name: &str, path: &str) -> Result<usize, InputError> {
    fields
        .iter()
        .position(|f| *f == name)
        .ok_or_else(|| InputError::MissingColumn {
            column: name.to_string(),
            path: path.to_string(),
        })
}

fn parse_field(
    fields: &[&str],
    idx: usize,
    column: &str,
    line: usize,
    path: &str,
) -> Result<f64, InputError> {
    let raw = fields.get(idx).copied().unwrap_or("");
    raw.parse::<f64>().map_err(|_| InputError::NonNumeric {
        value: raw.to_string(),
        column: column.to_string(),
        line,
        path: path.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_series() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "threads,bandwidth").unwrap();
        writeln!(file, "1,12.5").unwrap();
        writeln!(file, "2,23.0").unwrap();
        writeln!(file, "4,40.25").unwrap();

        let series = read_series(file.path(), "bandwidth").unwrap();
        assert_eq!(series.len(), 3);
        assert_eq!(series.threads, vec![1.0, 2.0, 4.0]);
        assert!((series.values[2] - 40.25).abs() < 1e-10);
        assert_eq!(series.last(), Some((4.0, 40.25)));
    }

    #[test]
    fn test_extra_columns_and_blank_lines() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "run, threads, num_ops, elapsed").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "0, 1, 1000, 3.0").unwrap();
        writeln!(file, "0, 2, 1900, 3.0").unwrap();

        let series = read_series(file.path(), "num_ops").unwrap();
        assert_eq!(series.threads, vec![1.0, 2.0]);
        assert_eq!(series.values, vec![1000.0, 1900.0]);
    }

    #[test]
    fn test_missing_column() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "threads,bandwidth").unwrap();
        writeln!(file, "1,12.5").unwrap();

        let err = read_series(file.path(), "num_ops").unwrap_err();
        assert!(matches!(err, InputError::MissingColumn { column, .. } if column == "num_ops"));
    }

    #[test]
    fn test_non_numeric_value() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "threads,diff").unwrap();
        writeln!(file, "1,0.5").unwrap();
        writeln!(file, "2,n/a").unwrap();

        let err = read_series(file.path(), "diff").unwrap_err();
        match err {
            InputError::NonNumeric { value, line, .. } => {
                assert_eq!(value, "n/a");
                assert_eq!(line, 3);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_short_row_is_non_numeric() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "threads,diff").unwrap();
        writeln!(file, "1").unwrap();

        assert!(matches!(
            read_series(file.path(), "diff"),
            Err(InputError::NonNumeric { .. })
        ));
    }

    #[test]
    fn test_header_only_file_is_empty() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "threads,bandwidth").unwrap();

        assert!(matches!(
            read_series(file.path(), "bandwidth"),
            Err(InputError::Empty { .. })
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            read_series("no/such/results.csv", "bandwidth"),
            Err(InputError::Io { .. })
        ));
    }
}
