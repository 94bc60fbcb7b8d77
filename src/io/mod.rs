//! Text serialization of sparse matrices.
//!
//! A matrix file declares the largest row and column index, then lists one
//! non-zero entry per line:
//!
//! ```text
//! rows=2
//! cols=3
//! (0, 1, 5)
//! (2, 3, -4)
//! ```
//!
//! Blank lines are ignored. The dimension lines must each appear once and
//! before any entry.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use log::{debug, info};

use crate::{Element, SparseMatrix};

pub mod error;

pub use error::{LoadError, Result};

#[cfg(test)]
mod tests;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Axis {
    Rows,
    Cols,
}

impl Axis {
    fn key(self) -> &'static str {
        match self {
            Axis::Rows => "rows",
            Axis::Cols => "cols",
        }
    }
}

/// Parses the value of a `rows=` or `cols=` line into a dimension. The file
/// stores the largest index, so the dimension is one more.
fn parse_dimension(axis: Axis, value: &str, line: usize) -> Result<usize> {
    let declared: i64 = value.trim().parse().map_err(|_| {
        LoadError::format(
            Some(line),
            format!("'{}' value is not an integer", axis.key()),
        )
    })?;
    if declared < -1 {
        return Err(LoadError::format(
            Some(line),
            format!("'{}' value cannot be less than -1", axis.key()),
        ));
    }
    declared
        .checked_add(1)
        .and_then(|dim| usize::try_from(dim).ok())
        .ok_or_else(|| {
            LoadError::format(Some(line), format!("'{}' value is too large", axis.key()))
        })
}

/// Parses the inside of a `(row, col, value)` line.
fn parse_entry<F: Element>(body: &str, line: usize) -> Result<(i64, i64, F)> {
    let parts: Vec<&str> = body.split(',').map(str::trim).collect();
    let invalid = || LoadError::format(Some(line), format!("invalid data entry on line {}", line));
    if parts.len() != 3 {
        return Err(invalid());
    }
    let row: i64 = parts[0].parse().map_err(|_| invalid())?;
    let col: i64 = parts[1].parse().map_err(|_| invalid())?;
    let value: F = parts[2].parse().map_err(|_| invalid())?;
    Ok((row, col, value))
}

/// Reads a matrix from any buffered reader.
pub fn read_matrix<F: Element, R: BufRead>(reader: R) -> Result<SparseMatrix<F>> {
    let mut rows: Option<usize> = None;
    let mut cols: Option<usize> = None;
    let mut triplets: Vec<(usize, usize, F)> = Vec::new();

    for (idx, raw_line) in reader.lines().enumerate() {
        let raw_line = raw_line?;
        let line_num = idx + 1;
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(value) = line.strip_prefix("rows=") {
            if rows.is_some() {
                return Err(LoadError::format(
                    Some(line_num),
                    "'rows' specified multiple times",
                ));
            }
            rows = Some(parse_dimension(Axis::Rows, value, line_num)?);
        } else if let Some(value) = line.strip_prefix("cols=") {
            if cols.is_some() {
                return Err(LoadError::format(
                    Some(line_num),
                    "'cols' specified multiple times",
                ));
            }
            cols = Some(parse_dimension(Axis::Cols, value, line_num)?);
        } else if line.starts_with('(') && line.ends_with(')') {
            let (n_rows, n_cols) = match (rows, cols) {
                (Some(r), Some(c)) => (r, c),
                _ => {
                    return Err(LoadError::format(
                        Some(line_num),
                        "matrix dimensions must be defined before data entries",
                    ))
                }
            };
            let (row, col, value) = parse_entry::<F>(&line[1..line.len() - 1], line_num)?;
            let index = usize::try_from(row)
                .ok()
                .zip(usize::try_from(col).ok())
                .filter(|&(r, c)| r < n_rows && c < n_cols);
            let (row, col) = index.ok_or_else(|| {
                LoadError::format(
                    Some(line_num),
                    format!("data entry ({},{}) out of bounds", row, col),
                )
            })?;
            triplets.push((row, col, value));
        } else {
            return Err(LoadError::format(
                Some(line_num),
                format!("unrecognized line format on line {}", line_num),
            ));
        }
    }

    let matrix = match (rows, cols) {
        (Some(r), Some(c)) => SparseMatrix::from_triplets(r, c, triplets)?,
        _ => {
            return Err(LoadError::format(
                None,
                "missing 'rows' or 'cols' definition",
            ))
        }
    };
    debug!(
        "parsed {}x{} matrix with {} non-zeros",
        matrix.n_rows(),
        matrix.n_cols(),
        matrix.nnz()
    );
    Ok(matrix)
}

/// Loads a matrix from the file at `path`.
pub fn load<F: Element, P: AsRef<Path>>(path: P) -> Result<SparseMatrix<F>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let matrix = read_matrix(BufReader::new(file))?;
    info!(
        "loaded {}x{} matrix ({} non-zeros) from {}",
        matrix.n_rows(),
        matrix.n_cols(),
        matrix.nnz(),
        path.display()
    );
    Ok(matrix)
}

/// Writes `matrix` in the text format, entries sorted by row then column.
pub fn write_matrix<F: Element, W: Write>(mut writer: W, matrix: &SparseMatrix<F>) -> Result<()> {
    writeln!(writer, "rows={}", matrix.n_rows() - 1)?;
    writeln!(writer, "cols={}", matrix.n_cols() - 1)?;
    for (row, col, value) in matrix.sorted_entries() {
        writeln!(writer, "({}, {}, {})", row, col, value)?;
    }
    writer.flush()?;
    Ok(())
}

/// Saves `matrix` to the file at `path`, replacing any previous content.
pub fn save<F: Element, P: AsRef<Path>>(path: P, matrix: &SparseMatrix<F>) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    write_matrix(BufWriter::new(file), matrix)?;
    info!(
        "saved {}x{} matrix ({} non-zeros) to {}",
        matrix.n_rows(),
        matrix.n_cols(),
        matrix.nnz(),
        path.display()
    );
    Ok(())
}
