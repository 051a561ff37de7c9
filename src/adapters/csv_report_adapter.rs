//! CSV report adapter implementing ReportPort.
//!
//! A single table is written to the configured path. Several tables (the
//! split layout) go to sibling files named `<stem>_<title>.csv`.

use crate::domain::error::PivotError;
use crate::domain::layout::Table;
use crate::ports::report_port::ReportPort;
use std::io::Write;
use std::path::{Path, PathBuf};

pub struct CsvReportAdapter {
    path: PathBuf,
    precision: Option<usize>,
}

impl CsvReportAdapter {
    pub fn new(path: PathBuf, precision: Option<usize>) -> Self {
        Self { path, precision }
    }

    /// Destination for `table` when `count` tables are written.
    pub fn table_path(&self, table: &Table, count: usize) -> PathBuf {
        if count <= 1 {
            return self.path.clone();
        }
        let stem = self
            .path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "pivots".to_string());
        let file_name = format!("{}_{}.csv", stem, table.title.to_lowercase());
        match self.path.parent() {
            Some(parent) => parent.join(file_name),
            None => PathBuf::from(file_name),
        }
    }
}

/// Serialize one table as CSV.
pub fn write_table<W: Write>(
    writer: W,
    table: &Table,
    precision: Option<usize>,
) -> Result<(), PivotError> {
    let mut wtr = csv::Writer::from_writer(writer);
    let output_err = |e: csv::Error| PivotError::Output {
        reason: format!("CSV write error: {}", e),
    };

    wtr.write_record(&table.columns).map_err(output_err)?;
    for row in &table.rows {
        wtr.write_record(row.iter().map(|cell| cell.render(precision)))
            .map_err(output_err)?;
    }
    wtr.flush()?;
    Ok(())
}

fn write_file(path: &Path, table: &Table, precision: Option<usize>) -> Result<(), PivotError> {
    let file = std::fs::File::create(path).map_err(|e| PivotError::Output {
        reason: format!("failed to create {}: {}", path.display(), e),
    })?;
    write_table(file, table, precision)
}

impl ReportPort for CsvReportAdapter {
    fn write_tables(&self, tables: &[Table]) -> Result<(), PivotError> {
        for table in tables {
            let path = self.table_path(table, tables.len());
            write_file(&path, table, self.precision)?;
            eprintln!("Wrote {} rows to {}", table.rows.len(), path.display());
        }
        Ok(())
    }
}
