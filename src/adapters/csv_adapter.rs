//! CSV file data adapter.
//!
//! Reads a header row, resolves the column naming, and maps each data row
//! onto a [`RawRecord`]. Unknown columns are ignored; short rows leave the
//! trailing fields `Missing`.

use crate::domain::error::PivotError;
use crate::domain::record::{Field, FieldNaming, FieldValue, NamingChoice, RawRecord};
use crate::ports::data_port::{DataPort, InputBatch};
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

pub struct CsvAdapter {
    path: PathBuf,
}

impl CsvAdapter {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

/// Column index for each recognised field, in [`Field::ALL`] order.
fn column_map(headers: &[String], naming: FieldNaming) -> Vec<(Field, usize)> {
    Field::ALL
        .into_iter()
        .filter_map(|field| {
            headers
                .iter()
                .position(|h| naming.field_for(h) == Some(field))
                .map(|idx| (field, idx))
        })
        .collect()
}

/// Parse CSV content from any reader.
pub fn read_records<R: Read>(reader: R, choice: NamingChoice) -> Result<InputBatch, PivotError> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers: Vec<String> = rdr
        .headers()
        .map_err(|e| PivotError::Input {
            reason: format!("failed to read CSV header: {}", e),
        })?
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').to_string())
        .collect();

    let header_names = headers.iter().map(String::as_str);
    let naming = match choice.resolve(header_names.clone()) {
        Some(naming) => naming,
        None => {
            return Err(PivotError::Input {
                reason: format!(
                    "could not detect column naming from header: {}",
                    headers.join(", ")
                ),
            });
        }
    };

    let missing = naming.missing_required(header_names);
    if !missing.is_empty() {
        return Err(PivotError::MissingColumns {
            naming: naming.to_string(),
            columns: missing.into_iter().map(String::from).collect(),
        });
    }

    let columns = column_map(&headers, naming);
    let mut records = Vec::new();

    for (line, result) in rdr.records().enumerate() {
        let row = result.map_err(|e| PivotError::Input {
            reason: format!("CSV parse error on data row {}: {}", line + 1, e),
        })?;

        let mut record = RawRecord::default();
        for &(field, idx) in &columns {
            record.set(field, FieldValue::from(row.get(idx)));
        }
        records.push(record);
    }

    Ok(InputBatch { naming, records })
}

impl DataPort for CsvAdapter {
    fn fetch_records(&self, naming: NamingChoice) -> Result<InputBatch, PivotError> {
        let file = File::open(&self.path).map_err(|e| PivotError::Input {
            reason: format!("failed to read {}: {}", self.path.display(), e),
        })?;
        read_records(file, naming)
    }
}
