#![allow(dead_code)]

use pivotcalc::domain::error::PivotError;
use pivotcalc::domain::layout::Table;
pub use pivotcalc::domain::record::{Field, FieldNaming, NamingChoice, RawRecord};
use pivotcalc::ports::data_port::{DataPort, InputBatch};
use pivotcalc::ports::report_port::ReportPort;
use std::cell::RefCell;

pub struct MockDataPort {
    pub naming: FieldNaming,
    pub records: Vec<RawRecord>,
    pub error: Option<String>,
}

impl MockDataPort {
    pub fn new() -> Self {
        Self {
            naming: FieldNaming::Standard,
            records: Vec::new(),
            error: None,
        }
    }

    pub fn with_records(mut self, records: Vec<RawRecord>) -> Self {
        self.records = records;
        self
    }

    pub fn with_error(mut self, reason: &str) -> Self {
        self.error = Some(reason.to_string());
        self
    }
}

impl DataPort for MockDataPort {
    fn fetch_records(&self, naming: NamingChoice) -> Result<InputBatch, PivotError> {
        if let Some(reason) = &self.error {
            return Err(PivotError::Input {
                reason: reason.clone(),
            });
        }
        let naming = match naming {
            NamingChoice::Auto => self.naming,
            NamingChoice::Fixed(n) => n,
        };
        Ok(InputBatch {
            naming,
            records: self.records.clone(),
        })
    }
}

/// Captures every table handed to it.
#[derive(Default)]
pub struct MockReportPort {
    pub tables: RefCell<Vec<Table>>,
}

impl ReportPort for MockReportPort {
    fn write_tables(&self, tables: &[Table]) -> Result<(), PivotError> {
        self.tables.borrow_mut().extend(tables.iter().cloned());
        Ok(())
    }
}

/// Record with text values for symbol, open, high, low and close.
pub fn make_record(symbol: &str, open: &str, high: &str, low: &str, close: &str) -> RawRecord {
    RawRecord::default()
        .with(Field::Symbol, symbol)
        .with(Field::Open, open)
        .with(Field::High, high)
        .with(Field::Low, low)
        .with(Field::Close, close)
}

/// Record with numeric high, low and close only.
pub fn make_hlc(symbol: &str, high: f64, low: f64, close: f64) -> RawRecord {
    RawRecord::default()
        .with(Field::Symbol, symbol)
        .with(Field::High, high)
        .with(Field::Low, low)
        .with(Field::Close, close)
}

pub fn write_temp_file(content: &str) -> tempfile::NamedTempFile {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}
