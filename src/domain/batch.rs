//! Batch driver: runs every record through the row processor.

use crate::domain::record::RawRecord;
use crate::domain::row_processor::{process_row, ErrorResult, PivotSets, RowOutcome};

/// Per-row outcomes in input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultTable {
    pub rows: Vec<RowOutcome>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub rows: usize,
    pub computed: usize,
    pub failed: usize,
}

impl ResultTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_failures(&self) -> bool {
        self.rows.iter().any(|r| !r.is_computed())
    }

    /// Successful rows with their input index.
    pub fn computed(&self) -> impl Iterator<Item = (usize, &PivotSets)> {
        self.rows
            .iter()
            .enumerate()
            .filter_map(|(i, r)| r.as_computed().map(|s| (i, s)))
    }

    /// Failed rows with their input index.
    pub fn failed(&self) -> impl Iterator<Item = (usize, &ErrorResult)> {
        self.rows
            .iter()
            .enumerate()
            .filter_map(|(i, r)| r.as_failed().map(|e| (i, e)))
    }

    pub fn summary(&self) -> BatchSummary {
        let failed = self.failed().count();
        BatchSummary {
            rows: self.len(),
            computed: self.len() - failed,
            failed,
        }
    }
}

/// Process all records independently, preserving order. Never fails; row
/// errors are captured in the table.
pub fn run_batch(records: &[RawRecord]) -> ResultTable {
    let rows: Vec<RowOutcome> = records
        .iter()
        .enumerate()
        .map(|(i, record)| {
            let outcome = process_row(record);
            if let RowOutcome::Failed(err) = &outcome {
                log::warn!("row {} ({}): {}", i + 1, err.symbol, err.error);
            }
            outcome
        })
        .collect();

    let table = ResultTable { rows };
    let summary = table.summary();
    log::debug!(
        "processed {} rows: {} computed, {} failed",
        summary.rows,
        summary.computed,
        summary.failed
    );
    table
}
