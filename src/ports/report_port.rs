//! Output port: where computed tables go.

use crate::domain::batch::ResultTable;
use crate::domain::error::PivotError;
use crate::domain::layout::{tables_for, Layout, Table};

pub trait ReportPort {
    fn write_tables(&self, tables: &[Table]) -> Result<(), PivotError>;

    /// Default implementation: reshape for `layout`, then `write_tables`.
    fn write_results(&self, results: &ResultTable, layout: Layout) -> Result<(), PivotError> {
        self.write_tables(&tables_for(results, layout))
    }
}
