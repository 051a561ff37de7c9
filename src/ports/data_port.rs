//! Input port: where price records come from.

use crate::domain::error::PivotError;
use crate::domain::record::{FieldNaming, NamingChoice, RawRecord};

/// Records read from one source, with the column naming that was applied.
#[derive(Debug, Clone, PartialEq)]
pub struct InputBatch {
    pub naming: FieldNaming,
    pub records: Vec<RawRecord>,
}

pub trait DataPort {
    /// Read every record in source order. Fails as a whole when the source
    /// cannot be read or lacks required columns; per-row problems are left
    /// for the row processor.
    fn fetch_records(&self, naming: NamingChoice) -> Result<InputBatch, PivotError>;
}
