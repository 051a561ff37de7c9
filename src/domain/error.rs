//! Domain error types.
//!
//! [`RowError`] is scoped to a single input row and never aborts a batch.
//! [`PivotError`] covers everything around the batch: configuration, reading
//! input, writing output.

use crate::domain::pivot::PivotFamily;
use crate::domain::record::Field;

/// Why one row could not be computed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RowError {
    #[error("{field} is missing")]
    MissingField { field: Field },

    #[error("could not convert {field} value '{value}' to a number")]
    InvalidNumber { field: Field, value: String },

    #[error("{family} calculation produced an incomplete level set")]
    Computation { family: PivotFamily },
}

impl RowError {
    /// The offending input field, if the error came from parsing.
    pub fn field(&self) -> Option<Field> {
        match self {
            RowError::MissingField { field } | RowError::InvalidNumber { field, .. } => {
                Some(*field)
            }
            RowError::Computation { .. } => None,
        }
    }
}

/// Top-level error type for pivotcalc.
#[derive(Debug, thiserror::Error)]
pub enum PivotError {
    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error("input error: {reason}")]
    Input { reason: String },

    #[error("input is missing required {naming} columns: {}", columns.join(", "))]
    MissingColumns { naming: String, columns: Vec<String> },

    #[error("output error: {reason}")]
    Output { reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl PivotError {
    /// Process exit status for this error category.
    pub fn exit_status(&self) -> u8 {
        match self {
            PivotError::Io(_) => 1,
            PivotError::ConfigParse { .. } | PivotError::ConfigInvalid { .. } => 2,
            PivotError::Input { .. } | PivotError::MissingColumns { .. } => 3,
            PivotError::Output { .. } => 4,
        }
    }
}

impl From<&PivotError> for std::process::ExitCode {
    fn from(err: &PivotError) -> Self {
        std::process::ExitCode::from(err.exit_status())
    }
}
