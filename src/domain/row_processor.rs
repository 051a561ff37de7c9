//! Per-row processing: raw record to all five pivot families, or an error.

use crate::domain::coercion::{coerce, parse_required, resolve_symbol};
use crate::domain::error::RowError;
use crate::domain::pivot::{
    camarilla, classic, demark, fibonacci_from_pivot, woodie, CamarillaLevels, ClassicLevels,
    DemarkLevels, FibonacciLevels, PivotFamily, PivotResult, WoodieLevels,
};
use crate::domain::record::{Field, RawRecord};

/// Resolved prices for one row.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceRow {
    pub symbol: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    /// Not used by any formula; carried for display.
    pub previous_close: f64,
}

impl PriceRow {
    /// Build a row from raw fields. `high`, `low` and `close` are parsed
    /// strictly in that order; `open` and `previous_close` fall back to
    /// `close`.
    pub fn from_record(record: &RawRecord) -> Result<Self, RowError> {
        let symbol = resolve_symbol(&record.symbol);
        let high = parse_required(Field::High, &record.high)?;
        let low = parse_required(Field::Low, &record.low)?;
        let close = parse_required(Field::Close, &record.close)?;
        let open = coerce(&record.open, close);
        let previous_close = coerce(&record.previous_close, close);

        Ok(Self {
            symbol,
            open,
            high,
            low,
            close,
            previous_close,
        })
    }

}

/// All five families computed for one row.
#[derive(Debug, Clone, PartialEq)]
pub struct PivotSets {
    pub row: PriceRow,
    pub classic: ClassicLevels,
    pub fibonacci: FibonacciLevels,
    pub camarilla: CamarillaLevels,
    pub woodie: WoodieLevels,
    pub demark: DemarkLevels,
}

impl PivotSets {
    pub fn compute(row: PriceRow) -> Self {
        let PriceRow {
            open,
            high,
            low,
            close,
            ..
        } = row;
        let classic = classic(high, low, close);
        let fibonacci = fibonacci_from_pivot(classic.pivot, high, low);

        Self {
            classic,
            fibonacci,
            camarilla: camarilla(high, low, close),
            woodie: woodie(open, high, low, close),
            demark: demark(open, high, low, close),
            row,
        }
    }

    pub fn symbol(&self) -> &str {
        &self.row.symbol
    }

    pub fn result(&self, family: PivotFamily) -> PivotResult {
        match family {
            PivotFamily::Classic => self.classic.into(),
            PivotFamily::Fibonacci => self.fibonacci.into(),
            PivotFamily::Camarilla => self.camarilla.into(),
            PivotFamily::Woodie => self.woodie.into(),
            PivotFamily::Demark => self.demark.into(),
        }
    }

    /// Results for every family, in [`PivotFamily::ALL`] order.
    pub fn results(&self) -> Vec<PivotResult> {
        PivotFamily::ALL.iter().map(|&f| self.result(f)).collect()
    }

    /// First family whose result is missing a level.
    fn first_incomplete(&self) -> Option<PivotFamily> {
        PivotFamily::ALL
            .into_iter()
            .find(|&f| !self.result(f).is_complete())
    }
}

/// A row that could not be computed.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorResult {
    pub symbol: String,
    pub error: RowError,
}

impl ErrorResult {
    pub fn message(&self) -> String {
        self.error.to_string()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RowOutcome {
    Computed(PivotSets),
    Failed(ErrorResult),
}

impl RowOutcome {
    pub fn symbol(&self) -> &str {
        match self {
            RowOutcome::Computed(sets) => sets.symbol(),
            RowOutcome::Failed(err) => &err.symbol,
        }
    }

    pub fn is_computed(&self) -> bool {
        matches!(self, RowOutcome::Computed(_))
    }

    pub fn as_computed(&self) -> Option<&PivotSets> {
        match self {
            RowOutcome::Computed(sets) => Some(sets),
            RowOutcome::Failed(_) => None,
        }
    }

    pub fn as_failed(&self) -> Option<&ErrorResult> {
        match self {
            RowOutcome::Computed(_) => None,
            RowOutcome::Failed(err) => Some(err),
        }
    }
}

/// Process one record. Any failure voids the whole row.
pub fn process_row(record: &RawRecord) -> RowOutcome {
    let row = match PriceRow::from_record(record) {
        Ok(row) => row,
        Err(error) => {
            return RowOutcome::Failed(ErrorResult {
                symbol: resolve_symbol(&record.symbol),
                error,
            });
        }
    };

    // Non-finite levels (overflow, "inf" inputs) are returned as computed.
    let sets = PivotSets::compute(row);
    if let Some(family) = sets.first_incomplete() {
        return RowOutcome::Failed(ErrorResult {
            symbol: sets.row.symbol,
            error: RowError::Computation { family },
        });
    }

    RowOutcome::Computed(sets)
}
