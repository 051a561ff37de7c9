//! Presentation views over a [`ResultTable`].
//!
//! Two shapes are supported, both pure reshapes of the same per-row results:
//! - [`wide_table`]: one row per input row, every family's levels side by side
//! - [`split_tables`]: one table per pivot family
//!
//! Failed rows carry only `Symbol` and `Error`; their numeric cells are empty.

use std::fmt;
use std::str::FromStr;

use crate::domain::batch::ResultTable;
use crate::domain::pivot::PivotFamily;
use crate::domain::row_processor::{PivotSets, RowOutcome};

pub const SYMBOL_COLUMN: &str = "Symbol";
pub const ERROR_COLUMN: &str = "Error";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    #[default]
    Wide,
    Split,
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Layout::Wide => write!(f, "wide"),
            Layout::Split => write!(f, "split"),
        }
    }
}

impl FromStr for Layout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "wide" => Ok(Layout::Wide),
            "split" => Ok(Layout::Split),
            other => Err(format!("unknown layout '{other}'")),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
    Empty,
}

impl Cell {
    /// Render for display. Numbers use `precision` decimal places, or the
    /// shortest exact form when `None`.
    pub fn render(&self, precision: Option<usize>) -> String {
        match self {
            Cell::Text(text) => text.clone(),
            Cell::Empty => String::new(),
            Cell::Number(value) => match precision {
                Some(p) if value.is_finite() => format!("{value:.p$}"),
                _ => value.to_string(),
            },
        }
    }
}

/// A rectangular table of cells with named columns.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub title: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn cell(&self, row: usize, column: &str) -> Option<&Cell> {
        let idx = self.column_index(column)?;
        self.rows.get(row).and_then(|r| r.get(idx))
    }
}

/// Wide-table level columns: `<Family>_<Level>`.
///
/// The Fibonacci pivot is omitted because it always equals the Classic pivot.
pub fn wide_columns() -> Vec<String> {
    let mut columns = Vec::new();
    for family in PivotFamily::ALL {
        if family.has_pivot() && family != PivotFamily::Fibonacci {
            columns.push(format!("{}_Pivot", family.name()));
        }
        for level in family.level_names() {
            columns.push(format!("{}_{}", family.name(), level));
        }
    }
    columns
}

fn wide_values(sets: &PivotSets) -> Vec<f64> {
    PivotFamily::ALL
        .iter()
        .flat_map(|&family| {
            let result = sets.result(family);
            let pivot = if family == PivotFamily::Fibonacci {
                None
            } else {
                result.pivot
            };
            pivot
                .into_iter()
                .chain(result.levels.into_iter().map(|l| l.value))
                .collect::<Vec<_>>()
        })
        .collect()
}

fn family_columns(family: PivotFamily) -> Vec<String> {
    let pivot = family.has_pivot().then(|| "Pivot".to_string());
    pivot
        .into_iter()
        .chain(family.level_names().iter().map(|l| l.to_string()))
        .collect()
}

fn with_header(level_columns: Vec<String>, include_error: bool) -> Vec<String> {
    let mut columns = Vec::with_capacity(level_columns.len() + 2);
    columns.push(SYMBOL_COLUMN.to_string());
    columns.extend(level_columns);
    if include_error {
        columns.push(ERROR_COLUMN.to_string());
    }
    columns
}

/// Build one output row: symbol, numbers (or blanks), then the error cell
/// when the table has an error column.
fn assemble_row<F>(outcome: &RowOutcome, width: usize, include_error: bool, values: F) -> Vec<Cell>
where
    F: Fn(&PivotSets) -> Vec<f64>,
{
    let mut cells = Vec::with_capacity(width + 2);
    cells.push(Cell::Text(outcome.symbol().to_string()));
    match outcome {
        RowOutcome::Computed(sets) => {
            cells.extend(values(sets).into_iter().map(Cell::Number));
            if include_error {
                cells.push(Cell::Empty);
            }
        }
        RowOutcome::Failed(err) => {
            cells.extend(std::iter::repeat_n(Cell::Empty, width));
            if include_error {
                cells.push(Cell::Text(err.message()));
            }
        }
    }
    cells
}

/// One row per input row with all families side by side.
pub fn wide_table(results: &ResultTable) -> Table {
    let include_error = results.has_failures();
    let level_columns = wide_columns();
    let width = level_columns.len();
    Table {
        title: "Pivots".to_string(),
        columns: with_header(level_columns, include_error),
        rows: results
            .rows
            .iter()
            .map(|outcome| assemble_row(outcome, width, include_error, wide_values))
            .collect(),
    }
}

/// Table for a single family.
pub fn family_table(results: &ResultTable, family: PivotFamily) -> Table {
    let include_error = results.has_failures();
    let level_columns = family_columns(family);
    let width = level_columns.len();
    Table {
        title: family.name().to_string(),
        columns: with_header(level_columns, include_error),
        rows: results
            .rows
            .iter()
            .map(|outcome| {
                assemble_row(outcome, width, include_error, |sets| {
                    sets.result(family).values().collect()
                })
            })
            .collect(),
    }
}

/// Five tables in Classic, Fibonacci, Camarilla, Woodie, DeMark order.
pub fn split_tables(results: &ResultTable) -> Vec<Table> {
    PivotFamily::ALL
        .iter()
        .map(|&family| family_table(results, family))
        .collect()
}

/// Tables for the requested layout.
pub fn tables_for(results: &ResultTable, layout: Layout) -> Vec<Table> {
    match layout {
        Layout::Wide => vec![wide_table(results)],
        Layout::Split => split_tables(results),
    }
}
