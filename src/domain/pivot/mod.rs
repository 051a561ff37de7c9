//! Pivot point formula library.
//!
//! One submodule per family. Each exposes a pure function returning a typed
//! level struct; every struct converts into the family-agnostic
//! [`PivotResult`] used by the output views.
//!
//! - [`classic`]: floor-trader pivots
//! - [`fibonacci`]: Classic pivot with Fibonacci-ratio bands
//! - [`camarilla`]: close-anchored bands, no central pivot
//! - [`woodie`]: open-weighted pivot
//! - [`demark`]: close/open conditional pivot

pub mod camarilla;
pub mod classic;
pub mod demark;
pub mod fibonacci;
pub mod woodie;

use std::fmt;

pub use camarilla::{camarilla, CamarillaLevels, CAMARILLA_DIVISORS};
pub use classic::{central_pivot, classic, ClassicLevels};
pub use demark::{demark, DemarkBias, DemarkLevels};
pub use fibonacci::{fibonacci, fibonacci_from_pivot, FibonacciLevels};
pub use woodie::{woodie, WoodieLevels};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PivotFamily {
    Classic,
    Fibonacci,
    Camarilla,
    Woodie,
    Demark,
}

impl PivotFamily {
    pub const ALL: [PivotFamily; 5] = [
        PivotFamily::Classic,
        PivotFamily::Fibonacci,
        PivotFamily::Camarilla,
        PivotFamily::Woodie,
        PivotFamily::Demark,
    ];

    /// Display name, also used as the column prefix in the wide table.
    pub fn name(self) -> &'static str {
        match self {
            PivotFamily::Classic => "Classic",
            PivotFamily::Fibonacci => "Fibonacci",
            PivotFamily::Camarilla => "Camarilla",
            PivotFamily::Woodie => "Woodie",
            PivotFamily::Demark => "DeMark",
        }
    }

    /// Level names in output order, without the pivot.
    pub fn level_names(self) -> &'static [&'static str] {
        match self {
            PivotFamily::Classic | PivotFamily::Fibonacci => &["R1", "S1", "R2", "S2", "R3", "S3"],
            PivotFamily::Camarilla => &["R1", "R2", "R3", "R4", "S1", "S2", "S3", "S4"],
            PivotFamily::Woodie => &["R1", "S1", "R2", "S2"],
            PivotFamily::Demark => &["R1", "S1"],
        }
    }

    pub fn has_pivot(self) -> bool {
        !matches!(self, PivotFamily::Camarilla)
    }
}

impl fmt::Display for PivotFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Level {
    pub name: &'static str,
    pub value: f64,
}

/// Family-agnostic view of one family's levels for one row.
#[derive(Debug, Clone, PartialEq)]
pub struct PivotResult {
    pub family: PivotFamily,
    pub pivot: Option<f64>,
    pub levels: Vec<Level>,
}

impl PivotResult {
    fn new(family: PivotFamily, pivot: Option<f64>, values: &[f64]) -> Self {
        let levels = family
            .level_names()
            .iter()
            .zip(values)
            .map(|(&name, &value)| Level { name, value })
            .collect();
        Self {
            family,
            pivot,
            levels,
        }
    }

    pub fn level(&self, name: &str) -> Option<f64> {
        self.levels.iter().find(|l| l.name == name).map(|l| l.value)
    }

    /// Pivot (if any) followed by the levels.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.pivot
            .into_iter()
            .chain(self.levels.iter().map(|l| l.value))
    }

    pub fn all_finite(&self) -> bool {
        self.values().all(f64::is_finite)
    }

    /// Every named level is present, and a pivot exactly when the family
    /// has one.
    pub fn is_complete(&self) -> bool {
        self.pivot.is_some() == self.family.has_pivot()
            && self.levels.len() == self.family.level_names().len()
            && self
                .levels
                .iter()
                .zip(self.family.level_names())
                .all(|(level, name)| level.name == *name)
    }
}

impl From<ClassicLevels> for PivotResult {
    fn from(l: ClassicLevels) -> Self {
        PivotResult::new(
            PivotFamily::Classic,
            Some(l.pivot),
            &[l.r1, l.s1, l.r2, l.s2, l.r3, l.s3],
        )
    }
}

impl From<FibonacciLevels> for PivotResult {
    fn from(l: FibonacciLevels) -> Self {
        PivotResult::new(
            PivotFamily::Fibonacci,
            Some(l.pivot),
            &[l.r1, l.s1, l.r2, l.s2, l.r3, l.s3],
        )
    }
}

impl From<CamarillaLevels> for PivotResult {
    fn from(l: CamarillaLevels) -> Self {
        PivotResult::new(
            PivotFamily::Camarilla,
            None,
            &[l.r1, l.r2, l.r3, l.r4, l.s1, l.s2, l.s3, l.s4],
        )
    }
}

impl From<WoodieLevels> for PivotResult {
    fn from(l: WoodieLevels) -> Self {
        PivotResult::new(PivotFamily::Woodie, Some(l.pivot), &[l.r1, l.s1, l.r2, l.s2])
    }
}

impl From<DemarkLevels> for PivotResult {
    fn from(l: DemarkLevels) -> Self {
        PivotResult::new(PivotFamily::Demark, Some(l.pivot), &[l.r1, l.s1])
    }
}
