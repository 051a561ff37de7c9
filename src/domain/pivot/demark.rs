//! DeMark pivot points.

use std::cmp::Ordering;

/// Which way the period closed relative to its open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemarkBias {
    /// close < open
    Bearish,
    /// close > open
    Bullish,
    /// close == open
    Neutral,
}

impl DemarkBias {
    /// Classify a period. Incomparable prices (NaN) are treated as neutral.
    pub fn classify(open: f64, close: f64) -> Self {
        match close.partial_cmp(&open) {
            Some(Ordering::Less) => DemarkBias::Bearish,
            Some(Ordering::Greater) => DemarkBias::Bullish,
            Some(Ordering::Equal) | None => DemarkBias::Neutral,
        }
    }

    /// The DeMark `X` sum for this bias.
    pub fn x(self, high: f64, low: f64, close: f64) -> f64 {
        match self {
            DemarkBias::Bearish => high + 2.0 * low + close,
            DemarkBias::Bullish => 2.0 * high + low + close,
            DemarkBias::Neutral => high + low + 2.0 * close,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DemarkLevels {
    pub bias: DemarkBias,
    pub pivot: f64,
    pub r1: f64,
    pub s1: f64,
}

/// Calculate DeMark levels.
///
/// P = X / 4, R1 = X / 2 - L, S1 = X / 2 - H
pub fn demark(open: f64, high: f64, low: f64, close: f64) -> DemarkLevels {
    let bias = DemarkBias::classify(open, close);
    let x = bias.x(high, low, close);
    DemarkLevels {
        bias,
        pivot: x / 4.0,
        r1: x / 2.0 - low,
        s1: x / 2.0 - high,
    }
}
