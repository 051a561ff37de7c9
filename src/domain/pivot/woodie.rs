//! Woodie pivot points.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WoodieLevels {
    pub pivot: f64,
    pub r1: f64,
    pub s1: f64,
    pub r2: f64,
    pub s2: f64,
}

/// Calculate Woodie levels: P = (H + L + 2 * O) / 4, bands as Classic.
///
/// `close` is accepted for signature parity with the other families but does
/// not enter any formula.
pub fn woodie(open: f64, high: f64, low: f64, _close: f64) -> WoodieLevels {
    let pivot = (high + low + 2.0 * open) / 4.0;
    let range = high - low;
    WoodieLevels {
        pivot,
        r1: 2.0 * pivot - low,
        s1: 2.0 * pivot - high,
        r2: pivot + range,
        s2: pivot - range,
    }
}
