//! Classic (floor trader) pivot points.

/// Typical price of the period: (high + low + close) / 3.
///
/// Shared by Classic and Fibonacci so both families report the same pivot.
pub fn central_pivot(high: f64, low: f64, close: f64) -> f64 {
    (high + low + close) / 3.0
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassicLevels {
    pub pivot: f64,
    pub r1: f64,
    pub s1: f64,
    pub r2: f64,
    pub s2: f64,
    pub r3: f64,
    pub s3: f64,
}

/// Calculate Classic pivot levels.
///
/// R1 = 2P - L, S1 = 2P - H
/// R2 = P + (H - L), S2 = P - (H - L)
/// R3 = H + 2(P - L), S3 = L - 2(H - P)
pub fn classic(high: f64, low: f64, close: f64) -> ClassicLevels {
    let pivot = central_pivot(high, low, close);
    let range = high - low;
    ClassicLevels {
        pivot,
        r1: 2.0 * pivot - low,
        s1: 2.0 * pivot - high,
        r2: pivot + range,
        s2: pivot - range,
        r3: high + 2.0 * (pivot - low),
        s3: low - 2.0 * (high - pivot),
    }
}
