//! Camarilla pivot points.

const CAMARILLA_MULT: f64 = 1.1;

/// Range divisors for levels 1 through 4.
pub const CAMARILLA_DIVISORS: [f64; 4] = [12.0, 6.0, 4.0, 2.0];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CamarillaLevels {
    pub r1: f64,
    pub r2: f64,
    pub r3: f64,
    pub r4: f64,
    pub s1: f64,
    pub s2: f64,
    pub s3: f64,
    pub s4: f64,
}

/// Calculate Camarilla levels. There is no central pivot.
///
/// Rk = C + (H - L) * 1.1 / d_k, Sk = C - (H - L) * 1.1 / d_k
pub fn camarilla(high: f64, low: f64, close: f64) -> CamarillaLevels {
    let diff = high - low;
    let band = |divisor: f64| diff * CAMARILLA_MULT / divisor;
    let [d1, d2, d3, d4] = CAMARILLA_DIVISORS;
    CamarillaLevels {
        r1: close + band(d1),
        r2: close + band(d2),
        r3: close + band(d3),
        r4: close + band(d4),
        s1: close - band(d1),
        s2: close - band(d2),
        s3: close - band(d3),
        s4: close - band(d4),
    }
}
