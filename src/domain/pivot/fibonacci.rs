//! Fibonacci pivot points.

use super::classic::central_pivot;

/// Retracement ratios for levels 1, 2 and 3.
pub const FIBONACCI_RATIOS: [f64; 3] = [0.382, 0.618, 1.0];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FibonacciLevels {
    pub pivot: f64,
    pub r1: f64,
    pub s1: f64,
    pub r2: f64,
    pub s2: f64,
    pub r3: f64,
    pub s3: f64,
}

/// Calculate Fibonacci pivot levels from raw prices.
pub fn fibonacci(high: f64, low: f64, close: f64) -> FibonacciLevels {
    fibonacci_from_pivot(central_pivot(high, low, close), high, low)
}

/// Calculate Fibonacci levels around an already computed Classic pivot.
///
/// Rk = P + ratio_k * (H - L), Sk = P - ratio_k * (H - L)
pub fn fibonacci_from_pivot(pivot: f64, high: f64, low: f64) -> FibonacciLevels {
    let diff = high - low;
    let [f1, f2, f3] = FIBONACCI_RATIOS;
    FibonacciLevels {
        pivot,
        r1: pivot + f1 * diff,
        s1: pivot - f1 * diff,
        r2: pivot + f2 * diff,
        s2: pivot - f2 * diff,
        r3: pivot + f3 * diff,
        s3: pivot - f3 * diff,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pivot::classic;
    use approx::assert_relative_eq;

    #[test]
    fn fibonacci_reference_values() {
        let l = fibonacci(110.0, 90.0, 100.0);
        assert_relative_eq!(l.pivot, 100.0);
        assert_relative_eq!(l.r1, 107.64);
        assert_relative_eq!(l.s1, 92.36);
        assert_relative_eq!(l.r2, 112.36);
        assert_relative_eq!(l.s2, 87.64);
        assert_relative_eq!(l.r3, 120.0);
        assert_relative_eq!(l.s3, 80.0);
    }

    #[test]
    fn fibonacci_pivot_matches_classic() {
        let (h, l, c) = (123.45, 98.76, 111.11);
        assert_eq!(fibonacci(h, l, c).pivot, classic(h, l, c).pivot);
    }

    #[test]
    fn from_pivot_uses_given_pivot() {
        let l = fibonacci_from_pivot(50.0, 60.0, 40.0);
        assert_relative_eq!(l.pivot, 50.0);
        assert_relative_eq!(l.r3, 70.0);
        assert_relative_eq!(l.s3, 30.0);
    }

    #[test]
    fn level_three_equals_classic_level_two() {
        // ratio 1.0 reproduces the Classic R2/S2 reflection.
        let (h, l, c) = (120.0, 100.0, 115.0);
        let fib = fibonacci(h, l, c);
        let cls = classic(h, l, c);
        assert_relative_eq!(fib.r3, cls.r2);
        assert_relative_eq!(fib.s3, cls.s2);
    }
}
