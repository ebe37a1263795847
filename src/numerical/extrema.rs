//! Rolling-window extremum and inflection detector.
//!
//! The scan walks the interior indices once, carrying the previous rounded
//! sample of each derivative series; rounding to a fixed number of decimals
//! before any comparison suppresses floating-point jitter in the
//! finite-difference series. A feature is a sign change of the first
//! derivative (extremum) or of the second derivative (inflection) whose
//! magnitudes shrink toward the crossing, which separates a genuine zero
//! crossing from numerical noise.

use crate::numerical::curve_analysis::FeaturePoint;
use nalgebra::DVector;

/// Decimal precision used for feature detection. Independent of the 3-decimal
/// formatting of user-facing integral output.
pub const DEFAULT_ROUNDING_DECIMALS: i32 = 2;

/// Result of one detector run.
pub struct ExtremaScan {
    pub minima: Vec<FeaturePoint>,
    pub maxima: Vec<FeaturePoint>,
    pub inflection: Vec<FeaturePoint>,
}

/// Rounds half away from zero to `decimals` decimal digits. NaN and
/// infinities pass through unchanged.
pub fn round_to(v: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (v * scale).round() / scale
}

/// The structural zero-crossing test on a (prev, curr, next) window of a
/// derivative series: the flanks must straddle zero, and the magnitudes must
/// decrease toward the middle.
fn is_zero_crossing(prev: f64, curr: f64, next: f64) -> bool {
    let cross = prev * next;
    cross < 0.0
        && cross.abs() <= prev.abs()
        && cross.abs() <= next.abs()
        && curr.abs() < prev.abs()
        && curr.abs() < next.abs()
        && prev != 0.0
        && next != 0.0
}

/// Scans the aligned series for local extrema (first derivative) and
/// inflection points (second derivative).
///
/// Only interior indices [1, n-2] are visited, so the first and last grid
/// point can never be reported. The previous-value registers are seeded from
/// index 0 unrounded and afterwards roll forward with the rounded current
/// values. Reported coordinates are the rounded (x[i], y[i]); a feature is
/// dropped when y[i] itself is not finite.
pub fn detect(
    x: &DVector<f64>,
    y: &DVector<f64>,
    y1: &DVector<f64>,
    y2: &DVector<f64>,
    decimals: i32,
) -> ExtremaScan {
    let n = x.len();
    let mut out = ExtremaScan {
        minima: Vec::new(),
        maxima: Vec::new(),
        inflection: Vec::new(),
    };
    if n < 3 {
        return out;
    }
    let mut prev1 = y1[0];
    let mut prev2 = y2[0];
    for i in 1..n - 1 {
        let curr = round_to(y[i], decimals);
        let curr1 = round_to(y1[i], decimals);
        let curr2 = round_to(y2[i], decimals);
        let next1 = round_to(y1[i + 1], decimals);
        let next2 = round_to(y2[i + 1], decimals);
        let xi = round_to(x[i], decimals);

        if is_zero_crossing(prev1, curr1, next1) && curr.is_finite() {
            // derivative falling through zero from + to - tops the curve out
            if prev1 > 0.0 {
                out.maxima.push(FeaturePoint { x: xi, y: curr });
            } else {
                out.minima.push(FeaturePoint { x: xi, y: curr });
            }
        }
        if is_zero_crossing(prev2, curr2, next2) && curr.is_finite() {
            out.inflection.push(FeaturePoint { x: xi, y: curr });
        }

        prev1 = curr1;
        prev2 = curr2;
    }
    out
}
