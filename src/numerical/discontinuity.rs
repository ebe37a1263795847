//! Two-pass discontinuity classifier.
//!
//! A gap in the sampled curve is removable only if the local trend is the same
//! on both sides of it, so a single substitute value would restore continuity;
//! a trend reversal straddling the gap is a genuine jump and no fill can help.
//! Pass 1 classifies every explicitly invalid sample (NaN or infinite) this
//! way. Pass 2 hunts for jumps the evaluation did not flag: three consecutive
//! first differences forming a V (outer slopes agreeing, both disagreeing with
//! the middle one) betray a jump between valid samples. Pass 2 only runs when
//! pass 1 found nothing non-removable; the verdict is never revised downward.

use crate::numerical::curve_analysis::FeaturePoint;
use log::debug;
use nalgebra::DVector;

/// Result of one classifier run over an index-aligned (x, y) series pair.
pub struct DiscontinuityScan {
    /// holes: the curve can be made continuous by substituting the stored y
    pub removable: Vec<FeaturePoint>,
    /// grid x of every jump found by pass 1
    pub non_removable_x: Vec<f64>,
    /// invalid samples too close to the grid edge for any trend window
    pub unclassified_x: Vec<f64>,
    /// true iff any non-removable discontinuity was found (pass 1 or pass 2)
    pub has_non_removable: bool,
    /// human-readable descriptions, one per discontinuity
    pub messages: Vec<String>,
}

impl DiscontinuityScan {
    fn empty() -> Self {
        DiscontinuityScan {
            removable: Vec::new(),
            non_removable_x: Vec::new(),
            unclassified_x: Vec::new(),
            has_non_removable: false,
            messages: Vec::new(),
        }
    }
}

/// Runs both passes. Pass 2 is skipped entirely once pass 1 has set the
/// verdict, so the verdict is monotone within a run.
pub fn scan(x: &DVector<f64>, y: &DVector<f64>) -> DiscontinuityScan {
    let mut result = classify_invalid_points(x, y);
    if !result.has_non_removable && hidden_jump_present(y) {
        result.has_non_removable = true;
        result
            .messages
            .push("jump discontinuity detected between valid samples".to_string());
    }
    result
}

/// Pass 1: classify every NaN/infinite sample by the trend on its flanks.
///
/// With a full window (2 <= i <= n-2) the slope entering the gap,
/// y[i-1] - y[i-2], is compared against the slope across it, y[i+1] - y[i-1];
/// a negative product means the trend reverses at the gap and the point is a
/// jump. Near the left boundary (1 <= i <= n-3) the slope leaving the gap,
/// y[i+2] - y[i+1], stands in for the missing left context. A removable point
/// is filled with the average of its immediate valid neighbours and recorded
/// only when that average is itself finite.
pub fn classify_invalid_points(x: &DVector<f64>, y: &DVector<f64>) -> DiscontinuityScan {
    let n = y.len();
    let mut out = DiscontinuityScan::empty();
    for i in 0..n {
        if y[i].is_finite() {
            continue;
        }
        if i >= 2 && i + 2 <= n {
            let slope_before = y[i - 1] - y[i - 2];
            let slope_across = y[i + 1] - y[i - 1];
            if slope_before * slope_across < 0.0 {
                out.messages
                    .push(format!("non-removable discontinuity point: x = {}", x[i]));
                out.non_removable_x.push(x[i]);
                out.has_non_removable = true;
            } else {
                let fill = (y[i - 1] + y[i + 1]) / 2.0;
                if fill.is_finite() {
                    out.messages.push(format!(
                        "removable discontinuity point: ({}, {})",
                        x[i], fill
                    ));
                    out.removable.push(FeaturePoint { x: x[i], y: fill });
                }
            }
        } else if i >= 1 && i + 3 <= n {
            let slope_across = y[i + 1] - y[i - 1];
            let slope_after = y[i + 2] - y[i + 1];
            if slope_after * slope_across < 0.0 {
                out.messages
                    .push(format!("non-removable discontinuity point: x = {}", x[i]));
                out.non_removable_x.push(x[i]);
                out.has_non_removable = true;
            } else {
                let fill = (y[i - 1] + y[i + 1]) / 2.0;
                if fill.is_finite() {
                    out.messages.push(format!(
                        "removable discontinuity point: ({}, {})",
                        x[i], fill
                    ));
                    out.removable.push(FeaturePoint { x: x[i], y: fill });
                }
            }
        } else {
            // no trend window fits; informational only, does not gate the FTC
            debug!("unclassifiable discontinuity at grid edge, x = {}", x[i]);
            out.messages
                .push(format!("discontinuity point: x = {}", x[i]));
            out.unclassified_x.push(x[i]);
        }
    }
    out
}

/// Pass 2: V-shaped jump between valid samples.
///
/// g1, g2, g3 are consecutive first differences around i; the window looks two
/// points ahead where possible (i in [1, n-3]) and two points behind otherwise
/// (i in [2, n-2]). Only the verdict is produced, never a removable feature.
pub fn hidden_jump_present(y: &DVector<f64>) -> bool {
    let n = y.len();
    for i in 0..n {
        if i >= 1 && i + 3 <= n {
            let g1 = y[i] - y[i - 1];
            let g2 = y[i + 1] - y[i];
            let g3 = y[i + 2] - y[i + 1];
            if g1 * g3 > 0.0 && g1 * g2 < 0.0 && g2 * g3 < 0.0 {
                return true;
            }
        } else if i >= 2 && i + 2 <= n {
            let g1 = y[i] - y[i - 1];
            let g2 = y[i + 1] - y[i];
            let g3 = y[i - 1] - y[i - 2];
            if g1 * g3 > 0.0 && g1 * g2 < 0.0 && g2 * g3 < 0.0 {
                return true;
            }
        }
    }
    false
}
