//! Continuity-gated numerical check of the Fundamental Theorem of Calculus:
//! the integral of f' over [a, b] is compared against the net change
//! f(b) - f(a). The check is only meaningful on a continuous curve, so the
//! classifier verdict gates it; any invalid intermediate (integral, endpoint
//! evaluation) makes the whole check inapplicable rather than failing.

use crate::numerical::quadrature;
use std::fmt;

/// Tolerance for the net-change vs. integral comparison.
pub const DEFAULT_FTC_TOLERANCE: f64 = 0.35;

/// Outcome of one FTC check. User-facing values are formatted with 3 decimals.
#[derive(Clone, Debug, PartialEq)]
pub enum FtcOutcome {
    Holds { integral: f64, net_change: f64 },
    DoesNotHold { integral: f64, net_change: f64 },
    NotApplicable { reason: String },
}

impl fmt::Display for FtcOutcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FtcOutcome::Holds {
                integral,
                net_change,
            } => write!(
                f,
                "integral of f'(x) = {:.3}, f(b) - f(a) = {:.3}: FTC holds true",
                integral, net_change
            ),
            FtcOutcome::DoesNotHold {
                integral,
                net_change,
            } => write!(
                f,
                "integral of f'(x) = {:.3}, f(b) - f(a) = {:.3}: FTC does not hold",
                integral, net_change
            ),
            FtcOutcome::NotApplicable { reason } => {
                write!(f, "FTC does not apply: {}", reason)
            }
        }
    }
}

/// Runs the gated check.
///
/// The comparison is one-sided: only a positive excess of the net change over
/// the integral counts as disagreement. This matches the long-standing
/// behavior of the check and is kept until the intended semantics are
/// clarified; see DESIGN.md.
pub fn check(
    has_non_removable: bool,
    f: &dyn Fn(f64) -> f64,
    a: f64,
    b: f64,
    n: usize,
    step: f64,
    tolerance: f64,
) -> FtcOutcome {
    if has_non_removable {
        return FtcOutcome::NotApplicable {
            reason: format!("the curve is not continuous from x = {} to x = {}", a, b),
        };
    }
    let Some(integral) = quadrature::integral_of_derivative(f, a, b, n, step) else {
        return FtcOutcome::NotApplicable {
            reason: format!("the integral of f'(x) from {} to {} does not exist", a, b),
        };
    };
    let Some(net_change) = quadrature::net_change(f, a, b) else {
        return FtcOutcome::NotApplicable {
            reason: "f(a) and/or f(b) is undefined".to_string(),
        };
    };
    if net_change - integral <= tolerance {
        FtcOutcome::Holds {
            integral,
            net_change,
        }
    } else {
        FtcOutcome::DoesNotHold {
            integral,
            net_change,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numerical::finite_diff::DEFAULT_STEP;

    #[test]
    fn test_verdict_gates_everything() {
        // even a perfectly integrable function is skipped on a discontinuous curve
        let f = |x: f64| x * x;
        let outcome = check(
            true,
            &f,
            0.0,
            1.0,
            100,
            DEFAULT_STEP,
            DEFAULT_FTC_TOLERANCE,
        );
        assert!(matches!(outcome, FtcOutcome::NotApplicable { .. }));
    }

    #[test]
    fn test_holds_for_square() {
        let f = |x: f64| x * x;
        let outcome = check(
            false,
            &f,
            0.0,
            1.0,
            1000,
            DEFAULT_STEP,
            DEFAULT_FTC_TOLERANCE,
        );
        assert!(matches!(outcome, FtcOutcome::Holds { .. }), "{}", outcome);
    }

    #[test]
    fn test_invalid_integral_is_not_applicable() {
        let f = |x: f64| x.ln();
        let outcome = check(
            false,
            &f,
            -1.0,
            1.0,
            100,
            DEFAULT_STEP,
            DEFAULT_FTC_TOLERANCE,
        );
        assert!(matches!(outcome, FtcOutcome::NotApplicable { .. }));
    }

    #[test]
    fn test_undefined_endpoint_is_not_applicable() {
        // the quadrature never samples b itself, so only the net change sees
        // the hole at the right endpoint
        let f = |x: f64| if x >= 1.0 { f64::NAN } else { x };
        let outcome = check(false, &f, 0.0, 1.0, 4, DEFAULT_STEP, DEFAULT_FTC_TOLERANCE);
        assert_eq!(
            outcome,
            FtcOutcome::NotApplicable {
                reason: "f(a) and/or f(b) is undefined".to_string()
            }
        );
    }

    #[test]
    fn test_comparison_is_one_sided() {
        // the integral exceeding the net change by any amount still "holds"
        let f = |x: f64| x;
        let outcome = check(false, &f, 0.0, 1.0, 10, DEFAULT_STEP, -10.0);
        assert!(matches!(outcome, FtcOutcome::DoesNotHold { .. }));
        let outcome = check(false, &f, 0.0, 1.0, 10, DEFAULT_STEP, 10.0);
        assert!(matches!(outcome, FtcOutcome::Holds { .. }));
    }

    #[test]
    fn test_display_formats_three_decimals() {
        let outcome = FtcOutcome::Holds {
            integral: 1.23456,
            net_change: 1.2,
        };
        let text = format!("{}", outcome);
        assert!(text.contains("1.235"));
        assert!(text.contains("1.200"));
    }
}
