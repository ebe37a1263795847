use crate::numerical::finite_diff::forward_diff;
use log::warn;

/// Composite quadrature of the numerical derivative of `f` over [a, b] with
/// `n` subintervals.
///
/// Sample points are x_i = a + i*(b-a)/n for i in 0..n; the leftmost sample
/// carries weight (b-a)/n/2, every interior sample twice that. The integral is
/// all-or-nothing: a single non-finite derivative sample (domain error inside
/// the interval) invalidates the whole result and `None` is returned, never a
/// partial sum. `n = 0` is rejected the same way instead of dividing by zero.
pub fn integral_of_derivative(
    f: &dyn Fn(f64) -> f64,
    a: f64,
    b: f64,
    n: usize,
    h: f64,
) -> Option<f64> {
    if n == 0 {
        warn!("integral over [{}, {}] requested with 0 subintervals", a, b);
        return None;
    }
    let width = (b - a) / n as f64;
    let w = width * 0.5;
    let mut total = 0.0;
    for i in 0..n {
        let xi = a + width * i as f64;
        let d = forward_diff(f, xi, h);
        if !d.is_finite() {
            warn!("derivative undefined at x = {}, integral invalidated", xi);
            return None;
        }
        total += if i == 0 { w * d } else { 2.0 * w * d };
    }
    Some(total)
}

/// Net change f(b) - f(a); `None` when either endpoint evaluation leaves the
/// domain of `f`.
pub fn net_change(f: &dyn Fn(f64) -> f64, a: f64, b: f64) -> Option<f64> {
    let delta = f(b) - f(a);
    if delta.is_finite() { Some(delta) } else { None }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numerical::finite_diff::DEFAULT_STEP;
    use approx::assert_relative_eq;

    #[test]
    fn test_integral_of_derivative_of_square() {
        // integral of (x^2)' over [0, 1] is close to 1
        let f = |x: f64| x * x;
        let integral = integral_of_derivative(&f, 0.0, 1.0, 1000, DEFAULT_STEP).unwrap();
        assert_relative_eq!(integral, 1.0, epsilon = 0.01);
    }

    #[test]
    fn test_integral_of_derivative_of_sin() {
        // integral of cos over [0, pi] is close to 0
        let f = |x: f64| x.sin();
        let integral =
            integral_of_derivative(&f, 0.0, std::f64::consts::PI, 1000, DEFAULT_STEP).unwrap();
        assert!(integral.abs() < 0.05, "integral = {}", integral);
    }

    #[test]
    fn test_zero_subintervals_is_invalid_not_a_crash() {
        let f = |x: f64| x * x;
        assert_eq!(integral_of_derivative(&f, 0.0, 1.0, 0, DEFAULT_STEP), None);
    }

    #[test]
    fn test_domain_error_invalidates_whole_integral() {
        // ln is undefined left of zero; the interval straddles the boundary
        let f = |x: f64| x.ln();
        assert_eq!(
            integral_of_derivative(&f, -1.0, 1.0, 100, DEFAULT_STEP),
            None
        );
    }

    #[test]
    fn test_net_change() {
        let f = |x: f64| x * x;
        assert_relative_eq!(net_change(&f, 1.0, 2.0).unwrap(), 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_net_change_outside_domain() {
        let f = |x: f64| x.ln();
        assert_eq!(net_change(&f, -1.0, 1.0), None);
        assert_eq!(net_change(&f, 0.0, 1.0), None);
    }
}
