use nalgebra::DVector;

/// Forward-difference step used for all derivative sampling.
pub const DEFAULT_STEP: f64 = 1e-3;

/// Builds an evenly spaced grid of `n` points from `start` to `end` inclusive.
///
/// The grid is immutable once built; every sample series of one analysis run
/// is index-aligned to it.
pub fn linspace(start: f64, end: f64, n: usize) -> DVector<f64> {
    assert!(n >= 2, "a grid needs at least two points");
    let h = (end - start) / (n as f64 - 1.0);
    DVector::from_iterator(n, (0..n).map(|i| start + h * i as f64))
}

/// Forward-difference approximation of g'(c): (g(c + h) - g(c)) / h.
///
/// If `c` or `c + h` falls outside the domain of `g` the result is NaN or an
/// infinity; the caller keeps scanning and treats the entry as a discontinuity
/// candidate.
pub fn forward_diff(g: &dyn Fn(f64) -> f64, c: f64, h: f64) -> f64 {
    (g(c + h) - g(c)) / h
}

/// Evaluates `f` at every grid point.
pub fn sample_function(grid: &DVector<f64>, f: &dyn Fn(f64) -> f64) -> DVector<f64> {
    grid.map(|x| f(x))
}

/// Samples the forward-difference first derivative of `f` at every grid point.
pub fn sample_first_derivative(
    grid: &DVector<f64>,
    f: &dyn Fn(f64) -> f64,
    h: f64,
) -> DVector<f64> {
    grid.map(|x| forward_diff(f, x, h))
}

/// Samples the second derivative as the nested forward difference of the
/// first-derivative function (the step compounds, as in the pointwise case).
pub fn sample_second_derivative(
    grid: &DVector<f64>,
    f: &dyn Fn(f64) -> f64,
    h: f64,
) -> DVector<f64> {
    grid.map(|x| forward_diff(&|t: f64| forward_diff(f, t, h), x, h))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_linspace_endpoints_and_spacing() {
        let grid = linspace(-10.0, 10.0, 1001);
        assert_eq!(grid.len(), 1001);
        assert_relative_eq!(grid[0], -10.0);
        assert_relative_eq!(grid[1000], 10.0);
        assert_relative_eq!(grid[1] - grid[0], 0.02, epsilon = 1e-12);
        assert_relative_eq!(grid[500], 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_forward_diff_of_square() {
        // d/dx x^2 = 2x, forward difference gives 2x + h
        let f = |x: f64| x * x;
        let d = forward_diff(&f, 3.0, DEFAULT_STEP);
        assert_relative_eq!(d, 6.0 + DEFAULT_STEP, epsilon = 1e-9);
    }

    #[test]
    fn test_second_derivative_of_square_is_two() {
        let grid = linspace(-1.0, 1.0, 11);
        let f = |x: f64| x * x;
        let y2 = sample_second_derivative(&grid, &f, DEFAULT_STEP);
        for &v in y2.iter() {
            assert_relative_eq!(v, 2.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_domain_errors_propagate_as_sentinels() {
        let grid = linspace(-1.0, 1.0, 21);
        let f = |x: f64| 1.0 / x;
        let y = sample_function(&grid, &f);
        // x = 0 sits at the middle index and must not abort the batch
        assert!(y[10].is_infinite());
        assert!(y[0].is_finite());
        assert!(y[20].is_finite());
        let y1 = sample_first_derivative(&grid, &f, DEFAULT_STEP);
        assert_eq!(y1.len(), grid.len());
    }
}
