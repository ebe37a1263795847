#![allow(non_snake_case)]
//! numerical core of the graphing calculator: everything here operates on a
//! fixed evenly spaced grid and on per-grid-point sample series (NaN and
//! infinities are legitimate entries and mark discontinuity candidates)
/// forward-difference derivative, grid construction and pointwise sampling
pub mod finite_diff;
/// composite quadrature of the numerical derivative and the net change f(b) - f(a)
pub mod quadrature;
/// two-pass scan separating removable from non-removable discontinuities
pub mod discontinuity;
/// rolling-window scan for local minima/maxima and inflection points
pub mod extrema;
/// continuity-gated numerical check of the Fundamental Theorem of Calculus
pub mod ftc;
/// orchestration: sample a function and its two derivatives, run the scans,
/// collect a CurveReport
pub mod curve_analysis;
mod curve_analysis_tests;
