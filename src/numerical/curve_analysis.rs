//! Orchestration of one analysis run: sample the function and its two
//! numerical derivatives over the grid, run the discontinuity classifier and
//! the extremum/inflection detector, and collect everything into a
//! [`CurveReport`] that the rendering and CLI layers consume as-is (no further
//! analysis happens after the report is built).
//!
//!# Example
//! ```
//! use RustedGrapher::numerical::curve_analysis::CurveAnalyzer;
//! let mut analyzer = CurveAnalyzer::new();
//! analyzer.analyze(&|x: f64| x * x);
//! let report = analyzer.get_report().unwrap();
//! assert_eq!(report.minima.len(), 1);
//! assert!(!report.has_non_removable);
//! ```

use crate::numerical::discontinuity;
use crate::numerical::extrema::{self, DEFAULT_ROUNDING_DECIMALS};
use crate::numerical::finite_diff::{
    DEFAULT_STEP, linspace, sample_first_derivative, sample_function, sample_second_derivative,
};
use crate::numerical::ftc::{self, DEFAULT_FTC_TOLERANCE, FtcOutcome};
use log::info;
use nalgebra::DVector;
use tabled::{builder::Builder, settings::Style};

/// An (x, y) pair produced by one of the scans. Never mutated after creation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FeaturePoint {
    pub x: f64,
    pub y: f64,
}

/// x-coordinates of a feature collection, in scan order (for plotting).
pub fn feature_xs(points: &[FeaturePoint]) -> Vec<f64> {
    points.iter().map(|p| p.x).collect()
}

/// y-coordinates of a feature collection, in scan order (for plotting).
pub fn feature_ys(points: &[FeaturePoint]) -> Vec<f64> {
    points.iter().map(|p| p.y).collect()
}

/// Everything one analysis run produces: the grid, the three index-aligned
/// sample series, the per-kind feature collections and the continuity verdict.
pub struct CurveReport {
    pub x: DVector<f64>,
    pub y: DVector<f64>,
    pub y1: DVector<f64>,
    pub y2: DVector<f64>,
    pub removable: Vec<FeaturePoint>,
    pub minima: Vec<FeaturePoint>,
    pub maxima: Vec<FeaturePoint>,
    pub inflection: Vec<FeaturePoint>,
    pub non_removable_x: Vec<f64>,
    pub unclassified_x: Vec<f64>,
    /// true iff a non-removable discontinuity was found; gates the FTC check
    pub has_non_removable: bool,
    /// report-only diagnostics collected during the scans
    pub messages: Vec<String>,
}

impl CurveReport {
    pub fn feature_count(&self) -> usize {
        self.removable.len() + self.minima.len() + self.maxima.len() + self.inflection.len()
    }

    /// Feature summary rendered with tabled, one row per detected point.
    pub fn summary_table(&self) -> String {
        let mut builder = Builder::default();
        builder.push_record(vec![
            "feature".to_string(),
            "x".to_string(),
            "y".to_string(),
        ]);
        let mut push_points = |kind: &str, points: &[FeaturePoint]| {
            for p in points {
                builder.push_record(vec![
                    kind.to_string(),
                    format!("{:.3}", p.x),
                    format!("{:.3}", p.y),
                ]);
            }
        };
        push_points("hole (removable discontinuity)", &self.removable);
        push_points("local minimum", &self.minima);
        push_points("local maximum", &self.maxima);
        push_points("point of inflection", &self.inflection);
        for &x in &self.non_removable_x {
            builder.push_record(vec![
                "non-removable discontinuity".to_string(),
                format!("{:.3}", x),
                "-".to_string(),
            ]);
        }
        for &x in &self.unclassified_x {
            builder.push_record(vec![
                "unclassified discontinuity".to_string(),
                format!("{:.3}", x),
                "-".to_string(),
            ]);
        }
        let mut table = builder.build();
        table.with(Style::modern());
        table.to_string()
    }
}

/// One analysis run over a fixed grid.
///
/// Defaults reproduce the classic setup: 1001 points over [-10, 10], forward
/// step 0.001, 2-decimal rounding for feature detection, FTC tolerance 0.35.
/// All knobs are public fields, set them before calling [`CurveAnalyzer::analyze`].
pub struct CurveAnalyzer {
    pub grid: DVector<f64>,
    pub step: f64,
    pub rounding_decimals: i32,
    pub ftc_tolerance: f64,
    pub report: Option<CurveReport>,
}

impl CurveAnalyzer {
    pub fn new() -> CurveAnalyzer {
        CurveAnalyzer {
            grid: linspace(-10.0, 10.0, 1001),
            step: DEFAULT_STEP,
            rounding_decimals: DEFAULT_ROUNDING_DECIMALS,
            ftc_tolerance: DEFAULT_FTC_TOLERANCE,
            report: None,
        }
    }

    pub fn with_grid(start: f64, end: f64, points: usize) -> CurveAnalyzer {
        CurveAnalyzer {
            grid: linspace(start, end, points),
            ..CurveAnalyzer::new()
        }
    }

    /// Materializes the three series, runs both scans and stores the report.
    ///
    /// The full series are built before any scan starts (the scans index both
    /// forward and backward from the current position). Domain errors surface
    /// as NaN/infinite entries and never abort the run.
    pub fn analyze(&mut self, f: &dyn Fn(f64) -> f64) {
        let y = sample_function(&self.grid, f);
        let y1 = sample_first_derivative(&self.grid, f, self.step);
        let y2 = sample_second_derivative(&self.grid, f, self.step);

        let disc = discontinuity::scan(&self.grid, &y);
        let ext = extrema::detect(&self.grid, &y, &y1, &y2, self.rounding_decimals);

        info!(
            "curve analysis: {} hole(s), {} minimum(s), {} maximum(s), {} inflection(s), non-removable discontinuity: {}",
            disc.removable.len(),
            ext.minima.len(),
            ext.maxima.len(),
            ext.inflection.len(),
            disc.has_non_removable
        );

        self.report = Some(CurveReport {
            x: self.grid.clone(),
            y,
            y1,
            y2,
            removable: disc.removable,
            minima: ext.minima,
            maxima: ext.maxima,
            inflection: ext.inflection,
            non_removable_x: disc.non_removable_x,
            unclassified_x: disc.unclassified_x,
            has_non_removable: disc.has_non_removable,
            messages: disc.messages,
        });
    }

    pub fn get_report(&self) -> Option<&CurveReport> {
        self.report.as_ref()
    }

    /// FTC check gated on the verdict of the last [`CurveAnalyzer::analyze`] run.
    pub fn ftc_check(&self, f: &dyn Fn(f64) -> f64, a: f64, b: f64, n: usize) -> FtcOutcome {
        let Some(report) = self.report.as_ref() else {
            return FtcOutcome::NotApplicable {
                reason: "the curve has not been analyzed yet".to_string(),
            };
        };
        ftc::check(
            report.has_non_removable,
            f,
            a,
            b,
            n,
            self.step,
            self.ftc_tolerance,
        )
    }
}

impl Default for CurveAnalyzer {
    fn default() -> Self {
        CurveAnalyzer::new()
    }
}
