use crate::numerical::curve_analysis::{CurveReport, FeaturePoint, feature_xs, feature_ys};
use itertools::izip;
use nalgebra::DVector;

fn finite_points(x: &DVector<f64>, y: &DVector<f64>) -> Vec<(f64, f64)> {
    izip!(x.iter(), y.iter())
        .filter(|(_, y)| y.is_finite())
        .map(|(&x, &y)| (x, y))
        .collect()
}

pub fn plot_curve_report(report: &CurveReport, title: &str, filename: &str) {
    use plotters::prelude::*;
    let x_min = report.x.min();
    let x_max = report.x.max();
    let root_area = BitMapBackend::new(filename, (800, 600)).into_drawing_area();
    root_area.fill(&WHITE).unwrap();

    // Create a chart builder; the y window is pinned like the classic view
    let mut chart = ChartBuilder::on(&root_area)
        .caption(title, ("sans-serif", 50))
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(30)
        .build_cartesian_2d(x_min..x_max, -10.0..10.0)
        .unwrap();

    // Configure the mesh
    chart
        .configure_mesh()
        .x_desc("X-axis")
        .y_desc("Y-axis")
        .draw()
        .unwrap();

    // Plot the function and the two derivative curves
    let curves: [(&DVector<f64>, &str); 3] = [
        (&report.y, "Function (f(x))"),
        (&report.y1, "First Derivative"),
        (&report.y2, "Second Derivative"),
    ];
    for (col, (series, label)) in curves.into_iter().enumerate() {
        let points = finite_points(&report.x, series);
        chart
            .draw_series(LineSeries::new(points, &Palette99::pick(col)))
            .unwrap()
            .label(label)
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], &Palette99::pick(col))
            });
    }

    // Mark the feature points
    let holes: Vec<(f64, f64)> = report.removable.iter().map(|p| (p.x, p.y)).collect();
    chart
        .draw_series(
            holes
                .iter()
                .map(|&(x, y)| Circle::new((x, y), 4, BLUE.stroke_width(2))),
        )
        .unwrap()
        .label("Hole")
        .legend(|(x, y)| Circle::new((x + 10, y), 4, BLUE.stroke_width(2)));

    let minima: Vec<(f64, f64)> = report.minima.iter().map(|p| (p.x, p.y)).collect();
    chart
        .draw_series(
            minima
                .iter()
                .map(|&(x, y)| TriangleMarker::new((x, y), 6, GREEN.filled())),
        )
        .unwrap()
        .label("Minimum Value")
        .legend(|(x, y)| TriangleMarker::new((x + 10, y), 6, GREEN.filled()));

    let maxima: Vec<(f64, f64)> = report.maxima.iter().map(|p| (p.x, p.y)).collect();
    chart
        .draw_series(
            maxima
                .iter()
                .map(|&(x, y)| Cross::new((x, y), 5, RED.stroke_width(2))),
        )
        .unwrap()
        .label("Maximum Value")
        .legend(|(x, y)| Cross::new((x + 10, y), 5, RED.stroke_width(2)));

    let inflection: Vec<(f64, f64)> = report.inflection.iter().map(|p| (p.x, p.y)).collect();
    chart
        .draw_series(
            inflection
                .iter()
                .map(|&(x, y)| Circle::new((x, y), 4, MAGENTA.filled())),
        )
        .unwrap()
        .label("Point of Inflection")
        .legend(|(x, y)| Circle::new((x + 10, y), 4, MAGENTA.filled()));

    // Configure the legend
    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .unwrap();
}

use gnuplot::{AutoOption, AxesCommon, Caption, Color, Figure, PointSymbol, RGBString};
pub fn plot_curve_report_gnuplot(report: &CurveReport, title: &str, filename: &str) {
    let mut fg = Figure::new();
    let f_points = finite_points(&report.x, &report.y);
    let f1_points = finite_points(&report.x, &report.y1);
    let f2_points = finite_points(&report.x, &report.y2);

    fn split(points: &[(f64, f64)]) -> (Vec<f64>, Vec<f64>) {
        points.iter().cloned().unzip()
    }
    let (fx, fy) = split(&f_points);
    let (f1x, f1y) = split(&f1_points);
    let (f2x, f2y) = split(&f2_points);

    let marker = |points: &[FeaturePoint]| (feature_xs(points), feature_ys(points));
    let (hole_x, hole_y) = marker(&report.removable);
    let (min_x, min_y) = marker(&report.minima);
    let (max_x, max_y) = marker(&report.maxima);
    let (poi_x, poi_y) = marker(&report.inflection);

    fg.axes2d()
        .set_title(title, &[])
        .set_x_label("X-axis", &[])
        .set_y_label("Y-axis", &[])
        .set_y_range(AutoOption::Fix(-10.0), AutoOption::Fix(10.0))
        .lines(
            &fx,
            &fy,
            &[Caption("Function (f(x))"), Color(RGBString("blue"))],
        )
        .lines(
            &f1x,
            &f1y,
            &[Caption("First Derivative"), Color(RGBString("green"))],
        )
        .lines(
            &f2x,
            &f2y,
            &[Caption("Second Derivative"), Color(RGBString("red"))],
        )
        .points(
            &hole_x,
            &hole_y,
            &[Caption("Hole"), Color(RGBString("orange")), PointSymbol('O')],
        )
        .points(
            &min_x,
            &min_y,
            &[
                Caption("Minimum Value"),
                Color(RGBString("black")),
                PointSymbol('T'),
            ],
        )
        .points(
            &max_x,
            &max_y,
            &[
                Caption("Maximum Value"),
                Color(RGBString("black")),
                PointSymbol('V'),
            ],
        )
        .points(
            &poi_x,
            &poi_y,
            &[
                Caption("Point of Inflection"),
                Color(RGBString("magenta")),
                PointSymbol('S'),
            ],
        );

    // Save the plot to a file
    fg.save_to_png(filename, 800, 600).unwrap();
}
