// Copyright (c)  by Gleb E. Zaslavkiy
//MIT License
#![allow(non_snake_case)]
pub mod Utils;
pub mod numerical;
pub mod symbolic;

use crate::Utils::logger::save_series_to_csv;
use crate::Utils::plots::plot_curve_report;
use crate::numerical::curve_analysis::CurveAnalyzer;
use crate::symbolic::symbolic_engine::Expr;
use chrono::Local;
use log::{error, info};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use std::io::{self, Write};

fn prompt(message: &str) -> Option<String> {
    print!("{}", message);
    io::stdout().flush().ok()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line).ok()?;
    Some(line.trim().to_string())
}

/// reads a bound; the literal "pi" (any case) is accepted as in the classic UI
fn read_bound(message: &str) -> Option<f64> {
    let text = prompt(message)?;
    if text.eq_ignore_ascii_case("pi") {
        return Some(std::f64::consts::PI);
    }
    text.parse::<f64>().ok()
}

fn main() {
    TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .unwrap();
    info!("grapher session started at {}", Local::now());

    let Some(input) = prompt("Enter a function of x to graph: f(x) = ") else {
        error!("failed to read the function from stdin");
        return;
    };
    let expr = match Expr::parse_expression(&input) {
        Ok(expr) => expr,
        Err(message) => {
            error!("could not parse \"{}\": {}", input, message);
            return;
        }
    };
    println!("parsed expression: {}", expr);
    if !expr.contains_variable("x") {
        info!("the expression is constant in x; the curve is a horizontal line");
    }
    let f = expr.lambdify1D();

    let mut analyzer = CurveAnalyzer::new();
    analyzer.analyze(f.as_ref());
    let report = analyzer
        .get_report()
        .expect("analyze always stores a report");

    println!("{}", report.summary_table());
    for message in &report.messages {
        println!("{}", message);
    }
    if report.feature_count() == 0 && report.non_removable_x.is_empty() {
        println!("no notable features detected on [-10, 10]");
    }

    plot_curve_report(report, &format!("f(x) = {}", input), "graph.png");
    println!("plot saved to graph.png");

    let headers = vec!["f".to_string(), "f'".to_string(), "f''".to_string()];
    match save_series_to_csv(
        &vec![&report.y, &report.y1, &report.y2],
        &headers,
        "graph.csv",
        &report.x,
        &"x".to_string(),
    ) {
        Ok(()) => println!("samples saved to graph.csv"),
        Err(e) => error!("could not save graph.csv: {}", e),
    }

    // FTC check over user-chosen bounds
    let Some(a) = read_bound("Integrate f'(x): lower bound a = ") else {
        error!("invalid lower bound");
        return;
    };
    let Some(b) = read_bound("upper bound b = ") else {
        error!("invalid upper bound");
        return;
    };
    let n = match prompt("number of subintervals n = ").and_then(|t| t.parse::<usize>().ok()) {
        Some(n) => n,
        None => {
            error!("invalid subinterval count");
            return;
        }
    };
    let outcome = analyzer.ftc_check(f.as_ref(), a, b, n);
    println!("{}", outcome);
}
