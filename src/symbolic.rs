#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
/// a module turns a String expression into a symbolic expression
///
///# Example
/// ```
/// use RustedGrapher::symbolic::symbolic_engine::Expr;
/// let input = "x^2 - 2x + sin(pix)"; // implicit multiplication is understood
/// let parsed_expression = Expr::parse_expression(input).unwrap();
/// println!(" parsed_expression {}", parsed_expression);
/// let parsed_function = parsed_expression.lambdify1D();
/// println!("{}, Rust function at x = 1: {} \n", input, parsed_function(1.0));
/// ```
/// ________________________________________________________________________________________________________________________________
pub mod parse_expr;
///____________________________________________________________________________________________________________________________
/// # Symbolic engine
/// a module
/// 1) turns a String expression into a symbolic expression
/// 2) turns a symbolic expression into a Rust function
/// 3) turns a symbolic expression into a string expression for printing and control results
///# Example#
/// ```
/// use RustedGrapher::symbolic::symbolic_engine::Expr;
/// let input = "log(x) + e^x";
///    // here you've got symbolic expression
/// let parsed_expression = Expr::parse_expression(input).unwrap();
/// println!(" parsed_expression {}", parsed_expression);
///   // convert symbolic expression to a Rust function and evaluate the function
/// let f = parsed_expression.lambdify1D();
/// let f_res = f(1.0);
/// println!("f_res = {}", f_res);
/// assert!((f_res - std::f64::consts::E).abs() < 1e-12);
/// ```
/// ________________________________________________________________________________________________________________________________________________
pub mod symbolic_engine;
pub mod symbolic_lambdify;
