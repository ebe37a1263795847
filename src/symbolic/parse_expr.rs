use crate::symbolic::symbolic_engine::Expr;
use std::f64::consts::{E, PI};
/// a module turns a String expression into a symbolic expression
///
/// The text goes through a tokenizer and then a small recursive-descent parser
/// producing the [`Expr`] tree, so precedence and implicit multiplication are
/// handled structurally instead of by textual substitution.
///
///# Example
/// ```
/// use RustedGrapher::symbolic::symbolic_engine::Expr;
/// let input = "2x + sin(x)"; // same tree as "2*x + sin(x)"
/// let parsed_expression = Expr::parse_expression(input).unwrap();
/// println!(" parsed_expression {}", parsed_expression);
/// ```
//                  parse recursion diagram
//                "y = 2x^3 - sin(pix)"              |
//                |________________________________ |
//                | expression:  term - term        |
//                |_________________________________|
//                | term: unary (implicit *) unary  |
//                |      2      |   x^3             |
//                |_____________|___________________|
//                | power: primary ^ unary          |
//                |      x      |   3               |
//                |_____________|___________________|
//                | primary: number, word, ( expr ) |
//                |  sin( pix ) -> sin( pi * x )    |
//                  etc...

/// Names recognized inside an alphabetic run. An input like "pix" or "xsin" is
/// decomposed greedily (longest match first) into adjacent words, which become
/// implicit multiplications; this is what makes "2x" and "pix" parse the same
/// way as "2*x" and "pi*x".
const KNOWN_WORDS: [&str; 12] = [
    "sin", "cos", "tan", "cot", "ctg", "exp", "log", "ln", "tg", "pi", "e", "x",
];

#[derive(Clone, Debug, PartialEq)]
enum Token {
    Num(f64),
    Word(String),
    Plus,
    Minus,
    Star,
    Slash,
    Caret,
    LParen,
    RParen,
}

fn tokenize(input: &str) -> Result<Vec<Token>, String> {
    let chars: Vec<char> = input.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        match c {
            ' ' | '\t' => i += 1,
            '+' => {
                tokens.push(Token::Plus);
                i += 1;
            }
            '-' => {
                tokens.push(Token::Minus);
                i += 1;
            }
            '*' => {
                tokens.push(Token::Star);
                i += 1;
            }
            '/' => {
                tokens.push(Token::Slash);
                i += 1;
            }
            '^' => {
                tokens.push(Token::Caret);
                i += 1;
            }
            '(' => {
                tokens.push(Token::LParen);
                i += 1;
            }
            ')' => {
                tokens.push(Token::RParen);
                i += 1;
            }
            '0'..='9' | '.' => {
                let start = i;
                let mut seen_dot = false;
                while i < chars.len() && (chars[i].is_ascii_digit() || (chars[i] == '.' && !seen_dot))
                {
                    if chars[i] == '.' {
                        seen_dot = true;
                    }
                    i += 1;
                }
                let literal: String = chars[start..i].iter().collect();
                let value = literal
                    .parse::<f64>()
                    .map_err(|_| format!("'{}' is not a valid number", literal))?;
                tokens.push(Token::Num(value));
            }
            c if c.is_ascii_alphabetic() => {
                let start = i;
                while i < chars.len() && chars[i].is_ascii_alphabetic() {
                    i += 1;
                }
                let run: String = chars[start..i].iter().collect();
                let mut rest = run.as_str();
                while !rest.is_empty() {
                    let hit = KNOWN_WORDS
                        .iter()
                        .filter(|w| rest.starts_with(*w))
                        .max_by_key(|w| w.len());
                    match hit {
                        Some(word) => {
                            tokens.push(Token::Word(word.to_string()));
                            rest = &rest[word.len()..];
                        }
                        None => return Err(format!("unknown symbol in '{}'", run)),
                    }
                }
            }
            _ => return Err(format!("unexpected character '{}'", c)),
        }
    }
    Ok(tokens)
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn expect_rparen(&mut self) -> Result<(), String> {
        match self.advance() {
            Some(Token::RParen) => Ok(()),
            Some(tok) => Err(format!("expected ')', found {:?}", tok)),
            None => Err("expected ')', found end of expression".to_string()),
        }
    }

    // expression := term (('+' | '-') term)*
    fn expression(&mut self) -> Result<Expr, String> {
        let mut node = self.term()?;
        while let Some(tok) = self.peek() {
            match tok {
                Token::Plus => {
                    self.advance();
                    node = node + self.term()?;
                }
                Token::Minus => {
                    self.advance();
                    node = node - self.term()?;
                }
                _ => break,
            }
        }
        Ok(node)
    }

    // term := unary (('*' | '/') unary | implicit-mul unary)*
    fn term(&mut self) -> Result<Expr, String> {
        let mut node = self.unary()?;
        loop {
            match self.peek() {
                Some(Token::Star) => {
                    self.advance();
                    node = node * self.unary()?;
                }
                Some(Token::Slash) => {
                    self.advance();
                    node = node / self.unary()?;
                }
                // a factor immediately following a factor is an implicit
                // multiplication: "2x", "3sin(x)", ")("
                Some(Token::Num(_)) | Some(Token::Word(_)) | Some(Token::LParen) => {
                    node = node * self.unary()?;
                }
                _ => break,
            }
        }
        Ok(node)
    }

    // unary := '-' unary | power
    fn unary(&mut self) -> Result<Expr, String> {
        if matches!(self.peek(), Some(Token::Minus)) {
            self.advance();
            return Ok(-self.unary()?);
        }
        self.power()
    }

    // power := primary ('^' unary)?   right-associative
    fn power(&mut self) -> Result<Expr, String> {
        let base = self.primary()?;
        if matches!(self.peek(), Some(Token::Caret)) {
            self.advance();
            let exponent = self.unary()?;
            // e^u is the exponential function, not a generic power
            if base == Expr::Const(E) {
                return Ok(Expr::Exp(exponent.boxed()));
            }
            return Ok(base.pow(exponent));
        }
        Ok(base)
    }

    // primary := number | 'pi' | 'e' | 'x' | func '(' expression ')' | '(' expression ')'
    fn primary(&mut self) -> Result<Expr, String> {
        match self.advance() {
            Some(Token::Num(value)) => Ok(Expr::Const(value)),
            Some(Token::LParen) => {
                let inner = self.expression()?;
                self.expect_rparen()?;
                Ok(inner)
            }
            Some(Token::Word(word)) => match word.as_str() {
                "x" => Ok(Expr::Var("x".to_string())),
                "pi" => Ok(Expr::Const(PI)),
                "e" => Ok(Expr::Const(E)),
                name => {
                    if !matches!(self.peek(), Some(Token::LParen)) {
                        return Err(format!("function '{}' must be followed by '('", name));
                    }
                    self.advance();
                    let inner = self.expression()?.boxed();
                    self.expect_rparen()?;
                    Ok(match name {
                        "sin" => Expr::sin(inner),
                        "cos" => Expr::cos(inner),
                        "tan" | "tg" => Expr::tg(inner),
                        "cot" | "ctg" => Expr::ctg(inner),
                        "exp" => Expr::Exp(inner),
                        "ln" => Expr::Ln(inner),
                        "log" => Expr::Log10(inner),
                        _ => unreachable!("tokenizer only emits known words"),
                    })
                }
            },
            Some(tok) => Err(format!("unexpected token {:?}", tok)),
            None => Err("unexpected end of expression".to_string()),
        }
    }
}

pub fn parse_expression_str(input: &str) -> Result<Expr, String> {
    let tokens = tokenize(input.trim())?;
    if tokens.is_empty() {
        return Err("empty expression".to_string());
    }
    let mut parser = Parser { tokens, pos: 0 };
    let expr = parser.expression()?;
    if parser.pos != parser.tokens.len() {
        return Err(format!(
            "trailing input starting at {:?}",
            parser.tokens[parser.pos]
        ));
    }
    Ok(expr)
}
