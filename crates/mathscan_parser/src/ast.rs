//! Arithmetic expression tree.
//!
//! Only literal arithmetic is representable: numbers, the four basic
//! operators, exponentiation and negation. There are no variables,
//! constants or function calls.
//!
//! Runs of operators at one precedence level (`1 + 2 - 3`, `8 / 4 * 2`) are
//! stored flat in a [`Expr::Chain`], so tree depth only grows with
//! parentheses, unary minus and exponents.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinOp {
    pub fn apply(self, l: f64, r: f64) -> f64 {
        match self {
            BinOp::Add => l + r,
            BinOp::Sub => l - r,
            BinOp::Mul => l * r,
            BinOp::Div => l / r,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(f64),
    /// Left-associative run: `first op1 x1 op2 x2 ...`.
    Chain(Box<Expr>, Vec<(BinOp, Expr)>),
    Pow(Box<Expr>, Box<Expr>),
    Neg(Box<Expr>),
}

impl Expr {
    pub fn num(n: impl Into<f64>) -> Self {
        Expr::Number(n.into())
    }

    /// A chain with no operators is just its first operand.
    pub fn chain(first: Expr, rest: Vec<(BinOp, Expr)>) -> Self {
        if rest.is_empty() {
            first
        } else {
            Expr::Chain(Box::new(first), rest)
        }
    }

    pub fn pow(b: Expr, e: Expr) -> Self {
        Expr::Pow(Box::new(b), Box::new(e))
    }

    pub fn neg(e: Expr) -> Self {
        Expr::Neg(Box::new(e))
    }
}

/// Fully parenthesised rendering: every chain and power is wrapped, so the
/// output re-parses to the same tree regardless of precedence.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Number(n) => write!(f, "{}", n),
            Expr::Chain(first, rest) => {
                write!(f, "({}", first)?;
                for (op, operand) in rest {
                    write!(f, " {} {}", op.symbol(), operand)?;
                }
                write!(f, ")")
            }
            Expr::Pow(b, e) => write!(f, "({} ^ {})", b, e),
            Expr::Neg(e) => write!(f, "(-{})", e),
        }
    }
}
