use mathscan_parser::{parse, Expr};
use tracing::trace;

use crate::error::EvalError;

/// Fold an expression tree in `f64`. Division by zero and friends yield
/// infinities or NaN here; [`evaluate`] is what rejects them.
///
/// Recursion depth follows the parser's nesting limit: operator chains are
/// folded in a loop.
pub fn eval_expr(expr: &Expr) -> f64 {
    match expr {
        Expr::Number(n) => *n,
        Expr::Chain(first, rest) => rest
            .iter()
            .fold(eval_expr(first), |acc, (op, operand)| {
                op.apply(acc, eval_expr(operand))
            }),
        Expr::Pow(b, e) => eval_expr(b).powf(eval_expr(e)),
        Expr::Neg(e) => -eval_expr(e),
    }
}

/// Parse and evaluate a sanitized expression.
pub fn evaluate(expression: &str) -> Result<f64, EvalError> {
    let expr = parse(expression).map_err(|source| EvalError::Parse {
        expression: expression.to_string(),
        source,
    })?;

    let value = eval_expr(&expr);
    trace!(target: "eval", expression, tree = %expr, value, "evaluated");

    if !value.is_finite() {
        return Err(EvalError::NonFinite {
            expression: expression.to_string(),
        });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mathscan_parser::{BinOp, ParseError};

    #[test]
    fn test_precedence() {
        assert_eq!(evaluate("2 + 3 * 4").unwrap(), 14.0);
        assert_eq!(evaluate("(2 + 3) * 4").unwrap(), 20.0);
        assert_eq!(evaluate("2 * 3 ^ 2").unwrap(), 18.0);
        assert_eq!(evaluate("2 ^ 3 ^ 2").unwrap(), 512.0);
        assert_eq!(evaluate("-2 ^ 2").unwrap(), -4.0);
        assert_eq!(evaluate("(-2) ^ 2").unwrap(), 4.0);
    }

    #[test]
    fn test_left_associative_subtraction_and_division() {
        assert_eq!(evaluate("10 - 4 - 3").unwrap(), 3.0);
        assert_eq!(evaluate("100 / 10 / 5").unwrap(), 2.0);
    }

    #[test]
    fn test_decimals_and_negative_exponents() {
        assert_eq!(evaluate("10 / 4").unwrap(), 2.5);
        assert_eq!(evaluate("2 ^ -1").unwrap(), 0.5);
        assert_eq!(evaluate(".5 + 8.").unwrap(), 8.5);
    }

    #[test]
    fn test_division_by_zero_is_non_finite() {
        assert_eq!(
            evaluate("1 / 0"),
            Err(EvalError::NonFinite {
                expression: "1 / 0".to_string()
            })
        );
        assert!(matches!(
            evaluate("0 / 0"),
            Err(EvalError::NonFinite { .. })
        ));
    }

    #[test]
    fn test_fractional_power_of_negative_is_non_finite() {
        assert!(matches!(
            evaluate("(-8) ^ (1 / 3)"),
            Err(EvalError::NonFinite { .. })
        ));
    }

    #[test]
    fn test_overflow_is_non_finite() {
        assert!(matches!(
            evaluate("10 ^ 400"),
            Err(EvalError::NonFinite { .. })
        ));
    }

    #[test]
    fn test_malformed_expression() {
        assert!(matches!(
            evaluate("5 + + 3"),
            Err(EvalError::Parse {
                source: ParseError::UnconsumedInput(_),
                ..
            })
        ));
        assert!(matches!(evaluate("(1 + 2"), Err(EvalError::Parse { .. })));
        assert!(matches!(evaluate("= 3 + 4"), Err(EvalError::Parse { .. })));
    }

    #[test]
    fn test_eval_expr_directly() {
        let e = Expr::chain(
            Expr::num(1),
            vec![(BinOp::Sub, Expr::neg(Expr::num(2))), (BinOp::Mul, Expr::num(1))],
        );
        assert_eq!(eval_expr(&e), 3.0);
    }

    #[test]
    fn test_long_sum_evaluates() {
        let sum = vec!["1"; 200_000].join(" + ");
        assert_eq!(evaluate(&sum).unwrap(), 200_000.0);
    }

    #[test]
    fn test_deep_nesting_is_a_parse_error() {
        let deep = format!("{}1 + 1{}", "(".repeat(10_000), ")".repeat(10_000));
        assert!(matches!(
            evaluate(&deep),
            Err(EvalError::Parse {
                source: ParseError::TooDeep(_),
                ..
            })
        ));
    }
}
