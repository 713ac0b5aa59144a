use tracing::debug;

use crate::detect::Detection;
use crate::error::EvalError;
use crate::eval::evaluate;
use crate::format::format_value;
use crate::options::ScanOptions;

/// Evaluated detection, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    /// The sanitized line that was evaluated.
    pub expression: String,
    pub answer: String,
    pub explanation: String,
    pub left_value: String,
    pub right_value: Option<String>,
    pub latex: String,
}

fn evaluate_formatted(expression: &str, options: &ScanOptions) -> Result<String, EvalError> {
    let value = evaluate(expression)?;
    format_value(value, options.significant_digits).ok_or_else(|| EvalError::NonFinite {
        expression: expression.to_string(),
    })
}

/// Evaluate both sides of a detection and build the display strings.
pub fn try_solve(detection: &Detection, options: &ScanOptions) -> Result<Solution, EvalError> {
    let normalized = &detection.normalized_expression;
    let left_value = evaluate_formatted(normalized, options)?;

    let right_value = match &detection.right_expression {
        Some(right) => Some(evaluate_formatted(right, options)?),
        None => None,
    };

    let (answer, explanation) = match (&detection.right_expression, &right_value) {
        (Some(right_expr), Some(right)) => (
            format!("Left = {}, Right = {}", left_value, right),
            format!(
                "Left-hand side ({}) evaluates to {}. Right-hand side ({}) evaluates to {}.",
                normalized, left_value, right_expr, right
            ),
        ),
        _ => (
            format!("Solution: {}", left_value),
            format!(
                "Calculated expression: {}, which evaluates to {}.",
                normalized, left_value
            ),
        ),
    };

    let shown = right_value.as_deref().unwrap_or(&left_value);
    let latex = format!(
        "{delim}{} = {}{delim}",
        normalized,
        shown,
        delim = options.math_delimiter
    );

    Ok(Solution {
        expression: detection.raw_expression.clone(),
        answer,
        explanation,
        left_value,
        right_value,
        latex,
    })
}

/// [`try_solve`] with default options, collapsing any failure to `None`.
pub fn solve(detection: &Detection) -> Option<Solution> {
    match try_solve(detection, &ScanOptions::default()) {
        Ok(solution) => Some(solution),
        Err(e) => {
            debug!(target: "solve", error = %e, "evaluation failed");
            None
        }
    }
}
