use mathscan_parser::ParseError;
use thiserror::Error;

use crate::detect::Detection;

/// Why a single expression could not be turned into a number.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    #[error("cannot parse '{expression}': {source}")]
    Parse {
        expression: String,
        #[source]
        source: ParseError,
    },
    #[error("'{expression}' does not evaluate to a finite number")]
    NonFinite { expression: String },
}

/// Failure of the upstream text collaborator (OCR engine, file, stdin).
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("failed to read text from {name}: {source}")]
    Io {
        name: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{name} failed: {message}")]
    Backend { name: String, message: String },
}

/// Outcome of a full scan that did not produce a solution.
///
/// `NoCandidateLine` and `EvaluationFailure` are the expected negative
/// outcomes a caller turns into a user-facing notice. The source variants
/// are unexpected and worth logging.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("no arithmetic expression found in the input")]
    NoCandidateLine,
    #[error("could not evaluate '{}': {}", .detection.raw_expression, .source)]
    EvaluationFailure {
        detection: Box<Detection>,
        #[source]
        source: EvalError,
    },
    #[error("text source '{0}' is not available")]
    SourceUnavailable(String),
    #[error(transparent)]
    Source(#[from] SourceError),
}

impl ScanError {
    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            ScanError::NoCandidateLine => "E_NO_MATH",
            ScanError::EvaluationFailure { .. } => "E_EVAL",
            ScanError::SourceUnavailable(_) => "E_SOURCE_UNAVAILABLE",
            ScanError::Source(_) => "E_SOURCE",
        }
    }

    /// True for the two outcomes that are part of normal operation.
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            ScanError::NoCandidateLine | ScanError::EvaluationFailure { .. }
        )
    }
}
