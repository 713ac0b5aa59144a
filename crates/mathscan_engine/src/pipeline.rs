//! Text in, chat-ready answer out.

use tracing::{debug, info, warn};

use crate::detect::{detect, Detection};
use crate::error::ScanError;
use crate::options::ScanOptions;
use crate::solve::{try_solve, Solution};
use crate::source::{clean_ocr_text, TextSource};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOutput {
    pub detection: Detection,
    pub solution: Solution,
}

/// User-facing alert shown instead of an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notice {
    pub title: &'static str,
    pub body: &'static str,
}

impl ScanError {
    pub fn notice(&self) -> Notice {
        match self {
            ScanError::NoCandidateLine => Notice {
                title: "Math not detected",
                body: "We could not find a clear math expression in the image. \
                       Try cropping tighter around the equation and try again.",
            },
            ScanError::EvaluationFailure { .. } => Notice {
                title: "Math error",
                body: "The expression could not be evaluated automatically. \
                       Try a simpler expression or ask the AI tutor.",
            },
            ScanError::SourceUnavailable(_) | ScanError::Source(_) => Notice {
                title: "Error",
                body: "Failed to solve the math problem. Try again with a clearer image.",
            },
        }
    }
}

/// Detect and solve the first arithmetic line in `text`.
pub fn scan(text: &str, options: &ScanOptions) -> Result<ScanOutput, ScanError> {
    let cleaned;
    let text = if options.clean_ocr_text {
        cleaned = clean_ocr_text(text);
        cleaned.as_str()
    } else {
        text
    };

    let detection = detect(text).ok_or(ScanError::NoCandidateLine)?;

    let solution = match try_solve(&detection, options) {
        Ok(solution) => solution,
        Err(source) => {
            debug!(target: "scan", error = %source, "evaluation failed");
            return Err(ScanError::EvaluationFailure {
                detection: Box::new(detection),
                source,
            });
        }
    };

    debug!(target: "scan", expression = %solution.expression, answer = %solution.answer, "solved");
    Ok(ScanOutput {
        detection,
        solution,
    })
}

/// Pull text from `source` and [`scan`] it.
pub fn scan_source(source: &dyn TextSource, options: &ScanOptions) -> Result<ScanOutput, ScanError> {
    if !source.check_available() {
        warn!(target: "scan", source = source.name(), "text source unavailable");
        return Err(ScanError::SourceUnavailable(source.name().to_string()));
    }

    let text = source.extract_text()?;
    info!(
        target: "scan",
        source = source.name(),
        lines = text.lines().count(),
        "text extracted"
    );
    scan(&text, options)
}

/// Chat bubble text for a solved scan.
pub fn chat_message(output: &ScanOutput) -> String {
    format!(
        "🧮 Math Solver\nProblem: {}\n{}\n{}\n{}",
        output.detection.original_line,
        output.solution.explanation,
        output.solution.answer,
        output.solution.latex
    )
}
