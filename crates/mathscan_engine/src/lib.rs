//! Math detection and solving for OCR'd text.
//!
//! The pipeline is two pure stages:
//!
//! 1. [`detect`] picks the first line of free text that looks like plain
//!    arithmetic, sanitizes it and splits it around `=`.
//! 2. [`try_solve`] / [`solve`] evaluates the detected expression(s) in `f64`
//!    and builds the display strings.
//!
//! [`scan`] chains both and reports the two expected negative outcomes
//! (nothing detected, could not evaluate) as [`ScanError`] variants.

pub mod detect;
pub mod error;
pub mod eval;
pub mod format;
pub mod options;
pub mod pipeline;
pub mod solve;
pub mod source;

pub use detect::{detect, detect_line, is_candidate_line, sanitize_line, Detection};
pub use error::{EvalError, ScanError, SourceError};
pub use eval::{eval_expr, evaluate};
pub use format::{format_value, DEFAULT_SIGNIFICANT_DIGITS};
pub use options::ScanOptions;
pub use pipeline::{chat_message, scan, scan_source, Notice, ScanOutput};
pub use solve::{solve, try_solve, Solution};
pub use source::{clean_ocr_text, StaticText, TextSource};
