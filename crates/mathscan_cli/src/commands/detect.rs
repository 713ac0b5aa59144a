//! detect subcommand handler.
//!
//! Runs only the Detector and prints the selected line, without evaluating.

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Args;
use mathscan_api_models::ScanJsonOutput;
use mathscan_engine::{clean_ocr_text, detect, Detection, ScanError, ScanOptions};

use super::{print_pretty_json, OutputFormat, Outcome};
use crate::input;
use crate::json_types::{detection_json, error_json};

/// Arguments for detect subcommand
#[derive(Args, Debug)]
pub struct DetectArgs {
    /// OCR text to scan (reads --file or stdin when omitted)
    #[arg(allow_hyphen_values = true)]
    pub text: Option<String>,

    /// Read the text from a file ("-" for stdin)
    #[arg(long, short)]
    pub file: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

fn render(detection: &Detection) -> String {
    format!(
        "Line: {}\nExpression: {}\nLeft: {}\nRight: {}\nEquation: {}",
        detection.original_line,
        detection.raw_expression,
        detection.normalized_expression,
        detection.right_expression.as_deref().unwrap_or("-"),
        if detection.has_equation { "yes" } else { "no" },
    )
}

/// Run the detect command
pub fn run(args: &DetectArgs, options: &ScanOptions) -> Result<Outcome> {
    let source = input::open(args.text.as_deref(), args.file.as_deref());
    if !source.check_available() {
        bail!("text source '{}' is not available", source.name());
    }

    let raw = source.extract_text()?;
    let text = if options.clean_ocr_text {
        clean_ocr_text(&raw)
    } else {
        raw
    };
    let detection = detect(&text);

    match args.format {
        OutputFormat::Json => {
            let output = ScanJsonOutput::new("detect");
            let output = match &detection {
                Some(d) => output.with_detection(detection_json(d)),
                None => output.with_error(error_json(&ScanError::NoCandidateLine)),
            };
            print_pretty_json(&output)?;
        }
        OutputFormat::Text => match &detection {
            Some(d) => println!("{}", render(d)),
            None => println!("No math expression detected."),
        },
    }

    Ok(if detection.is_some() {
        Outcome::Success
    } else {
        Outcome::Negative
    })
}
