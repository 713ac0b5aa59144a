pub mod config;
pub mod detect;
pub mod scan;
pub mod solve;

use std::process::ExitCode;

use anyhow::Result;
use clap::ValueEnum;
use mathscan_api_models::ScanJsonOutput;
use mathscan_engine::{ScanError, ScanOutput};
use serde::Serialize;

use crate::json_types::{detection_json, error_json, error_wire, solution_json, success_wire};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// How a command finished. Maps onto the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    /// Nothing detected, or detected but not solvable.
    Negative,
    /// Unexpected failure (source unavailable, I/O).
    Failed,
}

impl Outcome {
    pub fn exit_code(self) -> ExitCode {
        match self {
            Outcome::Success => ExitCode::SUCCESS,
            Outcome::Negative => ExitCode::from(1),
            Outcome::Failed => ExitCode::from(2),
        }
    }

    fn from_error(error: &ScanError) -> Self {
        if error.is_expected() {
            Outcome::Negative
        } else {
            Outcome::Failed
        }
    }
}

pub fn print_pretty_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Shared reporting for `solve` and `scan`: JSON envelope, or `render` on
/// success and the user notice on failure.
fn report_scan(
    command: &str,
    result: Result<ScanOutput, ScanError>,
    format: OutputFormat,
    render: fn(&ScanOutput) -> String,
) -> Result<Outcome> {
    match format {
        OutputFormat::Json => {
            let output = ScanJsonOutput::new(command);
            let output = match &result {
                Ok(out) => output
                    .with_detection(detection_json(&out.detection))
                    .with_solution(solution_json(&out.solution))
                    .with_wire(success_wire(out)),
                Err(e) => {
                    let output = match e {
                        ScanError::EvaluationFailure { detection, .. } => {
                            output.with_detection(detection_json(detection))
                        }
                        _ => output,
                    };
                    output.with_error(error_json(e)).with_wire(error_wire(e))
                }
            };
            print_pretty_json(&output)?;
        }
        OutputFormat::Text => match &result {
            Ok(out) => println!("{}", render(out)),
            Err(e) if e.is_expected() => {
                let notice = e.notice();
                println!("{}: {}", notice.title, notice.body);
            }
            Err(e) => eprintln!("Error: {}", e),
        },
    }

    Ok(match &result {
        Ok(_) => Outcome::Success,
        Err(e) => Outcome::from_error(e),
    })
}
