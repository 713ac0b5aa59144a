//! solve subcommand handler.

use anyhow::Result;
use clap::Args;
use mathscan_engine::{scan_source, ScanOptions, ScanOutput, StaticText};

use super::{report_scan, OutputFormat, Outcome};

/// Arguments for solve subcommand
#[derive(Args, Debug)]
pub struct SolveArgs {
    /// Expression (or any text containing one) to solve
    #[arg(allow_hyphen_values = true)]
    pub expr: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

fn render(output: &ScanOutput) -> String {
    format!(
        "{}\n{}\n{}",
        output.solution.answer, output.solution.explanation, output.solution.latex
    )
}

/// Run the solve command
pub fn run(args: &SolveArgs, options: &ScanOptions) -> Result<Outcome> {
    let source = StaticText::named("argument", args.expr.as_str());
    let result = scan_source(&source, options);
    report_scan("solve", result, args.format, render)
}
