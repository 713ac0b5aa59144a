//! scan subcommand handler.
//!
//! Full pipeline over OCR output, printing the chat message a tutor screen
//! would show.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use mathscan_engine::{chat_message, scan_source, ScanOptions};

use super::{report_scan, OutputFormat, Outcome};
use crate::input;

/// Arguments for scan subcommand
#[derive(Args, Debug)]
pub struct ScanArgs {
    /// File with OCR output ("-" or omitted for stdin)
    #[arg(long, short)]
    pub file: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Run the scan command
pub fn run(args: &ScanArgs, options: &ScanOptions) -> Result<Outcome> {
    let source = input::open(None, args.file.as_deref());
    let result = scan_source(source.as_ref(), options);
    report_scan("scan", result, args.format, chat_message)
}
