mod commands;
mod config;
mod input;
mod json_types;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::config::ConfigArgs;
use commands::detect::DetectArgs;
use commands::scan::ScanArgs;
use commands::solve::SolveArgs;
use commands::Outcome;
use config::ScanConfig;

const AFTER_HELP: &str = "\
EXAMPLES:
  mathscan solve \"6 × 7\"                Solve a single expression
  mathscan solve \"3 + 4 = 7\" --format json
  mathscan detect --file page.txt        Show which line would be solved
  tesseract img.png - | mathscan scan    Solve the first equation in OCR output
  mathscan config --init                 Write a default mathscan.toml

EXIT STATUS:
  0 solved / detected, 1 no math found or could not solve, 2 error
";

/// Find and solve the arithmetic in OCR'd homework text.
#[derive(Parser, Debug)]
#[command(name = "mathscan", version, about, after_help = AFTER_HELP)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Config file (defaults to ./mathscan.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (use multiple times for debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Reduce log output (errors only)
    #[arg(short = 'q', long = "quiet", global = true)]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Pick the arithmetic line out of some text without solving it
    Detect(DetectArgs),
    /// Solve an expression given on the command line
    Solve(SolveArgs),
    /// Run the full pipeline over OCR output from a file or stdin
    Scan(ScanArgs),
    /// Show the effective configuration
    Config(ConfigArgs),
}

impl Cli {
    /// Log level based on -v/-q flags.
    fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(cli: Cli) -> Result<Outcome> {
    if let Command::Config(args) = &cli.command {
        if args.init {
            return commands::config::run(args, &ScanConfig::default(), cli.config.as_deref());
        }
    }

    let config = ScanConfig::load(cli.config.as_deref())?;
    let options = config.to_options();
    tracing::debug!(?options, "configuration loaded");

    match &cli.command {
        Command::Detect(args) => commands::detect::run(args, &options),
        Command::Solve(args) => commands::solve::run(args, &options),
        Command::Scan(args) => commands::scan::run(args, &options),
        Command::Config(args) => commands::config::run(args, &config, cli.config.as_deref()),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.log_level());

    match run(cli) {
        Ok(outcome) => outcome.exit_code(),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            Outcome::Failed.exit_code()
        }
    }
}
