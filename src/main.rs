//! Main binary entry point for sportsml-json.

use clap::Parser;
use sportsml_json::Config;
use sportsml_json::errors::SportsMlError;
use std::path::PathBuf;
use std::process::ExitCode;

/// Convert a SportsML-G2 document to JSON.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// SportsML-G2 file, bare sports-content or NewsML-G2 newsItem
    #[arg(value_name = "FILE")]
    input: PathBuf,

    #[arg(short, long, value_name = "FILE", help = "Write JSON to FILE instead of stdout")]
    output: Option<PathBuf>,

    #[arg(long, help = "Emit single-line JSON")]
    compact: bool,

    #[arg(short, long)]
    verbose: bool,
}

fn setup_logging(verbose: bool) {
    let filter_level = if verbose {
        log::LevelFilter::Info
    } else {
        log::LevelFilter::Warn
    };

    env_logger::Builder::new()
        .filter(None, filter_level)
        .format_timestamp(None)
        .format_target(false)
        .init();
}

fn run_app() -> Result<(), SportsMlError> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let config = Config {
        input_file: cli.input,
        output_file: cli.output,
        pretty: !cli.compact,
    };

    sportsml_json::run(config)
}

fn main() -> ExitCode {
    match run_app() {
        Ok(_) => {
            log::info!("Conversion completed successfully.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("A fatal error occurred:");
            log::error!("{}", e);
            let mut source = std::error::Error::source(&e);
            while let Some(s) = source {
                log::error!("  Caused by: {}", s);
                source = std::error::Error::source(s);
            }
            ExitCode::FAILURE
        }
    }
}
