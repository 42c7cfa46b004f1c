//! Main library for the SportsML to JSON converter.
//!
//! This crate parses SportsML-G2 documents (bare or wrapped in a NewsML-G2
//! `newsItem`) into an owned object graph and serializes that graph as
//! sparse, camel-cased JSON.

pub mod document;
pub mod errors;
pub mod mapping;
pub mod models;
pub mod xml;

pub use document::{parse_file, parse_reader, parse_str};
pub use errors::SportsMlError;
pub use models::SportsContent;

use log::info;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

/// Top-level configuration for a conversion run.
#[derive(Debug)]
pub struct Config {
    pub input_file: PathBuf,
    /// Where to write the JSON; standard output when `None`.
    pub output_file: Option<PathBuf>,
    pub pretty: bool,
}

/// The main entry point for the conversion logic.
///
/// Parses the input file, builds the object graph and writes the JSON
/// projection to the configured destination.
pub fn run(config: Config) -> Result<(), SportsMlError> {
    let start_time = Instant::now();
    info!("Starting conversion");
    info!("  Input: {}", config.input_file.display());
    match &config.output_file {
        Some(path) => info!("  Output: {}", path.display()),
        None => info!("  Output: <stdout>"),
    }

    let parse_start = Instant::now();
    let content = parse_file(&config.input_file)?;
    info!(
        "Parsed document: {} sports-event(s), {} tournament(s), {} schedule(s), {} standing(s), {} statistic(s), {} article(s). (Took {:.2?})",
        content.sports_events.len(),
        content.tournaments.len(),
        content.schedules.len(),
        content.standings.len(),
        content.statistics.len(),
        content.articles.len(),
        parse_start.elapsed()
    );

    let json = content.to_json(config.pretty)?;

    match &config.output_file {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                SportsMlError::Io(e, format!("Failed to create output file {}", path.display()))
            })?;
            write_json(BufWriter::new(file), &json)?;
        }
        None => write_json(io::stdout().lock(), &json)?,
    }

    info!("Total execution time: {:.2?}", start_time.elapsed());
    Ok(())
}

fn write_json<W: Write>(mut writer: W, json: &str) -> Result<(), SportsMlError> {
    writeln!(writer, "{}", json)
        .and_then(|_| writer.flush())
        .map_err(|e| SportsMlError::Io(e, "Failed to write JSON output".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_run_writes_output_file() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.xml");
        let output = dir.path().join("out.json");
        fs::write(
            &input,
            r#"<sports-content><sports-metadata doc-id="d.1"/></sports-content>"#,
        )
        .unwrap();

        run(Config {
            input_file: input,
            output_file: Some(output.clone()),
            pretty: false,
        })
        .unwrap();

        assert_eq!(
            fs::read_to_string(output).unwrap(),
            "{\"sportsMetadata\":{\"docId\":\"d.1\"}}\n"
        );
    }

    #[test]
    fn test_run_does_not_create_output_on_failure() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.xml");
        let output = dir.path().join("out.json");
        fs::write(&input, r#"<html/>"#).unwrap();

        let result = run(Config {
            input_file: input,
            output_file: Some(output.clone()),
            pretty: true,
        });

        assert!(matches!(result, Err(SportsMlError::UnrecognizedDocument(_))));
        assert!(!output.exists());
    }
}
