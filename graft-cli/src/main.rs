//! # Graft CLI - Crossbreed Candidate Calculator
//!
//! Command-line interface for finding plant crossbreed combinations that
//! reliably produce a desired gene sequence.
//!
//! ## Usage
//!
//! ```bash
//! # Find unambiguous crossbreeds from a sequence file
//! graft -i plants.txt
//!
//! # Allow combinations with up to two possible outcomes
//! graft -i plants.txt -p 2
//!
//! # Also reject outcomes containing a GG run
//! graft -i plants.txt -x GG
//!
//! # Tab-separated output into a file
//! graft -i plants.txt -f tsv -o candidates.tsv
//! ```
//!
//! ## Options
//!
//! - `-i, --input <FILE>`: Input file, one gene sequence per line (default: stdin)
//! - `-o, --output <FILE>`: Output file (default: stdout)
//! - `-p, --possibilities <N>`: Maximum distinct outcomes per combination, 1-2 (default: 1)
//! - `-x, --exclude <MARKER>`: Extra marker to exclude from outcomes (repeatable)
//! - `-X, --default-exclude <MARKER>`: Replace the baseline excluded markers W, X (repeatable)
//! - `-f, --format <FORMAT>`: Output format: plain, tsv (default: plain)
//! - `-q, --quiet`: Suppress the run summary on stderr

use clap::{Arg, ArgAction, Command};
use graft_core::CrossbreedCalculator;
use graft_core::config::{CrossbreedConfig, OutputFormat};
use graft_core::output::write_results;
use std::fs::File;
use std::io::{self, BufWriter, Write};

/// Main entry point for the Graft CLI application.
///
/// Parses command-line arguments, configures the calculator, runs the
/// calculation, and writes the candidate listing in the requested format.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = Command::new("graft")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Plant crossbreed candidate calculator")
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .value_name("FILE")
                .help("Input file, one gene sequence per line (default: stdin)"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Output file (default: stdout)"),
        )
        .arg(
            Arg::new("possibilities")
                .short('p')
                .long("possibilities")
                .value_name("N")
                .help("Maximum distinct outcomes a combination may produce (1-2)")
                .default_value("1"),
        )
        .arg(
            Arg::new("exclude")
                .short('x')
                .long("exclude")
                .value_name("MARKER")
                .action(ArgAction::Append)
                .help("Extra marker to exclude from outcomes (repeatable)"),
        )
        .arg(
            Arg::new("default-exclude")
                .short('X')
                .long("default-exclude")
                .value_name("MARKER")
                .action(ArgAction::Append)
                .help("Replace the baseline excluded markers W, X (repeatable)"),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .value_name("FORMAT")
                .help("Output format: plain, tsv")
                .default_value("plain"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .action(ArgAction::SetTrue)
                .help("Suppress the run summary"),
        )
        .get_matches();

    // Parse options
    let possibilities: u8 = matches
        .get_one::<String>("possibilities")
        .unwrap()
        .parse()
        .map_err(|_| "Invalid possibilities value")?;

    let mut config = CrossbreedConfig {
        possibilities,
        exclude: matches
            .get_many::<String>("exclude")
            .map(|values| values.cloned().collect())
            .unwrap_or_default(),
        quiet: matches.get_flag("quiet"),
        ..Default::default()
    };

    if let Some(markers) = matches.get_many::<String>("default-exclude") {
        config.default_exclude = markers.cloned().collect();
    }

    config.output_format = match matches.get_one::<String>("format").unwrap().as_str() {
        "plain" => OutputFormat::Plain,
        "tsv" => OutputFormat::Tsv,
        _ => return Err("Invalid output format".into()),
    };

    config.validate()?;

    let calculator = CrossbreedCalculator::new(config);
    let results = if let Some(input_file) = matches.get_one::<String>("input") {
        calculator.calculate_file(input_file)?
    } else {
        calculator.calculate_reader(io::stdin().lock())?
    };

    // Write output
    let mut writer: Box<dyn Write> = if let Some(output_file) = matches.get_one::<String>("output")
    {
        Box::new(BufWriter::new(File::create(output_file)?))
    } else {
        Box::new(BufWriter::new(io::stdout()))
    };

    write_results(&mut writer, &results, calculator.config.output_format)?;
    writer.flush()?;

    if !calculator.config.quiet {
        eprintln!(
            "Calculation complete! {} distinct sequences, {} pool slots, {} combinations, {} candidates.",
            results.pool_info.distinct_sequences,
            results.pool_info.pool_size,
            results.pool_info.combinations,
            results.pool_info.num_candidates
        );
    }

    Ok(())
}
