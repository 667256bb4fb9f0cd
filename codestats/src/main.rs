//! # codestats
//!
//! A CLI tool for counting non-blank lines of code by language, GitHub
//! style.
//!
//! ## Overview
//!
//! codestats is built on top of codestatslib and provides a command-line
//! interface for measuring code volume. In git mode it honors each
//! repository's own `.gitignore` and reports nested submodules as separate
//! sections instead of folding them into the enclosing repository.
//!
//! ## Usage
//!
//! ```bash
//! # Count lines in the current directory
//! codestats
//!
//! # Respect .gitignore rules and submodule boundaries
//! codestats ~/src/myproject -g
//!
//! # Output as JSON
//! codestats . --output json
//!
//! # Use a custom language registry
//! codestats . --config languages.yml
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Arg, ArgAction, ArgMatches, Command};
use codestatslib::{scan, LanguageConfig, ScanOptions};

mod render;

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("codestats")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Count non-blank lines of code by language, GitHub style")
        .arg(
            Arg::new("path")
                .help("Path to analyze (defaults to current directory)")
                .default_value("."),
        )
        .arg(
            Arg::new("git-repo")
                .short('g')
                .long("git-repo")
                .action(ArgAction::SetTrue)
                .help("Honor per-repository .gitignore rules and report submodules separately"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("FILE")
                .help("Language registry file (YAML); defaults to the embedded registry"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_parser(["table", "json"])
                .default_value("table")
                .help("Output format"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("List recovered errors after the report"),
        )
}

fn run(matches: &ArgMatches) -> anyhow::Result<()> {
    let path = matches
        .get_one::<String>("path")
        .map(|s| s.as_str())
        .unwrap_or(".");
    let root = std::fs::canonicalize(path).unwrap_or_else(|_| PathBuf::from(path));

    let config = match matches.get_one::<String>("config") {
        Some(file) => {
            LanguageConfig::from_path(file).with_context(|| format!("loading {file}"))?
        }
        None => LanguageConfig::embedded().context("parsing embedded language registry")?,
    };

    let options = ScanOptions::new().git_mode(matches.get_flag("git-repo"));
    let report = scan(&root, &config, options)?;

    match matches.get_one::<String>("output").map(String::as_str) {
        Some("json") => println!("{}", serde_json::to_string_pretty(&report)?),
        _ => print!("{}", render::render_report(&report, &config)),
    }

    if matches.get_flag("verbose") && !report.diagnostics.is_empty() {
        eprint!("{}", render::render_diagnostics(&report.diagnostics));
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let matches = build_command().get_matches();

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
