//! llmd: generate fillable markdown worksheets and extract their answers.
#![allow(clippy::multiple_crate_versions)]

use clap::{Parser, Subcommand};
use llmd::{config, extract, generate, input};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "llmd")]
#[command(about = "Markdown worksheet templating for LLM writing workflows", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a fillable worksheet from a template
    Generate {
        /// Template file, or - for stdin
        #[arg(value_name = "TEMPLATE")]
        template: PathBuf,

        /// Generate only the named section
        #[arg(long, short = 's')]
        section: Option<String>,

        /// Load dotted-path copy counts from a JSON file
        #[arg(long, value_name = "FILE")]
        quantities: Option<PathBuf>,

        /// Set one dotted-path copy count, e.g. Outline.Chapter=8
        #[arg(long, value_name = "PATH=N")]
        count: Vec<String>,
    },
    /// Extract structured answers from a completed worksheet
    Extract {
        /// Worksheet file, or - for stdin
        #[arg(value_name = "WORKSHEET")]
        worksheet: PathBuf,

        /// Extract only the named section
        #[arg(long, short = 's')]
        section: Option<String>,

        /// Print the section's flat field map instead of its raw text
        #[arg(long, requires = "section")]
        fields: bool,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();
    let cfg = config::Config::load();

    match run(args, &cfg) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args, cfg: &config::Config) -> io::Result<()> {
    match args.command {
        Command::Generate {
            template,
            section,
            quantities,
            count,
        } => {
            let text = input::read_document(&template)?;
            let mut overrides: llmd::QuantityOverrides = match quantities {
                Some(path) => {
                    let contents = input::read_document(&path)?;
                    serde_json::from_str(&contents)
                        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?
                }
                None => llmd::QuantityOverrides::new(),
            };
            for entry in count {
                let (path, value) = parse_count(&entry)?;
                overrides.insert(path, value);
            }
            let options = generate::GenerateOptions {
                unbounded_default: cfg.unbounded_default,
                // extraction needs three dashes or more to see a rule
                rule_width: cfg.rule_width.max(3),
            };
            let worksheet = generate::generate_with(&text, section.as_deref(), &overrides, options)
                .map_err(invalid_data)?;
            println!("{worksheet}");
        }
        Command::Extract {
            worksheet,
            section,
            fields,
        } => {
            let text = input::read_document(&worksheet)?;
            match section {
                Some(name) if fields => {
                    let map = extract::extract_fields(&text, &name).map_err(invalid_data)?;
                    let json = serde_json::to_string_pretty(&map).map_err(io::Error::other)?;
                    println!("{json}");
                }
                Some(name) => {
                    let raw = extract::extract_section(&text, &name).map_err(invalid_data)?;
                    println!("{raw}");
                }
                None => {
                    let sections = extract::extract_all(&text);
                    let json = serde_json::to_string_pretty(&sections).map_err(io::Error::other)?;
                    println!("{json}");
                }
            }
        }
    }
    Ok(())
}

/// Convert a library error for uniform stderr reporting.
fn invalid_data(e: llmd::Error) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, e.to_string())
}

/// Parse one --count entry of the form PATH=N.
fn parse_count(entry: &str) -> io::Result<(String, usize)> {
    let Some((path, value)) = entry.split_once('=') else {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("expected PATH=N, got '{entry}'"),
        ));
    };
    let value = value.trim().parse().map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("bad count in '{entry}': {e}"),
        )
    })?;
    Ok((path.trim().to_string(), value))
}
