// src/cli.rs
//! Command-line conversion between JSON report models and JRXML documents.

use crate::error::CliError;
use clap::{Parser, Subcommand};
use jrdesign_jrxml::{ElementOrder, GeneratorConfig, JrxmlGenerator, JrxmlParser, ParserConfig};
use jrdesign_types::Report;
use log::info;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "jrdesign",
    version,
    about = "Convert report designs between JSON models and JRXML documents"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Render a JSON report model as a JRXML document.
    Export {
        /// JSON file holding the report model.
        model: PathBuf,
        /// Where to write the document; stdout when omitted.
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Spaces per nesting level, 0 for a single line.
        #[arg(long, default_value_t = 2)]
        indent: usize,
    },
    /// Read a JRXML document into a JSON report model.
    Import {
        document: PathBuf,
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Keep elements in document order instead of grouping them by kind.
        #[arg(long)]
        document_order: bool,
    },
    /// Check that a document reaches a fixed point after one parse/generate cycle.
    Roundtrip { document: PathBuf },
}

fn emit(output: Option<&Path>, contents: &str, stdout: &mut impl Write) -> Result<(), CliError> {
    match output {
        Some(path) => {
            fs::write(path, contents)?;
            info!("Wrote {}", path.display());
        }
        None => {
            stdout.write_all(contents.as_bytes())?;
            writeln!(stdout)?;
        }
    }
    Ok(())
}

/// Runs one command, writing results to `stdout` unless an output file is given.
pub fn run(cli: &Cli, stdout: &mut impl Write) -> Result<(), CliError> {
    match &cli.command {
        Command::Export {
            model,
            output,
            indent,
        } => {
            info!("Loading report model from {}", model.display());
            let report: Report = serde_json::from_str(&fs::read_to_string(model)?)?;
            let generator = JrxmlGenerator::new(GeneratorConfig::default().with_indent(*indent));
            emit(output.as_deref(), &generator.generate(&report), stdout)
        }
        Command::Import {
            document,
            output,
            document_order,
        } => {
            let order = if *document_order {
                ElementOrder::Document
            } else {
                ElementOrder::Grouped
            };
            let parser = JrxmlParser::new(ParserConfig::default().with_element_order(order))?;
            info!("Parsing report document {}", document.display());
            let report = parser.parse(&fs::read_to_string(document)?)?;
            emit(output.as_deref(), &serde_json::to_string_pretty(&report)?, stdout)
        }
        Command::Roundtrip { document } => {
            let parser = JrxmlParser::new(ParserConfig::default())?;
            let generator = JrxmlGenerator::default();

            let first = parser.parse(&fs::read_to_string(document)?)?;
            let generated = generator.generate(&first);
            let second = parser.parse(&generated)?;
            if first != second {
                return Err(CliError::Unstable(format!(
                    "model of {} changed after regeneration",
                    document.display()
                )));
            }
            if generator.generate(&second) != generated {
                return Err(CliError::Unstable(format!(
                    "document text of {} changed after regeneration",
                    document.display()
                )));
            }
            writeln!(
                stdout,
                "{}: stable ({} bands, {} fields, {} parameters)",
                document.display(),
                first.bands.len(),
                first.fields.len(),
                first.parameters.len()
            )?;
            Ok(())
        }
    }
}
