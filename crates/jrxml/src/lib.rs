//! JRXML codec for the report design model.
//!
//! [`JrxmlGenerator`] turns a [`Report`] into a document that declares the
//! JasperReports report-design DTD. [`JrxmlParser`] reads such a document back.
//! For a report using only recognised enumeration values,
//! `parse(generate(report))` equals `report` up to band order (bands come back
//! in [`BandType`](jrdesign_types::BandType) order) and, with the default
//! [`ElementOrder::Grouped`], element order within a band.

pub mod config;
pub mod error;
pub mod expression;
pub mod generator;
pub mod names;
pub mod parser;

mod box_codec;

pub use config::{ElementOrder, GeneratorConfig, ParserConfig};
pub use error::JrxmlError;
pub use generator::JrxmlGenerator;
pub use parser::JrxmlParser;

use jrdesign_types::Report;

/// Renders `report` with the default configuration.
pub fn generate(report: &Report) -> String {
    JrxmlGenerator::default().generate(report)
}

/// Parses `text` with the default configuration.
pub fn parse(text: &str) -> Result<Report, JrxmlError> {
    JrxmlParser::new(ParserConfig::default())?.parse(text)
}
