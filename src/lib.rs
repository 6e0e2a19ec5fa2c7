//! Report design import/export.
//!
//! Re-exports the design model and the JRXML codec, and hosts the command-line
//! front end used by the `jrdesign` binary.

pub mod cli;
pub mod error;

pub use error::CliError;
pub use jrdesign_jrxml::{
    ElementOrder, GeneratorConfig, JrxmlError, JrxmlGenerator, JrxmlParser, ParserConfig, generate,
    parse,
};
pub use jrdesign_types as model;
pub use jrdesign_types::Report;
