// src/error.rs
//! Errors surfaced by the command-line front end.

use jrdesign_jrxml::JrxmlError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON model error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Report document error: {0}")]
    Jrxml(#[from] JrxmlError),
    #[error("Document is not stable under parse/generate: {0}")]
    Unstable(String),
}
