use thiserror::Error;

fn describe_found(found: &Option<String>) -> String {
    match found {
        Some(tag) => format!(", found <{tag}>"),
        None => String::new(),
    }
}

#[derive(Error, Debug)]
pub enum JrxmlError {
    /// The document contains no `<jasperReport>` element.
    #[error("document has no <jasperReport> root element{}", describe_found(.found))]
    MissingRoot { found: Option<String> },

    #[error("malformed report document: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("XML backend cannot read report documents: {0}")]
    Capability(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("XML writer error: {0}")]
    Write(#[from] quick_xml::Error),
}

impl JrxmlError {
    /// True for the failures that mean "this is not a report document".
    pub fn is_structural(&self) -> bool {
        matches!(self, JrxmlError::MissingRoot { .. } | JrxmlError::Xml(_))
    }
}
