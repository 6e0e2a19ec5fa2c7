//! Horizontal page sections.

use crate::element::Element;
use crate::keyword::keyword_enum;
use serde::{Deserialize, Serialize};

keyword_enum! {
    /// The role of a band. Declaration order is the order bands appear in a
    /// generated document.
    pub enum BandType {
        Title => "title",
        PageHeader => "pageHeader",
        ColumnHeader => "columnHeader",
        Detail => "detail",
        ColumnFooter => "columnFooter",
        PageFooter => "pageFooter",
        Summary => "summary",
        Background => "background",
        LastPageFooter => "lastPageFooter",
        NoData => "noData",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Band {
    #[serde(rename = "type")]
    pub band_type: BandType,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub elements: Vec<Element>,
}

impl Band {
    pub fn new(band_type: BandType, height: u32) -> Self {
        Self {
            band_type,
            height,
            elements: Vec::new(),
        }
    }

    pub fn with_element(mut self, element: Element) -> Self {
        self.elements.push(element);
        self
    }

    /// Bands with no height and no elements are left out of documents.
    pub fn is_empty(&self) -> bool {
        self.height == 0 && self.elements.is_empty()
    }
}
