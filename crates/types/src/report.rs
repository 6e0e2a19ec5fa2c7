//! Report-level properties and declarations.

use crate::band::{Band, BandType};
use serde::{Deserialize, Serialize};

/// Page setup of a report. All values are pixels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReportProperties {
    pub name: String,
    pub page_width: u32,
    pub page_height: u32,
    pub left_margin: u32,
    pub right_margin: u32,
    pub top_margin: u32,
    pub bottom_margin: u32,
}

impl ReportProperties {
    pub const DEFAULT_NAME: &'static str = "Unnamed Report";

    /// Printable width between the side margins. Negative when the margins
    /// overlap.
    pub fn column_width(&self) -> i64 {
        i64::from(self.page_width) - i64::from(self.left_margin) - i64::from(self.right_margin)
    }
}

impl Default for ReportProperties {
    fn default() -> Self {
        Self {
            name: Self::DEFAULT_NAME.to_string(),
            page_width: 595,
            page_height: 842,
            left_margin: 20,
            right_margin: 20,
            top_margin: 30,
            bottom_margin: 30,
        }
    }
}

/// A data source field declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    /// Type name echoed into the document, e.g. `java.lang.String`.
    pub class: String,
}

impl Field {
    pub fn new(name: impl Into<String>, class: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            class: class.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    pub name: String,
    pub class: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
}

impl Parameter {
    pub fn new(name: impl Into<String>, class: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            class: class.into(),
            default_value: None,
        }
    }

    pub fn with_default(mut self, expression: impl Into<String>) -> Self {
        self.default_value = Some(expression.into());
        self
    }
}

/// A complete report design.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Report {
    pub properties: ReportProperties,
    pub bands: Vec<Band>,
    pub fields: Vec<Field>,
    pub parameters: Vec<Parameter>,
}

impl Report {
    pub fn new(properties: ReportProperties) -> Self {
        Self {
            properties,
            ..Default::default()
        }
    }

    /// The first band of the given type.
    pub fn band(&self, band_type: BandType) -> Option<&Band> {
        self.bands.iter().find(|band| band.band_type == band_type)
    }
}
