//! Border, padding and pen decoration owned by a single element.

use serde::{Deserialize, Serialize};

/// Line styling for a border.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Pen {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_width: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_style: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_color: Option<String>,
}

impl Pen {
    pub fn is_empty(&self) -> bool {
        self.line_width.is_none() && self.line_style.is_none() && self.line_color.is_none()
    }
}

/// One side of a box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    Top,
    Left,
    Bottom,
    Right,
}

impl Edge {
    /// Document order of the per-edge attributes and pens.
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Left, Edge::Bottom, Edge::Right];

    /// Attribute prefix, e.g. `top` in `topPadding` and `topPen`.
    pub fn prefix(self) -> &'static str {
        match self {
            Edge::Top => "top",
            Edge::Left => "left",
            Edge::Bottom => "bottom",
            Edge::Right => "right",
        }
    }
}

/// Per-edge overrides of the shared box settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EdgeStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pen: Option<Pen>,
}

/// The `<box>` decoration of an element.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ElementBox {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    /// Pen shared by all four edges.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pen: Option<Pen>,
    pub top: EdgeStyle,
    pub left: EdgeStyle,
    pub bottom: EdgeStyle,
    pub right: EdgeStyle,
}

impl ElementBox {
    pub fn edge(&self, edge: Edge) -> &EdgeStyle {
        match edge {
            Edge::Top => &self.top,
            Edge::Left => &self.left,
            Edge::Bottom => &self.bottom,
            Edge::Right => &self.right,
        }
    }

    pub fn edge_mut(&mut self, edge: Edge) -> &mut EdgeStyle {
        match edge {
            Edge::Top => &mut self.top,
            Edge::Left => &mut self.left,
            Edge::Bottom => &mut self.bottom,
            Edge::Right => &mut self.right,
        }
    }

    /// A box with the same border on every side.
    pub fn uniform(border: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            border: Some(border.into()),
            border_color: Some(color.into()),
            ..Default::default()
        }
    }
}
