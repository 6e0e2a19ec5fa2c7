//! Positioned visual elements placed inside a band.

use crate::decoration::ElementBox;
use crate::keyword::{Keyword, keyword_enum};
use serde::{Deserialize, Serialize};

fn is_false(value: &bool) -> bool {
    !*value
}

keyword_enum! {
    /// `textAlignment` on `<textElement>`.
    pub enum HorizontalAlignment {
        Left => "Left",
        Center => "Center",
        Right => "Right",
        Justified => "Justified",
    }
}

keyword_enum! {
    /// `verticalAlignment` on `<textElement>`.
    pub enum VerticalAlignment {
        Top => "Top",
        Middle => "Middle",
        Bottom => "Bottom",
    }
}

keyword_enum! {
    /// When a text field expression is evaluated.
    #[derive(Default)]
    pub enum EvaluationTime {
        #[default]
        Now => "Now",
        Report => "Report",
        Page => "Page",
        Column => "Column",
        Group => "Group",
        Band => "Band",
        Auto => "Auto",
    }
}

keyword_enum! {
    pub enum PositionType {
        Float => "Float",
        FixRelativeToTop => "FixRelativeToTop",
        FixRelativeToBottom => "FixRelativeToBottom",
    }
}

keyword_enum! {
    /// How an image is fitted into its frame.
    pub enum ScaleImage {
        Clip => "Clip",
        FillFrame => "FillFrame",
        RetainShape => "RetainShape",
        RealHeight => "RealHeight",
        RealSize => "RealSize",
    }
}

keyword_enum! {
    pub enum ImageHAlign {
        Left => "Left",
        Center => "Center",
        Right => "Right",
    }
}

keyword_enum! {
    pub enum ImageVAlign {
        Top => "Top",
        Middle => "Middle",
        Bottom => "Bottom",
    }
}

keyword_enum! {
    #[derive(Default)]
    pub enum LineDirection {
        #[default]
        TopDown => "TopDown",
        BottomUp => "BottomUp",
    }
}

keyword_enum! {
    /// Rectangles are always drawn solid.
    #[derive(Default)]
    pub enum FillMode {
        #[default]
        Solid => "Solid",
    }
}

/// Position and size in pixels. Negative values are carried as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Geometry {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Geometry {
    pub const DEFAULT_WIDTH: i32 = 100;
    pub const DEFAULT_HEIGHT: i32 = 30;
    pub const DEFAULT_LINE_HEIGHT: i32 = 1;

    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// The geometry assumed for an element whose attributes are missing.
    pub fn default_for(kind: &ElementKind) -> Self {
        let height = match kind {
            ElementKind::Line(_) => Self::DEFAULT_LINE_HEIGHT,
            _ => Self::DEFAULT_HEIGHT,
        };
        Self::new(0, 0, Self::DEFAULT_WIDTH, height)
    }
}

impl Default for Geometry {
    fn default() -> Self {
        Self::new(0, 0, Self::DEFAULT_WIDTH, Self::DEFAULT_HEIGHT)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Font {
    #[serde(rename = "fontFamily", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "fontSize", default, skip_serializing_if = "Option::is_none")]
    pub size: Option<f32>,
    #[serde(rename = "isBold", default, skip_serializing_if = "is_false")]
    pub bold: bool,
    #[serde(rename = "isItalic", default, skip_serializing_if = "is_false")]
    pub italic: bool,
    #[serde(rename = "isUnderline", default, skip_serializing_if = "is_false")]
    pub underline: bool,
}

impl Font {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.size.is_none() && !self.bold && !self.italic && !self.underline
    }
}

/// Properties every element kind carries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementCommon {
    #[serde(flatten)]
    pub geometry: Geometry,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backcolor: Option<String>,
    #[serde(rename = "box", default, skip_serializing_if = "Option::is_none")]
    pub element_box: Option<ElementBox>,
    #[serde(flatten)]
    pub font: Font,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_alignment: Option<Keyword<HorizontalAlignment>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vertical_alignment: Option<Keyword<VerticalAlignment>>,
}

impl ElementCommon {
    /// True when any `<textElement>` content is set.
    pub fn has_text_style(&self) -> bool {
        !self.font.is_empty() || self.text_alignment.is_some() || self.vertical_alignment.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StaticText {
    pub text: String,
}

/// A text element whose content comes from an expression.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TextField {
    /// Takes precedence over `field_name`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expression: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_name: Option<String>,
    #[serde(rename = "isStretchWithOverflow", skip_serializing_if = "is_false")]
    pub stretch_with_overflow: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evaluation_time: Option<Keyword<EvaluationTime>>,
    /// Only meaningful with [`EvaluationTime::Group`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evaluation_group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(rename = "isBlankWhenNull", skip_serializing_if = "is_false")]
    pub blank_when_null: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_type: Option<Keyword<PositionType>>,
}

impl TextField {
    pub fn for_field(name: impl Into<String>) -> Self {
        Self {
            field_name: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn with_expression(expression: impl Into<String>) -> Self {
        Self {
            expression: Some(expression.into()),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Image {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_image: Option<Keyword<ScaleImage>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub h_align: Option<Keyword<ImageHAlign>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub v_align: Option<Keyword<ImageVAlign>>,
}

/// A line element.
///
/// A parsed line always carries `direction` and never the legacy
/// `line_direction`, so a model relying on the legacy field (or on no
/// direction at all) reads back as [`Line::normalized`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Line {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<Keyword<LineDirection>>,
    /// Older editor spelling, consulted when `direction` is unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_direction: Option<Keyword<LineDirection>>,
}

impl Line {
    /// The direction written to a document.
    pub fn effective_direction(&self) -> LineDirection {
        self.direction
            .as_ref()
            .and_then(Keyword::known)
            .or_else(|| self.line_direction.as_ref().and_then(Keyword::known))
            .unwrap_or_default()
    }

    /// The same line with its effective direction stored in `direction`.
    pub fn normalized(&self) -> Line {
        Line {
            direction: Some(Keyword::Known(self.effective_direction())),
            line_direction: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rectangle {
    pub fill: FillMode,
}

/// The element variants a band can hold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ElementKind {
    StaticText(StaticText),
    TextField(TextField),
    Image(Image),
    Line(Line),
    Rectangle(Rectangle),
}

impl ElementKind {
    /// Tag name of the element in a report document.
    pub fn tag(&self) -> &'static str {
        match self {
            ElementKind::StaticText(_) => "staticText",
            ElementKind::TextField(_) => "textField",
            ElementKind::Image(_) => "image",
            ElementKind::Line(_) => "line",
            ElementKind::Rectangle(_) => "rectangle",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    #[serde(flatten)]
    pub common: ElementCommon,
    #[serde(flatten)]
    pub kind: ElementKind,
}

impl Element {
    /// An element of `kind` at the default geometry for that kind.
    pub fn new(kind: ElementKind) -> Self {
        let common = ElementCommon {
            geometry: Geometry::default_for(&kind),
            ..Default::default()
        };
        Self { common, kind }
    }

    pub fn static_text(text: impl Into<String>) -> Self {
        Self::new(ElementKind::StaticText(StaticText { text: text.into() }))
    }

    pub fn text_field(field: TextField) -> Self {
        Self::new(ElementKind::TextField(field))
    }

    pub fn image(image: Image) -> Self {
        Self::new(ElementKind::Image(image))
    }

    pub fn line(line: Line) -> Self {
        Self::new(ElementKind::Line(line))
    }

    pub fn rectangle() -> Self {
        Self::new(ElementKind::Rectangle(Rectangle::default()))
    }

    pub fn at(mut self, x: i32, y: i32) -> Self {
        self.common.geometry.x = x;
        self.common.geometry.y = y;
        self
    }

    pub fn sized(mut self, width: i32, height: i32) -> Self {
        self.common.geometry.width = width;
        self.common.geometry.height = height;
        self
    }

    pub fn with_backcolor(mut self, color: impl Into<String>) -> Self {
        self.common.backcolor = Some(color.into());
        self
    }

    pub fn with_box(mut self, element_box: ElementBox) -> Self {
        self.common.element_box = Some(element_box);
        self
    }

    pub fn with_font(mut self, font: Font) -> Self {
        self.common.font = font;
        self
    }

    pub fn aligned(
        mut self,
        horizontal: impl Into<Keyword<HorizontalAlignment>>,
        vertical: impl Into<Keyword<VerticalAlignment>>,
    ) -> Self {
        self.common.text_alignment = Some(horizontal.into());
        self.common.vertical_alignment = Some(vertical.into());
        self
    }

    pub fn tag(&self) -> &'static str {
        self.kind.tag()
    }
}
