//! Tag and attribute vocabulary of the report design DTD.

pub const DOCTYPE: &str = r#"jasperReport PUBLIC "-//JasperReports//DTD Report Design//EN" "http://jasperreports.sourceforge.net/dtds/jasperreport.dtd""#;

pub const ROOT: &str = "jasperReport";
pub const PARAMETER: &str = "parameter";
pub const DEFAULT_VALUE_EXPRESSION: &str = "defaultValueExpression";
pub const FIELD: &str = "field";
pub const BAND: &str = "band";

pub const STATIC_TEXT: &str = "staticText";
pub const TEXT_FIELD: &str = "textField";
pub const IMAGE: &str = "image";
pub const LINE: &str = "line";
pub const RECTANGLE: &str = "rectangle";

/// Element tags in the order the grouped parser visits them.
pub const ELEMENT_TAGS: [&str; 5] = [STATIC_TEXT, TEXT_FIELD, IMAGE, LINE, RECTANGLE];

pub const REPORT_ELEMENT: &str = "reportElement";
pub const BOX: &str = "box";
pub const PEN: &str = "pen";
pub const TEXT_ELEMENT: &str = "textElement";
pub const FONT: &str = "font";
pub const TEXT: &str = "text";
pub const TEXT_FIELD_EXPRESSION: &str = "textFieldExpression";
pub const IMAGE_EXPRESSION: &str = "imageExpression";
pub const GRAPHIC_ELEMENT: &str = "graphicElement";

pub mod attr {
    pub const NAME: &str = "name";
    pub const CLASS: &str = "class";
    pub const PAGE_WIDTH: &str = "pageWidth";
    pub const PAGE_HEIGHT: &str = "pageHeight";
    pub const COLUMN_WIDTH: &str = "columnWidth";
    pub const LEFT_MARGIN: &str = "leftMargin";
    pub const RIGHT_MARGIN: &str = "rightMargin";
    pub const TOP_MARGIN: &str = "topMargin";
    pub const BOTTOM_MARGIN: &str = "bottomMargin";
    pub const HEIGHT: &str = "height";

    pub const X: &str = "x";
    pub const Y: &str = "y";
    pub const WIDTH: &str = "width";
    pub const BACKCOLOR: &str = "backcolor";
    pub const POSITION_TYPE: &str = "positionType";

    pub const PADDING: &str = "padding";
    pub const BORDER: &str = "border";
    pub const BORDER_COLOR: &str = "borderColor";
    pub const LINE_WIDTH: &str = "lineWidth";
    pub const LINE_STYLE: &str = "lineStyle";
    pub const LINE_COLOR: &str = "lineColor";

    pub const TEXT_ALIGNMENT: &str = "textAlignment";
    pub const VERTICAL_ALIGNMENT: &str = "verticalAlignment";
    pub const FONT_NAME: &str = "fontName";
    pub const SIZE: &str = "size";
    pub const IS_BOLD: &str = "isBold";
    pub const IS_ITALIC: &str = "isItalic";
    pub const IS_UNDERLINE: &str = "isUnderline";

    pub const IS_STRETCH_WITH_OVERFLOW: &str = "isStretchWithOverflow";
    pub const EVALUATION_TIME: &str = "evaluationTime";
    pub const EVALUATION_GROUP: &str = "evaluationGroup";
    pub const PATTERN: &str = "pattern";
    pub const IS_BLANK_WHEN_NULL: &str = "isBlankWhenNull";

    pub const SCALE_IMAGE: &str = "scaleImage";
    pub const H_ALIGN: &str = "hAlign";
    pub const V_ALIGN: &str = "vAlign";
    pub const DIRECTION: &str = "direction";
    pub const FILL: &str = "fill";
}

/// Class assumed for declarations without one.
pub const DEFAULT_CLASS: &str = "java.lang.String";

/// Expression written for an image without a path.
pub const EMPTY_IMAGE_EXPRESSION: &str = r#""""#;
