//! Document text → report model.
//!
//! Parsing is tolerant. Apart from a missing root element, every problem
//! degrades to a default: missing or unreadable attributes take the same
//! defaults the generator assumes, enumeration values outside their set are
//! dropped, and unknown tags are ignored.

use crate::box_codec::read_box;
use crate::config::{ElementOrder, ParserConfig};
use crate::error::JrxmlError;
use crate::expression::referenced_field;
use crate::names::{self, attr};
use jrdesign_types::{
    Band, BandType, Element, ElementCommon, ElementKind, EvaluationTime, Field, FillMode, Font,
    Geometry, Image, Keyword, KeywordEnum, Line, Parameter, Rectangle, Report, ReportProperties,
    StaticText, TextField,
};
use log::{debug, trace};
use roxmltree::{Document, Node, ParsingOptions};
use std::str::FromStr;

/// Smallest document the parser must accept, used to check the XML backend.
const PROBE_DOCUMENT: &str = concat!(
    "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n",
    "<!DOCTYPE jasperReport PUBLIC \"-//JasperReports//DTD Report Design//EN\" ",
    "\"http://jasperreports.sourceforge.net/dtds/jasperreport.dtd\">\n",
    "<jasperReport name=\"probe\"><title><band height=\"1\"/></title></jasperReport>",
);

pub(crate) fn attr_string(node: Node<'_, '_>, name: &str) -> Option<String> {
    node.attribute(name).map(str::to_string)
}

/// Reads and converts an attribute. Unconvertible values count as absent.
pub(crate) fn attr_parsed<T: FromStr>(node: Node<'_, '_>, name: &str) -> Option<T> {
    let raw = node.attribute(name)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            debug!(
                "Ignoring unreadable {}=\"{}\" on <{}>",
                name,
                raw,
                node.tag_name().name()
            );
            None
        }
    }
}

fn attr_or<T: FromStr>(node: Node<'_, '_>, name: &str, default: T) -> T {
    attr_parsed(node, name).unwrap_or(default)
}

fn attr_flag(node: Node<'_, '_>, name: &str) -> bool {
    node.attribute(name).is_some_and(|value| value.trim() == "true")
}

/// Reads an enumerated attribute, dropping values outside the enumeration.
fn attr_keyword<T: KeywordEnum>(node: Node<'_, '_>, name: &str) -> Option<Keyword<T>> {
    let raw = node.attribute(name)?;
    match T::from_keyword(raw) {
        Some(member) => Some(Keyword::Known(member)),
        None => {
            debug!(
                "Dropping {}=\"{}\" on <{}>: not a recognised value",
                name,
                raw,
                node.tag_name().name()
            );
            None
        }
    }
}

fn child<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.children().find(|c| c.has_tag_name(name))
}

/// Character content of `node`, including every CDATA section.
fn text_content(node: Node<'_, '_>) -> String {
    node.children()
        .filter(|c| c.is_text())
        .filter_map(|c| c.text())
        .collect()
}

fn child_text(node: Node<'_, '_>, name: &str) -> Option<String> {
    child(node, name).map(text_content)
}

/// Reads report documents into [`Report`] values.
#[derive(Debug, Clone)]
pub struct JrxmlParser {
    config: ParserConfig,
}

impl JrxmlParser {
    /// Creates a parser after checking that the XML backend accepts a report
    /// document with its DOCTYPE declaration.
    pub fn new(config: ParserConfig) -> Result<Self, JrxmlError> {
        let parser = Self { config };
        parser
            .load(PROBE_DOCUMENT)
            .map_err(|e| JrxmlError::Capability(e.to_string()))?;
        Ok(parser)
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    fn load<'input>(&self, text: &'input str) -> Result<Document<'input>, JrxmlError> {
        let mut options = ParsingOptions::default();
        options.allow_dtd = true;
        options.nodes_limit = self.config.nodes_limit;
        Document::parse_with_options(text, options).map_err(|err| match err {
            roxmltree::Error::NoRootNode => JrxmlError::MissingRoot { found: None },
            other => JrxmlError::Xml(other),
        })
    }

    /// Parses a complete document. Fails only when the text is not XML or
    /// holds no `<jasperReport>` element.
    pub fn parse(&self, text: &str) -> Result<Report, JrxmlError> {
        let doc = self.load(text)?;
        let root = doc
            .descendants()
            .find(|n| n.has_tag_name(names::ROOT))
            .ok_or_else(|| JrxmlError::MissingRoot {
                found: Some(doc.root_element().tag_name().name().to_string()),
            })?;

        let report = Report {
            properties: read_properties(root),
            parameters: root
                .children()
                .filter(|n| n.has_tag_name(names::PARAMETER))
                .filter_map(read_parameter)
                .collect(),
            fields: root
                .children()
                .filter(|n| n.has_tag_name(names::FIELD))
                .filter_map(read_field)
                .collect(),
            bands: BandType::ALL
                .iter()
                .filter_map(|band_type| self.read_band(root, *band_type))
                .collect(),
        };
        debug!(
            "Parsed report '{}': {} bands, {} fields, {} parameters",
            report.properties.name,
            report.bands.len(),
            report.fields.len(),
            report.parameters.len()
        );
        Ok(report)
    }

    fn read_band(&self, root: Node<'_, '_>, band_type: BandType) -> Option<Band> {
        let wrapper = child(root, band_type.as_str())?;
        let Some(band) = child(wrapper, names::BAND) else {
            debug!("<{}> has no <band>, skipping", band_type.as_str());
            return None;
        };
        trace!("Reading <{}> band", band_type.as_str());

        let elements = match self.config.element_order {
            ElementOrder::Grouped => names::ELEMENT_TAGS
                .iter()
                .flat_map(|tag| band.descendants().filter(move |n| n.has_tag_name(*tag)))
                .filter_map(read_element)
                .collect(),
            ElementOrder::Document => band
                .descendants()
                .filter(|n| n.is_element())
                .filter_map(read_element)
                .collect(),
        };

        Some(Band {
            band_type,
            height: attr_or(band, attr::HEIGHT, 0),
            elements,
        })
    }
}

fn read_properties(root: Node<'_, '_>) -> ReportProperties {
    let defaults = ReportProperties::default();
    ReportProperties {
        name: attr_string(root, attr::NAME).unwrap_or(defaults.name),
        page_width: attr_or(root, attr::PAGE_WIDTH, defaults.page_width),
        page_height: attr_or(root, attr::PAGE_HEIGHT, defaults.page_height),
        left_margin: attr_or(root, attr::LEFT_MARGIN, defaults.left_margin),
        right_margin: attr_or(root, attr::RIGHT_MARGIN, defaults.right_margin),
        top_margin: attr_or(root, attr::TOP_MARGIN, defaults.top_margin),
        bottom_margin: attr_or(root, attr::BOTTOM_MARGIN, defaults.bottom_margin),
    }
}

/// Name and class of a declaration; `None` when it cannot be kept.
fn declaration(node: Node<'_, '_>) -> Option<(String, String)> {
    let name = node.attribute(attr::NAME).unwrap_or_default();
    let class = node.attribute(attr::CLASS).unwrap_or(names::DEFAULT_CLASS);
    if name.is_empty() || class.is_empty() {
        debug!("Skipping <{}> without name or class", node.tag_name().name());
        return None;
    }
    Some((name.to_string(), class.to_string()))
}

fn read_parameter(node: Node<'_, '_>) -> Option<Parameter> {
    let (name, class) = declaration(node)?;
    let default_value = child_text(node, names::DEFAULT_VALUE_EXPRESSION)
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty());
    Some(Parameter {
        name,
        class,
        default_value,
    })
}

fn read_field(node: Node<'_, '_>) -> Option<Field> {
    let (name, class) = declaration(node)?;
    Some(Field { name, class })
}

fn read_element(node: Node<'_, '_>) -> Option<Element> {
    let kind = match node.tag_name().name() {
        names::STATIC_TEXT => ElementKind::StaticText(StaticText {
            text: child_text(node, names::TEXT).unwrap_or_default(),
        }),
        names::TEXT_FIELD => ElementKind::TextField(read_text_field(node)),
        names::IMAGE => ElementKind::Image(read_image(node)),
        names::LINE => ElementKind::Line(Line {
            direction: attr_keyword(node, attr::DIRECTION),
            line_direction: None,
        }),
        names::RECTANGLE => ElementKind::Rectangle(Rectangle {
            fill: child(node, names::GRAPHIC_ELEMENT)
                .and_then(|graphic| attr_keyword::<FillMode>(graphic, attr::FILL))
                .and_then(|fill| fill.known())
                .unwrap_or_default(),
        }),
        _ => return None,
    };

    let mut common = ElementCommon {
        geometry: Geometry::default_for(&kind),
        ..Default::default()
    };
    if let Some(report_element) = child(node, names::REPORT_ELEMENT) {
        let defaults = common.geometry;
        common.geometry = Geometry {
            x: attr_or(report_element, attr::X, defaults.x),
            y: attr_or(report_element, attr::Y, defaults.y),
            width: attr_or(report_element, attr::WIDTH, defaults.width),
            height: attr_or(report_element, attr::HEIGHT, defaults.height),
        };
        common.backcolor = attr_string(report_element, attr::BACKCOLOR);
    }
    common.element_box = child(node, names::BOX).map(read_box);
    if matches!(kind, ElementKind::StaticText(_) | ElementKind::TextField(_)) {
        read_text_element(node, &mut common);
    }

    Some(Element { common, kind })
}

fn read_text_element(node: Node<'_, '_>, common: &mut ElementCommon) {
    let Some(text_element) = child(node, names::TEXT_ELEMENT) else {
        return;
    };
    common.text_alignment = attr_keyword(text_element, attr::TEXT_ALIGNMENT);
    common.vertical_alignment = attr_keyword(text_element, attr::VERTICAL_ALIGNMENT);
    if let Some(font) = child(text_element, names::FONT) {
        common.font = Font {
            name: attr_string(font, attr::FONT_NAME),
            size: attr_parsed(font, attr::SIZE),
            bold: attr_flag(font, attr::IS_BOLD),
            italic: attr_flag(font, attr::IS_ITALIC),
            underline: attr_flag(font, attr::IS_UNDERLINE),
        };
    }
}

fn read_text_field(node: Node<'_, '_>) -> TextField {
    let evaluation_time = attr_keyword(node, attr::EVALUATION_TIME);
    let evaluation_group = match evaluation_time {
        Some(Keyword::Known(EvaluationTime::Group)) => attr_string(node, attr::EVALUATION_GROUP),
        _ => None,
    };

    let (expression, field_name) = match child_text(node, names::TEXT_FIELD_EXPRESSION) {
        Some(expression) => match referenced_field(&expression) {
            Some(field) => (None, Some(field.to_string())),
            None => (Some(expression), None),
        },
        None => (None, None),
    };

    TextField {
        expression,
        field_name,
        stretch_with_overflow: attr_flag(node, attr::IS_STRETCH_WITH_OVERFLOW),
        evaluation_time,
        evaluation_group,
        pattern: attr_string(node, attr::PATTERN),
        blank_when_null: attr_flag(node, attr::IS_BLANK_WHEN_NULL),
        position_type: child(node, names::REPORT_ELEMENT)
            .and_then(|report_element| attr_keyword(report_element, attr::POSITION_TYPE)),
    }
}

fn read_image(node: Node<'_, '_>) -> Image {
    Image {
        image_path: child_text(node, names::IMAGE_EXPRESSION)
            .filter(|path| path != names::EMPTY_IMAGE_EXPRESSION),
        scale_image: attr_keyword(node, attr::SCALE_IMAGE),
        h_align: attr_keyword(node, attr::H_ALIGN),
        v_align: attr_keyword(node, attr::V_ALIGN),
    }
}
