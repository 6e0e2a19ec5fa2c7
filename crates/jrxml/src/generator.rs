//! Report model → document text.
//!
//! Output is deterministic: the same model always yields the same bytes.
//! Values that cannot be represented (an alignment outside its enumeration,
//! a second band of a type already written) are left out rather than
//! reported.

use crate::box_codec::box_tags;
use crate::config::GeneratorConfig;
use crate::error::JrxmlError;
use crate::expression::field_reference;
use crate::names::{self, attr};
use jrdesign_types::{
    Band, BandType, Element, ElementCommon, ElementKind, EvaluationTime, Field, Image, Keyword,
    KeywordEnum, Line, Parameter, Report, ReportProperties, TextField,
};
use log::{debug, error, trace, warn};
use quick_xml::Writer;
use quick_xml::escape::escape;
use quick_xml::events::attributes::Attribute;
use quick_xml::events::{BytesCData, BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::name::QName;
use std::borrow::Cow;
use std::io::Write;

type WriteResult = Result<(), JrxmlError>;

/// Character references for the whitespace that attribute-value
/// normalization would otherwise turn into spaces.
const WHITESPACE_REFERENCES: [(char, &str); 3] = [('\t', "&#9;"), ('\n', "&#10;"), ('\r', "&#13;")];

/// `&#13;`, written between CDATA sections so carriage returns survive
/// end-of-line normalization.
const CARRIAGE_RETURN: &str = "&#13;";

fn escape_attribute(value: &str) -> String {
    let mut escaped = escape(value).into_owned();
    for (ch, reference) in WHITESPACE_REFERENCES {
        if escaped.contains(ch) {
            escaped = escaped.replace(ch, reference);
        }
    }
    escaped
}

/// Appends `name="value"`, escaping the value so it reads back unchanged.
pub(crate) fn push_attr(tag: &mut BytesStart<'_>, name: &str, value: &str) {
    tag.push_attribute(Attribute {
        key: QName(name.as_bytes()),
        value: Cow::Owned(escape_attribute(value).into_bytes()),
    });
}

fn push<V: ToString>(tag: &mut BytesStart<'_>, name: &str, value: V) {
    push_attr(tag, name, &value.to_string());
}

fn push_opt(tag: &mut BytesStart<'_>, name: &str, value: Option<&str>) {
    if let Some(value) = value {
        push_attr(tag, name, value);
    }
}

fn push_flag(tag: &mut BytesStart<'_>, name: &str, value: bool) {
    if value {
        push_attr(tag, name, "true");
    }
}

/// Writes an enumerated attribute only when its value is a known member.
fn push_keyword<T: KeywordEnum>(tag: &mut BytesStart<'_>, name: &str, value: Option<&Keyword<T>>) {
    match value {
        Some(Keyword::Known(member)) => push_attr(tag, name, member.as_str()),
        Some(Keyword::Other(raw)) => {
            debug!("Omitting {}=\"{}\": not a recognised value", name, raw);
        }
        None => {}
    }
}

/// Splits text so that no section contains the CDATA terminator.
fn cdata_sections(text: &str) -> Vec<&str> {
    let mut sections = Vec::new();
    let mut rest = text;
    while let Some(pos) = rest.find("]]>") {
        sections.push(&rest[..pos + 2]);
        rest = &rest[pos + 2..];
    }
    sections.push(rest);
    sections
}

/// Thin event layer over the quick-xml writer.
struct DocumentWriter<W: Write> {
    xml: Writer<W>,
}

impl<W: Write> DocumentWriter<W> {
    fn new(sink: W, indent: usize) -> Self {
        let xml = if indent == 0 {
            Writer::new(sink)
        } else {
            Writer::new_with_indent(sink, b' ', indent)
        };
        Self { xml }
    }

    fn open(&mut self, tag: BytesStart<'_>) -> WriteResult {
        self.xml.write_event(Event::Start(tag))?;
        Ok(())
    }

    fn close(&mut self, name: &str) -> WriteResult {
        self.xml.write_event(Event::End(BytesEnd::new(name)))?;
        Ok(())
    }

    fn empty(&mut self, tag: BytesStart<'_>) -> WriteResult {
        self.xml.write_event(Event::Empty(tag))?;
        Ok(())
    }

    /// `<name><![CDATA[text]]></name>`, with each carriage return written
    /// as a character reference between sections.
    fn cdata_element(&mut self, name: &str, text: &str) -> WriteResult {
        self.open(BytesStart::new(name))?;
        for (i, line) in text.split('\r').enumerate() {
            if i > 0 {
                self.xml
                    .write_event(Event::Text(BytesText::from_escaped(CARRIAGE_RETURN)))?;
            }
            if line.is_empty() && !text.is_empty() {
                continue;
            }
            for section in cdata_sections(line) {
                self.xml.write_event(Event::CData(BytesCData::new(section)))?;
            }
        }
        self.close(name)
    }

    fn header(&mut self) -> WriteResult {
        self.xml
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        self.xml
            .write_event(Event::DocType(BytesText::from_escaped(names::DOCTYPE)))?;
        Ok(())
    }
}

/// Serializes [`Report`] values into report documents.
#[derive(Debug, Clone, Default)]
pub struct JrxmlGenerator {
    config: GeneratorConfig,
}

impl JrxmlGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Renders the whole document.
    pub fn generate(&self, report: &Report) -> String {
        let mut out = Vec::new();
        // Vec<u8> never reports I/O errors.
        if let Err(err) = self.write_report(&mut out, report) {
            error!("Writing report '{}' to memory failed: {}", report.properties.name, err);
        }
        match String::from_utf8(out) {
            Ok(text) => text,
            Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
        }
    }

    /// Streams the document into `sink` and hands the sink back.
    pub fn generate_to_writer<W: Write>(&self, report: &Report, mut sink: W) -> Result<W, JrxmlError> {
        self.write_report(&mut sink, report)?;
        sink.flush()?;
        Ok(sink)
    }

    fn write_report<W: Write>(&self, sink: W, report: &Report) -> WriteResult {
        let mut out = DocumentWriter::new(sink, self.config.indent);
        out.header()?;
        out.open(root_tag(&report.properties))?;

        for parameter in &report.parameters {
            write_parameter(&mut out, parameter)?;
        }
        for field in &report.fields {
            write_field(&mut out, field)?;
        }
        for band_type in BandType::ALL {
            let mut candidates = report.bands.iter().filter(|b| b.band_type == *band_type);
            let Some(band) = candidates.next() else {
                continue;
            };
            if candidates.next().is_some() {
                warn!(
                    "Report '{}' has more than one <{}> band; only the first is written",
                    report.properties.name,
                    band_type.as_str()
                );
            }
            if band.is_empty() {
                trace!("Skipping empty <{}> band", band_type.as_str());
                continue;
            }
            write_band(&mut out, band)?;
        }

        out.close(names::ROOT)
    }
}

fn root_tag(properties: &ReportProperties) -> BytesStart<'static> {
    let mut tag = BytesStart::new(names::ROOT);
    push(&mut tag, attr::NAME, &properties.name);
    push(&mut tag, attr::PAGE_WIDTH, properties.page_width);
    push(&mut tag, attr::PAGE_HEIGHT, properties.page_height);
    push(&mut tag, attr::COLUMN_WIDTH, properties.column_width());
    push(&mut tag, attr::LEFT_MARGIN, properties.left_margin);
    push(&mut tag, attr::RIGHT_MARGIN, properties.right_margin);
    push(&mut tag, attr::TOP_MARGIN, properties.top_margin);
    push(&mut tag, attr::BOTTOM_MARGIN, properties.bottom_margin);
    tag
}

fn declaration_tag(kind: &'static str, name: &str, class: &str) -> Option<BytesStart<'static>> {
    if name.is_empty() || class.is_empty() {
        debug!("Skipping <{}> declaration without name or class", kind);
        return None;
    }
    let mut tag = BytesStart::new(kind);
    push(&mut tag, attr::NAME, name);
    push(&mut tag, attr::CLASS, class);
    Some(tag)
}

fn write_parameter<W: Write>(out: &mut DocumentWriter<W>, parameter: &Parameter) -> WriteResult {
    let Some(tag) = declaration_tag(names::PARAMETER, &parameter.name, &parameter.class) else {
        return Ok(());
    };
    match parameter.default_value.as_deref().filter(|v| !v.trim().is_empty()) {
        Some(default_value) => {
            out.open(tag)?;
            out.cdata_element(names::DEFAULT_VALUE_EXPRESSION, default_value)?;
            out.close(names::PARAMETER)
        }
        None => out.empty(tag),
    }
}

fn write_field<W: Write>(out: &mut DocumentWriter<W>, field: &Field) -> WriteResult {
    match declaration_tag(names::FIELD, &field.name, &field.class) {
        Some(tag) => out.empty(tag),
        None => Ok(()),
    }
}

fn write_band<W: Write>(out: &mut DocumentWriter<W>, band: &Band) -> WriteResult {
    let wrapper = band.band_type.as_str();
    out.open(BytesStart::new(wrapper))?;
    let mut inner = BytesStart::new(names::BAND);
    push(&mut inner, attr::HEIGHT, band.height);
    if band.elements.is_empty() {
        out.empty(inner)?;
    } else {
        out.open(inner)?;
        for element in &band.elements {
            write_element(out, element)?;
        }
        out.close(names::BAND)?;
    }
    out.close(wrapper)
}

fn write_element<W: Write>(out: &mut DocumentWriter<W>, element: &Element) -> WriteResult {
    let common = &element.common;
    let tag_name = element.tag();
    let mut start = BytesStart::new(tag_name);

    match &element.kind {
        ElementKind::StaticText(static_text) => {
            out.open(start)?;
            write_report_element(out, common, None)?;
            write_box(out, common)?;
            write_text_element(out, common)?;
            out.cdata_element(names::TEXT, &static_text.text)?;
        }
        ElementKind::TextField(text_field) => {
            push_text_field_attributes(&mut start, text_field);
            out.open(start)?;
            write_report_element(out, common, Some(text_field))?;
            write_box(out, common)?;
            if common.has_text_style() {
                write_text_element(out, common)?;
            }
            if let Some(expression) = text_field_expression(text_field) {
                out.cdata_element(names::TEXT_FIELD_EXPRESSION, &expression)?;
            }
        }
        ElementKind::Image(image) => {
            push_image_attributes(&mut start, image);
            out.open(start)?;
            write_report_element(out, common, None)?;
            write_box(out, common)?;
            let path = image.image_path.as_deref().unwrap_or(names::EMPTY_IMAGE_EXPRESSION);
            out.cdata_element(names::IMAGE_EXPRESSION, path)?;
        }
        ElementKind::Line(line) => {
            push_line_attributes(&mut start, line);
            out.open(start)?;
            write_report_element(out, common, None)?;
        }
        ElementKind::Rectangle(rectangle) => {
            out.open(start)?;
            write_report_element(out, common, None)?;
            let mut graphic = BytesStart::new(names::GRAPHIC_ELEMENT);
            push(&mut graphic, attr::FILL, rectangle.fill.as_str());
            out.empty(graphic)?;
        }
    }
    out.close(tag_name)
}

/// `expression`, or the reference to `field_name` when no expression is set.
fn text_field_expression(text_field: &TextField) -> Option<Cow<'_, str>> {
    match (&text_field.expression, &text_field.field_name) {
        (Some(expression), _) => Some(Cow::Borrowed(expression)),
        (None, Some(field)) => Some(Cow::Owned(field_reference(field))),
        (None, None) => None,
    }
}

fn push_text_field_attributes(tag: &mut BytesStart<'_>, text_field: &TextField) {
    push_flag(tag, attr::IS_STRETCH_WITH_OVERFLOW, text_field.stretch_with_overflow);
    push_keyword(tag, attr::EVALUATION_TIME, text_field.evaluation_time.as_ref());
    if text_field
        .evaluation_time
        .as_ref()
        .and_then(Keyword::known)
        .is_some_and(|time| time == EvaluationTime::Group)
    {
        push_opt(tag, attr::EVALUATION_GROUP, text_field.evaluation_group.as_deref());
    }
    push_opt(tag, attr::PATTERN, text_field.pattern.as_deref());
    push_flag(tag, attr::IS_BLANK_WHEN_NULL, text_field.blank_when_null);
}

fn push_image_attributes(tag: &mut BytesStart<'_>, image: &Image) {
    push_keyword(tag, attr::SCALE_IMAGE, image.scale_image.as_ref());
    push_keyword(tag, attr::H_ALIGN, image.h_align.as_ref());
    push_keyword(tag, attr::V_ALIGN, image.v_align.as_ref());
}

fn push_line_attributes(tag: &mut BytesStart<'_>, line: &Line) {
    push(tag, attr::DIRECTION, line.effective_direction().as_str());
}

/// The geometry block. Text fields also carry their position type here.
fn write_report_element<W: Write>(
    out: &mut DocumentWriter<W>,
    common: &ElementCommon,
    text_field: Option<&TextField>,
) -> WriteResult {
    let geometry = &common.geometry;
    let mut tag = BytesStart::new(names::REPORT_ELEMENT);
    push(&mut tag, attr::X, geometry.x);
    push(&mut tag, attr::Y, geometry.y);
    push(&mut tag, attr::WIDTH, geometry.width);
    push(&mut tag, attr::HEIGHT, geometry.height);
    push_opt(&mut tag, attr::BACKCOLOR, common.backcolor.as_deref());
    if let Some(text_field) = text_field {
        push_keyword(&mut tag, attr::POSITION_TYPE, text_field.position_type.as_ref());
    }
    out.empty(tag)
}

fn write_box<W: Write>(out: &mut DocumentWriter<W>, common: &ElementCommon) -> WriteResult {
    let Some(element_box) = &common.element_box else {
        return Ok(());
    };
    let (start, pens) = box_tags(element_box);
    if pens.is_empty() {
        return out.empty(start);
    }
    out.open(start)?;
    for pen in pens {
        out.empty(pen)?;
    }
    out.close(names::BOX)
}

/// `<textElement>` with its `<font>`; both are written even when empty.
fn write_text_element<W: Write>(out: &mut DocumentWriter<W>, common: &ElementCommon) -> WriteResult {
    let mut text_element = BytesStart::new(names::TEXT_ELEMENT);
    push_keyword(&mut text_element, attr::TEXT_ALIGNMENT, common.text_alignment.as_ref());
    push_keyword(
        &mut text_element,
        attr::VERTICAL_ALIGNMENT,
        common.vertical_alignment.as_ref(),
    );
    out.open(text_element)?;

    let font = &common.font;
    let mut tag = BytesStart::new(names::FONT);
    push_opt(&mut tag, attr::FONT_NAME, font.name.as_deref());
    if let Some(size) = font.size {
        push(&mut tag, attr::SIZE, size);
    }
    push_flag(&mut tag, attr::IS_BOLD, font.bold);
    push_flag(&mut tag, attr::IS_ITALIC, font.italic);
    push_flag(&mut tag, attr::IS_UNDERLINE, font.underline);
    out.empty(tag)?;

    out.close(names::TEXT_ELEMENT)
}
