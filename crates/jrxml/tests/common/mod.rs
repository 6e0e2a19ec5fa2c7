#![allow(dead_code)]

use jrdesign_jrxml::{ElementOrder, JrxmlParser, ParserConfig};
use jrdesign_types::{
    Band, BandType, Edge, EdgeStyle, Element, ElementBox, EvaluationTime, Field, Font,
    HorizontalAlignment, Image, ImageHAlign, ImageVAlign, Line, LineDirection, Parameter, Pen,
    PositionType, Report, ReportProperties, ScaleImage, TextField, VerticalAlignment,
};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn document_order_parser() -> JrxmlParser {
    JrxmlParser::new(ParserConfig::default().with_element_order(ElementOrder::Document))
        .expect("XML backend should accept report documents")
}

pub fn decorated_box() -> ElementBox {
    let mut element_box = ElementBox::uniform("Thin", "#333333");
    element_box.padding = Some(2);
    element_box.pen = Some(Pen {
        line_width: Some(0.5),
        line_style: Some("Solid".into()),
        line_color: Some("#000000".into()),
    });
    *element_box.edge_mut(Edge::Bottom) = EdgeStyle {
        padding: Some(4),
        border: Some("2Point".into()),
        border_color: None,
        pen: Some(Pen {
            line_width: Some(1.25),
            ..Default::default()
        }),
    };
    element_box
}

/// A report touching every element kind, stored in the order the grouped
/// parser returns them.
pub fn invoice_report() -> Report {
    let properties = ReportProperties {
        name: "Invoice".into(),
        page_width: 612,
        page_height: 792,
        left_margin: 36,
        right_margin: 36,
        top_margin: 24,
        bottom_margin: 24,
    };

    let title = Band::new(BandType::Title, 60)
        .with_element(
            Element::static_text("ACME & Sons <Invoice>")
                .at(0, 0)
                .sized(540, 40)
                .with_backcolor("#EEEEEE")
                .with_box(decorated_box())
                .with_font(Font {
                    name: Some("DejaVu Sans".into()),
                    size: Some(18.5),
                    bold: true,
                    italic: false,
                    underline: true,
                })
                .aligned(HorizontalAlignment::Center, VerticalAlignment::Middle),
        )
        .with_element(
            Element::image(Image {
                image_path: Some("\"logo.png\"".into()),
                scale_image: Some(ScaleImage::RetainShape.into()),
                h_align: Some(ImageHAlign::Right.into()),
                v_align: Some(ImageVAlign::Top.into()),
            })
            .at(440, 0)
            .sized(100, 40)
            .with_box(ElementBox::uniform("Thin", "#CCCCCC")),
        );

    let detail = Band::new(BandType::Detail, 20)
        .with_element(Element::static_text("").at(0, 0).sized(10, 20))
        .with_element(Element::text_field(TextField::for_field("description")).at(10, 0).sized(300, 20))
        .with_element(
            Element::text_field(TextField {
                expression: Some("$F{quantity} * $F{price}".into()),
                pattern: Some("#,##0.00".into()),
                blank_when_null: true,
                stretch_with_overflow: true,
                position_type: Some(PositionType::Float.into()),
                ..Default::default()
            })
            .at(310, 0)
            .sized(120, 20)
            .aligned(HorizontalAlignment::Right, VerticalAlignment::Bottom),
        )
        .with_element(
            Element::line(Line {
                direction: Some(LineDirection::TopDown.into()),
                line_direction: None,
            })
            .at(0, 19)
            .sized(540, 1),
        );

    let summary = Band::new(BandType::Summary, 40)
        .with_element(
            Element::text_field(TextField {
                field_name: Some("grandTotal".into()),
                evaluation_time: Some(EvaluationTime::Group.into()),
                evaluation_group: Some("customer".into()),
                ..Default::default()
            })
            .at(310, 10)
            .sized(120, 20)
            .with_font(Font {
                italic: true,
                ..Default::default()
            }),
        )
        .with_element(Element::rectangle().at(0, 0).sized(540, 40).with_backcolor("#FAFAFA"));

    Report {
        properties,
        bands: vec![title, detail, summary],
        fields: vec![
            Field::new("description", "java.lang.String"),
            Field::new("quantity", "java.lang.Integer"),
            Field::new("price", "java.math.BigDecimal"),
        ],
        parameters: vec![
            Parameter::new("customer", "java.lang.String").with_default("\"Walk-in\""),
            Parameter::new("logo", "java.lang.String"),
        ],
    }
}
