mod common;

use common::{TestResult, document_order_parser, init_logging, invoice_report};
use jrdesign_jrxml::{GeneratorConfig, JrxmlGenerator, generate, parse};
use jrdesign_types::{
    Band, BandType, Element, ElementBox, ElementKind, Font, HorizontalAlignment, Image, Keyword,
    Line, LineDirection, Parameter, Pen, Report, ReportProperties, StaticText, TextField,
    VerticalAlignment,
};

#[test]
fn test_invoice_round_trip() -> TestResult {
    init_logging();

    let report = invoice_report();
    let parsed = parse(&generate(&report))?;
    assert_eq!(parsed, report);
    Ok(())
}

#[test]
fn test_round_trip_without_indentation() -> TestResult {
    init_logging();

    let report = invoice_report();
    let compact = JrxmlGenerator::new(GeneratorConfig::default().with_indent(0)).generate(&report);
    assert!(!compact.contains("\n  <"));
    assert_eq!(parse(&compact)?, report);
    Ok(())
}

#[test]
fn test_generation_is_deterministic_and_stable() -> TestResult {
    init_logging();

    let report = invoice_report();
    let first = generate(&report);
    assert_eq!(first, generate(&report));

    let second = generate(&parse(&first)?);
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_markup_in_text_survives() -> TestResult {
    init_logging();

    let tricky = [
        "",
        "a < b && c > d",
        "ends with ]]>",
        "]]>]]>",
        "<![CDATA[nested]]>",
        "  padded\n\tlines  ",
    ];
    let mut band = Band::new(BandType::Detail, 100);
    for text in tricky {
        band = band.with_element(Element::static_text(text));
    }
    for text in tricky.iter().filter(|t| !t.trim().is_empty()) {
        band = band.with_element(Element::text_field(TextField::with_expression(format!("\"{text}\""))));
    }
    let report = Report {
        bands: vec![band],
        parameters: vec![Parameter::new("p", "java.lang.String").with_default("\"x]]>y\" + \"<&>\"")],
        ..Default::default()
    };

    assert_eq!(parse(&generate(&report))?, report);
    Ok(())
}

#[test]
fn test_bands_come_back_in_canonical_order() -> TestResult {
    init_logging();

    let report = Report {
        bands: vec![
            Band::new(BandType::NoData, 10),
            Band::new(BandType::Summary, 10),
            Band::new(BandType::Background, 10),
            Band::new(BandType::Title, 10),
        ],
        ..Default::default()
    };
    let parsed = parse(&generate(&report))?;
    let order: Vec<_> = parsed.bands.iter().map(|b| b.band_type).collect();
    assert_eq!(
        order,
        [BandType::Title, BandType::Summary, BandType::Background, BandType::NoData]
    );
    Ok(())
}

fn interleaved_band() -> Band {
    Band::new(BandType::Detail, 30)
        .with_element(Element::rectangle())
        .with_element(Element::static_text("label"))
        .with_element(Element::line(Line {
            direction: Some(LineDirection::BottomUp.into()),
            line_direction: None,
        }))
        .with_element(Element::text_field(TextField::for_field("value")))
        .with_element(Element::static_text("second label").at(0, 15))
}

#[test]
fn test_grouped_order_regroups_elements() -> TestResult {
    init_logging();

    let report = Report {
        bands: vec![interleaved_band()],
        ..Default::default()
    };
    let parsed = parse(&generate(&report))?;
    let tags: Vec<_> = parsed.bands[0].elements.iter().map(Element::tag).collect();
    assert_eq!(tags, ["staticText", "staticText", "textField", "line", "rectangle"]);
    Ok(())
}

#[test]
fn test_document_order_keeps_interleaving() -> TestResult {
    init_logging();

    let report = Report {
        bands: vec![interleaved_band()],
        ..Default::default()
    };
    let parsed = document_order_parser().parse(&generate(&report))?;
    assert_eq!(parsed, report);
    Ok(())
}

#[test]
fn test_field_name_derivation() -> TestResult {
    init_logging();

    let report = Report {
        bands: vec![Band::new(BandType::Detail, 20).with_element(Element::text_field(TextField::for_field("total")))],
        ..Default::default()
    };
    let xml = generate(&report);
    assert!(xml.contains("<textFieldExpression><![CDATA[$F{total}]]></textFieldExpression>"));

    let parsed = parse(&xml)?;
    let ElementKind::TextField(field) = &parsed.bands[0].elements[0].kind else {
        panic!("expected a text field");
    };
    assert_eq!(field.field_name.as_deref(), Some("total"));
    assert_eq!(field.expression, None);
    Ok(())
}

#[test]
fn test_explicit_expression_wins_over_field_name() -> TestResult {
    init_logging();

    let field = TextField {
        expression: Some("$F{net} + $F{tax}".into()),
        field_name: Some("net".into()),
        ..Default::default()
    };
    let report = Report {
        bands: vec![Band::new(BandType::Detail, 20).with_element(Element::text_field(field))],
        ..Default::default()
    };
    let parsed = parse(&generate(&report))?;
    let ElementKind::TextField(field) = &parsed.bands[0].elements[0].kind else {
        panic!("expected a text field");
    };
    assert_eq!(field.expression.as_deref(), Some("$F{net} + $F{tax}"));
    assert_eq!(field.field_name, None);
    Ok(())
}

#[test]
fn test_invalid_values_are_dropped_on_round_trip() -> TestResult {
    init_logging();

    let element = Element::static_text("x")
        .aligned(Keyword::Other("Diagonal".into()), VerticalAlignment::Top);
    let image = Element::image(Image {
        scale_image: Some(Keyword::Other("Stretch".into())),
        ..Default::default()
    });
    let report = Report {
        bands: vec![Band::new(BandType::PageHeader, 40).with_element(element).with_element(image)],
        ..Default::default()
    };
    let parsed = parse(&generate(&report))?;
    let elements = &parsed.bands[0].elements;

    assert_eq!(elements[0].common.text_alignment, None);
    assert_eq!(elements[0].common.vertical_alignment, Some(VerticalAlignment::Top.into()));
    assert_eq!(elements[0].kind, ElementKind::StaticText(StaticText { text: "x".into() }));
    assert_eq!(elements[1].kind, ElementKind::Image(Image::default()));
    Ok(())
}

#[test]
fn test_unset_line_direction_reads_back_as_default() -> TestResult {
    init_logging();

    let report = Report {
        bands: vec![Band::new(BandType::ColumnFooter, 2).with_element(Element::line(Line::default()))],
        ..Default::default()
    };
    let parsed = parse(&generate(&report))?;
    let ElementKind::Line(line) = &parsed.bands[0].elements[0].kind else {
        panic!("expected a line");
    };
    assert_eq!(line.direction, Some(LineDirection::TopDown.into()));
    assert_eq!(
        parsed.bands[0].elements[0].common.text_alignment,
        None::<Keyword<HorizontalAlignment>>
    );
    Ok(())
}

#[test]
fn test_padded_field_expression_is_kept_verbatim() -> TestResult {
    init_logging();

    let report = Report {
        bands: vec![
            Band::new(BandType::Detail, 20)
                .with_element(Element::text_field(TextField::with_expression(" $F{total} "))),
        ],
        ..Default::default()
    };
    let xml = generate(&report);
    assert!(xml.contains("<![CDATA[ $F{total} ]]>"));

    let parsed = parse(&xml)?;
    assert_eq!(parsed, report);
    assert_eq!(generate(&parsed), xml);
    Ok(())
}

#[test]
fn test_carriage_returns_survive_round_trip() -> TestResult {
    init_logging();

    let field = TextField::with_expression("$F{a}\r\n+ $F{b}");
    let report = Report {
        parameters: vec![Parameter::new("Note", "java.lang.String").with_default("\"x\r\ny\"")],
        bands: vec![
            Band::new(BandType::Title, 40)
                .with_element(Element::static_text("a\r\nb\rc"))
                .with_element(Element::static_text("\r]]>\r"))
                .with_element(Element::text_field(field)),
        ],
        ..Default::default()
    };
    let xml = generate(&report);
    assert!(xml.contains("&#13;"));

    let parsed = parse(&xml)?;
    assert_eq!(parsed, report);
    assert_eq!(generate(&parsed), xml);
    Ok(())
}

#[test]
fn test_attribute_whitespace_survives_round_trip() -> TestResult {
    init_logging();

    let text_field = TextField {
        field_name: Some("amount".into()),
        pattern: Some("#,##0.00\t€".into()),
        ..Default::default()
    };
    let element_box = ElementBox {
        border: Some("Thin\r\n".into()),
        pen: Some(Pen {
            line_style: Some("Dashed\n".into()),
            ..Default::default()
        }),
        ..Default::default()
    };
    let report = Report {
        properties: ReportProperties {
            name: "Line1\nLine2\tTab".into(),
            ..Default::default()
        },
        bands: vec![
            Band::new(BandType::Detail, 20)
                .with_element(
                    Element::static_text("x")
                        .with_backcolor(" #FFFFFF\n")
                        .with_box(element_box)
                        .with_font(Font {
                            name: Some("DejaVu\tSans".into()),
                            ..Default::default()
                        }),
                )
                .with_element(Element::text_field(text_field)),
        ],
        ..Default::default()
    };
    let xml = generate(&report);
    assert!(xml.contains(r#"name="Line1&#10;Line2&#9;Tab""#));

    let parsed = parse(&xml)?;
    assert_eq!(parsed.properties.name, "Line1\nLine2\tTab");
    assert_eq!(parsed, report);
    Ok(())
}

#[test]
fn test_legacy_line_direction_reads_back_normalized() -> TestResult {
    init_logging();

    let legacy = Line {
        direction: None,
        line_direction: Some(LineDirection::BottomUp.into()),
    };
    let report = Report {
        bands: vec![Band::new(BandType::Summary, 2).with_element(Element::line(legacy.clone()))],
        ..Default::default()
    };
    let parsed = parse(&generate(&report))?;
    assert_eq!(parsed.bands[0].elements[0].kind, ElementKind::Line(legacy.normalized()));
    Ok(())
}
