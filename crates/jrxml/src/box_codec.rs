//! `<box>` and pen decoration, in both directions.
//!
//! Attribute order is fixed: `padding`, `border`, `borderColor`, then the same
//! three for the top, left, bottom and right edges. Pens follow as children:
//! the shared `pen` first, then `topPen`, `leftPen`, `bottomPen`, `rightPen`,
//! each with `lineWidth`, `lineStyle`, `lineColor`.

use crate::generator::push_attr;
use crate::names::{self, attr};
use crate::parser::{attr_parsed, attr_string};
use jrdesign_types::{Edge, EdgeStyle, ElementBox, Pen};
use quick_xml::events::BytesStart;
use roxmltree::Node;

fn edge_attr(edge: Edge, name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => format!("{}{}{}", edge.prefix(), first.to_ascii_uppercase(), chars.as_str()),
        None => edge.prefix().to_string(),
    }
}

fn pen_tag(edge: Edge) -> String {
    edge_attr(edge, names::PEN)
}

fn push_side(
    tag: &mut BytesStart<'_>,
    padding: Option<i32>,
    border: Option<&str>,
    color: Option<&str>,
    keys: [&str; 3],
) {
    if let Some(padding) = padding {
        push_attr(tag, keys[0], &padding.to_string());
    }
    if let Some(border) = border {
        push_attr(tag, keys[1], border);
    }
    if let Some(color) = color {
        push_attr(tag, keys[2], color);
    }
}

fn pen_element(name: &str, pen: &Pen) -> BytesStart<'static> {
    let mut tag = BytesStart::new(name.to_string());
    if let Some(width) = pen.line_width {
        push_attr(&mut tag, attr::LINE_WIDTH, &width.to_string());
    }
    if let Some(style) = &pen.line_style {
        push_attr(&mut tag, attr::LINE_STYLE, style);
    }
    if let Some(color) = &pen.line_color {
        push_attr(&mut tag, attr::LINE_COLOR, color);
    }
    tag
}

/// The `<box>` start tag and its pen children, in document order.
pub(crate) fn box_tags(element_box: &ElementBox) -> (BytesStart<'static>, Vec<BytesStart<'static>>) {
    let mut start = BytesStart::new(names::BOX);
    push_side(
        &mut start,
        element_box.padding,
        element_box.border.as_deref(),
        element_box.border_color.as_deref(),
        [attr::PADDING, attr::BORDER, attr::BORDER_COLOR],
    );
    for edge in Edge::ALL {
        let side = element_box.edge(edge);
        let padding = edge_attr(edge, attr::PADDING);
        let border = edge_attr(edge, attr::BORDER);
        let color = edge_attr(edge, attr::BORDER_COLOR);
        push_side(
            &mut start,
            side.padding,
            side.border.as_deref(),
            side.border_color.as_deref(),
            [&padding, &border, &color],
        );
    }

    let mut pens = Vec::new();
    if let Some(pen) = &element_box.pen {
        pens.push(pen_element(names::PEN, pen));
    }
    for edge in Edge::ALL {
        if let Some(pen) = &element_box.edge(edge).pen {
            pens.push(pen_element(&pen_tag(edge), pen));
        }
    }
    (start, pens)
}

fn read_pen(node: Node<'_, '_>, name: &str) -> Option<Pen> {
    let pen = node.children().find(|child| child.has_tag_name(name))?;
    Some(Pen {
        line_width: attr_parsed(pen, attr::LINE_WIDTH),
        line_style: attr_string(pen, attr::LINE_STYLE),
        line_color: attr_string(pen, attr::LINE_COLOR),
    })
}

/// Inverse of [`box_tags`]: every attribute and pen that is present is kept.
pub(crate) fn read_box(node: Node<'_, '_>) -> ElementBox {
    let mut element_box = ElementBox {
        padding: attr_parsed(node, attr::PADDING),
        border: attr_string(node, attr::BORDER),
        border_color: attr_string(node, attr::BORDER_COLOR),
        pen: read_pen(node, names::PEN),
        ..Default::default()
    };
    for edge in Edge::ALL {
        *element_box.edge_mut(edge) = EdgeStyle {
            padding: attr_parsed(node, &edge_attr(edge, attr::PADDING)),
            border: attr_string(node, &edge_attr(edge, attr::BORDER)),
            border_color: attr_string(node, &edge_attr(edge, attr::BORDER_COLOR)),
            pen: read_pen(node, &pen_tag(edge)),
        };
    }
    element_box
}
