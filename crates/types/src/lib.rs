//! The report design model shared by the JRXML generator and parser.
//!
//! Everything here is a plain value: a [`Report`] owns its bands, bands own
//! their elements and elements own their box decoration. Nothing is shared
//! and nothing is mutated by the codec.

pub mod band;
pub mod decoration;
pub mod element;
pub mod keyword;
pub mod report;

pub use band::{Band, BandType};
pub use decoration::{Edge, EdgeStyle, ElementBox, Pen};
pub use element::{
    Element, ElementCommon, ElementKind, EvaluationTime, FillMode, Font, Geometry,
    HorizontalAlignment, Image, ImageHAlign, ImageVAlign, Line, LineDirection, PositionType,
    Rectangle, ScaleImage, StaticText, TextField, VerticalAlignment,
};
pub use keyword::{Keyword, KeywordEnum, ParseKeywordError};
pub use report::{Field, Parameter, Report, ReportProperties};
