//! Codec configuration.

/// How the parser orders the elements of a band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ElementOrder {
    /// All static texts, then text fields, images, lines and rectangles,
    /// each group in document order.
    #[default]
    Grouped,
    /// Elements in the order they appear in the document.
    Document,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    pub element_order: ElementOrder,
    /// Upper bound on the number of XML nodes accepted in one document.
    pub nodes_limit: u32,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            element_order: ElementOrder::Grouped,
            nodes_limit: u32::MAX,
        }
    }
}

impl ParserConfig {
    pub fn with_element_order(mut self, order: ElementOrder) -> Self {
        self.element_order = order;
        self
    }

    pub fn with_nodes_limit(mut self, limit: u32) -> Self {
        self.nodes_limit = limit;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Spaces per nesting level. Zero writes the document on a single line.
    pub indent: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self { indent: 2 }
    }
}

impl GeneratorConfig {
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }
}
