//! Typed SVG fragment tree.
//!
//! Primitives build [`Node`] trees instead of interpolating markup strings;
//! escaping happens in one place at serialization time, and auxiliary
//! definitions (gradients, filters) travel alongside the nodes that
//! reference them until the document assembler merges every fragment's defs
//! into one shared block.

use std::fmt::Write;

use crate::utils::fmt_num;

/// One SVG node: an element with attributes and children, or a text node.
#[derive(Clone, Debug)]
pub enum Node {
    Element {
        name: &'static str,
        attrs: Vec<(&'static str, String)>,
        children: Vec<Node>,
    },
    Text(String),
}

impl Node {
    /// Start an element with no attributes or children.
    pub fn elem(name: &'static str) -> Self {
        Node::Element {
            name,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// A `<g>` translated to the given origin.
    pub fn group(x: f64, y: f64) -> Self {
        Node::elem("g").attr(
            "transform",
            format!("translate({}, {})", fmt_num(x), fmt_num(y)),
        )
    }

    /// Append an attribute. Values are escaped at serialization, not here.
    pub fn attr(mut self, key: &'static str, value: impl Into<String>) -> Self {
        if let Node::Element { attrs, .. } = &mut self {
            attrs.push((key, value.into()));
        }
        self
    }

    /// Append a numeric attribute formatted compactly.
    pub fn attr_num(self, key: &'static str, value: f64) -> Self {
        self.attr(key, fmt_num(value))
    }

    /// Append a child node.
    pub fn child(mut self, node: Node) -> Self {
        if let Node::Element { children, .. } = &mut self {
            children.push(node);
        }
        self
    }

    /// Append several children.
    pub fn children(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        if let Node::Element { children, .. } = &mut self {
            children.extend(nodes);
        }
        self
    }

    /// Append a text child.
    pub fn text(self, content: impl Into<String>) -> Self {
        self.child(Node::Text(content.into()))
    }

    /// Serialize this node and its subtree.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.write_into(&mut out);
        out
    }

    fn write_into(&self, out: &mut String) {
        match self {
            Node::Element {
                name,
                attrs,
                children,
            } => {
                out.push('<');
                out.push_str(name);
                for (key, value) in attrs {
                    let _ = write!(out, " {}=\"{}\"", key, xml_escape(value));
                }
                if children.is_empty() {
                    out.push_str("/>");
                } else {
                    out.push('>');
                    for child in children {
                        child.write_into(out);
                    }
                    let _ = write!(out, "</{}>", name);
                }
            }
            Node::Text(content) => out.push_str(&xml_escape(content)),
        }
    }
}

/// A renderable piece of the document: content nodes plus the definitions
/// they reference by id.
#[derive(Clone, Debug, Default)]
pub struct Fragment {
    pub nodes: Vec<Node>,
    pub defs: Vec<Node>,
}

impl Fragment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_node(node: Node) -> Self {
        Self {
            nodes: vec![node],
            defs: Vec::new(),
        }
    }

    pub fn push(&mut self, node: Node) {
        self.nodes.push(node);
    }

    pub fn push_def(&mut self, def: Node) {
        self.defs.push(def);
    }

    /// Absorb another fragment, keeping node and def order.
    pub fn merge(&mut self, other: Fragment) {
        self.nodes.extend(other.nodes);
        self.defs.extend(other.defs);
    }
}

/// Escape the five XML special characters for element text and attribute
/// values. `&` must be handled first.
pub fn xml_escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}
