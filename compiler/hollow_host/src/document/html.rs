//! HTML-like serialization of a [`Document`] subtree.
//!
//! Used to compare rendered output in tests and logs. Attributes are
//! emitted in name order so the output is stable. Callback attributes are
//! written as bare names.

use std::fmt::Write;

use hollow_ir::Scalar;

use super::{Document, NodeKind};
use crate::NodeId;

impl Document {
    /// Serialize `node` and its descendants.
    pub fn to_html(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.write_html(node, &mut out);
        out
    }

    /// Serialize the children of `node`, without `node` itself.
    pub fn inner_html(&self, node: NodeId) -> String {
        let mut out = String::new();
        for &child in self.children(node) {
            self.write_html(child, &mut out);
        }
        out
    }

    fn write_html(&self, node: NodeId, out: &mut String) {
        match &self.node(node).kind {
            NodeKind::Text(text) => escape_into(text, false, out),
            NodeKind::Element { tag, .. } => {
                out.push('<');
                out.push_str(tag.as_str());
                for (name, value) in self.attributes(node) {
                    out.push(' ');
                    out.push_str(name.as_str());
                    if !matches!(value, Scalar::Callback(_)) {
                        out.push_str("=\"");
                        escape_into(&value.to_text(), true, out);
                        out.push('"');
                    }
                }
                out.push('>');
                for &child in self.children(node) {
                    hollow_ir::ensure_sufficient_stack(|| self.write_html(child, out));
                }
                let _ = write!(out, "</{tag}>");
            }
        }
    }
}

fn escape_into(text: &str, attribute: bool, out: &mut String) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if attribute => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}
