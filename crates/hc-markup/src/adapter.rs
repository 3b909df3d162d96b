//! html5ever-backed `MarkupTree`.

use crate::node::{Attribute, Document, Element, Node};
use crate::traits::MarkupTree;
use hc_core::{HcError, Result};
use html5ever::tendril::TendrilSink;
use html5ever::{parse_document, ParseOpts, QualName};
use markup5ever_rcdom::{Handle, NodeData, RcDom};

const DEFAULT_MAX_DEPTH: usize = 512;

/// HTML5-compliant parser adapter. Parsing never rejects malformed markup;
/// it only fails when the nesting depth exceeds `max_depth`.
#[derive(Debug, Clone)]
pub struct Html5everTree {
    max_depth: usize,
}

impl Html5everTree {
    pub fn new() -> Self {
        Self { max_depth: DEFAULT_MAX_DEPTH }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for Html5everTree {
    fn default() -> Self { Self::new() }
}

impl MarkupTree for Html5everTree {
    fn parse(&self, html: &str) -> Result<Document> {
        let dom = parse_document(RcDom::default(), ParseOpts::default())
            .from_utf8()
            .read_from(&mut html.as_bytes())?;
        let children = convert_children(&dom.document, 0, self.max_depth)?;
        tracing::trace!(bytes = html.len(), top_level = children.len(), "parsed html");
        Ok(Document::new(children))
    }

    fn name(&self) -> &'static str {
        "html5ever"
    }
}

fn convert_children(handle: &Handle, depth: usize, limit: usize) -> Result<Vec<Node>> {
    if depth > limit {
        return Err(HcError::TooDeep { limit });
    }
    let children = handle.children.borrow();
    let mut out = Vec::with_capacity(children.len());
    for child in children.iter() {
        match &child.data {
            NodeData::Doctype { name, .. } => out.push(Node::Doctype(name.to_string())),
            NodeData::Text { contents } => out.push(Node::Text(contents.borrow().to_string())),
            NodeData::Comment { contents } => out.push(Node::Comment(contents.to_string())),
            NodeData::Element { name, attrs, template_contents, .. } => {
                let attrs = attrs
                    .borrow()
                    .iter()
                    .map(|a| Attribute { name: qualified(&a.name), value: a.value.to_string() })
                    .collect();
                // <template> keeps its children in a separate fragment.
                let source = template_contents.borrow().clone().unwrap_or_else(|| child.clone());
                let children = convert_children(&source, depth + 1, limit)?;
                out.push(Node::Element(Element { tag: name.local.to_string(), attrs, children }));
            }
            NodeData::Document | NodeData::ProcessingInstruction { .. } => {}
        }
    }
    Ok(out)
}

fn qualified(name: &QualName) -> String {
    match &name.prefix {
        Some(prefix) => format!("{}:{}", prefix, name.local),
        None => name.local.to_string(),
    }
}
