//! HTML serialization for the owned tree, through html5ever's serializer.

use crate::node::{Document, Element, Node};
use hc_core::Result;
use html5ever::serialize::{serialize, Serialize, SerializeOpts, Serializer, TraversalScope};
use html5ever::{LocalName, Namespace, QualName};
use std::io;

const HTML_NS: &str = "http://www.w3.org/1999/xhtml";

fn element_name(tag: &str) -> QualName {
    QualName::new(None, Namespace::from(HTML_NS), LocalName::from(tag))
}

/// Attribute names are kept as written (`xlink:href` included), so they go
/// out in the null namespace.
fn attr_name(name: &str) -> QualName {
    QualName::new(None, Namespace::from(""), LocalName::from(name))
}

impl Serialize for Document {
    fn serialize<S: Serializer>(&self, serializer: &mut S, _scope: TraversalScope) -> io::Result<()> {
        for child in &self.children {
            child.serialize(serializer, TraversalScope::IncludeNode)?;
        }
        Ok(())
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: &mut S, scope: TraversalScope) -> io::Result<()> {
        match self {
            Node::Doctype(name) => serializer.write_doctype(name),
            Node::Text(text) => serializer.write_text(text),
            Node::Comment(text) => serializer.write_comment(text),
            Node::Element(el) => el.serialize(serializer, scope),
        }
    }
}

impl Serialize for Element {
    fn serialize<S: Serializer>(&self, serializer: &mut S, scope: TraversalScope) -> io::Result<()> {
        let include_self = matches!(scope, TraversalScope::IncludeNode);
        let name = element_name(&self.tag);
        if include_self {
            let attrs: Vec<(QualName, &str)> = self
                .attrs
                .iter()
                .map(|a| (attr_name(&a.name), a.value.as_str()))
                .collect();
            serializer.start_elem(name.clone(), attrs.iter().map(|(n, v)| (n, *v)))?;
        }
        for child in &self.children {
            child.serialize(serializer, TraversalScope::IncludeNode)?;
        }
        if include_self {
            serializer.end_elem(name)?;
        }
        Ok(())
    }
}

fn render<T: Serialize>(node: &T, scope: TraversalScope) -> Result<String> {
    let mut buf = Vec::new();
    let opts = SerializeOpts { traversal_scope: scope, ..Default::default() };
    serialize(&mut buf, node, opts)?;
    let html = String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    Ok(html)
}

/// Serialize a whole document.
pub fn to_html(doc: &Document) -> Result<String> {
    render(doc, TraversalScope::ChildrenOnly(None))
}

/// Serialize a single element, including its own tags.
pub fn element_to_html(el: &Element) -> Result<String> {
    render(el, TraversalScope::IncludeNode)
}

/// Serialize only the children of an element. Text inside raw-text parents
/// (`script`, `style`, ...) is written verbatim.
pub fn inner_html(el: &Element) -> Result<String> {
    render(el, TraversalScope::ChildrenOnly(Some(element_name(&el.tag))))
}
