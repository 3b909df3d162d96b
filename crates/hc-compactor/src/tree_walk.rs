//! Tree-walker transforms: a text outline with structure markers, and a
//! structure-only tree with non-essential attributes removed.

use crate::body::{is_fragment, wrap_body};
use hc_core::Result;
use hc_markup::{element_to_html, Element, MarkupTree, Node};

const TEXT_NOISE: &[&str] = &["script", "style", "noscript", "link"];
const STRUCTURE_NOISE: &[&str] = &["script", "style", "noscript", "link", "meta", "svg"];
const STRUCTURE_KEEP_ATTRS: &[&str] = &["id", "class", "href", "src", "alt", "type", "name", "value"];
const HEADINGS: &[&str] = &["h1", "h2", "h3", "h4", "h5", "h6"];
const BLOCKS: &[&str] = &["p", "div", "section", "article"];
const INDENT: &str = "  ";

/// Render the body as an indented outline: `## heading`, `- item`,
/// `[text](href)`, plain text lines. Wrapped in `<pre>` inside the minimal
/// document shell.
pub fn extract_text(tree: &dyn MarkupTree, html: &str) -> Result<String> {
    let mut doc = tree.parse(html)?;
    doc.remove_elements(TEXT_NOISE);

    let mut outline = String::new();
    match doc.body() {
        Some(body) => walk_children(&body.children, 0, &mut outline),
        None => walk_children(&doc.children, 0, &mut outline),
    }

    let pre = Element::new("pre").with_child(Node::text(outline.trim()));
    Ok(wrap_body(&element_to_html(&pre)?))
}

fn walk_children(nodes: &[Node], depth: usize, out: &mut String) {
    for node in nodes {
        walk(node, depth, out);
    }
}

fn walk(node: &Node, depth: usize, out: &mut String) {
    let indent = INDENT.repeat(depth);
    match node {
        Node::Text(text) => {
            let text = text.trim();
            if !text.is_empty() {
                push_line(out, &indent, text);
            }
        }
        Node::Element(el) => walk_element(el, depth, &indent, out),
        Node::Doctype(_) | Node::Comment(_) => {}
    }
}

fn walk_element(el: &Element, depth: usize, indent: &str, out: &mut String) {
    let tag = el.tag.as_str();
    if HEADINGS.contains(&tag) {
        out.push('\n');
        push_line(out, indent, &format!("## {}", collapsed_text(el)));
    } else if tag == "li" {
        push_line(out, indent, &format!("- {}", collapsed_text(el)));
    } else if tag == "a" {
        let href = el.attr("href").filter(|h| !h.is_empty()).unwrap_or("#");
        push_line(out, indent, &format!("[{}]({})", collapsed_text(el), href));
    } else {
        let child_depth = if BLOCKS.contains(&tag) { depth + 1 } else { depth };
        let mut inner = String::new();
        walk_children(&el.children, child_depth, &mut inner);
        if !inner.trim().is_empty() {
            out.push_str(&inner);
        }
    }
}

fn push_line(out: &mut String, indent: &str, line: &str) {
    out.push_str(indent);
    out.push_str(line);
    out.push('\n');
}

/// Element text with internal whitespace runs collapsed to single spaces.
fn collapsed_text(el: &Element) -> String {
    el.text_content().split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Drop noise elements and strip every attribute outside the keep-list
/// (plus `aria-*`). Inline `data:` sources become `[IMG]`. Fragments come
/// back as fragments.
pub fn extract_structure(tree: &dyn MarkupTree, html: &str) -> Result<String> {
    let mut doc = tree.parse(html)?;
    doc.remove_elements(STRUCTURE_NOISE);
    doc.for_each_element_mut(&mut |el: &mut Element| {
        el.retain_attrs(|a| {
            let name = a.name.to_ascii_lowercase();
            STRUCTURE_KEEP_ATTRS.contains(&name.as_str()) || name.starts_with("aria-")
        });
        for attr in el.attrs.iter_mut() {
            if attr.name.eq_ignore_ascii_case("src") && attr.value.trim_start().starts_with("data:") {
                attr.value = "[IMG]".to_string();
            }
        }
    });
    if is_fragment(html) {
        doc = doc.into_body_fragment();
    }
    tree.serialize(&doc)
}
