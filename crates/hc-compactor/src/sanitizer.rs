//! Allow-list markup sanitizer with a lenient and a strict profile.
//!
//! Elements off the list are unwrapped: their children are filtered and
//! spliced into the parent. Containers in `drop_with_content` are removed
//! together with everything inside them. Comments are always dropped.

use crate::body::is_fragment;
use hc_core::Result;
use hc_markup::{Document, Element, MarkupTree, Node};
use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

/// Attributes whose values are URLs and get scheme-checked.
const URL_ATTRS: &[&str] = &["href", "src", "action", "formaction", "cite", "poster"];

/// An allow-list configuration.
#[derive(Debug, Clone)]
pub struct SanitizerProfile {
    pub name: &'static str,
    pub tags: HashSet<&'static str>,
    pub tag_attrs: HashMap<&'static str, &'static [&'static str]>,
    /// Attributes allowed on every element.
    pub global_attrs: &'static [&'static str],
    /// Attribute name prefixes allowed on every element (`aria-`, `data-`).
    pub global_prefixes: &'static [&'static str],
    pub url_schemes: &'static [&'static str],
    /// (tag, attribute) pairs that may also carry `data:` URLs.
    pub data_urls: &'static [(&'static str, &'static str)],
    pub drop_with_content: HashSet<&'static str>,
}

const DANGEROUS_CONTAINERS: &[&str] = &[
    "script", "style", "noscript", "template", "iframe", "object", "embed", "svg", "math",
    "canvas",
];

pub static LENIENT: LazyLock<SanitizerProfile> = LazyLock::new(|| SanitizerProfile {
    name: "sanitize",
    tags: [
        "html", "head", "title", "body", "div", "span", "p", "a", "img", "br", "hr",
        "h1", "h2", "h3", "h4", "h5", "h6", "ul", "ol", "li", "strong", "em", "b", "i",
        "code", "pre", "blockquote", "table", "thead", "tbody", "tr", "th", "td",
        "form", "input", "button", "select", "option", "textarea", "label",
        "header", "footer", "nav", "main", "section", "article", "aside",
    ]
    .into_iter()
    .collect(),
    tag_attrs: [
        ("a", &["href", "target", "rel"] as &[&str]),
        ("img", &["src", "alt", "width", "height"] as &[&str]),
        ("form", &["action", "method"] as &[&str]),
        ("input", &["type", "name", "value", "placeholder", "checked", "disabled"] as &[&str]),
        ("button", &["type", "name", "value", "disabled"] as &[&str]),
        ("select", &["name", "multiple"] as &[&str]),
        ("option", &["value", "selected"] as &[&str]),
        ("textarea", &["name", "rows", "cols", "placeholder"] as &[&str]),
        ("label", &["for"] as &[&str]),
        ("th", &["colspan", "rowspan"] as &[&str]),
        ("td", &["colspan", "rowspan"] as &[&str]),
        ("ol", &["start"] as &[&str]),
    ]
    .into_iter()
    .collect(),
    global_attrs: &["id", "class", "title", "role"],
    global_prefixes: &["aria-", "data-"],
    url_schemes: &["http", "https", "mailto", "tel"],
    data_urls: &[("img", "src")],
    drop_with_content: DANGEROUS_CONTAINERS.iter().copied().collect(),
});

pub static STRICT: LazyLock<SanitizerProfile> = LazyLock::new(|| SanitizerProfile {
    name: "sanitize-strict",
    tags: [
        "html", "body", "div", "span", "p", "a", "br", "h1", "h2", "h3", "h4", "h5", "h6",
        "ul", "ol", "li", "strong", "em",
    ]
    .into_iter()
    .collect(),
    tag_attrs: [("a", &["href"] as &[&str])].into_iter().collect(),
    global_attrs: &["id", "class"],
    global_prefixes: &[],
    url_schemes: &["http", "https"],
    data_urls: &[],
    drop_with_content: DANGEROUS_CONTAINERS.iter().copied().chain(["head"]).collect(),
});

/// Allow-list sanitizer over a parsed tree.
#[derive(Debug, Clone, Copy)]
pub struct Sanitizer {
    profile: &'static SanitizerProfile,
}

impl Sanitizer {
    pub fn new(profile: &'static SanitizerProfile) -> Self {
        Self { profile }
    }

    pub fn lenient() -> Self { Self::new(&LENIENT) }
    pub fn strict() -> Self { Self::new(&STRICT) }

    /// Parse, filter and serialize. A fragment input is serialized without
    /// the document shell the parser adds around it.
    pub fn sanitize(&self, tree: &dyn MarkupTree, html: &str) -> Result<String> {
        let fragment = is_fragment(html);
        let mut doc = tree.parse(html)?;
        self.sanitize_document(&mut doc);
        if fragment {
            doc = doc.into_body_fragment();
        }
        tracing::trace!(profile = self.profile.name, fragment, "sanitized");
        tree.serialize(&doc)
    }

    pub fn sanitize_document(&self, doc: &mut Document) {
        let children = std::mem::take(&mut doc.children);
        doc.children = self.filter_nodes(children);
    }

    fn filter_nodes(&self, nodes: Vec<Node>) -> Vec<Node> {
        let mut out = Vec::with_capacity(nodes.len());
        for node in nodes {
            match node {
                Node::Text(_) | Node::Doctype(_) => out.push(node),
                Node::Comment(_) => {}
                Node::Element(mut el) => {
                    let tag = el.tag.to_ascii_lowercase();
                    if self.profile.drop_with_content.contains(tag.as_str()) {
                        continue;
                    }
                    let children = self.filter_nodes(std::mem::take(&mut el.children));
                    if self.profile.tags.contains(tag.as_str()) {
                        self.filter_attrs(&tag, &mut el);
                        el.children = children;
                        out.push(Node::Element(el));
                    } else {
                        out.extend(children);
                    }
                }
            }
        }
        out
    }

    fn filter_attrs(&self, tag: &str, el: &mut Element) {
        let per_tag = self.profile.tag_attrs.get(tag).copied().unwrap_or(&[]);
        el.retain_attrs(|attr| {
            let name = attr.name.to_ascii_lowercase();
            let allowed = per_tag.contains(&name.as_str())
                || self.profile.global_attrs.contains(&name.as_str())
                || self.profile.global_prefixes.iter().any(|p| name.starts_with(p));
            if !allowed {
                return false;
            }
            if URL_ATTRS.contains(&name.as_str()) {
                return self.url_allowed(tag, &name, &attr.value);
            }
            true
        });
    }

    fn url_allowed(&self, tag: &str, attr: &str, value: &str) -> bool {
        let Some(scheme) = url_scheme(value) else {
            return true;
        };
        if self.profile.url_schemes.contains(&scheme.as_str()) {
            return true;
        }
        scheme == "data" && self.profile.data_urls.contains(&(tag, attr))
    }
}

/// Lowercased scheme of an absolute URL; `None` for relative URLs.
/// Whitespace and control characters are ignored, as browsers do.
pub fn url_scheme(value: &str) -> Option<String> {
    let cleaned: String = value
        .chars()
        .filter(|c| !c.is_ascii_whitespace() && !c.is_control())
        .collect();
    let colon = cleaned.find(':')?;
    let candidate = &cleaned[..colon];
    if candidate.is_empty() || candidate.contains(['/', '?', '#']) {
        return None;
    }
    let mut chars = candidate.chars();
    let first_ok = chars.next().is_some_and(|c| c.is_ascii_alphabetic());
    let rest_ok = chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    if first_ok && rest_ok {
        Some(candidate.to_ascii_lowercase())
    } else {
        // Something like "[IMG_1]:" or "a b:" is not a scheme; treat as relative.
        None
    }
}
