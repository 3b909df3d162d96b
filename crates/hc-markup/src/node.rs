//! Owned document tree.

/// A parsed document: the top-level nodes (doctype, comments, `<html>`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub children: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Doctype(String),
    Element(Element),
    Text(String),
    Comment(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Lowercase local name.
    pub tag: String,
    pub attrs: Vec<Attribute>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: tag.into(), attrs: Vec::new(), children: Vec::new() }
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|a| a.name.eq_ignore_ascii_case(name))
            .map(|a| a.value.as_str())
    }

    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attrs.iter_mut().find(|a| a.name == name) {
            Some(a) => a.value = value,
            None => self.attrs.push(Attribute { name, value }),
        }
    }

    pub fn retain_attrs(&mut self, keep: impl FnMut(&Attribute) -> bool) {
        self.attrs.retain(keep);
    }

    pub fn is(&self, tag: &str) -> bool {
        self.tag == tag
    }

    /// Concatenated descendant text, in document order.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(&self.children, &mut out);
        out
    }

}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

impl Document {
    pub fn new(children: Vec<Node>) -> Self {
        Self { children }
    }

    /// First element with `tag`, depth-first in document order.
    pub fn find(&self, tag: &str) -> Option<&Element> {
        find_in(&self.children, tag)
    }

    /// The `<body>` element, if the tree has one.
    pub fn body(&self) -> Option<&Element> {
        self.find("body")
    }

    /// Keep only what the parser placed inside `<body>`. Used to hand a
    /// fragment back without the synthesized document shell.
    pub fn into_body_fragment(self) -> Document {
        if let Some(body) = self.body() {
            return Document::new(body.children.clone());
        }
        self
    }

    pub fn remove_elements(&mut self, tags: &[&str]) {
        remove_elements(&mut self.children, tags);
    }

    /// Visit every element depth-first, parents before children.
    pub fn for_each_element_mut(&mut self, f: &mut impl FnMut(&mut Element)) {
        visit_mut(&mut self.children, f);
    }

    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(&self.children, &mut out);
        out
    }
}

fn collect_text(nodes: &[Node], out: &mut String) {
    for node in nodes {
        match node {
            Node::Text(t) => out.push_str(t),
            Node::Element(el) => collect_text(&el.children, out),
            Node::Doctype(_) | Node::Comment(_) => {}
        }
    }
}

fn find_in<'a>(nodes: &'a [Node], tag: &str) -> Option<&'a Element> {
    for node in nodes {
        if let Node::Element(el) = node {
            if el.is(tag) {
                return Some(el);
            }
            if let Some(found) = find_in(&el.children, tag) {
                return Some(found);
            }
        }
    }
    None
}

fn remove_elements(nodes: &mut Vec<Node>, tags: &[&str]) {
    nodes.retain(|n| !matches!(n, Node::Element(el) if tags.contains(&el.tag.as_str())));
    for node in nodes.iter_mut() {
        if let Node::Element(el) = node {
            remove_elements(&mut el.children, tags);
        }
    }
}

fn visit_mut(nodes: &mut [Node], f: &mut impl FnMut(&mut Element)) {
    for node in nodes.iter_mut() {
        if let Node::Element(el) = node {
            f(el);
            visit_mut(&mut el.children, f);
        }
    }
}
