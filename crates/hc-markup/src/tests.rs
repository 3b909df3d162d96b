use crate::*;
use hc_core::HcError;

fn parse(html: &str) -> Document {
    Html5everTree::new().parse(html).unwrap()
}

// ========== Parsing ==========

#[test]
fn test_parse_synthesizes_document_shell() {
    let doc = parse("<p>hi</p>");
    let html = doc.find("html").unwrap();
    assert_eq!(html.children.len(), 2);
    assert!(doc.find("head").is_some());
    assert_eq!(doc.body().unwrap().text_content(), "hi");
}

#[test]
fn test_parse_keeps_doctype_and_comments() {
    let doc = parse("<!DOCTYPE html><!-- top --><html><body>x</body></html>");
    assert_eq!(doc.children[0], Node::Doctype("html".into()));
    assert!(matches!(&doc.children[1], Node::Comment(c) if c == " top "));
}

#[test]
fn test_parse_attributes_in_order() {
    let doc = parse(r#"<a href="/x" target="_blank" data-id="7">go</a>"#);
    let a = doc.find("a").unwrap();
    let names: Vec<&str> = a.attrs.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["href", "target", "data-id"]);
    assert_eq!(a.attr("HREF"), Some("/x"));
}

#[test]
fn test_parse_malformed_markup() {
    let doc = parse("<div><p>unclosed <b>bold</div><span>");
    assert!(doc.text_content().contains("unclosed bold"));
}

#[test]
fn test_parse_template_contents() {
    let doc = parse("<template><p>inside</p></template>");
    let t = doc.find("template").unwrap();
    assert_eq!(t.text_content(), "inside");
}

#[test]
fn test_parse_rejects_excessive_depth() {
    let html = "<div>".repeat(20);
    let err = Html5everTree::new().with_max_depth(5).parse(&html).unwrap_err();
    assert!(matches!(err, HcError::TooDeep { limit: 5 }));
}

#[test]
fn test_parse_empty() {
    let doc = parse("");
    assert!(doc.body().is_some());
    assert_eq!(doc.text_content(), "");
}

// ========== Tree helpers ==========

#[test]
fn test_remove_elements() {
    let mut doc = parse("<div><script>x()</script><p>keep</p><style>p{}</style></div>");
    doc.remove_elements(&["script", "style"]);
    assert!(doc.find("script").is_none());
    assert!(doc.find("style").is_none());
    assert_eq!(doc.body().unwrap().text_content(), "keep");
}

#[test]
fn test_for_each_element_mut() {
    let mut doc = parse(r#"<p id="a" class="b">t</p>"#);
    doc.for_each_element_mut(&mut |el: &mut Element| el.retain_attrs(|a| a.name == "id"));
    let p = doc.find("p").unwrap();
    assert_eq!(p.attr("id"), Some("a"));
    assert_eq!(p.attr("class"), None);
}

#[test]
fn test_element_builder() {
    let el = Element::new("a").with_attr("href", "#").with_child(Node::text("x"));
    assert_eq!(element_to_html(&el).unwrap(), r##"<a href="#">x</a>"##);
}

// ========== Serialization ==========

#[test]
fn test_serialize_roundtrip_shape() {
    let doc = parse(r#"<p class="x">hi</p>"#);
    assert_eq!(to_html(&doc).unwrap(), r#"<html><head></head><body><p class="x">hi</p></body></html>"#);
}

#[test]
fn test_serialize_void_elements() {
    let doc = parse(r#"<p>a<br>b<img src="i.png"></p>"#);
    let body = inner_html(doc.body().unwrap()).unwrap();
    assert_eq!(body, r#"<p>a<br>b<img src="i.png"></p>"#);
}

#[test]
fn test_serialize_escapes_text_and_attrs() {
    let doc = parse(r#"<p title="a&quot;b">1 &lt; 2 &amp; 3</p>"#);
    let body = inner_html(doc.body().unwrap()).unwrap();
    assert_eq!(body, r#"<p title="a&quot;b">1 &lt; 2 &amp; 3</p>"#);
}

#[test]
fn test_serialize_raw_text_unescaped() {
    let doc = parse("<script>if (a < b && c) {}</script>");
    let html = to_html(&doc).unwrap();
    assert!(html.contains("<script>if (a < b && c) {}</script>"));
}

#[test]
fn test_default_serialize_via_trait() {
    let tree = Html5everTree::new();
    let doc = tree.parse("<b>x</b>").unwrap();
    assert_eq!(tree.serialize(&doc).unwrap(), to_html(&doc).unwrap());
    assert_eq!(tree.name(), "html5ever");
}

#[test]
fn test_serialize_doctype_and_comments() {
    let doc = parse("<!DOCTYPE html><!-- c --><p>x</p>");
    let html = to_html(&doc).unwrap();
    assert!(html.starts_with("<!DOCTYPE html><!-- c --><html>"), "{html}");
}

#[test]
fn test_serialize_raw_text_parent_context() {
    let script = Element::new("script").with_child(Node::text("a<b"));
    assert_eq!(inner_html(&script).unwrap(), "a<b");
    let pre = Element::new("pre").with_child(Node::text("a<b & c"));
    assert_eq!(element_to_html(&pre).unwrap(), "<pre>a&lt;b &amp; c</pre>");
}

// ========== Fragments ==========

#[test]
fn test_into_body_fragment() {
    let doc = parse(r#"<p class="x">hi</p><br>"#).into_body_fragment();
    assert_eq!(to_html(&doc).unwrap(), r#"<p class="x">hi</p><br>"#);
}

#[test]
fn test_into_body_fragment_without_body() {
    let doc = Document::new(vec![Node::text("loose")]);
    assert_eq!(doc.clone().into_body_fragment(), doc);
}
