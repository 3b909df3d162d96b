use crate::node::Document;
use hc_core::Result;

/// Parse-and-serialize capability the tree-based transforms are built on.
pub trait MarkupTree: Send + Sync {
    /// Parse an HTML string into an owned tree.
    fn parse(&self, html: &str) -> Result<Document>;

    /// Serialize a tree back to HTML.
    fn serialize(&self, doc: &Document) -> Result<String> {
        crate::serialize::to_html(doc)
    }

    /// Adapter name, for logs.
    fn name(&self) -> &'static str;
}
