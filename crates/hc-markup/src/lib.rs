//! Markup tree capability for the compactor: an owned node model, the
//! `MarkupTree` parsing trait, the html5ever adapter and html5ever-backed
//! serialization.

pub mod adapter;
pub mod node;
pub mod serialize;
pub mod traits;

pub use adapter::Html5everTree;
pub use node::{Attribute, Document, Element, Node};
pub use serialize::{element_to_html, inner_html, to_html};
pub use traits::MarkupTree;

#[cfg(test)]
mod tests;
