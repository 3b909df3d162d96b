//! HTML compactor: multi-strategy compaction of captured HTML for LLM editing.
//!
//! Primitives:
//! 1. Regex transforms: minify, strip base64 data URIs, strip styles, extract body
//! 2. Sanitizer: allow-list tag/attribute filter (lenient and strict profiles)
//! 3. Tree walkers: text outline with structure markers, structure-only tree
//!
//! `HtmlCompactor` composes them per `CompactionMethod` and reports sizes,
//! token estimates and warnings. `advisory` recommends a method by input size.

pub mod advisory;
pub mod base64;
pub mod body;
pub mod minify;
pub mod pipeline;
pub mod sanitizer;
pub mod styles;
pub mod tree_walk;

pub use advisory::{estimate_tokens, recommend};
pub use hc_core::{catalog, CompactionMethod, CompactionOptions, CompactionResult, MethodInfo};
pub use pipeline::{stages_for, HtmlCompactor, Stage};
pub use sanitizer::Sanitizer;
