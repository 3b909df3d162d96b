//! Compaction methods and the static method catalog.

use crate::error::HcError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the named compaction strategies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CompactionMethod {
    #[default]
    None,
    RegexMinify,
    RegexStripBase64,
    RegexStripStyles,
    RegexExtractBody,
    RegexAggressive,
    LibSanitize,
    LibSanitizeStrict,
    DomExtractText,
    DomExtractStructure,
    CombinedOptimal,
    CombinedMaximum,
}

/// Method family, used for grouping in presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MethodCategory {
    None,
    Regex,
    Library,
    Dom,
    Combined,
}

impl CompactionMethod {
    /// All methods, in catalog order.
    pub const ALL: [CompactionMethod; 12] = [
        Self::None,
        Self::RegexMinify,
        Self::RegexStripBase64,
        Self::RegexStripStyles,
        Self::RegexExtractBody,
        Self::RegexAggressive,
        Self::LibSanitize,
        Self::LibSanitizeStrict,
        Self::DomExtractText,
        Self::DomExtractStructure,
        Self::CombinedOptimal,
        Self::CombinedMaximum,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::RegexMinify => "regex-minify",
            Self::RegexStripBase64 => "regex-strip-base64",
            Self::RegexStripStyles => "regex-strip-styles",
            Self::RegexExtractBody => "regex-extract-body",
            Self::RegexAggressive => "regex-aggressive",
            Self::LibSanitize => "lib-sanitize",
            Self::LibSanitizeStrict => "lib-sanitize-strict",
            Self::DomExtractText => "dom-extract-text",
            Self::DomExtractStructure => "dom-extract-structure",
            Self::CombinedOptimal => "combined-optimal",
            Self::CombinedMaximum => "combined-maximum",
        }
    }

    pub fn category(&self) -> MethodCategory {
        match self {
            Self::None => MethodCategory::None,
            Self::RegexMinify
            | Self::RegexStripBase64
            | Self::RegexStripStyles
            | Self::RegexExtractBody
            | Self::RegexAggressive => MethodCategory::Regex,
            Self::LibSanitize | Self::LibSanitizeStrict => MethodCategory::Library,
            Self::DomExtractText | Self::DomExtractStructure => MethodCategory::Dom,
            Self::CombinedOptimal | Self::CombinedMaximum => MethodCategory::Combined,
        }
    }

    /// Relative strength, used to keep recommendation tables monotonic.
    /// Methods on the same rank are interchangeable for that purpose.
    pub fn aggressiveness(&self) -> u8 {
        match self {
            Self::None => 0,
            Self::RegexMinify | Self::RegexStripStyles | Self::RegexExtractBody => 1,
            Self::LibSanitize => 2,
            Self::RegexStripBase64 => 3,
            Self::RegexAggressive | Self::LibSanitizeStrict | Self::DomExtractStructure => 4,
            Self::CombinedOptimal => 5,
            Self::DomExtractText | Self::CombinedMaximum => 6,
        }
    }

    /// Catalog entry for this method.
    pub fn info(&self) -> &'static MethodInfo {
        // CATALOG is laid out in ALL order.
        &CATALOG[*self as usize]
    }
}

impl fmt::Display for CompactionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CompactionMethod {
    type Err = HcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|m| m.as_str() == s.trim())
            .ok_or_else(|| HcError::UnknownMethod(s.to_string()))
    }
}

/// Read-only presentation metadata for a method.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodInfo {
    pub value: CompactionMethod,
    pub label: &'static str,
    pub description: &'static str,
    pub category: MethodCategory,
    pub expected_reduction: &'static str,
}

const fn entry(
    value: CompactionMethod,
    label: &'static str,
    description: &'static str,
    category: MethodCategory,
    expected_reduction: &'static str,
) -> MethodInfo {
    MethodInfo { value, label, description, category, expected_reduction }
}

static CATALOG: [MethodInfo; 12] = [
    entry(
        CompactionMethod::None,
        "None",
        "Send the captured HTML as-is",
        MethodCategory::None,
        "0%",
    ),
    entry(
        CompactionMethod::RegexMinify,
        "Minify",
        "Remove comments and collapse whitespace",
        MethodCategory::Regex,
        "10-20%",
    ),
    entry(
        CompactionMethod::RegexStripBase64,
        "Strip Base64",
        "Replace embedded base64 images and data URIs with placeholders",
        MethodCategory::Regex,
        "30-90%",
    ),
    entry(
        CompactionMethod::RegexStripStyles,
        "Strip Styles",
        "Remove inline style attributes and <style> blocks",
        MethodCategory::Regex,
        "10-30%",
    ),
    entry(
        CompactionMethod::RegexExtractBody,
        "Extract Body",
        "Keep only the body, without scripts, metadata and SVG",
        MethodCategory::Regex,
        "20-50%",
    ),
    entry(
        CompactionMethod::RegexAggressive,
        "Aggressive",
        "Extract body, strip base64 and styles, then minify",
        MethodCategory::Regex,
        "50-90%",
    ),
    entry(
        CompactionMethod::LibSanitize,
        "Sanitize",
        "Allow-list filter keeping structural, semantic and form markup",
        MethodCategory::Library,
        "20-40%",
    ),
    entry(
        CompactionMethod::LibSanitizeStrict,
        "Sanitize (Strict)",
        "Allow-list filter keeping only text and structure",
        MethodCategory::Library,
        "40-70%",
    ),
    entry(
        CompactionMethod::DomExtractText,
        "Text with Structure",
        "Plain text outline with heading, list and link markers",
        MethodCategory::Dom,
        "80-95%",
    ),
    entry(
        CompactionMethod::DomExtractStructure,
        "Structure Only",
        "Element tree with non-essential attributes removed",
        MethodCategory::Dom,
        "40-70%",
    ),
    entry(
        CompactionMethod::CombinedOptimal,
        "Optimal",
        "Strip base64, sanitize, then minify",
        MethodCategory::Combined,
        "50-80%",
    ),
    entry(
        CompactionMethod::CombinedMaximum,
        "Maximum",
        "Extract body, strip base64 and styles, strict sanitize, then minify",
        MethodCategory::Combined,
        "70-95%",
    ),
];

/// Static method catalog, for presentation only.
pub fn catalog() -> &'static [MethodInfo] {
    &CATALOG
}
