//! Font catalog descriptors, as served by the catalog API

use serde::Deserialize;

/// Simplified/traditional name pair attached to a font
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LocalizedName {
    #[serde(rename = "zh-hans")]
    pub hans: String,
    #[serde(rename = "zh-hant")]
    pub hant: String,
}

/// One entry of the catalog's font list
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FontInfo {
    pub id: String,
    pub version: String,
    pub font_family: String,
    pub license: String,
    #[serde(default)]
    pub fallback: Vec<String>,
    /// Display name of the font
    pub name: LocalizedName,
    /// Link or caption shown next to the name, wiki-markup allowed
    pub title: LocalizedName,
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
