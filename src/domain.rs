//! Core types shared by the scan, render and config layers.

use serde::{Deserialize, Deserializer};
use std::path::PathBuf;

/// Placeholder rendered in place of content that is not valid UTF-8.
pub const NON_TEXT_SENTINEL: &str = "[non-text content]";

/// A resolved input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Absolute, lexically normalized path.
    pub path: PathBuf,
    /// Path relative to the common ancestor, `/`-separated, never empty.
    pub relative_path: String,
}

/// Decoded file content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileContent {
    Text(String),
    NonText,
}

impl FileContent {
    /// Text to place inside the fenced block.
    pub fn as_str(&self) -> &str {
        match self {
            FileContent::Text(text) => text,
            FileContent::NonText => NON_TEXT_SENTINEL,
        }
    }
}

/// Sibling ordering used when rendering the tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum TreeOrder {
    /// Byte-wise by name, directories and files interleaved.
    #[default]
    Alphabetical,
    /// Directories first, then files; each group alphabetical.
    DirsFirst,
    /// Order in which paths were resolved.
    Insertion,
}

/// Settings that may come from a config file and be overridden on the CLI.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub tree_order: TreeOrder,
    /// Globs (relative to the working directory) removed from glob matches.
    #[serde(deserialize_with = "deserialize_string_list")]
    pub exclude_globs: Vec<String>,
    /// Let wildcards match names starting with `.`.
    pub include_hidden: bool,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrList {
    One(String),
    Many(Vec<String>),
}

/// Accept either a list or a comma-separated string.
fn deserialize_string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let items = match StringOrList::deserialize(deserializer)? {
        StringOrList::One(value) => value.split(',').map(str::to_string).collect(),
        StringOrList::Many(values) => values,
    };
    Ok(items
        .into_iter()
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect())
}
