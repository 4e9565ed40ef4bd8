//! Segmentation of strings into symbol sequences.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

/// How a string is split into the symbols the distance is computed over.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolMode {
    /// Raw UTF-8 bytes.
    Bytes,
    /// Unicode scalar values.
    #[default]
    Chars,
    /// Extended grapheme clusters.
    Graphemes,
}

impl SymbolMode {
    pub fn name(&self) -> &'static str {
        match self {
            SymbolMode::Bytes => "bytes",
            SymbolMode::Chars => "chars",
            SymbolMode::Graphemes => "graphemes",
        }
    }

    /// Number of symbols `text` splits into.
    pub fn symbol_count(&self, text: &str) -> usize {
        match self {
            SymbolMode::Bytes => text.len(),
            SymbolMode::Chars => text.chars().count(),
            SymbolMode::Graphemes => text.graphemes(true).count(),
        }
    }
}

/// Split `text` into extended grapheme clusters.
pub fn graphemes(text: &str) -> Vec<&str> {
    text.graphemes(true).collect()
}
