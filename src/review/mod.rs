//! # Review Documents
//!
//! The immutable document shown by the TUI: a title, a summary, and an
//! ordered list of narrative sections, each with prose, annotated code
//! excerpts and an optional note.
//!
//! ## Data Format
//!
//! ```json
//! {
//!   "title": "Cache eviction rework",
//!   "summary": "Replaces the LRU with ...",
//!   "sections": [
//!     {
//!       "title": "New eviction policy",
//!       "explanation": "The policy now ...",
//!       "codeBlocks": [
//!         { "lang": "rust", "path": "src/cache.rs", "startLine": 10, "endLine": 24, "code": "..." }
//!       ],
//!       "note": "Benchmarks pending"
//!     }
//!   ]
//! }
//! ```
//!
//! Line ranges are descriptive only. Nothing checks that `startLine <= endLine`
//! or that `code` has that many lines.

mod loader;

pub use loader::{load_review, ReviewError, ReviewSource};

use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// A complete review document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub title: String,
    pub summary: String,
    pub sections: Vec<Section>,
}

/// One narrative step of a review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub title: String,
    pub explanation: String,
    pub code_blocks: Vec<CodeBlock>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// An annotated excerpt of source code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeBlock {
    /// Language tag; informational only.
    pub lang: String,
    pub path: String,
    pub start_line: i64,
    pub end_line: i64,
    /// Source text, possibly spanning several lines.
    pub code: String,
}

impl CodeBlock {
    /// `path:start-end`, as shown above the excerpt.
    pub fn location(&self) -> String {
        format!("{}:{}-{}", self.path, self.start_line, self.end_line)
    }
}

impl Section {
    /// The text scrolled through on the selected overview row.
    pub fn marquee_text(&self) -> String {
        format!("{} - {}", self.title, self.explanation)
    }
}

impl Review {
    /// Parse and structurally validate a review from JSON.
    pub fn from_json(json: &str) -> Result<Self, ReviewError> {
        serde_json::from_str(json).map_err(ReviewError::Parse)
    }

    /// Plain-text outline used by `--debug`.
    pub fn outline(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Title: {}", self.title);
        let _ = writeln!(out, "Sections: {}", self.sections.len());
        for (i, section) in self.sections.iter().enumerate() {
            let _ = writeln!(out, "  [{}] {}", i + 1, section.title);
            for block in &section.code_blocks {
                let _ = writeln!(out, "      {} ({})", block.location(), block.lang);
            }
            if section.note.is_some() {
                let _ = writeln!(out, "      (note)");
            }
        }
        out
    }
}
