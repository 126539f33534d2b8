//! Keyword extraction
//!
//! Scans grammar source for marker calls of the form `kw("keyword text")` and
//! collects the quoted text of each call, in the order the calls appear.
//!
//! ## Pattern
//!
//! ```text
//! Source:   choice(kw("select"), kw("group by"), kw('x'), kw(y))
//! Pattern:  kw\("([\w ]+)"\)
//! Result:   ["select", "group by"]
//! ```
//!
//! Only double-quoted text made of word characters and spaces is captured.
//! Anything else that merely resembles a marker call is skipped. The marker is
//! matched literally and is not anchored to a word boundary, so `xkw("a")`
//! still yields `a`.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// Marker used by tree-sitter grammars for case-insensitive keywords
pub const DEFAULT_MARKER: &str = "kw";

static DEFAULT_EXTRACTOR: Lazy<Extractor> = Lazy::new(|| Extractor {
    marker: DEFAULT_MARKER.to_string(),
    regex: Regex::new(&marker_pattern(DEFAULT_MARKER)).unwrap(),
});

/// Errors raised while building an extractor
#[derive(Debug, Clone, PartialEq)]
pub enum ExtractError {
    /// The marker token was empty
    EmptyMarker,
    /// The marker produced a pattern the regex engine rejected
    InvalidPattern(String),
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractError::EmptyMarker => write!(f, "Marker token must not be empty"),
            ExtractError::InvalidPattern(msg) => write!(f, "Invalid marker pattern: {}", msg),
        }
    }
}

impl std::error::Error for ExtractError {}

/// Build the regex source for a marker token.
///
/// The marker is escaped so that tokens such as `$kw` match literally.
fn marker_pattern(marker: &str) -> String {
    format!(r#"{}\("([\w ]+)"\)"#, regex::escape(marker))
}

/// Finds marker calls in source text
#[derive(Debug, Clone)]
pub struct Extractor {
    marker: String,
    regex: Regex,
}

impl Extractor {
    /// Create an extractor for a custom marker token
    pub fn new(marker: &str) -> Result<Self, ExtractError> {
        if marker.is_empty() {
            return Err(ExtractError::EmptyMarker);
        }
        let regex = Regex::new(&marker_pattern(marker))
            .map_err(|e| ExtractError::InvalidPattern(e.to_string()))?;
        Ok(Self {
            marker: marker.to_string(),
            regex,
        })
    }

    /// The marker token this extractor looks for
    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// Collect every keyword in `text`, left to right.
    ///
    /// Matches never overlap. Repeated keywords are kept.
    pub fn extract(&self, text: &str) -> Vec<String> {
        self.regex
            .captures_iter(text)
            .map(|caps| caps[1].to_string())
            .collect()
    }
}

impl Default for Extractor {
    fn default() -> Self {
        DEFAULT_EXTRACTOR.clone()
    }
}

/// Extract keywords using the default `kw` marker
pub fn extract_keywords(text: &str) -> Vec<String> {
    DEFAULT_EXTRACTOR.extract(text)
}
