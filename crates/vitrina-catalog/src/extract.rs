//! Turns the model's raw reply into a [`FilterMap`].
//!
//! Models routinely wrap JSON answers in documentation-style code fences
//! (```` ```json … ``` ````) even when told not to.  The extractor strips a
//! leading fence marker (with an optional language tag) and a trailing one,
//! trims, and parses the remainder.  Anything that still isn't a flat
//! key→value mapping fails loudly with the cleaned text attached, so the
//! offending reply can be read straight out of the error.  No retry; the
//! caller decides what to do.

use vitrina_core::{Result, VitrinaError};

use crate::filter::FilterMap;

/// Parse a (possibly fenced) model reply into a filter mapping.
pub fn parse_filter_reply(raw: &str) -> Result<FilterMap> {
    let cleaned = strip_code_fence(raw);
    serde_json::from_str(cleaned).map_err(|err| VitrinaError::ResponseParse {
        detail: err.to_string(),
        cleaned: cleaned.to_owned(),
    })
}

/// Remove a leading ``` marker (optionally followed by a language tag on the
/// same line) and a trailing ``` marker, then trim.
fn strip_code_fence(raw: &str) -> &str {
    let mut text = raw.trim();
    if let Some(rest) = text.strip_prefix("```") {
        text = match rest.split_once('\n') {
            Some((_lang, body)) => body,
            None => rest,
        };
    }
    if let Some(body) = text.trim_end().strip_suffix("```") {
        text = body;
    }
    text.trim()
}
