//! Input normalization, run once before any scanning.
//!
//! Two rewrites: CRLF pairs collapse to a single line feed, and every
//! horizontal tab becomes four spaces. The tab width matches conventional
//! markdown behavior and lets leading-space counts and header levels be
//! computed on one unambiguous character stream. All downstream byte ranges
//! refer to this normalized text, not the raw input.

/// Normalize line endings and tab width.
pub fn normalize(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\t', "    ")
}
