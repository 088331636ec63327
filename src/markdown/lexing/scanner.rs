//! Structural scanner and outer lexing loop
//!
//! A single cursor advances monotonically through the normalized text. At
//! each position the structural matchers are tried in fixed priority order;
//! the first success consumes a maximal prefix. When none apply, the rest of
//! the physical line belongs to the inline scanner.
//!
//! Priority matters: whitespace must be recognized before list and header
//! markers so nested indentation becomes its own token instead of being
//! swallowed into paragraph text, and markers must be checked before the
//! free-text fallback so `#`, `-`, and digit-dot sequences at line start are
//! not misread as literal content. No two matchers can tie, since each
//! requires a distinct leading character class.

use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::Range as ByteRange;

use crate::markdown::lexing::inline::scan_inline;
use crate::markdown::token::Token;

/// Maximal whitespace run. `\s` includes the line feed, so a run of trailing
/// spaces may swallow the newline that follows it; the span still covers
/// exactly the consumed bytes.
static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s+").unwrap());

/// A single dash followed by exactly one whitespace character.
static UNORDERED_LIST_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-\s").unwrap());

/// One or more digits, a period, then one whitespace character.
static ORDERED_LIST_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\.\s").unwrap());

/// One or more `#` followed by one whitespace character; the capture group
/// gives the header level.
static HEADER_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(#+)\s").unwrap());

/// Scan normalized text into tokens paired with the byte range each one
/// consumed.
///
/// The ranges tile the input: they are contiguous from zero to the input
/// length, so concatenating the matched slices reconstructs the normalized
/// text exactly. Callers that only want the tokens go through
/// [`crate::markdown::lexing::lex`] instead.
pub fn scan(normalized: &str) -> Vec<(Token, ByteRange<usize>)> {
    let mut tokens = Vec::new();
    let mut cur = 0;

    while cur < normalized.len() {
        let rest = &normalized[cur..];

        if rest.starts_with('\n') {
            tokens.push((Token::Newline, cur..cur + 1));
            cur += 1;
        } else if let Some(m) = WHITESPACE_RUN.find(rest) {
            let count = m.as_str().chars().count();
            tokens.push((Token::LeadingSpace(count), cur..cur + m.end()));
            cur += m.end();
        } else if let Some(m) = UNORDERED_LIST_MARKER.find(rest) {
            let raw = m.as_str().to_string();
            tokens.push((Token::UnorderedListMarker(raw), cur..cur + m.end()));
            cur += m.end();
        } else if let Some(m) = ORDERED_LIST_MARKER.find(rest) {
            let raw = m.as_str().to_string();
            tokens.push((Token::OrderedListMarker(raw), cur..cur + m.end()));
            cur += m.end();
        } else if let Some(caps) = HEADER_MARKER.captures(rest) {
            let raw = caps[0].to_string();
            let level = caps[1].len();
            let end = cur + raw.len();
            tokens.push((Token::Header { level, raw }, cur..end));
            cur = end;
        } else {
            // Paragraph content: inline-scan up to (not including) the next
            // line feed, or to end of input. The span is non-empty here, so
            // the cursor always makes progress.
            let line_len = rest.find('\n').unwrap_or(rest.len());
            scan_inline(&rest[..line_len], cur, &mut tokens);
            cur += line_len;
        }
    }

    tokens
}
