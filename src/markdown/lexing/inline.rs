//! Inline scanner for paragraph content
//!
//! Tokenizes one line span (bounded by the next line feed or end of input)
//! into `Text`, `Delimiter`, and `Escape` tokens. The scan is a single
//! left-to-right pass with no backtracking: at each position the leftmost of
//! an escape sequence or a delimiter run wins, and everything between
//! matches accumulates into text.
//!
//! Delimiter runs are maximal and may mix alphabet characters; a bold
//! boundary meeting a strikethrough boundary, as in `~~**`, is one run
//! token. The run's role falls out of its flanking context:
//!
//! - start: whitespace (or span start) before, non-whitespace after
//! - end:   non-whitespace before, whitespace (or span end) after
//! - mid:   non-whitespace on both sides
//!
//! A mid run could serve as either an opener or a closer; that decision is
//! deferred to the tree builder. End is decided before mid is even
//! reachable: the three conditions partition the flanking contexts, and a
//! run that satisfies none of them (whitespace on both sides) is not a
//! delimiter at all and stays embedded in the surrounding text.

use std::ops::Range as ByteRange;

use crate::markdown::token::{DelimiterRole, Token};

/// The inline formatting alphabet.
pub const DELIMITER_CHARS: [char; 4] = ['*', '_', '~', '`'];

fn is_delimiter_char(ch: char) -> bool {
    DELIMITER_CHARS.contains(&ch)
}

/// Scan one line span, appending tokens paired with byte ranges.
///
/// `base` is the span's byte offset within the normalized text, so emitted
/// ranges line up with the structural scanner's. The span must not contain
/// a line feed.
pub fn scan_inline(span: &str, base: usize, tokens: &mut Vec<(Token, ByteRange<usize>)>) {
    let chars: Vec<(usize, char)> = span.char_indices().collect();
    let mut text_start = 0;
    let mut i = 0;

    while i < chars.len() {
        let (pos, ch) = chars[i];

        if ch == '\\' {
            flush_text(span, text_start, pos, base, tokens);
            // The escaped payload is the single character after the
            // backslash, unless that character is whitespace or missing; the
            // token is emitted either way and never merges with text.
            match chars.get(i + 1) {
                Some(&(_, next)) if !next.is_whitespace() => {
                    let end = byte_offset(span, &chars, i + 2);
                    tokens.push((Token::Escape(next.to_string()), base + pos..base + end));
                    text_start = end;
                    i += 2;
                }
                _ => {
                    let end = byte_offset(span, &chars, i + 1);
                    tokens.push((Token::Escape(String::new()), base + pos..base + end));
                    text_start = end;
                    i += 1;
                }
            }
            continue;
        }

        if is_delimiter_char(ch) {
            let mut run_end = i;
            while run_end < chars.len() && is_delimiter_char(chars[run_end].1) {
                run_end += 1;
            }
            let prev = if i == 0 { None } else { Some(chars[i - 1].1) };
            let next = chars.get(run_end).map(|&(_, c)| c);

            if let Some(role) = classify_run(prev, next) {
                flush_text(span, text_start, pos, base, tokens);
                let end = byte_offset(span, &chars, run_end);
                let marker = span[pos..end].to_string();
                tokens.push((Token::Delimiter { role, marker }, base + pos..base + end));
                text_start = end;
            }
            // Either way the whole run is decided at once; an unclassified
            // run stays in the pending text.
            i = run_end;
            continue;
        }

        i += 1;
    }

    flush_text(span, text_start, span.len(), base, tokens);
}

/// Resolve a delimiter run's role from the characters flanking it, or
/// `None` when the run is not a delimiter at all.
fn classify_run(prev: Option<char>, next: Option<char>) -> Option<DelimiterRole> {
    let open_before = prev.map_or(true, char::is_whitespace);
    let open_after = next.map_or(true, char::is_whitespace);

    if open_before && !open_after {
        Some(DelimiterRole::Start)
    } else if !open_before && open_after {
        Some(DelimiterRole::End)
    } else if !open_before && !open_after {
        Some(DelimiterRole::Mid)
    } else {
        None
    }
}

/// Byte offset of the char at `idx`, or the span length past the end.
fn byte_offset(span: &str, chars: &[(usize, char)], idx: usize) -> usize {
    chars.get(idx).map_or(span.len(), |&(pos, _)| pos)
}

fn flush_text(
    span: &str,
    from: usize,
    to: usize,
    base: usize,
    tokens: &mut Vec<(Token, ByteRange<usize>)>,
) {
    // Empty text tokens are suppressed, e.g. for a delimiter run at the very
    // start of the span.
    if from < to {
        tokens.push((Token::Text(span[from..to].to_string()), base + from..base + to));
    }
}
