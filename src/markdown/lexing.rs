//! Lexing entry point and stages.
//!
//! Lexing runs in two fixed stages: [`preprocessing::normalize`] once, then
//! [`scanner::scan`] over the normalized text until it is exhausted. The
//! scanner tries structural matchers at each cursor position and hands the
//! remainder of the line to the inline scanner when none apply.
//!
//! The scanner-level API pairs every token with the byte range it consumed,
//! the same token-plus-span shape the rest of the crate's tooling works
//! with; concatenating those ranges reconstructs the normalized input
//! exactly, with no gaps and no overlaps. The boundary operation [`lex`]
//! strips the spans.

pub mod inline;
pub mod preprocessing;
pub mod scanner;

pub use preprocessing::normalize;
pub use scanner::scan;

use crate::markdown::token::Token;

/// Lex markdown source text into a complete token sequence.
///
/// This is total: any input string produces a covering token stream. There
/// is no error outcome; malformed character encoding is an unchecked
/// precondition of the `&str` argument, not a reported failure.
pub fn lex(text: &str) -> Vec<Token> {
    let normalized = normalize(text);
    scan(&normalized)
        .into_iter()
        .map(|(token, _)| token)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markdown::token::DelimiterRole;

    #[test]
    fn test_lex_empty_input() {
        assert_eq!(lex(""), vec![]);
    }

    #[test]
    fn test_lex_strips_spans() {
        let tokens = lex("This is *formatting* line");
        assert_eq!(
            tokens,
            vec![
                Token::Text("This is ".to_string()),
                Token::Delimiter {
                    role: DelimiterRole::Start,
                    marker: "*".to_string()
                },
                Token::Text("formatting".to_string()),
                Token::Delimiter {
                    role: DelimiterRole::End,
                    marker: "*".to_string()
                },
                Token::Text(" line".to_string()),
            ]
        );
    }

    #[test]
    fn test_lex_normalizes_before_scanning() {
        // CRLF becomes a single newline token; the tab expands into the
        // leading-space count.
        let tokens = lex("a\r\n\tb");
        assert_eq!(
            tokens,
            vec![
                Token::Text("a".to_string()),
                Token::Newline,
                Token::LeadingSpace(4),
                Token::Text("b".to_string()),
            ]
        );
    }
}
