//! Token definitions for the markdown lexer
//!
//! All tokens the lexer can produce, as a closed enum with exhaustive
//! matching at every consumption site. Payload-bearing variants carry either
//! the exact matched source text (list markers, headers, delimiter runs) or
//! a derived value (leading-space count, escaped character).

use std::fmt;

/// The role a delimiter run plays, decided purely by flanking context.
///
/// A run preceded by whitespace (or the start of the remaining span) and
/// followed by non-whitespace opens a formatting span. A run preceded by
/// non-whitespace and followed by whitespace (or end of line) closes one.
/// A run with non-whitespace on both sides could do either; pairing it up
/// is the tree builder's problem, not the lexer's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum DelimiterRole {
    Start,
    Mid,
    End,
}

impl fmt::Display for DelimiterRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DelimiterRole::Start => "START",
            DelimiterRole::Mid => "MID",
            DelimiterRole::End => "END",
        };
        write!(f, "{}", name)
    }
}

/// All possible tokens in the markdown lexer output
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Token {
    /// A single line feed
    Newline,

    /// A run of whitespace; the count is in characters, after tab expansion
    LeadingSpace(usize),

    /// Unordered list marker, e.g. `"- "` (exact matched text)
    UnorderedListMarker(String),

    /// Ordered list marker, e.g. `"2. "` (exact matched text)
    OrderedListMarker(String),

    /// Header marker; level is the number of `#` characters
    Header { level: usize, raw: String },

    /// Literal content with no structural or delimiter meaning; never empty
    Text(String),

    /// An inline formatting delimiter run. The marker is the exact matched
    /// run and may mix alphabet characters, e.g. `"~~**"` where a
    /// strikethrough and bold boundary collapse into one run.
    Delimiter { role: DelimiterRole, marker: String },

    /// A backslash escape. The payload is the single escaped character, or
    /// empty when the backslash sits before whitespace or at end of input.
    Escape(String),
}

impl Token {
    /// Check if this token describes layout rather than inline content
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            Token::Newline
                | Token::LeadingSpace(_)
                | Token::UnorderedListMarker(_)
                | Token::OrderedListMarker(_)
                | Token::Header { .. }
        )
    }

    /// Check if this token was produced by the inline scanner
    pub fn is_inline(&self) -> bool {
        matches!(
            self,
            Token::Text(_) | Token::Delimiter { .. } | Token::Escape(_)
        )
    }

    /// Check if this token is a list marker of either kind
    pub fn is_list_marker(&self) -> bool {
        matches!(
            self,
            Token::UnorderedListMarker(_) | Token::OrderedListMarker(_)
        )
    }
}

/// Diagnostic rendering: `TYPE(payload)` for payload-bearing kinds and the
/// bare `TYPE` for zero-payload kinds. Golden test fixtures and the CLI
/// token dump are expressed in this form.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Newline => write!(f, "NL"),
            Token::LeadingSpace(count) => write!(f, "LEADING_SPACE({})", count),
            Token::UnorderedListMarker(raw) => write!(f, "UNORDERED_LIST_INDIC({})", raw),
            Token::OrderedListMarker(raw) => write!(f, "ORDERED_LIST_INDIC({})", raw),
            Token::Header { level, raw } => write!(f, "HEADER_INDIC({}, {})", level, raw),
            Token::Text(content) => write!(f, "TEXT({})", content),
            Token::Delimiter { role, marker } => write!(f, "INLINE_FORMAT_{}({})", role, marker),
            Token::Escape(escaped) => write!(f, "ESCAPE({})", escaped),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_predicates() {
        assert!(Token::Newline.is_structural());
        assert!(Token::LeadingSpace(4).is_structural());
        assert!(Token::UnorderedListMarker("- ".to_string()).is_structural());
        assert!(!Token::Text("hello".to_string()).is_structural());

        assert!(Token::Text("hello".to_string()).is_inline());
        assert!(Token::Escape(String::new()).is_inline());
        assert!(!Token::Newline.is_inline());

        assert!(Token::OrderedListMarker("1. ".to_string()).is_list_marker());
        assert!(!Token::Header {
            level: 1,
            raw: "# ".to_string()
        }
        .is_list_marker());
    }

    #[test]
    fn test_display_zero_payload() {
        assert_eq!(Token::Newline.to_string(), "NL");
    }

    #[test]
    fn test_display_payloads() {
        assert_eq!(Token::LeadingSpace(4).to_string(), "LEADING_SPACE(4)");
        assert_eq!(
            Token::UnorderedListMarker("- ".to_string()).to_string(),
            "UNORDERED_LIST_INDIC(- )"
        );
        assert_eq!(
            Token::OrderedListMarker("12. ".to_string()).to_string(),
            "ORDERED_LIST_INDIC(12. )"
        );
        assert_eq!(
            Token::Header {
                level: 2,
                raw: "## ".to_string()
            }
            .to_string(),
            "HEADER_INDIC(2, ## )"
        );
        assert_eq!(
            Token::Text("some text".to_string()).to_string(),
            "TEXT(some text)"
        );
        assert_eq!(
            Token::Delimiter {
                role: DelimiterRole::Start,
                marker: "~~**".to_string()
            }
            .to_string(),
            "INLINE_FORMAT_START(~~**)"
        );
        assert_eq!(
            Token::Escape("-".to_string()).to_string(),
            "ESCAPE(-)"
        );
        assert_eq!(Token::Escape(String::new()).to_string(), "ESCAPE()");
    }

    #[test]
    fn test_serde_round_trip() {
        let tokens = vec![
            Token::Header {
                level: 1,
                raw: "# ".to_string(),
            },
            Token::Text("Title".to_string()),
            Token::Newline,
            Token::Delimiter {
                role: DelimiterRole::End,
                marker: "*".to_string(),
            },
        ];

        let json = serde_json::to_string(&tokens).unwrap();
        let back: Vec<Token> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tokens);
    }
}
