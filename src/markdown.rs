//! Markdown lexing: token model and scanners.
//!
//! The single boundary operation is [`lexing::lex`], which maps source text
//! to a complete token sequence. Lexing is total: every matcher that fails
//! falls through to a lower-priority one, and the plain-text fallback always
//! succeeds, so any input string produces a covering token stream.

pub mod lexing;
pub mod token;

pub use lexing::lex;
pub use token::{DelimiterRole, Token};
