//! # notemark
//!
//! A structural and inline lexer for markdown notes.
//!
//! The lexer turns raw markdown source into a flat, ordered token stream
//! covering both line-start structure (headers, list markers, indentation,
//! line breaks) and inline formatting delimiters plus escape sequences.
//! Downstream consumers (a syntax-tree builder, search indexing) operate on
//! that stream; they are not part of this crate.
//!
//! Layout:
//!
//! src/markdown
//!   ├── token       Token model and diagnostic rendering
//!   └── lexing      Preprocessing, structural scanner, inline scanner

#![allow(rustdoc::invalid_html_tags)]

pub mod markdown;
