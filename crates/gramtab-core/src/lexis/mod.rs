// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Lexical analysis: spans, tokens, the lexer, and the token buffer.
//!
//! The [`Lexer`] compiles an ordered set of named patterns and turns a
//! source string into a lazy [`TokenStream`]; the [`TokenBuffer`]
//! materializes that stream into a random-access sequence the rule
//! interpreter can backtrack over. Every stream ends with the end-of-input
//! sentinel named [`EOI`].

mod buffer;
mod lexer;
mod span;
mod token;


pub use buffer::TokenBuffer;
pub use lexer::{Lexer, TokenStream};
pub use span::Span;
pub use token::{EOI, Token};
