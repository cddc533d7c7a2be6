// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Grammar-driven parser runtime.
//!
//! This crate pairs a regex-backed lexer with a rule-table interpreter:
//! a grammar is a flat table of rules (terminals, concatenations,
//! alternations, repetitions) that refer to one another by id, and the
//! runtime walks that table top-down over a token buffer, backtracking on
//! failed alternatives and handing successful reductions to a pluggable
//! tree builder. The same runtime serves any user-defined grammar.
//!
//! - [`lexis`] — tokens, spans, the lexer, and the random-access token buffer
//! - [`syntax`] — rules, grammars, the rule interpreter, tree builders, and
//!   the [`Parser`](syntax::Parser) façade
//! - [`source`] — resolving parse input from strings, files, or readables
//! - [`error`] — the three failure kinds (construction, lexing, parsing)
//!
//! # Example
//!
//! ```
//! use gramtab_core::lexis::Lexer;
//! use gramtab_core::syntax::{Grammar, Parser, ParseValue, Rule};
//!
//! let lexer = Lexer::new(
//!     [("T_WORD", r"[a-z]+"), ("T_WS", r"[ \t]+")],
//!     ["T_WS"],
//! )?;
//! let grammar = Grammar::new([
//!     ("words", Rule::repetition("word", 1, None)),
//!     ("word", Rule::terminal("T_WORD")),
//! ])?;
//!
//! let parser = Parser::new(lexer, grammar);
//! let tree = parser.parse("hello world")?;
//! match tree {
//!     ParseValue::List(words) => assert_eq!(words.len(), 2),
//!     other => panic!("expected a list, got {other}"),
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Limitations
//!
//! The interpreter tries alternatives in declared order with full
//! backtracking; it builds no lookahead tables, so ambiguous alternations
//! can cost exponential time, and left-recursive grammars do not terminate
//! within the nesting limit. Rewrite left recursion as repetition.

pub mod error;
pub mod lexis;
pub mod source;
pub mod syntax;

#[cfg(test)]
mod test_helpers;

/// Re-export of commonly used types.
pub mod prelude {
    pub use crate::error::{GrammarError, LexError, ParseError};
    pub use crate::lexis::{Lexer, Span, Token, TokenBuffer};
    pub use crate::source::{Readable, SourceInput};
    pub use crate::syntax::{
        AstNode, DefaultBuilder, Grammar, ParseValue, Parser, Rule, RuleId, TreeBuilder,
    };
}
