// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! The grammar model and rule interpreter.
//!
//! A [`Grammar`] is a validated table of [`Rule`]s keyed by [`RuleId`];
//! the [`Parser`] façade interprets it over a token buffer and hands
//! successful reductions to a [`TreeBuilder`], producing [`ParseValue`]
//! trees.
//!
//! ```
//! use gramtab_core::lexis::Lexer;
//! use gramtab_core::syntax::{Grammar, Parser, Rule};
//!
//! let lexer = Lexer::new([("T_DIGIT", r"[0-9]")], Vec::<&str>::new())?;
//! let grammar = Grammar::new([
//!     ("digits", Rule::repetition("digit", 1, None)),
//!     ("digit", Rule::terminal("T_DIGIT")),
//! ])?;
//!
//! let tree = Parser::new(lexer, grammar).parse("42")?;
//! assert_eq!(tree.to_string(), "[T_DIGIT `4`, T_DIGIT `2`]");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod builder;
mod grammar;
mod parser;
mod reduce;
mod rule;
mod value;


pub use builder::{DefaultBuilder, TreeBuilder};
pub use grammar::Grammar;
pub use parser::Parser;
pub use rule::{Rule, RuleId};
pub use value::{AstNode, ParseValue};

pub(crate) use reduce::{MAX_RULE_DEPTH, Reducer, Reduction};
