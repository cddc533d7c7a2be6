// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! The parser façade.
//!
//! [`Parser`] wires the pieces together: lexer → token buffer → rule
//! interpreter → tree builder. Each [`Parser::parse`] call runs with fresh
//! interpreter state, so one parser can serve any number of invocations
//! (and inputs) without cross-talk.

use std::fmt;

use tracing::debug;

use crate::error::ParseError;
use crate::lexis::{Lexer, TokenBuffer};
use crate::source::SourceInput;

use super::builder::{DefaultBuilder, TreeBuilder};
use super::grammar::Grammar;
use super::value::ParseValue;
use super::{MAX_RULE_DEPTH, Reducer, Reduction};

/// A ready-to-use parser for one lexer and one grammar.
pub struct Parser {
    lexer: Lexer,
    grammar: Grammar,
    builder: Box<dyn TreeBuilder>,
}

impl Parser {
    /// Creates a parser with the canonical [`DefaultBuilder`] tree policy.
    #[must_use]
    pub fn new(lexer: Lexer, grammar: Grammar) -> Self {
        Self::with_builder(lexer, grammar, Box::new(DefaultBuilder))
    }

    /// Creates a parser with a custom tree policy.
    #[must_use]
    pub fn with_builder(lexer: Lexer, grammar: Grammar, builder: Box<dyn TreeBuilder>) -> Self {
        Self {
            lexer,
            grammar,
            builder,
        }
    }

    /// Returns the grammar this parser interprets.
    #[must_use]
    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    /// Parses a source and returns the built tree.
    ///
    /// The source may be a string, a [`camino::Utf8Path`], or a boxed
    /// [`Readable`](crate::source::Readable); see [`SourceInput`].
    ///
    /// The parse succeeds iff the grammar's initial rule matches **and**
    /// the whole input is consumed. Anything else is an unexpected-token
    /// error blaming the furthest token the parse reached — including a
    /// match that stops short of the end of input.
    ///
    /// # Errors
    ///
    /// [`ParseError::Source`] when the source cannot be read,
    /// [`ParseError::Lex`] when the source cannot be tokenized,
    /// [`ParseError::UnexpectedToken`] for syntax errors, and
    /// [`ParseError::NestingTooDeep`] when reduction hits the nesting
    /// limit (even on a nominal match, since the limit may have cut off
    /// the alternative that should have won).
    pub fn parse(&self, source: impl Into<SourceInput>) -> Result<ParseValue, ParseError> {
        let source = source.into();
        let text = source.contents()?;
        debug!(bytes = text.len(), "parse");

        let buffer = TokenBuffer::from_stream(self.lexer.lex(&text))?;
        let mut reducer = Reducer::new(&self.grammar, self.builder.as_ref(), buffer);
        let reduction = reducer.reduce(self.grammar.initial());

        if reducer.depth_exceeded() {
            return Err(ParseError::NestingTooDeep {
                limit: MAX_RULE_DEPTH,
                span: reducer.current().span(),
            });
        }
        match reduction {
            Reduction::Matched(value) if reducer.at_end() => Ok(value),
            _ => Err(ParseError::unexpected(reducer.furthest_token().clone())),
        }
    }
}

impl fmt::Debug for Parser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parser")
            .field("grammar", &self.grammar)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use crate::error::ParseError;
    use crate::lexis::Lexer;
    use crate::syntax::{AstNode, Grammar, ParseValue, Rule};
    use crate::test_helpers::json_parser;

    use super::*;

    fn node(value: &ParseValue) -> &AstNode {
        value.as_node().expect("expected a node")
    }

    #[test]
    fn scalar_parses_to_a_leaf_token() {
        let tree = json_parser().parse("true").unwrap();
        let token = tree.as_token().expect("expected a leaf token");
        assert_eq!(token.name(), "T_TRUE");
        assert_eq!(token.text(), "true");
        assert_eq!(token.offset(), 0);
    }

    #[test]
    fn empty_object_is_a_node_with_no_children() {
        let tree = json_parser().parse("{}").unwrap();
        let object = node(&tree);
        assert_eq!(object.label(), "object");
        assert!(object.children().is_empty());
    }

    #[test]
    fn single_pair_object() {
        let tree = json_parser().parse("{\"a\":1}").unwrap();
        let object = node(&tree);
        assert_eq!(object.label(), "object");
        assert_eq!(object.children().len(), 1);

        let pair = node(&object.children()[0]);
        assert_eq!(pair.label(), "pair");
        let key = pair.children()[0].as_token().unwrap();
        let value = pair.children()[1].as_token().unwrap();
        assert_eq!(key.name(), "T_STRING");
        assert_eq!(key.text(), "\"a\"");
        assert_eq!(value.name(), "T_NUMBER");
        assert_eq!(value.text(), "1");
    }

    #[test]
    fn array_children_stay_in_source_order() {
        let tree = json_parser().parse("[1,2,3]").unwrap();
        let array = node(&tree);
        assert_eq!(array.label(), "array");

        let texts: Vec<_> = array
            .children()
            .iter()
            .map(|child| child.as_token().unwrap().text().to_string())
            .collect();
        assert_eq!(texts, ["1", "2", "3"]);
    }

    #[test]
    fn truncated_object_blames_the_opening_brace() {
        let err = json_parser().parse("{").unwrap_err();
        let token = err.token().expect("expected a syntax error");
        assert_eq!(token.name(), "T_LBRACE");
        assert_eq!(token.offset(), 0);
    }

    #[test]
    fn unlexable_input_is_a_lex_error() {
        match json_parser().parse("@") {
            Err(ParseError::Lex(lex)) => assert_eq!(lex.offset(), 0),
            other => panic!("expected a lex error, got {other:?}"),
        }
    }

    #[test]
    fn trailing_comma_blames_the_closing_bracket() {
        let err = json_parser().parse("[1,]").unwrap_err();
        let token = err.token().expect("expected a syntax error");
        assert_eq!(token.name(), "T_RBRACKET");
        assert_eq!(token.offset(), 3);
    }

    #[test]
    fn nested_structures_round_trip() {
        let tree = json_parser().parse("{\"a\": [1, {\"b\": null}], \"c\": false}").unwrap();
        let object = node(&tree);
        assert_eq!(object.label(), "object");
        assert_eq!(object.children().len(), 2);

        let pair_a = node(&object.children()[0]);
        let array = node(&pair_a.children()[1]);
        assert_eq!(array.label(), "array");
        assert_eq!(array.children().len(), 2);

        let inner = node(&array.children()[1]);
        assert_eq!(inner.label(), "object");
        let pair_b = node(&inner.children()[0]);
        assert_eq!(pair_b.children()[1].as_token().unwrap().name(), "T_NULL");
    }

    #[test]
    fn whitespace_never_reaches_the_tree() {
        let compact = json_parser().parse("[1,2]").unwrap();
        let spaced = json_parser().parse(" [ 1 , 2 ] ").unwrap();
        // Only spans differ; labels and leaf texts are identical.
        assert_eq!(node(&compact).label(), node(&spaced).label());
        assert_eq!(
            node(&compact).children().len(),
            node(&spaced).children().len()
        );
    }

    #[test]
    fn trailing_input_fails_even_after_a_match() {
        let err = json_parser().parse("true false").unwrap_err();
        let token = err.token().expect("expected a syntax error");
        assert_eq!(token.name(), "T_FALSE");
        assert_eq!(token.offset(), 5);
    }

    #[test]
    fn empty_input_blames_end_of_input() {
        let err = json_parser().parse("").unwrap_err();
        let token = err.token().expect("expected a syntax error");
        assert!(token.is_eoi());
        assert_eq!(token.offset(), 0);
    }

    #[test]
    fn parse_state_does_not_leak_between_invocations() {
        let parser = json_parser();
        // A failing parse must not disturb a following successful one.
        assert!(parser.parse("[1,").is_err());
        let tree = parser.parse("[2]").unwrap();
        assert_eq!(node(&tree).label(), "array");

        // And the same input parses identically every time.
        assert_eq!(parser.parse("[1,2,3]").unwrap(), parser.parse("[1,2,3]").unwrap());
    }

    #[test]
    fn left_recursive_grammar_reports_nesting_depth() {
        let lexer = Lexer::new([("T_X", r"x")], Vec::<&str>::new()).unwrap();
        let grammar = Grammar::new([("e", Rule::concat(["e"]))]).unwrap();
        let parser = Parser::new(lexer, grammar);

        let err = parser.parse("x").unwrap_err();
        assert!(matches!(err, ParseError::NestingTooDeep { .. }));
    }
}
