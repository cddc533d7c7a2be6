// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Error types for the parser runtime.
//!
//! Three failure kinds exist:
//!
//! - [`GrammarError`] — structural defects in a lexer or rule table,
//!   detected at construction. Fatal; the parser is never built.
//! - [`LexError`] — the scanner found input no pattern matches.
//! - [`ParseError`] — the reduction failed, or matched without reaching
//!   the end of input. Also wraps the lexing and source-reading failures
//!   that [`parse`](crate::syntax::Parser::parse) can surface.
//!
//! The interpreter's internal no-match outcome is ordinary control flow,
//! not an error, and never escapes the parser façade.
//!
//! Errors carry source locations ([`Span`]) and integrate with [`miette`]
//! for diagnostic reporting.

use ecow::EcoString;
use miette::Diagnostic;
use thiserror::Error;

use crate::lexis::{Span, Token};
use crate::source::SourceError;
use crate::syntax::RuleId;

/// A structural defect in a lexer or rule table.
///
/// These are detected when the lexer or grammar is constructed, before any
/// input is seen.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum GrammarError {
    /// The rule table is empty.
    #[error("grammar has no rules")]
    EmptyGrammar,

    /// The same rule id appears twice in the table.
    #[error("duplicate rule id {0}")]
    DuplicateRule(RuleId),

    /// A rule references an id that is not in the table.
    #[error("rule {from} references unknown rule {to}")]
    UnknownRule {
        /// The rule containing the dangling reference.
        from: RuleId,
        /// The id that could not be resolved.
        to: RuleId,
    },

    /// The designated initial rule is not in the table.
    #[error("initial rule {0} is not in the table")]
    MissingInitial(RuleId),

    /// The lexer was given no token patterns.
    #[error("lexer has no token patterns")]
    NoPatterns,

    /// A token pattern failed to compile.
    #[error("invalid pattern for token {name}: {reason}")]
    InvalidPattern {
        /// The token whose pattern is broken.
        name: EcoString,
        /// The regex engine's explanation.
        reason: String,
    },

    /// A token pattern can match the empty string, which would stall the
    /// scanner.
    #[error("pattern for token {name} can match the empty string")]
    ZeroWidthPattern {
        /// The token whose pattern is zero-width.
        name: EcoString,
    },
}

/// The scanner found input that no registered pattern matches.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("unrecognized token; source continues with {preview:?}")]
pub struct LexError {
    /// Where scanning failed.
    #[label("no pattern matches here")]
    pub span: Span,
    /// A short preview of the source at the failure point.
    pub preview: EcoString,
}

impl LexError {
    /// Creates an unrecognized-token error at the given byte offset.
    #[must_use]
    pub fn unrecognized(offset: u32, preview: impl Into<EcoString>) -> Self {
        Self {
            span: Span::point(offset),
            preview: preview.into(),
        }
    }

    /// Returns the byte offset where scanning failed.
    #[must_use]
    pub fn offset(&self) -> u32 {
        self.span.start()
    }

    /// Returns the source preview at the failure point.
    #[must_use]
    pub fn preview(&self) -> &str {
        &self.preview
    }
}

/// A failure surfaced by [`Parser::parse`](crate::syntax::Parser::parse).
#[derive(Debug, Error, Diagnostic)]
pub enum ParseError {
    /// The reduction failed, or succeeded without consuming all input.
    ///
    /// The token is the furthest point the parse got past, falling back to
    /// the first token when nothing was consumed.
    #[error("unexpected token {token}")]
    UnexpectedToken {
        /// The offending token.
        token: Token,
        /// The offending token's location.
        #[label("parsing cannot continue past this token")]
        span: Span,
    },

    /// Rule nesting exceeded the runtime's depth limit.
    #[error("rule nesting exceeded {limit} levels; is the grammar left-recursive?")]
    NestingTooDeep {
        /// The depth limit that was hit.
        limit: usize,
        /// Where the input cursor stood when the limit was hit.
        #[label("while parsing here")]
        span: Span,
    },

    /// The source could not be tokenized.
    #[error(transparent)]
    #[diagnostic(transparent)]
    Lex(#[from] LexError),

    /// The source contents could not be read.
    #[error(transparent)]
    Source(#[from] SourceError),
}

impl ParseError {
    /// Creates an unexpected-token error for the given token.
    #[must_use]
    pub fn unexpected(token: Token) -> Self {
        let span = token.span();
        Self::UnexpectedToken { token, span }
    }

    /// Returns the offending token for syntax errors.
    #[must_use]
    pub fn token(&self) -> Option<&Token> {
        match self {
            Self::UnexpectedToken { token, .. } => Some(token),
            _ => None,
        }
    }
}
