// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Values produced by reduction.
//!
//! The interpreter assembles [`ParseValue`]s bottom-up: kept terminals
//! become [`ParseValue::Token`] leaves, productions collect their children
//! into [`ParseValue::List`]s, and the tree builder may wrap labeled
//! productions into [`ParseValue::Node`]s. The empty list doubles as the
//! "matched, contributes nothing" value; list flattening drops it.

use ecow::EcoString;

use crate::lexis::{Span, Token};

/// Tree material from one successful reduction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseValue {
    /// A kept terminal's token.
    Token(Token),
    /// An ordered sequence of values. Empty means "matched, contributes
    /// nothing".
    List(Vec<ParseValue>),
    /// A labeled AST node.
    Node(AstNode),
}

impl ParseValue {
    /// The "matched, contributes nothing" value.
    #[must_use]
    pub const fn empty() -> Self {
        Self::List(Vec::new())
    }

    /// Returns `true` for the empty list.
    #[must_use]
    pub fn is_empty_list(&self) -> bool {
        matches!(self, Self::List(items) if items.is_empty())
    }

    /// Returns the token for leaf values.
    #[must_use]
    pub fn as_token(&self) -> Option<&Token> {
        match self {
            Self::Token(token) => Some(token),
            _ => None,
        }
    }

    /// Returns the items for list values.
    #[must_use]
    pub fn as_list(&self) -> Option<&[ParseValue]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the node for node values.
    #[must_use]
    pub fn as_node(&self) -> Option<&AstNode> {
        match self {
            Self::Node(node) => Some(node),
            _ => None,
        }
    }

    /// Returns the source region this value covers, if it covers any.
    #[must_use]
    pub fn span(&self) -> Option<Span> {
        match self {
            Self::Token(token) => Some(token.span()),
            Self::Node(node) => Some(node.span()),
            Self::List(items) => items
                .iter()
                .filter_map(ParseValue::span)
                .reduce(Span::merge),
        }
    }

    /// Merges `child` into `items`: a list splices element-wise (so the
    /// empty list contributes nothing), anything else appends as one
    /// element. Source order is preserved.
    pub(crate) fn extend_flattened(items: &mut Vec<ParseValue>, child: ParseValue) {
        match child {
            Self::List(mut inner) => items.append(&mut inner),
            other => items.push(other),
        }
    }
}

impl std::fmt::Display for ParseValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Token(token) => write!(f, "{token}"),
            Self::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Self::Node(node) => write!(f, "{node}"),
        }
    }
}

/// A labeled tree node wrapping the values a production matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AstNode {
    label: EcoString,
    children: Vec<ParseValue>,
    span: Span,
}

impl AstNode {
    /// Creates a node; its span is the merge of its children's spans.
    #[must_use]
    pub fn new(label: impl Into<EcoString>, children: Vec<ParseValue>) -> Self {
        let span = children
            .iter()
            .filter_map(ParseValue::span)
            .reduce(Span::merge)
            .unwrap_or_default();
        Self {
            label: label.into(),
            children,
            span,
        }
    }

    /// Returns the node's label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the node's children in source order.
    #[must_use]
    pub fn children(&self) -> &[ParseValue] {
        &self.children
    }

    /// Returns the source region the node covers.
    #[must_use]
    pub fn span(&self) -> Span {
        self.span
    }
}

impl std::fmt::Display for AstNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)?;
        write!(f, "(")?;
        for (i, child) in self.children.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{child}")?;
        }
        write!(f, ")")
    }
}
