// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Tree builders.
//!
//! The shape of the output tree is policy, not contract: after a
//! production matches, its raw value passes through the parser's
//! [`TreeBuilder`], which may reshape it. [`DefaultBuilder`] produces the
//! canonical form — labeled concatenations and alternations become
//! [`AstNode`]s, single-element lists unwrap to their element, everything
//! else passes through untouched.

use super::rule::Rule;
use super::value::{AstNode, ParseValue};

/// Policy object converting successful reductions into tree material.
///
/// Builders must be stateless: one builder instance is shared across every
/// reduction of every parse invocation.
pub trait TreeBuilder {
    /// Post-processes the raw value matched by `rule`.
    ///
    /// Returning the value unchanged keeps the raw reduction result.
    fn build(&self, rule: &Rule, raw: ParseValue) -> ParseValue;
}

/// The canonical tree policy, sufficient for JSON-like ASTs.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultBuilder;

impl TreeBuilder for DefaultBuilder {
    fn build(&self, rule: &Rule, raw: ParseValue) -> ParseValue {
        match rule {
            Rule::Concat {
                label: Some(label), ..
            }
            | Rule::Alternation {
                label: Some(label), ..
            } => {
                let children = match raw {
                    ParseValue::List(items) => items,
                    other => vec![other],
                };
                ParseValue::Node(AstNode::new(label.clone(), children))
            }
            _ => match raw {
                ParseValue::List(mut items) if items.len() == 1 => {
                    items.pop().expect("length checked above")
                }
                other => other,
            },
        }
    }
}
