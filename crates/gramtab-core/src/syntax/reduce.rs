// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! The rule interpreter.
//!
//! Reduction walks the rule table top-down, driven by the token buffer:
//! terminals consume tokens, concatenations reduce their children in
//! order, alternations try children in declared order with backtracking,
//! and repetitions loop greedily. Every site that can fail snapshots the
//! cursor with [`TokenBuffer::key`] and restores it with
//! [`TokenBuffer::seek`] on failure; nothing else is mutated, so a
//! [`Reduction::NoMatch`] is always free of side effects.
//!
//! There is no lookahead: ambiguous alternations are re-parsed on
//! backtracking, which can cost exponential time in grammar depth. That is
//! the documented tradeoff for interpreting arbitrary rule tables.
//!
//! All interpreter state — cursor, furthest position, nesting depth — is
//! owned by the per-invocation [`Reducer`] and threaded through the
//! recursion by reference. None of it may be hoisted anywhere longer-lived.

use tracing::trace;

use crate::lexis::{Token, TokenBuffer};

use super::builder::TreeBuilder;
use super::grammar::Grammar;
use super::rule::{Rule, RuleId};
use super::value::ParseValue;

/// Stack red zone below which [`stacker`] grows the stack on the heap.
const STACK_RED_ZONE: usize = 32 * 1024;
/// Size of each heap-allocated stack segment.
const STACK_GROW: usize = 256 * 1024;

/// Hard cap on rule nesting. Grammars this deep are almost certainly
/// left-recursive; failing cleanly beats recursing forever.
pub(crate) const MAX_RULE_DEPTH: usize = 4096;

/// Outcome of reducing one rule.
///
/// `NoMatch` is ordinary control flow — the signal that an alternative or
/// repetition attempt did not apply — never an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Reduction {
    /// The rule matched and produced tree material.
    Matched(ParseValue),
    /// The rule did not apply; the cursor is back where it was.
    NoMatch,
}

/// One parse invocation's interpreter state.
pub(crate) struct Reducer<'a> {
    grammar: &'a Grammar,
    builder: &'a dyn TreeBuilder,
    buffer: TokenBuffer,
    /// Greatest cursor position attained by any terminal consumption.
    furthest_key: usize,
    depth: usize,
    depth_exceeded: bool,
}

impl<'a> Reducer<'a> {
    pub(crate) fn new(
        grammar: &'a Grammar,
        builder: &'a dyn TreeBuilder,
        buffer: TokenBuffer,
    ) -> Self {
        Self {
            grammar,
            builder,
            buffer,
            furthest_key: 0,
            depth: 0,
            depth_exceeded: false,
        }
    }

    /// Reduces one rule at the current cursor position.
    pub(crate) fn reduce(&mut self, id: &RuleId) -> Reduction {
        // Deep grammars are legitimate; grow the stack rather than overflow.
        stacker::maybe_grow(STACK_RED_ZONE, STACK_GROW, || self.reduce_inner(id))
    }

    fn reduce_inner(&mut self, id: &RuleId) -> Reduction {
        if self.depth >= MAX_RULE_DEPTH {
            self.depth_exceeded = true;
            return Reduction::NoMatch;
        }
        self.depth += 1;

        let grammar = self.grammar;
        let rule = grammar.expect_rule(id);
        trace!(rule = %id, key = self.buffer.key(), "reduce");

        let reduction = match rule {
            Rule::Terminal { token, keep } => self.reduce_terminal(token, *keep),
            Rule::Concat { children, .. } => self.reduce_concat(rule, children),
            Rule::Alternation { children, .. } => self.reduce_alternation(rule, children),
            Rule::Repetition {
                child, min, max, ..
            } => self.reduce_repetition(rule, child, *min, *max),
        };

        self.depth -= 1;
        reduction
    }

    fn reduce_terminal(&mut self, token: &str, keep: bool) -> Reduction {
        if self.buffer.current().name() != token {
            return Reduction::NoMatch;
        }
        let matched = self.buffer.current().clone();
        self.buffer.advance();
        self.furthest_key = self.furthest_key.max(self.buffer.key());

        if keep {
            Reduction::Matched(ParseValue::Token(matched))
        } else {
            Reduction::Matched(ParseValue::empty())
        }
    }

    fn reduce_concat(&mut self, rule: &Rule, children: &[RuleId]) -> Reduction {
        let entry = self.buffer.key();
        let mut items = Vec::new();

        for child in children {
            match self.reduce(child) {
                Reduction::Matched(value) => ParseValue::extend_flattened(&mut items, value),
                Reduction::NoMatch => {
                    self.buffer.seek(entry);
                    return Reduction::NoMatch;
                }
            }
        }

        Reduction::Matched(self.builder.build(rule, ParseValue::List(items)))
    }

    fn reduce_alternation(&mut self, rule: &Rule, children: &[RuleId]) -> Reduction {
        let entry = self.buffer.key();

        for child in children {
            match self.reduce(child) {
                Reduction::Matched(value) => {
                    return Reduction::Matched(self.builder.build(rule, value));
                }
                Reduction::NoMatch => self.buffer.seek(entry),
            }
        }

        Reduction::NoMatch
    }

    fn reduce_repetition(
        &mut self,
        rule: &Rule,
        child: &RuleId,
        min: u32,
        max: Option<u32>,
    ) -> Reduction {
        let entry = self.buffer.key();
        let mut items = Vec::new();
        let mut count: u32 = 0;

        loop {
            if max.is_some_and(|m| count >= m) {
                break;
            }
            let attempt = self.buffer.key();
            match self.reduce(child) {
                Reduction::NoMatch => {
                    self.buffer.seek(attempt);
                    break;
                }
                Reduction::Matched(value) => {
                    ParseValue::extend_flattened(&mut items, value);
                    count += 1;
                    // A child that consumed nothing would match forever.
                    if self.buffer.key() == attempt {
                        break;
                    }
                }
            }
        }

        if count < min {
            self.buffer.seek(entry);
            return Reduction::NoMatch;
        }
        Reduction::Matched(self.builder.build(rule, ParseValue::List(items)))
    }

    /// Returns `true` if the cursor rests on the end-of-input sentinel.
    pub(crate) fn at_end(&self) -> bool {
        self.buffer.at_end()
    }

    /// Returns `true` if reduction hit the nesting limit.
    pub(crate) fn depth_exceeded(&self) -> bool {
        self.depth_exceeded
    }

    /// Returns the token under the cursor.
    pub(crate) fn current(&self) -> &Token {
        self.buffer.current()
    }

    /// The token to blame when the parse fails: the one at the deepest
    /// cursor position reached. When that is the end-of-input sentinel of
    /// truncated input, blame falls back to the last real token consumed.
    pub(crate) fn furthest_token(&self) -> &Token {
        let deepest = self
            .buffer
            .get(self.furthest_key)
            .expect("cursor positions are always in bounds");
        if deepest.is_eoi() && self.furthest_key > 0 {
            self.buffer
                .get(self.furthest_key - 1)
                .expect("cursor positions are always in bounds")
        } else {
            deepest
        }
    }

    #[cfg(test)]
    pub(crate) fn key(&self) -> usize {
        self.buffer.key()
    }
}
