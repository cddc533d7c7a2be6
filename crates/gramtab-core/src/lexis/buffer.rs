// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Random-access token buffer.
//!
//! The interpreter backtracks by saving the cursor with [`TokenBuffer::key`]
//! before an attempt and restoring it with [`TokenBuffer::seek`] on failure,
//! at arbitrary depth. That requires O(1) repeatable access, so the buffer
//! materializes the lexer's lazy stream eagerly; grammar-authored parsers
//! rarely see inputs large enough for this to matter.

use crate::error::LexError;

use super::Token;

/// The materialized token sequence with a movable cursor.
///
/// The sequence always ends with the end-of-input sentinel, so the buffer
/// is never empty and `current()` is total: once the cursor reaches the
/// sentinel, [`TokenBuffer::advance`] is a no-op and the cursor stays put.
#[derive(Debug, Clone)]
pub struct TokenBuffer {
    tokens: Vec<Token>,
    cursor: usize,
}

impl TokenBuffer {
    /// Materializes a token stream into a buffer.
    ///
    /// # Errors
    ///
    /// Propagates the first lexing error in the stream, so an unrecognized
    /// token anywhere in the source fails before any reduction runs.
    pub fn from_stream(
        stream: impl IntoIterator<Item = Result<Token, LexError>>,
    ) -> Result<Self, LexError> {
        let tokens = stream.into_iter().collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_tokens(tokens))
    }

    /// Builds a buffer directly from tokens, appending the end-of-input
    /// sentinel if the sequence lacks one.
    #[must_use]
    pub fn from_tokens(mut tokens: Vec<Token>) -> Self {
        if !tokens.last().is_some_and(Token::is_eoi) {
            let offset = tokens.last().map_or(0, |t| t.span().end());
            tokens.push(Token::end_of_input(offset));
        }
        Self { tokens, cursor: 0 }
    }

    /// Returns the token under the cursor.
    #[must_use]
    pub fn current(&self) -> &Token {
        &self.tokens[self.cursor]
    }

    /// Moves the cursor one token forward; a no-op on the end-of-input
    /// sentinel.
    pub fn advance(&mut self) {
        if !self.current().is_eoi() {
            self.cursor += 1;
        }
    }

    /// Returns the cursor position, for a later [`TokenBuffer::seek`].
    #[must_use]
    pub fn key(&self) -> usize {
        self.cursor
    }

    /// Restores the cursor to a previously observed position.
    ///
    /// Positions past the end-of-input sentinel are clamped to it.
    pub fn seek(&mut self, key: usize) {
        debug_assert!(key < self.tokens.len(), "seek past the token sequence");
        self.cursor = key.min(self.tokens.len() - 1);
    }

    /// Returns the token at an arbitrary position, if any.
    #[must_use]
    pub fn get(&self, key: usize) -> Option<&Token> {
        self.tokens.get(key)
    }

    /// Returns the number of tokens, including the end-of-input sentinel.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns `false`: the sentinel means a buffer always has one token.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns `true` if the cursor rests on the end-of-input sentinel.
    #[must_use]
    pub fn at_end(&self) -> bool {
        self.current().is_eoi()
    }
}
