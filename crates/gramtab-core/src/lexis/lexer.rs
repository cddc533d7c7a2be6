// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Lexical analysis over named regular-expression patterns.
//!
//! A [`Lexer`] is built from an ordered list of `(token name, pattern)`
//! pairs plus a set of names to skip. All patterns are compiled into a
//! single alternation anchored at the scan position; at each offset the
//! earliest-declared pattern that matches wins, so keyword patterns must be
//! declared before the identifier patterns that would swallow them.
//!
//! Scanning is lazy: [`Lexer::lex`] returns a [`TokenStream`] iterator that
//! produces tokens on demand and terminates with the end-of-input sentinel.
//! An offset where no pattern matches yields an unrecognized-token error
//! and ends the stream.

use std::collections::HashSet;

use ecow::EcoString;
use regex::Regex;
use tracing::trace;

use crate::error::{GrammarError, LexError};

use super::{Span, Token};

/// How many characters of source to quote in an unrecognized-token error.
const PREVIEW_CHARS: usize = 12;

/// A tokenizer for a fixed set of named patterns.
///
/// Construction validates every pattern: an unparsable pattern or one that
/// can match the empty string (which would stall the scanner) is a
/// [`GrammarError`].
#[derive(Debug, Clone)]
pub struct Lexer {
    /// All patterns as one alternation, anchored with `\A`.
    scanner: Regex,
    /// Token names in declaration order.
    names: Vec<EcoString>,
    /// Synthetic capture-group name for each alternative, `t0`..`tN`.
    groups: Vec<String>,
    /// Names whose matches are consumed without being emitted.
    skip: HashSet<EcoString>,
}

impl Lexer {
    /// Builds a lexer from ordered `(name, pattern)` pairs and a skip set.
    ///
    /// Patterns may use their own capture groups, but group names of the
    /// form `t<digits>` are reserved for the scanner.
    ///
    /// # Errors
    ///
    /// Returns [`GrammarError::NoPatterns`] for an empty pattern list,
    /// [`GrammarError::InvalidPattern`] for a pattern the regex engine
    /// rejects, and [`GrammarError::ZeroWidthPattern`] for a pattern that
    /// matches the empty string.
    pub fn new<N, P, S>(
        patterns: impl IntoIterator<Item = (N, P)>,
        skip: impl IntoIterator<Item = S>,
    ) -> Result<Self, GrammarError>
    where
        N: Into<EcoString>,
        P: AsRef<str>,
        S: Into<EcoString>,
    {
        let mut names = Vec::new();
        let mut groups = Vec::new();
        let mut alternatives = Vec::new();

        for (name, pattern) in patterns {
            let name = name.into();
            let pattern = pattern.as_ref();

            // Validate each pattern on its own so errors name the offending token.
            let probe =
                Regex::new(&format!(r"\A(?:{pattern})")).map_err(|err| {
                    GrammarError::InvalidPattern {
                        name: name.clone(),
                        reason: err.to_string(),
                    }
                })?;
            if probe.is_match("") {
                return Err(GrammarError::ZeroWidthPattern { name });
            }

            let group = format!("t{}", names.len());
            alternatives.push(format!("(?P<{group}>{pattern})"));
            names.push(name);
            groups.push(group);
        }

        if names.is_empty() {
            return Err(GrammarError::NoPatterns);
        }

        // Individually valid patterns can still collide here, e.g. two
        // patterns declaring the same named group.
        let scanner = Regex::new(&format!(r"\A(?:{})", alternatives.join("|"))).map_err(|err| {
            GrammarError::InvalidPattern {
                name: "<combined scanner>".into(),
                reason: err.to_string(),
            }
        })?;

        Ok(Self {
            scanner,
            names,
            groups,
            skip: skip.into_iter().map(Into::into).collect(),
        })
    }

    /// Returns a lazy token stream over `source`.
    #[must_use]
    pub fn lex<'lx, 'src>(&'lx self, source: &'src str) -> TokenStream<'lx, 'src> {
        TokenStream {
            lexer: self,
            source,
            offset: 0,
            finished: false,
        }
    }
}

/// Lazy iterator over the tokens of one source string.
///
/// Yields every non-skipped token in source order, then the end-of-input
/// sentinel, then `None`. An unrecognized offset yields one `Err` and ends
/// the stream.
#[derive(Debug)]
pub struct TokenStream<'lx, 'src> {
    lexer: &'lx Lexer,
    source: &'src str,
    offset: usize,
    finished: bool,
}

impl Iterator for TokenStream<'_, '_> {
    type Item = Result<Token, LexError>;

    #[expect(
        clippy::cast_possible_truncation,
        reason = "source files over 4GB are not supported"
    )]
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.finished {
                return None;
            }
            if self.offset >= self.source.len() {
                self.finished = true;
                return Some(Ok(Token::end_of_input(self.offset as u32)));
            }

            let rest = &self.source[self.offset..];
            let Some(caps) = self.lexer.scanner.captures(rest) else {
                self.finished = true;
                let preview: String = rest.chars().take(PREVIEW_CHARS).collect();
                return Some(Err(LexError::unrecognized(self.offset as u32, preview)));
            };

            // Exactly one alternative participates in the match; the scan
            // checks synthetic groups in declaration order, which is also
            // the engine's alternation preference.
            let (name, matched) = self
                .lexer
                .groups
                .iter()
                .zip(&self.lexer.names)
                .find_map(|(group, name)| caps.name(group).map(|m| (name, m)))
                .expect("anchored match always fires one alternative");

            let span = Span::new(self.offset as u32, (self.offset + matched.end()) as u32);
            self.offset += matched.end();

            if self.lexer.skip.contains(name.as_str()) {
                trace!(token = %name, span = ?span, "skip");
                continue;
            }
            return Some(Ok(Token::new(name.clone(), matched.as_str(), span)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex_all(lexer: &Lexer, source: &str) -> Vec<Token> {
        lexer
            .lex(source)
            .collect::<Result<Vec<_>, _>>()
            .expect("lexing should succeed")
    }

    fn word_lexer() -> Lexer {
        Lexer::new(
            [
                ("T_LET", r"let"),
                ("T_IDENT", r"[a-z]+"),
                ("T_WS", r"[ \t\n]+"),
            ],
            ["T_WS"],
        )
        .expect("patterns are valid")
    }

    #[test]
    fn emits_tokens_with_offsets() {
        let tokens = lex_all(&word_lexer(), "foo bar");
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].name(), "T_IDENT");
        assert_eq!(tokens[0].text(), "foo");
        assert_eq!(tokens[0].offset(), 0);
        assert_eq!(tokens[1].text(), "bar");
        assert_eq!(tokens[1].offset(), 4);
        assert!(tokens[2].is_eoi());
        assert_eq!(tokens[2].offset(), 7);
    }

    #[test]
    fn declaration_order_beats_length() {
        // `let` is declared before the identifier pattern, so it wins at
        // offset 0 even though T_IDENT would match more of the input.
        let tokens = lex_all(&word_lexer(), "letter");
        assert_eq!(tokens[0].name(), "T_LET");
        assert_eq!(tokens[0].text(), "let");
        assert_eq!(tokens[1].name(), "T_IDENT");
        assert_eq!(tokens[1].text(), "ter");
    }

    #[test]
    fn skip_patterns_are_consumed_silently() {
        let tokens = lex_all(&word_lexer(), "  foo\n\tbar ");
        let names: Vec<_> = tokens.iter().map(Token::name).collect();
        assert_eq!(names, ["T_IDENT", "T_IDENT", super::super::EOI]);
    }

    #[test]
    fn empty_source_yields_only_eoi() {
        let tokens = lex_all(&word_lexer(), "");
        assert_eq!(tokens.len(), 1);
        assert!(tokens[0].is_eoi());
        assert_eq!(tokens[0].offset(), 0);
    }

    #[test]
    fn unrecognized_input_reports_offset_and_preview() {
        let lexer = word_lexer();
        let mut stream = lexer.lex("foo @bar");
        assert!(stream.next().unwrap().is_ok());
        let err = stream.next().unwrap().unwrap_err();
        assert_eq!(err.offset(), 4);
        assert_eq!(err.preview(), "@bar");
        // The stream ends after the error.
        assert!(stream.next().is_none());
    }

    #[test]
    fn zero_width_pattern_is_rejected() {
        let err = Lexer::new([("T_ANY", r"a*")], Vec::<&str>::new()).unwrap_err();
        assert!(matches!(err, GrammarError::ZeroWidthPattern { name } if name == "T_ANY"));
    }

    #[test]
    fn invalid_pattern_is_rejected() {
        let err = Lexer::new([("T_BAD", r"(unclosed")], Vec::<&str>::new()).unwrap_err();
        assert!(matches!(err, GrammarError::InvalidPattern { name, .. } if name == "T_BAD"));
    }

    #[test]
    fn empty_pattern_list_is_rejected() {
        let err = Lexer::new(Vec::<(&str, &str)>::new(), Vec::<&str>::new()).unwrap_err();
        assert!(matches!(err, GrammarError::NoPatterns));
    }
}
