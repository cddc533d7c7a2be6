// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Resolving parse input to source text.
//!
//! [`Parser::parse`](crate::syntax::Parser::parse) accepts anything
//! convertible to a [`SourceInput`]: inline text, a file path, or a custom
//! [`Readable`]. The runtime never streams; it resolves the input to its
//! full contents up front.

use std::fmt;
use std::fs;
use std::io;

use camino::{Utf8Path, Utf8PathBuf};
use ecow::EcoString;
use thiserror::Error;

/// A provider of source text.
///
/// Implement this to feed the parser from somewhere that is neither a
/// string nor a file, e.g. an in-memory editor buffer.
pub trait Readable {
    /// Returns the complete source text.
    ///
    /// # Errors
    ///
    /// Returns any I/O error the underlying source raises.
    fn contents(&self) -> io::Result<String>;
}

/// Where a parse's input comes from.
pub enum SourceInput {
    /// Inline source text.
    Text(EcoString),
    /// A file to read.
    File(Utf8PathBuf),
    /// A custom text provider.
    Readable(Box<dyn Readable>),
}

impl SourceInput {
    /// Resolves the input to its full source text.
    ///
    /// # Errors
    ///
    /// Returns a [`SourceError`] naming the origin when reading fails.
    pub fn contents(&self) -> Result<String, SourceError> {
        match self {
            Self::Text(text) => Ok(text.to_string()),
            Self::File(path) => fs::read_to_string(path).map_err(|source| SourceError {
                origin: path.as_str().into(),
                source,
            }),
            Self::Readable(readable) => readable.contents().map_err(|source| SourceError {
                origin: "<readable>".into(),
                source,
            }),
        }
    }
}

impl fmt::Debug for SourceInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Self::File(path) => f.debug_tuple("File").field(path).finish(),
            Self::Readable(_) => f.debug_tuple("Readable").finish(),
        }
    }
}

impl From<&str> for SourceInput {
    fn from(text: &str) -> Self {
        Self::Text(text.into())
    }
}

impl From<String> for SourceInput {
    fn from(text: String) -> Self {
        Self::Text(text.into())
    }
}

impl From<EcoString> for SourceInput {
    fn from(text: EcoString) -> Self {
        Self::Text(text)
    }
}

impl From<&Utf8Path> for SourceInput {
    fn from(path: &Utf8Path) -> Self {
        Self::File(path.to_owned())
    }
}

impl From<Utf8PathBuf> for SourceInput {
    fn from(path: Utf8PathBuf) -> Self {
        Self::File(path)
    }
}

impl From<Box<dyn Readable>> for SourceInput {
    fn from(readable: Box<dyn Readable>) -> Self {
        Self::Readable(readable)
    }
}

/// Source contents could not be read.
#[derive(Debug, Error)]
#[error("failed to read source from {origin}")]
pub struct SourceError {
    /// The file path or `<readable>`.
    pub origin: EcoString,
    /// The underlying I/O error.
    #[source]
    pub source: io::Error,
}
