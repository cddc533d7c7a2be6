// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! The grammar rule model.
//!
//! A grammar is a flat table of [`Rule`]s keyed by [`RuleId`]. Composite
//! rules reference their children by id rather than by link, so the rule
//! graph may be cyclic (grammars usually are) without any ownership cycles.
//!
//! Rule kinds are a tagged variant matched inside the interpreter; each
//! variant holds only its own data.

use std::fmt;
use std::slice;

use ecow::EcoString;

/// Identifies a rule in a grammar table.
///
/// Integer indices and symbolic names share one id space; equality is
/// variant-exact, so index `1` and name `"1"` are different rules.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RuleId {
    /// A numeric rule id.
    Index(u32),
    /// A symbolic rule name.
    Name(EcoString),
}

impl From<u32> for RuleId {
    fn from(index: u32) -> Self {
        Self::Index(index)
    }
}

impl From<&str> for RuleId {
    fn from(name: &str) -> Self {
        Self::Name(name.into())
    }
}

impl From<EcoString> for RuleId {
    fn from(name: EcoString) -> Self {
        Self::Name(name)
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(index) => write!(f, "#{index}"),
            Self::Name(name) => write!(f, "`{name}`"),
        }
    }
}

/// One rule in a grammar table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// Matches exactly one token by name.
    Terminal {
        /// The token name to match.
        token: EcoString,
        /// Whether the matched token reaches the tree. A non-keep terminal
        /// is consumed but contributes nothing.
        keep: bool,
    },

    /// Matches every child in order; all must succeed.
    Concat {
        /// Children, reduced left to right.
        children: Vec<RuleId>,
        /// Optional node label for the tree builder.
        label: Option<EcoString>,
    },

    /// Matches the first child (in declared order) that succeeds.
    Alternation {
        /// Children, tried in declaration order.
        children: Vec<RuleId>,
        /// Optional node label for the tree builder.
        label: Option<EcoString>,
    },

    /// Matches `child` between `min` and `max` times, greedily.
    Repetition {
        /// The repeated rule.
        child: RuleId,
        /// Minimum number of matches.
        min: u32,
        /// Maximum number of matches; `None` is unbounded.
        max: Option<u32>,
        /// Optional node label for the tree builder.
        label: Option<EcoString>,
    },
}

impl Rule {
    /// A terminal whose matched token reaches the tree.
    #[must_use]
    pub fn terminal(token: impl Into<EcoString>) -> Self {
        Self::Terminal {
            token: token.into(),
            keep: true,
        }
    }

    /// A terminal that is consumed without contributing tree material
    /// (punctuation, delimiters).
    #[must_use]
    pub fn hidden(token: impl Into<EcoString>) -> Self {
        Self::Terminal {
            token: token.into(),
            keep: false,
        }
    }

    /// An unlabeled concatenation of the given rules.
    #[must_use]
    pub fn concat<I>(children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<RuleId>,
    {
        Self::Concat {
            children: children.into_iter().map(Into::into).collect(),
            label: None,
        }
    }

    /// An unlabeled alternation over the given rules.
    #[must_use]
    pub fn alternation<I>(children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<RuleId>,
    {
        Self::Alternation {
            children: children.into_iter().map(Into::into).collect(),
            label: None,
        }
    }

    /// An unlabeled repetition of `child`, `min` to `max` times
    /// (`max = None` is unbounded).
    #[must_use]
    pub fn repetition(child: impl Into<RuleId>, min: u32, max: Option<u32>) -> Self {
        Self::Repetition {
            child: child.into(),
            min,
            max,
            label: None,
        }
    }

    /// A repetition matching `child` zero or one times.
    #[must_use]
    pub fn optional(child: impl Into<RuleId>) -> Self {
        Self::repetition(child, 0, Some(1))
    }

    /// Attaches a node label to a production. Has no effect on terminals,
    /// which carry no label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<EcoString>) -> Self {
        match &mut self {
            Self::Concat { label: slot, .. }
            | Self::Alternation { label: slot, .. }
            | Self::Repetition { label: slot, .. } => *slot = Some(label.into()),
            Self::Terminal { .. } => {}
        }
        self
    }

    /// Returns the production's node label, if any.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Terminal { .. } => None,
            Self::Concat { label, .. }
            | Self::Alternation { label, .. }
            | Self::Repetition { label, .. } => label.as_deref(),
        }
    }

    /// Every rule id this rule references.
    pub(crate) fn referenced_ids(&self) -> &[RuleId] {
        match self {
            Self::Terminal { .. } => &[],
            Self::Concat { children, .. } | Self::Alternation { children, .. } => children,
            Self::Repetition { child, .. } => slice::from_ref(child),
        }
    }
}
