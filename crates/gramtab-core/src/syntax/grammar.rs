// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! The validated rule table.
//!
//! [`Grammar::new`] checks the whole table up front — no dangling rule
//! references, no duplicate ids, a resolvable initial rule — so the
//! interpreter can look rules up unconditionally while reducing.

use std::collections::HashMap;

use crate::error::GrammarError;

use super::rule::{Rule, RuleId};

/// An ordered rule table with a designated initial rule.
#[derive(Debug, Clone)]
pub struct Grammar {
    /// Rules in declaration order.
    rules: Vec<(RuleId, Rule)>,
    /// Id to declaration index.
    index: HashMap<RuleId, usize>,
    initial: RuleId,
}

impl Grammar {
    /// Builds a grammar whose initial rule is the first one declared.
    ///
    /// # Errors
    ///
    /// Returns a [`GrammarError`] for an empty table, a duplicate id, or a
    /// reference to an id that is not in the table.
    pub fn new<I, K>(rules: I) -> Result<Self, GrammarError>
    where
        I: IntoIterator<Item = (K, Rule)>,
        K: Into<RuleId>,
    {
        Self::build(rules, None)
    }

    /// Builds a grammar with an explicit initial rule.
    ///
    /// # Errors
    ///
    /// As [`Grammar::new`], plus [`GrammarError::MissingInitial`] when the
    /// initial id is not in the table.
    pub fn with_initial<I, K>(rules: I, initial: impl Into<RuleId>) -> Result<Self, GrammarError>
    where
        I: IntoIterator<Item = (K, Rule)>,
        K: Into<RuleId>,
    {
        Self::build(rules, Some(initial.into()))
    }

    fn build<I, K>(rules: I, initial: Option<RuleId>) -> Result<Self, GrammarError>
    where
        I: IntoIterator<Item = (K, Rule)>,
        K: Into<RuleId>,
    {
        let rules: Vec<(RuleId, Rule)> = rules
            .into_iter()
            .map(|(id, rule)| (id.into(), rule))
            .collect();
        if rules.is_empty() {
            return Err(GrammarError::EmptyGrammar);
        }

        let mut index = HashMap::with_capacity(rules.len());
        for (position, (id, _)) in rules.iter().enumerate() {
            if index.insert(id.clone(), position).is_some() {
                return Err(GrammarError::DuplicateRule(id.clone()));
            }
        }

        for (id, rule) in &rules {
            for child in rule.referenced_ids() {
                if !index.contains_key(child) {
                    return Err(GrammarError::UnknownRule {
                        from: id.clone(),
                        to: child.clone(),
                    });
                }
            }
        }

        let initial = match initial {
            Some(id) => {
                if !index.contains_key(&id) {
                    return Err(GrammarError::MissingInitial(id));
                }
                id
            }
            None => rules[0].0.clone(),
        };

        Ok(Self {
            rules,
            index,
            initial,
        })
    }

    /// Returns the initial rule's id.
    #[must_use]
    pub fn initial(&self) -> &RuleId {
        &self.initial
    }

    /// Looks up a rule by id.
    #[must_use]
    pub fn rule(&self, id: &RuleId) -> Option<&Rule> {
        self.index.get(id).map(|&position| &self.rules[position].1)
    }

    /// Looks up a rule known to be in the table. Ids drawn from the table
    /// itself always resolve; construction validated every reference.
    pub(crate) fn expect_rule(&self, id: &RuleId) -> &Rule {
        self.rule(id)
            .expect("rule references are validated at construction")
    }

    /// Returns the number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns `false`: construction rejects empty tables.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Iterates over the rules in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&RuleId, &Rule)> {
        self.rules.iter().map(|(id, rule)| (id, rule))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_rule_is_default_initial() {
        let grammar = Grammar::new([
            ("word", Rule::terminal("T_WORD")),
            ("number", Rule::terminal("T_NUMBER")),
        ])
        .unwrap();
        assert_eq!(grammar.initial(), &RuleId::from("word"));
        assert_eq!(grammar.len(), 2);
    }

    #[test]
    fn explicit_initial_rule() {
        let grammar = Grammar::with_initial(
            [
                ("word", Rule::terminal("T_WORD")),
                ("number", Rule::terminal("T_NUMBER")),
            ],
            "number",
        )
        .unwrap();
        assert_eq!(grammar.initial(), &RuleId::from("number"));
    }

    #[test]
    fn empty_table_is_rejected() {
        let err = Grammar::new(Vec::<(RuleId, Rule)>::new()).unwrap_err();
        assert!(matches!(err, GrammarError::EmptyGrammar));
    }

    #[test]
    fn duplicate_id_is_rejected() {
        let err = Grammar::new([
            ("word", Rule::terminal("T_WORD")),
            ("word", Rule::terminal("T_NUMBER")),
        ])
        .unwrap_err();
        assert!(matches!(err, GrammarError::DuplicateRule(id) if id == RuleId::from("word")));
    }

    #[test]
    fn dangling_reference_is_rejected() {
        let err = Grammar::new([("list", Rule::concat(["item"]))]).unwrap_err();
        assert!(matches!(
            err,
            GrammarError::UnknownRule { from, to }
                if from == RuleId::from("list") && to == RuleId::from("item")
        ));
    }

    #[test]
    fn missing_initial_is_rejected() {
        let err =
            Grammar::with_initial([("word", Rule::terminal("T_WORD"))], "missing").unwrap_err();
        assert!(matches!(err, GrammarError::MissingInitial(id) if id == RuleId::from("missing")));
    }

    #[test]
    fn integer_and_symbolic_ids_share_one_space() {
        let grammar = Grammar::new([
            (RuleId::from(0), Rule::alternation([RuleId::from("word")])),
            (RuleId::from("word"), Rule::terminal("T_WORD")),
        ])
        .unwrap();
        assert!(grammar.rule(&RuleId::from(0)).is_some());
        assert!(grammar.rule(&RuleId::from("word")).is_some());
        assert!(grammar.rule(&RuleId::from("0")).is_none());
    }
}
