use super::forward::Scope;
use crate::cursor::Cursor;
use crate::parser::{BoxedParser, Parser, boxed};
use rustc_hash::FxHashMap;
use std::rc::Rc;

/// A rule body: evaluated once per compilation, in a scope where every rule name
/// resolves to its placeholder
pub type RuleBody<'g, C, V> = Rc<dyn Fn(&Scope<'g, C, V>) -> BoxedParser<'g, C, V> + 'g>;

/// Named rule bodies, composable through inheritance
///
/// A rule set's effective rules are its parents' rules merged in the order the
/// parents were given, a later parent overriding an earlier one on a name
/// collision, with the rule set's own rules overriding everything inherited.
pub struct RuleSet<'g, C, V> {
    parents: Vec<RuleSet<'g, C, V>>,
    own: Vec<(String, RuleBody<'g, C, V>)>,
}

impl<C, V> Clone for RuleSet<'_, C, V> {
    fn clone(&self) -> Self {
        RuleSet {
            parents: self.parents.clone(),
            own: self.own.clone(),
        }
    }
}

impl<C, V> Default for RuleSet<'_, C, V> {
    fn default() -> Self {
        RuleSet {
            parents: Vec::new(),
            own: Vec::new(),
        }
    }
}

impl<'g, C, V> RuleSet<'g, C, V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a rule set that inherits every rule of `parents`
    pub fn inheriting(parents: &[&RuleSet<'g, C, V>]) -> Self {
        RuleSet {
            parents: parents.iter().map(|&parent| parent.clone()).collect(),
            own: Vec::new(),
        }
    }

    /// Define (or redefine) a rule
    pub fn rule<F, P>(mut self, name: impl Into<String>, body: F) -> Self
    where
        C: Cursor + 'g,
        V: 'g,
        F: Fn(&Scope<'g, C, V>) -> P + 'g,
        P: Parser<C, Output = V> + 'g,
    {
        let name = name.into();
        let body: RuleBody<'g, C, V> = Rc::new(move |scope: &Scope<'g, C, V>| boxed(body(scope)));
        match self.own.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => entry.1 = body,
            None => self.own.push((name, body)),
        }
        self
    }

    /// Effective rules, in first-definition order
    pub(crate) fn merged(&self) -> Vec<(String, RuleBody<'g, C, V>)> {
        let mut positions = FxHashMap::default();
        let mut rules = Vec::new();
        self.merge_into(&mut positions, &mut rules);
        rules
    }

    fn merge_into(
        &self,
        positions: &mut FxHashMap<String, usize>,
        rules: &mut Vec<(String, RuleBody<'g, C, V>)>,
    ) {
        for parent in &self.parents {
            parent.merge_into(positions, rules);
        }
        for (name, body) in &self.own {
            match positions.get(name) {
                Some(&index) => rules[index].1 = Rc::clone(body),
                None => {
                    positions.insert(name.clone(), rules.len());
                    rules.push((name.clone(), Rc::clone(body)));
                }
            }
        }
    }

    /// Names of the effective rules
    pub fn names(&self) -> Vec<String> {
        self.merged().into_iter().map(|(name, _)| name).collect()
    }
}
