//! Grammars: named, mutually recursive rules with inheritance
//!
//! A [`RuleSet`] collects rule bodies. Compiling it evaluates every body once in a
//! [`Scope`] where each rule name resolves to a [`Forward`] placeholder, then binds
//! each placeholder to the parser its body produced. Rules may therefore refer to
//! each other, and to themselves, regardless of definition order.
//!
//! Inheritance is late-bound: a parent rule that refers to a name the child
//! redefines uses the child's definition.

pub mod forward;
pub mod rules;

pub use forward::{Forward, Scope};
pub use rules::{RuleBody, RuleSet};

use crate::cursor::Cursor;
use crate::error::{GrammarError, RecombResult};
use crate::parser::{BoxedParser, Parser};
use forward::{Arena, Slot};
use rustc_hash::FxHashMap;
use std::rc::Rc;
use tracing::debug;

/// A compiled rule set
///
/// The grammar owns its rules; placeholders handed out by [`Grammar::get`] stop
/// working once it is dropped.
pub struct Grammar<'g, C, V> {
    arena: Arena<'g, C, V>,
    entries: FxHashMap<Rc<str>, Forward<'g, C, V>>,
    rules: RuleSet<'g, C, V>,
}

impl<'g, C, V> RuleSet<'g, C, V>
where
    C: Cursor + 'g,
    V: 'g,
{
    /// Evaluate every effective rule and bind the results
    ///
    /// Fails with `GrammarError::UnknownRule` if a body asks its scope for a name
    /// that no effective rule defines.
    pub fn compile(&self) -> Result<Grammar<'g, C, V>, GrammarError> {
        let merged = self.merged();
        let arena: Arena<'g, C, V> = merged.iter().map(|(name, _)| Slot::new(name)).collect();

        let placeholders = (0..arena.len())
            .map(|index| {
                let placeholder = Forward::new(&arena, index);
                (Rc::from(placeholder.name()), placeholder)
            })
            .collect();
        let scope = Scope::new(placeholders);

        let parsers: Vec<BoxedParser<'g, C, V>> =
            merged.iter().map(|(_, body)| body(&scope)).collect();
        if let Some(name) = scope.take_unknown() {
            return Err(GrammarError::UnknownRule { name });
        }

        for (index, parser) in parsers.into_iter().enumerate() {
            Forward::new(&arena, index).deliver(parser)?;
        }

        debug!(rules = arena.len(), "compiled grammar");
        Ok(Grammar {
            arena,
            entries: scope.into_placeholders(),
            rules: self.clone(),
        })
    }
}

impl<'g, C: Cursor, V> Grammar<'g, C, V> {
    /// The bound placeholder of the rule called `name`
    pub fn get(&self, name: &str) -> Option<&Forward<'g, C, V>> {
        self.entries.get(name)
    }

    /// Run the rule called `name` at the cursor
    pub fn parse(&self, name: &str, cursor: &mut C) -> RecombResult<V> {
        let rule = self.get(name).ok_or_else(|| GrammarError::UnknownRule {
            name: name.to_string(),
        })?;
        rule.parse(cursor)
    }

    /// Rule names in first-definition order
    pub fn names(&self) -> Vec<&str> {
        self.arena.iter().map(Slot::name).collect()
    }

    /// The rule set this grammar was compiled from
    pub fn rules(&self) -> &RuleSet<'g, C, V> {
        &self.rules
    }
}

impl<C, V> std::fmt::Debug for Grammar<'_, C, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Grammar")
            .field("rules", &self.arena.iter().map(Slot::name).collect::<Vec<_>>())
            .finish()
    }
}
