use crate::cursor::Cursor;
use crate::error::{GrammarError, RecombResult};
use crate::parser::{BoxedParser, Parser};
use rustc_hash::FxHashMap;
use std::cell::{OnceCell, RefCell};
use std::rc::{Rc, Weak};
use tracing::trace;

/// One write-once cell of a grammar's rule arena
pub(crate) struct Slot<'g, C, V> {
    name: Rc<str>,
    parser: OnceCell<BoxedParser<'g, C, V>>,
}

impl<C, V> Slot<'_, C, V> {
    pub(crate) fn new(name: &str) -> Self {
        Slot {
            name: name.into(),
            parser: OnceCell::new(),
        }
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }
}

pub(crate) type Arena<'g, C, V> = Rc<[Slot<'g, C, V>]>;

/// Placeholder standing in for a grammar rule
///
/// Rule bodies refer to each other (and to themselves) through placeholders, so
/// rules can be written in any order. A placeholder is itself a parser: once its
/// rule is bound it delegates to it.
///
/// Placeholders only hold a weak reference to their grammar's arena. Keep the
/// `Grammar` alive for as long as you parse with any of its rules.
pub struct Forward<'g, C, V> {
    name: Rc<str>,
    slot: Option<usize>,
    arena: Weak<[Slot<'g, C, V>]>,
}

impl<C, V> Clone for Forward<'_, C, V> {
    fn clone(&self) -> Self {
        Forward {
            name: Rc::clone(&self.name),
            slot: self.slot,
            arena: Weak::clone(&self.arena),
        }
    }
}

impl<C, V> std::fmt::Debug for Forward<'_, C, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Forward")
            .field("name", &self.name)
            .field("bound", &self.is_bound())
            .finish()
    }
}

impl<'g, C, V> Forward<'g, C, V> {
    pub(crate) fn new(arena: &Arena<'g, C, V>, slot: usize) -> Self {
        let name = arena
            .get(slot)
            .map_or_else(|| Rc::from(""), |slot| Rc::clone(&slot.name));
        Forward {
            name,
            slot: Some(slot),
            arena: Rc::downgrade(arena),
        }
    }

    /// A placeholder for a name no rule answers to
    pub(crate) fn dangling(name: &str) -> Self {
        Forward {
            name: name.into(),
            slot: None,
            arena: Weak::<[Slot<'g, C, V>; 0]>::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_bound(&self) -> bool {
        self.with_slot(|slot| slot.parser.get().is_some())
            .unwrap_or(false)
    }

    /// Bind the rule this placeholder stands for
    ///
    /// Every placeholder is bound exactly once; a second delivery is an error.
    pub fn deliver(&self, parser: BoxedParser<'g, C, V>) -> Result<(), GrammarError> {
        let bound = self.with_slot(|slot| slot.parser.set(parser).is_ok())?;
        if !bound {
            return Err(GrammarError::AlreadyBound {
                name: self.name.to_string(),
            });
        }
        trace!(rule = %self.name, "bound rule");
        Ok(())
    }

    /// The parser this placeholder is bound to
    fn resolve(&self) -> Result<BoxedParser<'g, C, V>, GrammarError> {
        self.with_slot(|slot| slot.parser.get().cloned())?
            .ok_or_else(|| GrammarError::Unbound {
                name: self.name.to_string(),
            })
    }

    fn with_slot<T>(&self, f: impl FnOnce(&Slot<'g, C, V>) -> T) -> Result<T, GrammarError> {
        let Some(index) = self.slot else {
            return Err(GrammarError::UnknownRule {
                name: self.name.to_string(),
            });
        };
        let arena = self.arena.upgrade().ok_or_else(|| GrammarError::Detached {
            name: self.name.to_string(),
        })?;
        arena
            .get(index)
            .map(f)
            .ok_or_else(|| GrammarError::UnknownRule {
                name: self.name.to_string(),
            })
    }
}

impl<C: Cursor, V> Parser<C> for Forward<'_, C, V> {
    type Output = V;

    fn parse(&self, cursor: &mut C) -> RecombResult<V> {
        self.resolve()?.parse(cursor)
    }
}

/// Environment in which rule bodies are evaluated
///
/// Every rule name of the merged rule set resolves to its placeholder, including
/// the rule being defined.
pub struct Scope<'g, C, V> {
    placeholders: FxHashMap<Rc<str>, Forward<'g, C, V>>,
    unknown: RefCell<Option<String>>,
}

impl<'g, C, V> Scope<'g, C, V> {
    pub(crate) fn new(placeholders: FxHashMap<Rc<str>, Forward<'g, C, V>>) -> Self {
        Scope {
            placeholders,
            unknown: RefCell::new(None),
        }
    }

    /// The placeholder for the rule called `name`
    ///
    /// Asking for a name the grammar does not define makes compilation fail with
    /// `GrammarError::UnknownRule`.
    pub fn rule(&self, name: &str) -> Forward<'g, C, V> {
        match self.placeholders.get(name) {
            Some(placeholder) => placeholder.clone(),
            None => {
                self.unknown.borrow_mut().get_or_insert_with(|| name.to_string());
                Forward::dangling(name)
            }
        }
    }

    /// First unknown rule name a body asked for, if any
    pub(crate) fn take_unknown(&self) -> Option<String> {
        self.unknown.borrow_mut().take()
    }

    pub(crate) fn into_placeholders(self) -> FxHashMap<Rc<str>, Forward<'g, C, V>> {
        self.placeholders
    }
}
