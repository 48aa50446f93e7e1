//! Decoration registry: leading/trailing content keyed by button boundary.

use std::rc::Rc;

use indexmap::IndexMap;

use super::button::Decoration;
use crate::annotated_string::Placeholder;

/// Which side of a button a decoration sits on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DecorationEdge {
    Leading,
    Trailing,
}

/// Stable identifier of a decoration slot.
///
/// `position` is the button's original start (leading) or end (trailing) in
/// the source text. The edge is part of the key so that a trailing
/// decoration and an adjacent button's leading decoration at the same
/// boundary get separate slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DecorationKey {
    pub position: usize,
    pub edge: DecorationEdge,
}

impl DecorationKey {
    pub const fn new(position: usize, edge: DecorationEdge) -> Self {
        Self { position, edge }
    }

    pub const fn leading(position: usize) -> Self {
        Self::new(position, DecorationEdge::Leading)
    }

    pub const fn trailing(position: usize) -> Self {
        Self::new(position, DecorationEdge::Trailing)
    }
}

impl std::fmt::Display for DecorationKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.edge {
            DecorationEdge::Leading => write!(f, "leading@{}", self.position),
            DecorationEdge::Trailing => write!(f, "trailing@{}", self.position),
        }
    }
}

#[derive(Clone)]
pub struct DecorationEntry {
    pub content: Rc<dyn Decoration>,
    pub placeholder: Placeholder,
    /// Layer alpha applied to everything the content draws.
    pub alpha: f32,
}

impl std::fmt::Debug for DecorationEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DecorationEntry")
            .field("placeholder", &self.placeholder)
            .field("alpha", &self.alpha)
            .finish_non_exhaustive()
    }
}

impl PartialEq for DecorationEntry {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.content, &other.content)
            && self.placeholder == other.placeholder
            && self.alpha == other.alpha
    }
}

/// Decorations of one composition pass, in emission order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DecorationRegistry {
    entries: IndexMap<DecorationKey, DecorationEntry>,
}

impl DecorationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `entry` under `key`. A second registration for the same key
    /// replaces the first and keeps its original position.
    pub fn register(&mut self, key: DecorationKey, entry: DecorationEntry) {
        if self.entries.insert(key, entry).is_some() {
            log::debug!("decoration {key} registered twice; keeping the latest");
        }
    }

    pub fn resolve(&self, key: &DecorationKey) -> Option<&DecorationEntry> {
        self.entries.get(key)
    }

    pub fn content(&self, key: &DecorationKey) -> Option<&Rc<dyn Decoration>> {
        self.resolve(key).map(|entry| &entry.content)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&DecorationKey, &DecorationEntry)> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &DecorationKey> {
        self.entries.keys()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
