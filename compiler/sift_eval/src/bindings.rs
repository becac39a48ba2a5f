//! Binding environment produced by a successful match.

use smallvec::SmallVec;

use sift_ir::Name;
use sift_value::Value;

use crate::errors::{duplicate_binding, unbound_guard_reference, MatchResult};

/// Ordered name-to-value bindings.
///
/// Names are unique: binding a name twice is an error, never an overwrite.
/// Most patterns bind a handful of names, so storage stays inline.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Bindings {
    entries: SmallVec<[(Name, Value); 4]>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name` to `value`.
    pub(crate) fn bind(&mut self, name: Name, value: Value) -> MatchResult<()> {
        if self.contains(name) {
            return Err(duplicate_binding(name));
        }
        self.entries.push((name, value));
        Ok(())
    }

    /// Current length, for rolling back a failed sub-match.
    pub(crate) fn checkpoint(&self) -> usize {
        self.entries.len()
    }

    /// Drop every binding made after `checkpoint`.
    pub(crate) fn rollback(&mut self, checkpoint: usize) {
        self.entries.truncate(checkpoint);
    }

    pub fn get(&self, name: Name) -> Option<&Value> {
        self.entries
            .iter()
            .find_map(|(n, v)| (*n == name).then_some(v))
    }

    /// Look up a name a guard depends on.
    ///
    /// # Errors
    ///
    /// `UnboundGuardReference` when the name is not bound.
    pub fn require(&self, name: Name) -> MatchResult<&Value> {
        self.get(name).ok_or_else(|| unbound_guard_reference(name))
    }

    pub fn contains(&self, name: Name) -> bool {
        self.entries.iter().any(|(n, _)| *n == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Bindings in the order they were made.
    pub fn iter(&self) -> impl Iterator<Item = (Name, &Value)> + '_ {
        self.entries.iter().map(|(n, v)| (*n, v))
    }

    pub fn names(&self) -> impl Iterator<Item = Name> + '_ {
        self.entries.iter().map(|(n, _)| *n)
    }

    pub fn into_vec(self) -> Vec<(Name, Value)> {
        self.entries.into_vec()
    }
}

impl IntoIterator for Bindings {
    type Item = (Name, Value);
    type IntoIter = smallvec::IntoIter<[(Name, Value); 4]>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
