//! Instances of registered (non-builtin) types.
//!
//! An object is a type tag plus named attributes. Attribute order is the
//! order the object was built in; it has nothing to do with the positional
//! `match_args` order, which the type registry owns.

use rustc_hash::FxHashMap;
use std::hash::{Hash, Hasher};

use sift_ir::Name;

use super::{Heap, Value};

/// A single attribute slot.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
enum Slot {
    /// Plain stored value.
    Stored(Value),
    /// Computed attribute whose getter raises with this message.
    Raises(String),
}

/// Outcome of reading an attribute.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AttrRead<'a> {
    /// The object has no attribute with that name.
    Missing,
    /// The attribute's value.
    Value(&'a Value),
    /// Reading the attribute raised; carries the host's message.
    Raised(&'a str),
}

/// Layout information for O(1) attribute access.
#[derive(Clone, Debug, Default)]
struct ObjectLayout {
    /// Map from attribute name to slot index.
    indices: FxHashMap<Name, usize>,
    /// Attribute names in slot order.
    names: Vec<Name>,
}

/// Object instance with efficient attribute access.
#[derive(Clone, Debug)]
pub struct ObjectValue {
    /// Type tag of the object.
    pub type_name: Name,
    slots: Heap<Vec<Slot>>,
    layout: Heap<ObjectLayout>,
}

impl ObjectValue {
    /// Start building an object of the given type.
    pub fn builder(type_name: Name) -> ObjectBuilder {
        ObjectBuilder {
            type_name,
            layout: ObjectLayout::default(),
            slots: Vec::new(),
        }
    }

    /// Create an object from plain attribute values.
    pub fn new(type_name: Name, attrs: impl IntoIterator<Item = (Name, Value)>) -> Self {
        attrs
            .into_iter()
            .fold(Self::builder(type_name), |b, (name, value)| b.attr(name, value))
            .build()
    }

    /// Read an attribute by name.
    pub fn get_attr(&self, attr: Name) -> AttrRead<'_> {
        let Some(&index) = self.layout.indices.get(&attr) else {
            return AttrRead::Missing;
        };
        match self.slots.get(index) {
            Some(Slot::Stored(value)) => AttrRead::Value(value),
            Some(Slot::Raises(message)) => AttrRead::Raised(message),
            None => AttrRead::Missing,
        }
    }

    /// Check whether the object has an attribute, without reading it.
    pub fn has_attr(&self, attr: Name) -> bool {
        self.layout.indices.contains_key(&attr)
    }

    /// Attribute names in build order.
    pub fn attr_names(&self) -> &[Name] {
        &self.layout.names
    }

    /// Iterate over readable attributes in build order, skipping raising ones.
    pub fn stored_attrs(&self) -> impl Iterator<Item = (Name, &Value)> + '_ {
        self.layout
            .names
            .iter()
            .zip(self.slots.iter())
            .filter_map(|(name, slot)| match slot {
                Slot::Stored(value) => Some((*name, value)),
                Slot::Raises(_) => None,
            })
    }
}

/// Builder for [`ObjectValue`].
pub struct ObjectBuilder {
    type_name: Name,
    layout: ObjectLayout,
    slots: Vec<Slot>,
}

impl ObjectBuilder {
    /// Add (or overwrite) a stored attribute.
    #[must_use]
    pub fn attr(self, name: Name, value: Value) -> Self {
        self.slot(name, Slot::Stored(value))
    }

    /// Add an attribute whose read raises `message`.
    #[must_use]
    pub fn raising_attr(self, name: Name, message: impl Into<String>) -> Self {
        self.slot(name, Slot::Raises(message.into()))
    }

    fn slot(mut self, name: Name, slot: Slot) -> Self {
        if let Some(&index) = self.layout.indices.get(&name) {
            self.slots[index] = slot;
        } else {
            self.layout.indices.insert(name, self.slots.len());
            self.layout.names.push(name);
            self.slots.push(slot);
        }
        self
    }

    /// Finish the object.
    pub fn build(self) -> ObjectValue {
        ObjectValue {
            type_name: self.type_name,
            slots: Heap::new(self.slots),
            layout: Heap::new(self.layout),
        }
    }
}

impl PartialEq for ObjectValue {
    fn eq(&self, other: &Self) -> bool {
        self.type_name == other.type_name
            && self.layout.names.len() == other.layout.names.len()
            && self
                .layout
                .names
                .iter()
                .zip(self.slots.iter())
                .all(|(name, slot)| {
                    other
                        .layout
                        .indices
                        .get(name)
                        .and_then(|&i| other.slots.get(i))
                        .is_some_and(|os| os == slot)
                })
    }
}

impl Eq for ObjectValue {}

impl Hash for ObjectValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_name.hash(state);
        self.layout.names.len().hash(state);
    }
}
