//! Insertion-ordered key/value container.

use rustc_hash::{FxHashMap, FxHasher};
use std::borrow::Cow;
use std::hash::{Hash, Hasher};

use super::{float_as_int, Value};

/// Key/value container that remembers insertion order.
///
/// Entries live in a `Vec` in insertion order; `index` maps each key's
/// [lookup form](MapValue::lookup_key) to its slot for O(1) lookup.
/// Re-inserting an equal key replaces the value in place and keeps the
/// original key and position.
#[derive(Clone, Debug, Default)]
pub struct MapValue {
    entries: Vec<(Value, Value)>,
    index: FxHashMap<Value, usize>,
}

impl MapValue {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// The form a key is indexed under.
    ///
    /// Integral floats become the equal `Int`, also inside list and tuple
    /// keys, so `1` and `1.0` find the same entry. Every other key is its
    /// own lookup form.
    pub fn lookup_key(key: &Value) -> Cow<'_, Value> {
        match key {
            Value::Float(f) => match float_as_int(*f) {
                Some(n) => Cow::Owned(Value::Int(n)),
                None => Cow::Borrowed(key),
            },
            Value::List(items) | Value::Tuple(items) => {
                if items
                    .iter()
                    .all(|item| matches!(Self::lookup_key(item), Cow::Borrowed(_)))
                {
                    return Cow::Borrowed(key);
                }
                let items = items
                    .iter()
                    .map(|item| Self::lookup_key(item).into_owned())
                    .collect();
                Cow::Owned(match key {
                    Value::Tuple(_) => Value::tuple(items),
                    _ => Value::list(items),
                })
            }
            _ => Cow::Borrowed(key),
        }
    }

    /// Insert an entry, replacing the value of an existing key in place.
    pub fn insert(&mut self, key: Value, value: Value) {
        let lookup = Self::lookup_key(&key).into_owned();
        if let Some(&slot) = self.index.get(&lookup) {
            self.entries[slot].1 = value;
            return;
        }
        self.index.insert(lookup, self.entries.len());
        self.entries.push((key, value));
    }

    /// Get the value stored under `key`.
    pub fn get(&self, key: &Value) -> Option<&Value> {
        let slot = *self.index.get(&*Self::lookup_key(key))?;
        self.entries.get(slot).map(|(_, v)| v)
    }

    /// Check whether `key` is present.
    pub fn contains_key(&self, key: &Value) -> bool {
        self.index.contains_key(&*Self::lookup_key(key))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Value, &Value)> + '_ {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    /// Iterate over keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &Value> + '_ {
        self.entries.iter().map(|(k, _)| k)
    }
}

impl FromIterator<(Value, Value)> for MapValue {
    fn from_iter<I: IntoIterator<Item = (Value, Value)>>(iter: I) -> Self {
        let mut map = MapValue::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

// Equality ignores insertion order, like dictionary equality.
impl PartialEq for MapValue {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(k, v)| other.get(k).is_some_and(|ov| v == ov))
    }
}

impl Eq for MapValue {}

impl Hash for MapValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        // Order-independent: combine per-entry hashes with a commutative op
        let mut combined: u64 = 0;
        for (k, v) in &self.entries {
            let mut entry_hasher = FxHasher::default();
            Self::lookup_key(k).hash(&mut entry_hasher);
            v.hash(&mut entry_hasher);
            combined ^= entry_hasher.finish();
        }
        combined.hash(state);
    }
}
