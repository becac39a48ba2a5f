//! Runtime values matched by sift patterns.
//!
//! # Heap Enforcement
//!
//! Heap-backed variants hold a `Heap<T>`, whose constructor is private to
//! this module. Values are built through factory methods:
//!
//! ```text
//! let s = Value::string("north");                  // OK
//! let xs = Value::list(vec![Value::int(1)]);        // OK
//! let bad = Value::Str(Heap::new("north".into()));  // ERROR: Heap::new is pub(super)
//! ```
//!
//! # Equality
//!
//! Two notions of equality exist:
//!
//! - `PartialEq`/`Eq`/`Hash`: strict structural identity of shape.
//!   `Int(1)` and `Float(1.0)` differ. Maps index their keys in a lookup
//!   form where an integral float stands for the equal `Int`, so `{1: 'a'}`
//!   and `{1.0: 'a'}` hold the same key.
//! - [`Value::equals`]: the comparison literal patterns and guards use.
//!   Numbers compare by value across `Int`/`Float`; everything else is
//!   structural. `Bool` is never equal to a number; unlike Python, `True`
//!   does not match the literal `1`.

mod heap;
mod map;
mod object;

use std::cmp::Ordering;
use std::fmt;

use sift_ir::StringLookup;

pub use heap::Heap;
pub use map::MapValue;
pub use object::{AttrRead, ObjectBuilder, ObjectValue};

/// Builtin type of a value, as named in class patterns (`int()`, `str()`).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BuiltinKind {
    NoneType,
    Bool,
    Int,
    Float,
    Str,
    List,
    Tuple,
    Dict,
}

impl BuiltinKind {
    /// Every builtin kind, in registration order.
    pub const ALL: [BuiltinKind; 8] = [
        BuiltinKind::NoneType,
        BuiltinKind::Bool,
        BuiltinKind::Int,
        BuiltinKind::Float,
        BuiltinKind::Str,
        BuiltinKind::List,
        BuiltinKind::Tuple,
        BuiltinKind::Dict,
    ];

    /// The type tag this kind is registered under.
    pub fn name(self) -> &'static str {
        match self {
            BuiltinKind::NoneType => "NoneType",
            BuiltinKind::Bool => "bool",
            BuiltinKind::Int => "int",
            BuiltinKind::Float => "float",
            BuiltinKind::Str => "str",
            BuiltinKind::List => "list",
            BuiltinKind::Tuple => "tuple",
            BuiltinKind::Dict => "dict",
        }
    }
}

/// The two sequence-like container kinds.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SequenceKind {
    List,
    Tuple,
}

impl SequenceKind {
    /// Build a new container of this kind.
    pub fn rebuild(self, items: Vec<Value>) -> Value {
        match self {
            SequenceKind::List => Value::list(items),
            SequenceKind::Tuple => Value::tuple(items),
        }
    }
}

/// Runtime value.
#[derive(Clone)]
pub enum Value {
    // Primitives (inline, no heap allocation)
    /// The absent value.
    None,
    /// Boolean value.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Floating-point value.
    Float(f64),

    // Heap types
    /// String value.
    Str(Heap<String>),
    /// Mutable-sequence analogue.
    List(Heap<Vec<Value>>),
    /// Immutable-sequence analogue.
    Tuple(Heap<Vec<Value>>),
    /// Insertion-ordered key/value container.
    Map(Heap<MapValue>),
    /// Instance of a registered type.
    Object(ObjectValue),
}

// Factory Methods (ONLY way to construct heap values)

impl Value {
    /// Create an integer value.
    #[inline]
    pub fn int(n: i64) -> Self {
        Value::Int(n)
    }

    /// Create a string value.
    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(Heap::new(s.into()))
    }

    /// Create a list value.
    #[inline]
    pub fn list(items: Vec<Value>) -> Self {
        Value::List(Heap::new(items))
    }

    /// Create a tuple value.
    #[inline]
    pub fn tuple(items: Vec<Value>) -> Self {
        Value::Tuple(Heap::new(items))
    }

    /// Create a map value.
    #[inline]
    pub fn map(map: MapValue) -> Self {
        Value::Map(Heap::new(map))
    }

    /// Create a map value from entries, in order.
    pub fn map_from(entries: impl IntoIterator<Item = (Value, Value)>) -> Self {
        Value::map(entries.into_iter().collect())
    }

    /// Create a map value with string keys, in order.
    pub fn str_map<'a>(entries: impl IntoIterator<Item = (&'a str, Value)>) -> Self {
        Value::map_from(entries.into_iter().map(|(k, v)| (Value::string(k), v)))
    }

    /// Wrap an object.
    #[inline]
    pub fn object(obj: ObjectValue) -> Self {
        Value::Object(obj)
    }
}

// Value Methods

impl Value {
    /// Check if this value is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::None => false,
            Value::Bool(b) => *b,
            Value::Int(n) => *n != 0,
            Value::Float(f) => *f != 0.0,
            Value::Str(s) => !s.is_empty(),
            Value::List(items) | Value::Tuple(items) => !items.is_empty(),
            Value::Map(map) => !map.is_empty(),
            Value::Object(_) => true,
        }
    }

    /// Try to convert to an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Try to convert to a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Try to view as a map.
    pub fn as_map(&self) -> Option<&MapValue> {
        match self {
            Value::Map(map) => Some(&**map),
            _ => None,
        }
    }

    /// View a sequence-like value (list or tuple) as a slice.
    ///
    /// Strings, maps, scalars and objects are never sequence-like.
    pub fn as_sequence(&self) -> Option<(SequenceKind, &[Value])> {
        match self {
            Value::List(items) => Some((SequenceKind::List, items.as_slice())),
            Value::Tuple(items) => Some((SequenceKind::Tuple, items.as_slice())),
            _ => None,
        }
    }

    /// Length of a sized value (str in chars, list, tuple, map).
    pub fn len(&self) -> Option<usize> {
        match self {
            Value::Str(s) => Some(s.chars().count()),
            Value::List(items) | Value::Tuple(items) => Some(items.len()),
            Value::Map(map) => Some(map.len()),
            _ => None,
        }
    }

    /// Builtin kind, or `None` for objects of registered types.
    pub fn builtin_kind(&self) -> Option<BuiltinKind> {
        match self {
            Value::None => Some(BuiltinKind::NoneType),
            Value::Bool(_) => Some(BuiltinKind::Bool),
            Value::Int(_) => Some(BuiltinKind::Int),
            Value::Float(_) => Some(BuiltinKind::Float),
            Value::Str(_) => Some(BuiltinKind::Str),
            Value::List(_) => Some(BuiltinKind::List),
            Value::Tuple(_) => Some(BuiltinKind::Tuple),
            Value::Map(_) => Some(BuiltinKind::Dict),
            Value::Object(_) => None,
        }
    }

    /// Get the type name for error messages.
    ///
    /// Objects report `"object"`; use [`Value::type_name_with`] to resolve
    /// their registered type tag.
    pub fn type_name(&self) -> &'static str {
        match self.builtin_kind() {
            Some(kind) => kind.name(),
            None => "object",
        }
    }

    /// Get the concrete type name, resolving object tags via the interner.
    pub fn type_name_with<'a, I: StringLookup>(&self, interner: &'a I) -> &'a str {
        match self {
            Value::Object(obj) => interner.lookup(obj.type_name),
            _ => self.type_name(),
        }
    }

    /// Check value equality the way literal patterns and guards do.
    ///
    /// `Int` and `Float` compare numerically, also inside containers and
    /// as map keys. `Bool` only equals `Bool`: this departs from Python,
    /// where `True == 1` and `case 1:` matches a `True` subject.
    pub fn equals(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Int(i), Value::Float(f)) | (Value::Float(f), Value::Int(i)) => {
                int_eq_float(*i, *f)
            }
            (Value::List(a), Value::List(b)) | (Value::Tuple(a), Value::Tuple(b)) => {
                a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| x.equals(y))
            }
            (Value::Map(a), Value::Map(b)) => {
                a.len() == b.len()
                    && a.iter()
                        .all(|(k, v)| b.get(k).is_some_and(|bv| v.equals(bv)))
            }
            _ => self == other,
        }
    }

    /// Display value for user output: strings unquoted, everything else as
    /// its repr.
    pub fn display_value(&self) -> String {
        match self {
            Value::Str(s) => s.to_string(),
            other => other.to_string(),
        }
    }

    /// Display with object type tags resolved through `interner`.
    pub fn display<'a, I: StringLookup>(&'a self, interner: &'a I) -> ValueDisplay<'a, I> {
        ValueDisplay {
            value: self,
            interner: Some(interner),
        }
    }
}

/// Compare an integer and a float without lossy casts on either side.
fn int_eq_float(i: i64, f: f64) -> bool {
    float_as_int(f) == Some(i)
}

/// `2^63`: the first float past the end of the `i64` range.
const I64_LIMIT: f64 = 9_223_372_036_854_775_808.0;

/// The `i64` equal to `f`, if `f` is integral and in range.
pub(crate) fn float_as_int(f: f64) -> Option<i64> {
    if !f.is_finite() || f.fract() != 0.0 || !(-I64_LIMIT..I64_LIMIT).contains(&f) {
        return None;
    }
    #[expect(
        clippy::cast_possible_truncation,
        reason = "f is integral and range-checked above"
    )]
    let as_int = f as i64;
    Some(as_int)
}

/// Order an integer against a float without rounding either side.
///
/// `None` when `f` is NaN.
pub fn compare_int_float(i: i64, f: f64) -> Option<Ordering> {
    if f.is_nan() {
        return None;
    }
    if f >= I64_LIMIT {
        return Some(Ordering::Less);
    }
    if f < -I64_LIMIT {
        return Some(Ordering::Greater);
    }
    #[expect(
        clippy::cast_possible_truncation,
        reason = "the truncated float is range-checked above"
    )]
    let whole = f.trunc() as i64;
    // Equal integer parts: the fractional part decides
    Some(
        i.cmp(&whole)
            .then_with(|| 0.0_f64.partial_cmp(&f.fract()).unwrap_or(Ordering::Equal)),
    )
}

/// Display adapter that resolves object tags and attribute names.
pub struct ValueDisplay<'a, I: StringLookup> {
    value: &'a Value,
    interner: Option<&'a I>,
}

impl<I: StringLookup> fmt::Display for ValueDisplay<'_, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_repr(self.value, f, self.interner.map(|i| i as &dyn StringLookup))
    }
}

fn write_seq(
    items: &[Value],
    f: &mut fmt::Formatter<'_>,
    names: Option<&dyn StringLookup>,
) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write_repr(item, f, names)?;
    }
    Ok(())
}

fn write_repr(
    value: &Value,
    f: &mut fmt::Formatter<'_>,
    names: Option<&dyn StringLookup>,
) -> fmt::Result {
    match value {
        Value::None => write!(f, "None"),
        Value::Bool(true) => write!(f, "True"),
        Value::Bool(false) => write!(f, "False"),
        Value::Int(n) => write!(f, "{n}"),
        Value::Float(x) => {
            if x.is_finite() && x.fract() == 0.0 {
                write!(f, "{x:.1}")
            } else {
                write!(f, "{x}")
            }
        }
        Value::Str(s) => write!(f, "'{}'", s.replace('\'', "\\'")),
        Value::List(items) => {
            write!(f, "[")?;
            write_seq(items, f, names)?;
            write!(f, "]")
        }
        Value::Tuple(items) => {
            write!(f, "(")?;
            write_seq(items, f, names)?;
            if items.len() == 1 {
                write!(f, ",")?;
            }
            write!(f, ")")
        }
        Value::Map(map) => {
            write!(f, "{{")?;
            for (i, (k, v)) in map.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write_repr(k, f, names)?;
                write!(f, ": ")?;
                write_repr(v, f, names)?;
            }
            write!(f, "}}")
        }
        Value::Object(obj) => match names {
            Some(names) => {
                write!(f, "{}(", names.lookup(obj.type_name))?;
                for (i, (attr, v)) in obj.stored_attrs().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}=", names.lookup(attr))?;
                    write_repr(v, f, Some(names))?;
                }
                write!(f, ")")
            }
            None => write!(f, "<object {}>", obj.type_name.raw()),
        },
    }
}

// Trait Implementations

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_repr(self, f, None)
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::None => write!(f, "None"),
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::Int(n) => write!(f, "Int({n})"),
            Value::Float(x) => write!(f, "Float({x})"),
            Value::Str(s) => write!(f, "Str({:?})", &**s),
            Value::List(items) => write!(f, "List({:?})", &**items),
            Value::Tuple(items) => write!(f, "Tuple({:?})", &**items),
            Value::Map(map) => f.debug_map().entries(map.iter()).finish(),
            Value::Object(obj) => write!(f, "Object({:?})", obj.type_name),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::None, Value::None) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            // Bitwise, so that Eq and Hash agree (NaN keys are usable)
            (Value::Float(a), Value::Float(b)) => a.to_bits() == b.to_bits(),
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::List(a), Value::List(b)) | (Value::Tuple(a), Value::Tuple(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl std::hash::Hash for Value {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        // Use discriminant tags to distinguish variants
        std::mem::discriminant(self).hash(state);

        match self {
            Value::None => {}
            Value::Bool(b) => b.hash(state),
            Value::Int(n) => n.hash(state),
            Value::Float(x) => x.to_bits().hash(state),
            Value::Str(s) => s.hash(state),
            Value::List(items) | Value::Tuple(items) => {
                for item in items.iter() {
                    item.hash(state);
                }
            }
            Value::Map(map) => map.hash(state),
            Value::Object(obj) => obj.hash(state),
        }
    }
}

#[cfg(test)]
mod tests;
