//! Sift Value - the subjects a pattern is matched against.
//!
//! # Contents
//!
//! - [`Value`]: closed runtime value model (scalars, strings, lists, tuples,
//!   insertion-ordered maps, objects of registered types)
//! - [`TypeRegistry`]: the collaborator the matcher consults for class
//!   patterns (positional attribute order, builtin type tags)
//! - [`ClassRegistry`]: the stock `TypeRegistry` implementation

mod registry;
mod value;

pub use registry::{ClassRegistry, TypeRegistry};
pub use value::{
    compare_int_float, AttrRead, BuiltinKind, Heap, MapValue, ObjectBuilder, ObjectValue,
    SequenceKind, Value, ValueDisplay,
};

// Re-export identifier types for convenience
pub use sift_ir::{Name, StringInterner, StringLookup};
