//! Type registry: the matcher's view of declared types.
//!
//! Class patterns need two facts the values themselves do not carry:
//!
//! - which type tag names a builtin kind (`int`, `str`, ...), and
//! - the declared positional attribute order of a registered type (the
//!   order `Point(0, 0)` maps onto `x`, `y`).
//!
//! The matcher only reads from a [`TypeRegistry`]; building one is the
//! embedder's job.

use rustc_hash::FxHashMap;

use sift_ir::{Name, StringInterner};

use crate::value::BuiltinKind;

/// Lookup interface consumed by class patterns.
pub trait TypeRegistry {
    /// Declared positional attribute order for `type_tag`.
    ///
    /// `None` means the type declares no positional order; any class
    /// pattern with positional sub-patterns against it fails.
    fn match_args(&self, type_tag: Name) -> Option<&[Name]>;

    /// The builtin kind registered under `type_tag`, if any.
    fn builtin_kind(&self, type_tag: Name) -> Option<BuiltinKind>;
}

/// Stock registry backed by hash maps.
#[derive(Clone, Debug, Default)]
pub struct ClassRegistry {
    match_args: FxHashMap<Name, Vec<Name>>,
    builtins: FxHashMap<Name, BuiltinKind>,
}

impl ClassRegistry {
    /// Create a registry with the builtin type tags registered.
    pub fn new(interner: &StringInterner) -> Self {
        let builtins = BuiltinKind::ALL
            .iter()
            .map(|&kind| (interner.intern(kind.name()), kind))
            .collect();
        ClassRegistry {
            match_args: FxHashMap::default(),
            builtins,
        }
    }

    /// Declare the positional attribute order of a type.
    ///
    /// Registering a type twice replaces its previous order.
    pub fn register(&mut self, type_tag: Name, match_args: impl IntoIterator<Item = Name>) {
        let attrs: Vec<Name> = match_args.into_iter().collect();
        tracing::debug!(?type_tag, count = attrs.len(), "registered match args");
        self.match_args.insert(type_tag, attrs);
    }

    /// Builder-style [`ClassRegistry::register`].
    #[must_use]
    pub fn with_type(mut self, type_tag: Name, match_args: impl IntoIterator<Item = Name>) -> Self {
        self.register(type_tag, match_args);
        self
    }
}

impl TypeRegistry for ClassRegistry {
    fn match_args(&self, type_tag: Name) -> Option<&[Name]> {
        self.match_args.get(&type_tag).map(Vec::as_slice)
    }

    fn builtin_kind(&self, type_tag: Name) -> Option<BuiltinKind> {
        self.builtins.get(&type_tag).copied()
    }
}
