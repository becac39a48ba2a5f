//! Static checks run when arms are assembled into an [`ArmList`](crate::ArmList).
//!
//! Everything here could also surface while matching, but catching it up
//! front means a malformed arm fails even when no subject ever reaches it.

use std::borrow::Cow;

use rustc_hash::FxHashSet;

use sift_ir::Name;
use sift_value::{MapValue, Value};

use crate::errors::{
    duplicate_binding, duplicate_class_attribute, duplicate_mapping_key, invalid_star_position,
    unbound_guard_reference, MatchResult,
};
use crate::guard::GuardExpr;
use crate::pattern::Pattern;
use crate::stack::ensure_sufficient_stack;

/// Check a pattern's shape and return every name it can bind.
///
/// Names come back in first-binding order. Alternatives of an or-pattern
/// may bind different names; the result is their union.
///
/// # Errors
///
/// - `DuplicateBinding` if two sibling sub-patterns bind the same name.
/// - `InvalidStarPosition` if a star sits past the fixed elements.
/// - `DuplicateMappingKey` if a mapping pattern lists a key twice.
/// - `DuplicateClassAttribute` if a class pattern repeats a keyword.
pub fn bindable_names(pattern: &Pattern) -> MatchResult<Vec<Name>> {
    let mut names = NameSet::default();
    collect(pattern, &mut names)?;
    Ok(names.order)
}

/// Check a guard against the names its pattern can bind.
///
/// # Errors
///
/// `UnboundGuardReference` for the first name the guard reads that the
/// pattern never binds.
pub fn check_guard(guard: &GuardExpr, bindable: &[Name]) -> MatchResult<()> {
    match guard
        .referenced_names()
        .into_iter()
        .find(|name| !bindable.contains(name))
    {
        Some(name) => Err(unbound_guard_reference(name)),
        None => Ok(()),
    }
}

#[derive(Default)]
struct NameSet {
    seen: FxHashSet<Name>,
    order: Vec<Name>,
}

impl NameSet {
    fn insert(&mut self, name: Name) -> MatchResult<()> {
        if !self.seen.insert(name) {
            return Err(duplicate_binding(name));
        }
        self.order.push(name);
        Ok(())
    }
}

fn collect(pattern: &Pattern, names: &mut NameSet) -> MatchResult<()> {
    ensure_sufficient_stack(|| match pattern {
        Pattern::Literal(_) | Pattern::Wildcard => Ok(()),
        Pattern::Capture(name) => names.insert(*name),
        Pattern::Or(alternatives) => {
            let mut union: Vec<Name> = Vec::new();
            for alt in alternatives {
                let mut own = NameSet::default();
                collect(alt, &mut own)?;
                for name in own.order {
                    if !union.contains(&name) {
                        union.push(name);
                    }
                }
            }
            union.into_iter().try_for_each(|name| names.insert(name))
        }
        Pattern::Sequence { elements, star } => {
            if let Some(star) = star.filter(|s| s.position > elements.len()) {
                return Err(invalid_star_position(star.position, elements.len()));
            }
            for (index, element) in elements.iter().enumerate() {
                if let Some(star) = star.filter(|s| s.position == index) {
                    star.name.map_or(Ok(()), |name| names.insert(name))?;
                }
                collect(element, names)?;
            }
            match star.filter(|s| s.position == elements.len()) {
                Some(star) => star.name.map_or(Ok(()), |name| names.insert(name)),
                None => Ok(()),
            }
        }
        Pattern::Mapping { entries, rest } => {
            let mut keys: FxHashSet<Cow<'_, Value>> = FxHashSet::default();
            for (key, sub) in entries {
                if !keys.insert(MapValue::lookup_key(key)) {
                    return Err(duplicate_mapping_key(key));
                }
                collect(sub, names)?;
            }
            rest.map_or(Ok(()), |name| names.insert(name))
        }
        Pattern::Class {
            type_tag,
            positional,
            keyword,
        } => {
            for sub in positional {
                collect(sub, names)?;
            }
            let mut attrs: FxHashSet<Name> = FxHashSet::default();
            for (attr, sub) in keyword {
                if !attrs.insert(*attr) {
                    return Err(duplicate_class_attribute(*type_tag, *attr));
                }
                collect(sub, names)?;
            }
            Ok(())
        }
        Pattern::As { pattern, name } => {
            collect(pattern, names)?;
            names.insert(*name)
        }
    })
}
