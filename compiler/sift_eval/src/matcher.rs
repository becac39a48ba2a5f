//! Structural pattern matching.
//!
//! `match_pattern` decides whether a subject fits a pattern and collects
//! the bindings if it does. A shape mismatch is a normal outcome
//! ([`MatchOutcome::Failure`]); only duplicate bindings, attribute reads
//! that raise, malformed star positions and attributes read twice by one
//! class pattern are errors.
//!
//! Matching works on a single binding buffer. Every sub-match records a
//! checkpoint and truncates back to it on failure, so a failed alternative
//! or a half-matched sequence leaves nothing behind.

use tracing::trace;

use sift_ir::Name;
use sift_value::{AttrRead, MapValue, ObjectValue, TypeRegistry, Value};

use crate::bindings::Bindings;
use crate::errors::{duplicate_class_attribute, host_attribute, invalid_star_position, MatchResult};
use crate::pattern::{Pattern, Star};
use crate::stack::ensure_sufficient_stack;

/// Result of matching one pattern against one subject.
#[derive(Clone, Debug, PartialEq)]
pub enum MatchOutcome {
    /// The subject fits; here is what the pattern bound.
    Success(Bindings),
    /// The subject does not fit.
    Failure,
}

impl MatchOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, MatchOutcome::Success(_))
    }

    /// Bindings of a successful match.
    pub fn into_bindings(self) -> Option<Bindings> {
        match self {
            MatchOutcome::Success(bindings) => Some(bindings),
            MatchOutcome::Failure => None,
        }
    }
}

/// Match `subject` against `pattern`.
///
/// `registry` supplies positional attribute order and builtin type tags
/// for class patterns. Matching is pure: the same inputs always give the
/// same outcome.
///
/// # Errors
///
/// - `DuplicateBinding` if two sub-patterns bind the same name.
/// - `HostAttribute` if reading an attribute of the subject raised.
/// - `InvalidStarPosition` if a sequence pattern's star is malformed.
/// - `DuplicateClassAttribute` if a keyword names an attribute a positional
///   sub-pattern already resolved to.
pub fn match_pattern<R: TypeRegistry + ?Sized>(
    pattern: &Pattern,
    subject: &Value,
    registry: &R,
) -> MatchResult<MatchOutcome> {
    let mut matcher = Matcher {
        registry,
        bindings: Bindings::new(),
    };
    Ok(if matcher.matches(pattern, subject)? {
        MatchOutcome::Success(matcher.bindings)
    } else {
        MatchOutcome::Failure
    })
}

struct Matcher<'r, R: ?Sized> {
    registry: &'r R,
    bindings: Bindings,
}

impl<R: TypeRegistry + ?Sized> Matcher<'_, R> {
    /// Match one sub-pattern, discarding its bindings if it fails.
    fn matches(&mut self, pattern: &Pattern, subject: &Value) -> MatchResult<bool> {
        ensure_sufficient_stack(|| {
            let checkpoint = self.bindings.checkpoint();
            let matched = self.matches_inner(pattern, subject)?;
            if !matched {
                self.bindings.rollback(checkpoint);
            }
            Ok(matched)
        })
    }

    fn matches_inner(&mut self, pattern: &Pattern, subject: &Value) -> MatchResult<bool> {
        match pattern {
            Pattern::Literal(value) => Ok(subject.equals(value)),
            Pattern::Capture(name) => self.bind(*name, subject.clone()),
            Pattern::Wildcard => Ok(true),
            Pattern::Or(alternatives) => {
                for alt in alternatives {
                    if self.matches(alt, subject)? {
                        return Ok(true);
                    }
                }
                Ok(false)
            }
            Pattern::Sequence { elements, star } => self.match_sequence(elements, *star, subject),
            Pattern::Mapping { entries, rest } => self.match_mapping(entries, *rest, subject),
            Pattern::Class {
                type_tag,
                positional,
                keyword,
            } => self.match_class(*type_tag, positional, keyword, subject),
            Pattern::As { pattern, name } => {
                if !self.matches(pattern, subject)? {
                    return Ok(false);
                }
                self.bind(*name, subject.clone())
            }
        }
    }

    fn bind(&mut self, name: Name, value: Value) -> MatchResult<bool> {
        self.bindings.bind(name, value)?;
        Ok(true)
    }

    fn match_all(&mut self, patterns: &[Pattern], items: &[Value]) -> MatchResult<bool> {
        for (pattern, item) in patterns.iter().zip(items) {
            if !self.matches(pattern, item)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn match_sequence(
        &mut self,
        elements: &[Pattern],
        star: Option<Star>,
        subject: &Value,
    ) -> MatchResult<bool> {
        let Some((kind, items)) = subject.as_sequence() else {
            return Ok(false);
        };
        let Some(star) = star else {
            return if items.len() == elements.len() {
                self.match_all(elements, items)
            } else {
                Ok(false)
            };
        };

        if star.position > elements.len() {
            return Err(invalid_star_position(star.position, elements.len()));
        }
        let (before, after) = elements.split_at(star.position);
        // Fewer items than fixed elements
        let Some(star_len) = items.len().checked_sub(elements.len()) else {
            return Ok(false);
        };

        let (head, rest) = items.split_at(before.len());
        let (middle, tail) = rest.split_at(star_len);
        if !self.match_all(before, head)? {
            return Ok(false);
        }
        if let Some(name) = star.name {
            self.bindings.bind(name, kind.rebuild(middle.to_vec()))?;
        }
        self.match_all(after, tail)
    }

    fn match_mapping(
        &mut self,
        entries: &[(Value, Pattern)],
        rest: Option<Name>,
        subject: &Value,
    ) -> MatchResult<bool> {
        let Some(map) = subject.as_map() else {
            return Ok(false);
        };
        for (key, pattern) in entries {
            let Some(value) = map.get(key) else {
                trace!(%key, "mapping key missing");
                return Ok(false);
            };
            if !self.matches(pattern, value)? {
                return Ok(false);
            }
        }
        if let Some(rest) = rest {
            // Listed keys are compared in lookup form, the way `get` found them
            let listed: Vec<_> = entries
                .iter()
                .map(|(key, _)| MapValue::lookup_key(key))
                .collect();
            let remaining: MapValue = map
                .iter()
                .filter(|(key, _)| !listed.contains(&MapValue::lookup_key(key)))
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect();
            self.bindings.bind(rest, Value::map(remaining))?;
        }
        Ok(true)
    }

    fn match_class(
        &mut self,
        type_tag: Name,
        positional: &[Pattern],
        keyword: &[(Name, Pattern)],
        subject: &Value,
    ) -> MatchResult<bool> {
        if let Some(kind) = self.registry.builtin_kind(type_tag) {
            if subject.builtin_kind() != Some(kind) {
                return Ok(false);
            }
            // Builtins expose no attributes; one positional matches the whole subject
            return match (positional, keyword) {
                ([], []) => Ok(true),
                ([single], []) => self.matches(single, subject),
                _ => Ok(false),
            };
        }

        let Value::Object(object) = subject else {
            return Ok(false);
        };
        if object.type_name != type_tag {
            return Ok(false);
        }

        if !positional.is_empty() {
            let Some(order) = self.registry.match_args(type_tag) else {
                trace!(?type_tag, "type declares no positional attributes");
                return Ok(false);
            };
            if positional.len() > order.len() {
                trace!(
                    ?type_tag,
                    given = positional.len(),
                    declared = order.len(),
                    "too many positional sub-patterns"
                );
                return Ok(false);
            }
            let (resolved, _) = order.split_at(positional.len());
            if let Some((attr, _)) = keyword.iter().find(|(attr, _)| resolved.contains(attr)) {
                return Err(duplicate_class_attribute(type_tag, *attr));
            }
            for (pattern, &attr) in positional.iter().zip(resolved) {
                if !self.match_attr(object, attr, pattern)? {
                    return Ok(false);
                }
            }
        }

        for (attr, pattern) in keyword {
            if !self.match_attr(object, *attr, pattern)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn match_attr(
        &mut self,
        object: &ObjectValue,
        attr: Name,
        pattern: &Pattern,
    ) -> MatchResult<bool> {
        match object.get_attr(attr) {
            AttrRead::Missing => Ok(false),
            AttrRead::Value(value) => self.matches(pattern, value),
            AttrRead::Raised(message) => Err(host_attribute(object.type_name, attr, message)),
        }
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
