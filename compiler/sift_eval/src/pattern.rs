//! The pattern model.
//!
//! A closed set of structural shapes. Patterns are built by the embedder
//! through the constructors below and checked when they enter an
//! [`ArmList`](crate::ArmList).

use sift_ir::Name;
use sift_value::Value;

/// The star slot of a sequence pattern (`*rest` or `*_`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Star {
    /// Index among the fixed elements where the star sits.
    ///
    /// `0` puts it before every fixed element, `elements.len()` after all.
    pub position: usize,
    /// Capture name; `None` for `*_`.
    pub name: Option<Name>,
}

/// A structural pattern.
#[derive(Clone, Debug, PartialEq)]
pub enum Pattern {
    /// Matches a subject structurally equal to the value.
    Literal(Value),
    /// Always matches and binds the subject.
    Capture(Name),
    /// Always matches, binds nothing.
    Wildcard,
    /// First matching alternative wins.
    Or(Vec<Pattern>),
    /// Matches lists and tuples element-wise.
    Sequence {
        elements: Vec<Pattern>,
        star: Option<Star>,
    },
    /// Matches maps by key; extra keys are ignored unless `rest` is set.
    Mapping {
        entries: Vec<(Value, Pattern)>,
        rest: Option<Name>,
    },
    /// Matches by exact type tag, then by attributes.
    Class {
        type_tag: Name,
        positional: Vec<Pattern>,
        keyword: Vec<(Name, Pattern)>,
    },
    /// Matches like `pattern` and additionally binds the whole subject.
    As { pattern: Box<Pattern>, name: Name },
}

impl Pattern {
    pub fn literal(value: Value) -> Self {
        Pattern::Literal(value)
    }

    pub fn capture(name: Name) -> Self {
        Pattern::Capture(name)
    }

    pub fn or(alternatives: impl IntoIterator<Item = Pattern>) -> Self {
        Pattern::Or(alternatives.into_iter().collect())
    }

    /// Or-pattern of literals, e.g. `401 | 403`.
    pub fn one_of(values: impl IntoIterator<Item = Value>) -> Self {
        Pattern::Or(values.into_iter().map(Pattern::Literal).collect())
    }

    /// Fixed-length sequence pattern.
    pub fn sequence(elements: impl IntoIterator<Item = Pattern>) -> Self {
        Pattern::Sequence {
            elements: elements.into_iter().collect(),
            star: None,
        }
    }

    /// Sequence pattern with a star slot at `position` among `elements`.
    ///
    /// `[first, *rest]` is `sequence_with_star([capture(first)], 1, Some(rest))`.
    pub fn sequence_with_star(
        elements: impl IntoIterator<Item = Pattern>,
        position: usize,
        name: Option<Name>,
    ) -> Self {
        Pattern::Sequence {
            elements: elements.into_iter().collect(),
            star: Some(Star { position, name }),
        }
    }

    pub fn mapping(entries: impl IntoIterator<Item = (Value, Pattern)>) -> Self {
        Pattern::Mapping {
            entries: entries.into_iter().collect(),
            rest: None,
        }
    }

    /// Mapping pattern whose unlisted entries are bound to `rest`.
    pub fn mapping_with_rest(
        entries: impl IntoIterator<Item = (Value, Pattern)>,
        rest: Name,
    ) -> Self {
        Pattern::Mapping {
            entries: entries.into_iter().collect(),
            rest: Some(rest),
        }
    }

    pub fn class(
        type_tag: Name,
        positional: impl IntoIterator<Item = Pattern>,
        keyword: impl IntoIterator<Item = (Name, Pattern)>,
    ) -> Self {
        Pattern::Class {
            type_tag,
            positional: positional.into_iter().collect(),
            keyword: keyword.into_iter().collect(),
        }
    }

    /// Wrap this pattern so the whole subject is also bound to `name`.
    #[must_use]
    pub fn named(self, name: Name) -> Self {
        Pattern::As {
            pattern: Box::new(self),
            name,
        }
    }

    /// Whether the pattern matches every subject.
    ///
    /// Irrefutable patterns are captures, wildcards, and or/as patterns
    /// built from them.
    pub fn is_irrefutable(&self) -> bool {
        match self {
            Pattern::Capture(_) | Pattern::Wildcard => true,
            Pattern::Or(alts) => alts.iter().any(Pattern::is_irrefutable),
            Pattern::As { pattern, .. } => pattern.is_irrefutable(),
            Pattern::Literal(_)
            | Pattern::Sequence { .. }
            | Pattern::Mapping { .. }
            | Pattern::Class { .. } => false,
        }
    }
}
