//! Errors raised while matching and dispatching.
//!
//! A pattern that does not fit its subject is *not* an error: that is
//! `MatchOutcome::Failure` and simply advances dispatch to the next arm.
//! Everything here is fatal and propagates to the dispatch caller unchanged.
//!
//! # Structured Error Categories
//!
//! `MatchErrorKind` carries typed data for each condition. Factory functions
//! (`non_exhaustive_match()`, `duplicate_binding(name)`, ...) are the public
//! construction API. Names stay interned inside errors; use
//! [`MatchError::render`] to spell them out.

use std::fmt;

use sift_ir::{Name, StringLookup};
use sift_value::Value;

/// Result of a matching operation.
pub type MatchResult<T> = Result<T, MatchError>;

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MatchErrorKind {
    /// Every arm was tried and none committed.
    #[error("non-exhaustive match: no arm matched the subject")]
    NonExhaustiveMatch,

    /// Two sibling sub-patterns bind the same capture name.
    #[error("capture {name:?} is bound more than once in the same pattern")]
    DuplicateBinding { name: Name },

    /// A guard reads a name its arm's pattern does not bind.
    #[error("guard references {name:?}, which the pattern does not bind")]
    UnboundGuardReference { name: Name },

    /// Reading an attribute of the subject raised in the host type.
    #[error("reading attribute {attribute:?} of {type_name:?} raised: {message}")]
    HostAttribute {
        type_name: Name,
        attribute: Name,
        message: String,
    },

    /// A guard applied an operation to operands that do not support it.
    #[error("guard operation `{op}` is not supported for {operands}")]
    GuardTypeMismatch { op: &'static str, operands: String },

    /// A sequence pattern's star slot lies beyond its fixed elements.
    #[error("star at position {position} in a sequence pattern with {len} fixed elements")]
    InvalidStarPosition { position: usize, len: usize },

    /// A mapping pattern lists the same key twice.
    #[error("mapping pattern checks key {key} more than once")]
    DuplicateMappingKey { key: String },

    /// A class pattern reads the same attribute through two sub-patterns.
    #[error("class pattern for {type_tag:?} reads attribute {attribute:?} more than once")]
    DuplicateClassAttribute { type_tag: Name, attribute: Name },
}

impl MatchErrorKind {
    /// Stable diagnostic code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NonExhaustiveMatch => "E6101",
            Self::DuplicateBinding { .. } => "E6102",
            Self::UnboundGuardReference { .. } => "E6103",
            Self::HostAttribute { .. } => "E6104",
            Self::GuardTypeMismatch { .. } => "E6105",
            Self::InvalidStarPosition { .. } => "E6106",
            Self::DuplicateMappingKey { .. } => "E6107",
            Self::DuplicateClassAttribute { .. } => "E6108",
        }
    }
}

/// Matching or dispatch error.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind}")]
pub struct MatchError {
    /// Structured error category.
    pub kind: MatchErrorKind,
    /// Index of the arm being evaluated when the error was raised, if any.
    pub arm: Option<usize>,
}

impl MatchError {
    /// Create an error with no arm context.
    pub fn new(kind: MatchErrorKind) -> Self {
        MatchError { kind, arm: None }
    }

    /// Attach the index of the arm that raised this error.
    ///
    /// The innermost arm wins: an index already present is kept.
    #[must_use]
    pub fn in_arm(mut self, index: usize) -> Self {
        self.arm.get_or_insert(index);
        self
    }

    /// Stable diagnostic code.
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Whether this is the "no arm matched" condition.
    pub fn is_no_match(&self) -> bool {
        matches!(self.kind, MatchErrorKind::NonExhaustiveMatch)
    }

    /// Human-readable message with interned names resolved.
    pub fn render<I: StringLookup>(&self, interner: &I) -> String {
        let message = match &self.kind {
            MatchErrorKind::DuplicateBinding { name } => format!(
                "capture `{}` is bound more than once in the same pattern",
                interner.lookup(*name)
            ),
            MatchErrorKind::UnboundGuardReference { name } => format!(
                "guard references `{}`, which the pattern does not bind",
                interner.lookup(*name)
            ),
            MatchErrorKind::HostAttribute {
                type_name,
                attribute,
                message,
            } => format!(
                "reading `{}.{}` raised: {message}",
                interner.lookup(*type_name),
                interner.lookup(*attribute)
            ),
            MatchErrorKind::DuplicateClassAttribute {
                type_tag,
                attribute,
            } => format!(
                "class pattern `{}(...)` reads attribute `{}` more than once",
                interner.lookup(*type_tag),
                interner.lookup(*attribute)
            ),
            other => other.to_string(),
        };
        let code = self.code();
        match self.arm {
            Some(arm) => format!("error[{code}]: {message} (arm {arm})"),
            None => format!("error[{code}]: {message}"),
        }
    }
}

impl From<MatchErrorKind> for MatchError {
    fn from(kind: MatchErrorKind) -> Self {
        MatchError::new(kind)
    }
}

/// Guard operand types, rendered for `GuardTypeMismatch`.
pub(crate) struct Operands<'a>(pub &'a [&'a Value]);

impl fmt::Display for Operands<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " and ")?;
            }
            write!(f, "{}", v.type_name())?;
        }
        Ok(())
    }
}

// Factory functions

/// No arm matched.
#[cold]
pub fn non_exhaustive_match() -> MatchError {
    MatchErrorKind::NonExhaustiveMatch.into()
}

/// A capture name is bound twice in one pattern.
#[cold]
pub fn duplicate_binding(name: Name) -> MatchError {
    MatchErrorKind::DuplicateBinding { name }.into()
}

/// A guard references a name that is not bound.
#[cold]
pub fn unbound_guard_reference(name: Name) -> MatchError {
    MatchErrorKind::UnboundGuardReference { name }.into()
}

/// An attribute read on the subject raised.
#[cold]
pub fn host_attribute(type_name: Name, attribute: Name, message: impl Into<String>) -> MatchError {
    MatchErrorKind::HostAttribute {
        type_name,
        attribute,
        message: message.into(),
    }
    .into()
}

/// A guard operation does not support its operands.
#[cold]
pub fn guard_type_mismatch(op: &'static str, operands: &[&Value]) -> MatchError {
    MatchErrorKind::GuardTypeMismatch {
        op,
        operands: Operands(operands).to_string(),
    }
    .into()
}

/// A star slot is positioned past the fixed elements.
#[cold]
pub fn invalid_star_position(position: usize, len: usize) -> MatchError {
    MatchErrorKind::InvalidStarPosition { position, len }.into()
}

/// A mapping pattern repeats a key.
#[cold]
pub fn duplicate_mapping_key(key: &Value) -> MatchError {
    MatchErrorKind::DuplicateMappingKey {
        key: key.to_string(),
    }
    .into()
}

/// A class pattern names one attribute twice, by keyword or through a
/// positional slot.
#[cold]
pub fn duplicate_class_attribute(type_tag: Name, attribute: Name) -> MatchError {
    MatchErrorKind::DuplicateClassAttribute {
        type_tag,
        attribute,
    }
    .into()
}
