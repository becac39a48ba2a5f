#![deny(clippy::arithmetic_side_effects)]
//! Sift Eval - structural pattern matching and first-match dispatch.
//!
//! Given a subject [`Value`] and an ordered list of [`Arm`]s, [`dispatch`]
//! returns the index of the first arm whose pattern fits the subject and
//! whose guard passes, together with the names that pattern bound. It never
//! runs the arm's action; [`dispatch_with`] does that for callers that want
//! it, keeping handler failures apart from match failures.
//!
//! # Architecture
//!
//! - [`Pattern`]: closed pattern model (literal, capture, wildcard, or,
//!   sequence with star, mapping with rest, class, as)
//! - [`match_pattern`]: recursive matcher over a checkpointed [`Bindings`]
//!   buffer, consulting a [`TypeRegistry`] for class patterns
//! - [`GuardExpr`] / [`evaluate_guard`]: pure predicates over bindings
//! - [`ArmList`]: arms that passed the static checks in [`validate`]
//! - [`MatchError`]: fatal conditions with stable `E61xx` codes

mod arm;
mod bindings;
mod dispatch;
pub mod errors;
mod guard;
mod matcher;
mod pattern;
mod stack;
pub mod validate;

pub use arm::{Arm, ArmList};
pub use bindings::Bindings;
pub use dispatch::{dispatch, dispatch_with, DispatchError, Selection};
pub use errors::{MatchError, MatchErrorKind, MatchResult};
pub use guard::{evaluate_guard, CompareOp, GuardExpr};
pub use matcher::{match_pattern, MatchOutcome};
pub use pattern::{Pattern, Star};
pub use stack::ensure_sufficient_stack;

// Re-export the value model for convenience
pub use sift_value::{
    AttrRead, BuiltinKind, ClassRegistry, MapValue, Name, ObjectValue, StringInterner,
    StringLookup, TypeRegistry, Value,
};
