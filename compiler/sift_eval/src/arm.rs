//! Match arms and validated arm lists.

use std::ops::Deref;

use crate::errors::MatchResult;
use crate::guard::GuardExpr;
use crate::pattern::Pattern;
use crate::validate::{bindable_names, check_guard};

/// One arm: a pattern, an optional guard, and the embedder's action.
///
/// The dispatcher never runs `action`; it only reports which arm won.
#[derive(Clone, Debug, PartialEq)]
pub struct Arm<A> {
    pub pattern: Pattern,
    pub guard: Option<GuardExpr>,
    pub action: A,
}

impl<A> Arm<A> {
    pub fn new(pattern: Pattern, action: A) -> Self {
        Arm {
            pattern,
            guard: None,
            action,
        }
    }

    pub fn guarded(pattern: Pattern, guard: GuardExpr, action: A) -> Self {
        Arm {
            pattern,
            guard: Some(guard),
            action,
        }
    }

    /// Run the static checks on this arm.
    ///
    /// # Errors
    ///
    /// Any shape error in the pattern, or `UnboundGuardReference` when the
    /// guard reads a name the pattern cannot bind.
    pub fn validate(&self) -> MatchResult<()> {
        let names = bindable_names(&self.pattern)?;
        match &self.guard {
            Some(guard) => check_guard(guard, &names),
            None => Ok(()),
        }
    }
}

/// An immutable list of arms that passed validation.
///
/// Derefs to `[Arm<A>]`, so it can be handed straight to
/// [`dispatch`](crate::dispatch).
#[derive(Clone, Debug, PartialEq)]
pub struct ArmList<A> {
    arms: Vec<Arm<A>>,
}

impl<A> ArmList<A> {
    /// Validate `arms` in order.
    ///
    /// # Errors
    ///
    /// The first arm's validation error, tagged with that arm's index.
    pub fn new(arms: impl IntoIterator<Item = Arm<A>>) -> MatchResult<Self> {
        let arms: Vec<Arm<A>> = arms.into_iter().collect();
        for (index, arm) in arms.iter().enumerate() {
            arm.validate().map_err(|e| e.in_arm(index))?;
        }
        if let Some(index) = arms
            .iter()
            .position(|arm| arm.guard.is_none() && arm.pattern.is_irrefutable())
            .filter(|&index| index.saturating_add(1) < arms.len())
        {
            tracing::warn!(
                index,
                unreachable = arms.len().saturating_sub(index).saturating_sub(1),
                "irrefutable arm makes the arms after it unreachable"
            );
        }
        Ok(ArmList { arms })
    }
}

impl<A> Deref for ArmList<A> {
    type Target = [Arm<A>];

    fn deref(&self) -> &[Arm<A>] {
        &self.arms
    }
}

impl<'a, A> IntoIterator for &'a ArmList<A> {
    type Item = &'a Arm<A>;
    type IntoIter = std::slice::Iter<'a, Arm<A>>;

    fn into_iter(self) -> Self::IntoIter {
        self.arms.iter()
    }
}
