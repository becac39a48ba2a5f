//! First-match-wins dispatch over an ordered list of arms.
//!
//! Arms are tried in order. An arm commits when its pattern matches and its
//! guard (if any) passes against that arm's bindings. A guard that fails
//! discards the arm's bindings and moves on; nothing from a rejected arm is
//! visible to later arms.

use sift_value::{TypeRegistry, Value};
use tracing::{debug, trace};

use crate::arm::Arm;
use crate::bindings::Bindings;
use crate::errors::{non_exhaustive_match, MatchError, MatchResult};
use crate::guard::evaluate_guard;
use crate::matcher::{match_pattern, MatchOutcome};

/// The arm that won and what its pattern bound.
#[derive(Clone, Debug, PartialEq)]
pub struct Selection {
    pub arm_index: usize,
    pub bindings: Bindings,
}

/// Failure of [`dispatch_with`].
///
/// Keeps "no arm matched" apart from "an arm matched but its handler failed".
#[derive(Debug, thiserror::Error)]
pub enum DispatchError<E> {
    /// Matching failed or no arm matched.
    #[error(transparent)]
    Match(#[from] MatchError),
    /// The selected arm's handler returned an error.
    #[error("arm {arm_index} handler failed: {error}")]
    Handler { arm_index: usize, error: E },
}

impl<E> DispatchError<E> {
    /// Whether dispatch failed because no arm matched.
    pub fn is_no_match(&self) -> bool {
        matches!(self, DispatchError::Match(e) if e.is_no_match())
    }
}

/// Select the first arm whose pattern matches `subject` and whose guard
/// passes.
///
/// Does not run the arm's action.
///
/// # Errors
///
/// - `NonExhaustiveMatch` when every arm was rejected.
/// - Any fatal error from matching or guard evaluation, tagged with the arm
///   it came from. Later arms are not tried.
#[tracing::instrument(level = "debug", skip_all, fields(arms = arms.len()))]
pub fn dispatch<A, R: TypeRegistry + ?Sized>(
    subject: &Value,
    arms: &[Arm<A>],
    registry: &R,
) -> MatchResult<Selection> {
    for (arm_index, arm) in arms.iter().enumerate() {
        let bindings = match match_pattern(&arm.pattern, subject, registry)
            .map_err(|e| e.in_arm(arm_index))?
        {
            MatchOutcome::Success(bindings) => bindings,
            MatchOutcome::Failure => {
                trace!(arm_index, "pattern did not match");
                continue;
            }
        };

        if let Some(guard) = &arm.guard {
            if !evaluate_guard(guard, &bindings).map_err(|e| e.in_arm(arm_index))? {
                trace!(arm_index, "guard rejected");
                continue;
            }
        }

        debug!(arm_index, bindings = bindings.len(), "arm selected");
        return Ok(Selection {
            arm_index,
            bindings,
        });
    }

    debug!("no arm matched");
    Err(non_exhaustive_match())
}

/// [`dispatch`], then run `handler` on the selected arm's action and
/// bindings.
///
/// # Errors
///
/// `DispatchError::Match` for anything [`dispatch`] reports;
/// `DispatchError::Handler` when the handler itself fails.
pub fn dispatch_with<A, R, T, E, F>(
    subject: &Value,
    arms: &[Arm<A>],
    registry: &R,
    handler: F,
) -> Result<T, DispatchError<E>>
where
    R: TypeRegistry + ?Sized,
    F: FnOnce(&A, &Bindings) -> Result<T, E>,
{
    let Selection {
        arm_index,
        bindings,
    } = dispatch(subject, arms, registry)?;
    let arm = &arms[arm_index];
    handler(&arm.action, &bindings).map_err(|error| DispatchError::Handler { arm_index, error })
}
