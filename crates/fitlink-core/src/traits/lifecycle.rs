//! Finite-state lifecycle shared by every status enumeration.
//!
//! Each status enum lists the states it may move to. Services never assign
//! a status directly; they call [`Lifecycle::transition_to`], which rejects
//! anything the table does not allow.

use std::fmt;

use crate::error::AppError;
use crate::result::AppResult;

/// A status enumeration with a validated transition table.
pub trait Lifecycle: Copy + Eq + fmt::Display + Sized + 'static {
    /// Human-readable entity name used in error messages ("booking", "gym").
    const ENTITY: &'static str;

    /// States reachable from `self` in one step.
    fn allowed_transitions(&self) -> &'static [Self];

    /// Whether `next` is reachable from `self` in one step.
    fn can_transition_to(&self, next: Self) -> bool {
        self.allowed_transitions().contains(&next)
    }

    /// Whether no further transition is possible.
    fn is_terminal(&self) -> bool {
        self.allowed_transitions().is_empty()
    }

    /// Validate a transition, returning the new state.
    fn transition_to(self, next: Self) -> AppResult<Self> {
        if self.can_transition_to(next) {
            Ok(next)
        } else {
            Err(AppError::business_rule(format!(
                "Cannot change {} status from '{}' to '{}'",
                Self::ENTITY,
                self,
                next
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Door {
        Open,
        Closed,
        Locked,
    }

    impl fmt::Display for Door {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            let s = match self {
                Self::Open => "open",
                Self::Closed => "closed",
                Self::Locked => "locked",
            };
            f.write_str(s)
        }
    }

    impl Lifecycle for Door {
        const ENTITY: &'static str = "door";

        fn allowed_transitions(&self) -> &'static [Self] {
            match self {
                Self::Open => &[Self::Closed],
                Self::Closed => &[Self::Open, Self::Locked],
                Self::Locked => &[],
            }
        }
    }

    #[test]
    fn test_allowed_transition() {
        assert_eq!(Door::Open.transition_to(Door::Closed).unwrap(), Door::Closed);
    }

    #[test]
    fn test_rejected_transition_message() {
        let err = Door::Open.transition_to(Door::Locked).unwrap_err();
        assert_eq!(err.kind, ErrorKind::BusinessRule);
        assert_eq!(err.message, "Cannot change door status from 'open' to 'locked'");
    }

    #[test]
    fn test_terminal_state() {
        assert!(Door::Locked.is_terminal());
        assert!(!Door::Closed.is_terminal());
    }
}
