//! State machine trait for lifecycle enums.
//!
//! Gives status enums (screen selection, phone verification) a uniform,
//! validated transition interface.

use thiserror::Error;

/// Returned when a requested transition is not allowed from the current
/// state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Cannot transition from {from} to {to}")]
pub struct InvalidTransition {
    pub from: String,
    pub to: String,
}

/// Trait for enums whose variants form a state machine.
///
/// Implementors declare which transitions are legal; `transition_to`
/// validates and performs them.
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns true if a transition from self to target is valid.
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Returns all valid target states from the current state.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Performs the transition, returning an error if it is not valid.
    fn transition_to(&self, target: Self) -> Result<Self, InvalidTransition> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(InvalidTransition {
                from: format!("{:?}", self),
                to: format!("{:?}", target),
            })
        }
    }

    /// Checks whether the current state has no outgoing transitions.
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Light {
        Red,
        Green,
        Yellow,
        Off,
    }

    impl StateMachine for Light {
        fn can_transition_to(&self, target: &Self) -> bool {
            use Light::*;
            matches!(
                (self, target),
                (Red, Green) | (Green, Yellow) | (Yellow, Red) | (Red, Off)
            )
        }

        fn valid_transitions(&self) -> Vec<Self> {
            use Light::*;
            match self {
                Red => vec![Green, Off],
                Green => vec![Yellow],
                Yellow => vec![Red],
                Off => vec![],
            }
        }
    }

    #[test]
    fn valid_transition_succeeds() {
        assert_eq!(Light::Red.transition_to(Light::Green), Ok(Light::Green));
    }

    #[test]
    fn invalid_transition_reports_states() {
        let err = Light::Green.transition_to(Light::Red).unwrap_err();
        assert_eq!(err.from, "Green");
        assert_eq!(err.to, "Red");
        assert_eq!(format!("{}", err), "Cannot transition from Green to Red");
    }

    #[test]
    fn terminal_state_has_no_transitions() {
        assert!(Light::Off.is_terminal());
        assert!(!Light::Red.is_terminal());
    }

    #[test]
    fn can_transition_to_agrees_with_valid_transitions() {
        for state in [Light::Red, Light::Green, Light::Yellow, Light::Off] {
            for target in state.valid_transitions() {
                assert!(state.can_transition_to(&target));
            }
        }
    }
}
