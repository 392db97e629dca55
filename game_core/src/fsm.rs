//! Round State Machine
//!
//! Tracks whether a shot is in flight. Only one trajectory can be active.

/// Round phases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoundPhase {
    #[default]
    Idle,
    Firing,
}

/// Actions that trigger phase transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundAction {
    Fire,
    Hit,
    Land,
    Cancel,
}

/// Result of a phase transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    pub success: bool,
    pub from_phase: RoundPhase,
    pub to_phase: RoundPhase,
    pub action: RoundAction,
}

/// Round Finite State Machine
#[derive(Debug, Clone, Default)]
pub struct RoundFsm {
    phase: RoundPhase,
}

impl RoundFsm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn can_transition(&self, action: RoundAction) -> bool {
        self.next_phase(action).is_some()
    }

    /// Attempt a transition
    pub fn transition(&mut self, action: RoundAction) -> TransitionResult {
        let from_phase = self.phase;

        match self.next_phase(action) {
            Some(next) => {
                self.phase = next;
                TransitionResult {
                    success: true,
                    from_phase,
                    to_phase: next,
                    action,
                }
            }
            None => TransitionResult {
                success: false,
                from_phase,
                to_phase: from_phase,
                action,
            },
        }
    }

    fn next_phase(&self, action: RoundAction) -> Option<RoundPhase> {
        match (self.phase, action) {
            (RoundPhase::Idle, RoundAction::Fire) => Some(RoundPhase::Firing),

            (RoundPhase::Firing, RoundAction::Hit) => Some(RoundPhase::Idle),
            (RoundPhase::Firing, RoundAction::Land) => Some(RoundPhase::Idle),
            (RoundPhase::Firing, RoundAction::Cancel) => Some(RoundPhase::Idle),

            _ => None,
        }
    }

    pub fn is_firing(&self) -> bool {
        self.phase == RoundPhase::Firing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_phase() {
        assert_eq!(RoundFsm::new().phase(), RoundPhase::Idle);
    }

    #[test]
    fn test_fire_then_land() {
        let mut fsm = RoundFsm::new();
        let result = fsm.transition(RoundAction::Fire);
        assert!(result.success);
        assert_eq!(result.to_phase, RoundPhase::Firing);
        assert!(fsm.is_firing());

        fsm.transition(RoundAction::Land);
        assert_eq!(fsm.phase(), RoundPhase::Idle);
    }

    #[test]
    fn test_double_fire_rejected() {
        let mut fsm = RoundFsm::new();
        fsm.transition(RoundAction::Fire);
        let result = fsm.transition(RoundAction::Fire);
        assert!(!result.success);
        assert_eq!(fsm.phase(), RoundPhase::Firing);
    }

    #[test]
    fn test_outcomes_need_a_shot_in_flight() {
        let mut fsm = RoundFsm::new();
        for action in [RoundAction::Hit, RoundAction::Land, RoundAction::Cancel] {
            assert!(!fsm.can_transition(action));
            assert!(!fsm.transition(action).success);
        }
        assert_eq!(fsm.phase(), RoundPhase::Idle);
    }
}
