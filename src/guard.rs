//! Transition guard and the per-chat reporting flow

use crate::elevator::ElevatorId;
use crate::status::Status;

/// Whether recording `proposed` needs an explicit second confirmation.
///
/// Two consecutive statuses in the same group form a baseline; leaving
/// that group (working ↔ broken) must be confirmed. With fewer than two
/// prior statuses nothing is guarded.
pub fn needs_confirmation(recent: &[Status], proposed: Status) -> bool {
    let [.., a, b] = recent else {
        return false;
    };

    let baseline = a.group();
    baseline == b.group() && baseline != proposed.group()
}

/// Where a chat currently is in the reporting dialogue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlowState {
    #[default]
    AwaitingElevatorChoice,
    AwaitingStatusChoice {
        elevator: ElevatorId,
    },
    AwaitingConfirmation {
        elevator: ElevatorId,
        status: Status,
    },
    Recorded {
        elevator: ElevatorId,
        status: Status,
    },
    Cancelled {
        elevator: ElevatorId,
    },
}

/// Inputs that move the flow forward
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowEvent {
    ElevatorChosen(ElevatorId),
    /// The tracker wrote the event straight away
    Recorded { elevator: ElevatorId, status: Status },
    /// The guard tripped and the user has to confirm
    ConfirmationRequested { elevator: ElevatorId, status: Status },
    Declined,
    Reset,
}

impl FlowState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, FlowState::Recorded { .. } | FlowState::Cancelled { .. })
    }

    /// The status awaiting confirmation for `elevator`, if any
    pub fn pending_confirmation(&self, elevator: ElevatorId) -> Option<Status> {
        match *self {
            FlowState::AwaitingConfirmation { elevator: e, status } if e == elevator => {
                Some(status)
            }
            _ => None,
        }
    }
}

/// Pure transition function of the reporting flow
pub fn transition(state: FlowState, event: FlowEvent) -> FlowState {
    match (state, event) {
        (_, FlowEvent::Reset) => FlowState::AwaitingElevatorChoice,
        (_, FlowEvent::ElevatorChosen(elevator)) => FlowState::AwaitingStatusChoice { elevator },
        (_, FlowEvent::Recorded { elevator, status }) => FlowState::Recorded { elevator, status },
        (FlowState::AwaitingConfirmation { elevator, .. }, FlowEvent::Declined) => {
            FlowState::Cancelled { elevator }
        }
        // Buttons from older messages stay clickable, so a guard prompt can
        // arrive without a preceding elevator choice in this session.
        (_, FlowEvent::ConfirmationRequested { elevator, status }) => {
            FlowState::AwaitingConfirmation { elevator, status }
        }
        (state, FlowEvent::Declined) => state,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::StatusGroup;

    /// Reference definition: both priors in one group, new status in the other.
    fn expected(a: Status, b: Status, new: Status) -> bool {
        let working = |s: Status| matches!(s, Status::Ok | Status::Warn);
        let broken = |s: Status| matches!(s, Status::Bad);
        (working(a) && working(b) && broken(new)) || (broken(a) && broken(b) && working(new))
    }

    #[test]
    fn test_named_cases() {
        assert!(needs_confirmation(&[Status::Ok, Status::Ok], Status::Bad));
        assert!(needs_confirmation(&[Status::Bad, Status::Bad], Status::Ok));
        assert!(needs_confirmation(&[Status::Ok, Status::Warn], Status::Bad));
        assert!(!needs_confirmation(&[], Status::Ok));
        assert!(!needs_confirmation(&[Status::Bad], Status::Ok));
        assert!(!needs_confirmation(&[Status::Ok, Status::Bad], Status::Ok));
    }

    #[test]
    fn test_all_combinations() {
        let mut guarded = 0;
        for a in Status::ALL {
            for b in Status::ALL {
                for new in Status::ALL {
                    let actual = needs_confirmation(&[a, b], new);
                    assert_eq!(actual, expected(a, b, new), "[{a}, {b}] -> {new}");
                    if actual {
                        guarded += 1;
                    }
                }
            }
        }
        // 4 working pairs x 1 broken + 1 broken pair x 2 working
        assert_eq!(guarded, 6);
    }

    #[test]
    fn test_only_last_two_matter() {
        assert!(needs_confirmation(&[Status::Bad, Status::Ok, Status::Ok], Status::Bad));
        assert!(!needs_confirmation(&[Status::Ok, Status::Ok, Status::Bad], Status::Ok));
        assert_eq!(StatusGroup::Working, Status::Warn.group());
    }

    #[test]
    fn test_guarded_flow_confirmed() {
        let id = ElevatorId::parse("8240").unwrap();

        let state = transition(FlowState::default(), FlowEvent::ElevatorChosen(id));
        assert_eq!(state, FlowState::AwaitingStatusChoice { elevator: id });

        let state = transition(
            state,
            FlowEvent::ConfirmationRequested { elevator: id, status: Status::Bad },
        );
        assert_eq!(state.pending_confirmation(id), Some(Status::Bad));

        let state = transition(state, FlowEvent::Recorded { elevator: id, status: Status::Bad });
        assert_eq!(state, FlowState::Recorded { elevator: id, status: Status::Bad });
        assert!(state.is_terminal());
    }

    #[test]
    fn test_guarded_flow_declined() {
        let id = ElevatorId::parse("8243").unwrap();

        let state = transition(
            FlowState::AwaitingStatusChoice { elevator: id },
            FlowEvent::ConfirmationRequested { elevator: id, status: Status::Ok },
        );
        let state = transition(state, FlowEvent::Declined);
        assert_eq!(state, FlowState::Cancelled { elevator: id });
        assert!(state.is_terminal());

        // Cancelling returns the user to the status choice.
        let state = transition(state, FlowEvent::ElevatorChosen(id));
        assert_eq!(state, FlowState::AwaitingStatusChoice { elevator: id });
    }

    #[test]
    fn test_unguarded_flow_records_directly() {
        let id = ElevatorId::parse("8241").unwrap();
        let state = transition(
            FlowState::AwaitingStatusChoice { elevator: id },
            FlowEvent::Recorded { elevator: id, status: Status::Warn },
        );
        assert_eq!(state, FlowState::Recorded { elevator: id, status: Status::Warn });
        assert_eq!(state.pending_confirmation(id), None);
    }

    #[test]
    fn test_decline_without_prompt_is_ignored() {
        let id = ElevatorId::parse("8242").unwrap();
        let state = FlowState::AwaitingStatusChoice { elevator: id };
        assert_eq!(transition(state, FlowEvent::Declined), state);
    }
}
