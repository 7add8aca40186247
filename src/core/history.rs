//! State transition history tracking.
//!
//! Only dispatches that change state are recorded. History is immutable:
//! `record` returns a new history and leaves the receiver untouched.

use super::event::TicketEvent;
use super::state::TicketState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single state change.
///
/// # Example
///
/// ```rust
/// use ticket_machine::core::{StateTransition, TicketEvent, TicketState};
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: TicketState::Idle,
///     to: TicketState::WaitingForMoney,
///     event: TicketEvent::SelectTicket,
///     timestamp: Utc::now(),
/// };
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StateTransition {
    /// The state being transitioned from
    pub from: TicketState,
    /// The state being transitioned to
    pub to: TicketState,
    /// The event that caused the change
    pub event: TicketEvent,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of state transitions.
///
/// # Example
///
/// ```rust
/// use ticket_machine::core::{StateHistory, StateTransition, TicketEvent, TicketState};
/// use chrono::Utc;
///
/// let history = StateHistory::new().record(StateTransition {
///     from: TicketState::Idle,
///     to: TicketState::WaitingForMoney,
///     event: TicketEvent::SelectTicket,
///     timestamp: Utc::now(),
/// });
///
/// let history = history.record(StateTransition {
///     from: TicketState::WaitingForMoney,
///     to: TicketState::TicketDispensed,
///     event: TicketEvent::DispenseTicket,
///     timestamp: Utc::now(),
/// });
///
/// let path = history.get_path();
/// assert_eq!(path.len(), 3);
/// assert_eq!(path[2], &TicketState::TicketDispensed);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct StateHistory {
    transitions: Vec<StateTransition>,
}

impl StateHistory {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    pub fn record(&self, transition: StateTransition) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Get the path of states traversed.
    ///
    /// Returns the `from` state of the first transition, then the `to`
    /// state of each transition. Empty when nothing was recorded.
    pub fn get_path(&self) -> Vec<&TicketState> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Time between the first and last recorded transition.
    ///
    /// Returns `None` if there are no transitions.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.transitions.first()?, self.transitions.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    /// Get all transitions in the order they were recorded.
    pub fn transitions(&self) -> &[StateTransition] {
        &self.transitions
    }

    /// Number of recorded state changes.
    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    /// Check if no state change was recorded yet.
    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
