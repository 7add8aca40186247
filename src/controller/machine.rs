//! Ticket machine controller.

use crate::core::{transition, State, StateHistory, StateTransition, TicketEvent, TicketState};
use chrono::Utc;
use tracing::{debug, info, warn};

/// What a single dispatch did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Step {
    /// State the event was dispatched in
    pub from: TicketState,
    /// The dispatched event
    pub event: TicketEvent,
    /// Text printed for the customer
    pub message: &'static str,
    /// State after the dispatch; equals `from` when nothing moved
    pub to: TicketState,
}

impl Step {
    /// Whether the dispatch moved the machine to another state.
    pub fn changed(&self) -> bool {
        self.from != self.to
    }
}

/// Ticket vending machine holding exactly one active state.
#[derive(Clone, Debug)]
pub struct TicketMachine {
    current: TicketState,
    history: StateHistory,
}

impl Default for TicketMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl TicketMachine {
    /// Create a machine in `Idle`.
    pub fn new() -> Self {
        Self::starting_at(TicketState::Idle)
    }

    pub(crate) fn starting_at(initial: TicketState) -> Self {
        Self {
            current: initial,
            history: StateHistory::new(),
        }
    }

    /// Get current state (pure)
    pub fn current_state(&self) -> TicketState {
        self.current
    }

    /// Check if machine is in a final state (pure)
    pub fn is_final(&self) -> bool {
        self.current.is_final()
    }

    /// Get state history (pure)
    pub fn history(&self) -> &StateHistory {
        &self.history
    }

    /// Compute what `event` would do from the current state without applying it.
    pub fn step(&self, event: TicketEvent) -> Step {
        let result = transition(self.current, event);
        Step {
            from: self.current,
            event,
            message: result.message,
            to: result.resolve(self.current),
        }
    }

    /// Apply a step produced by `step()`.
    ///
    /// The table is consulted again: a step computed from another state, or
    /// whose target disagrees with the table, is ignored.
    pub fn apply(&mut self, step: &Step) {
        if step.from != self.current || !step.changed() {
            return;
        }

        let expected = transition(self.current, step.event).resolve(self.current);
        if step.to != expected {
            warn!(
                from = %step.from,
                to = %step.to,
                event = %step.event,
                expected = %expected,
                "ignoring step the transition table does not allow"
            );
            return;
        }

        info!(from = %step.from, to = %step.to, event = %step.event, "state changed");
        self.history = self.history.record(StateTransition {
            from: step.from,
            to: step.to,
            event: step.event,
            timestamp: Utc::now(),
        });
        self.current = step.to;
    }

    /// Dispatch `event`: print the table's message and move to its next state.
    pub fn handle(&mut self, event: TicketEvent) -> Step {
        let step = self.step(event);
        debug!(state = %step.from, event = %event, reply = step.message, "handling event");

        println!("{}", step.message);
        self.apply(&step);
        step
    }

    /// Dispatch `SelectTicket`.
    pub fn select_ticket(&mut self) -> Step {
        self.handle(TicketEvent::SelectTicket)
    }

    /// Dispatch `InsertMoney`. The amount is logged but never checked.
    ///
    /// Amounts are whole currency units; fractional amounts are not modelled.
    pub fn insert_money(&mut self, amount: u32) -> Step {
        debug!(amount, "money inserted");
        self.handle(TicketEvent::InsertMoney)
    }

    /// Dispatch `DispenseTicket`.
    pub fn dispense_ticket(&mut self) -> Step {
        self.handle(TicketEvent::DispenseTicket)
    }

    /// Dispatch `CancelTransaction`.
    pub fn cancel_transaction(&mut self) -> Step {
        self.handle(TicketEvent::CancelTransaction)
    }
}
