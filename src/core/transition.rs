//! The transition table.
//!
//! Every (state, event) pair maps to exactly one `TransitionResult`. The
//! mapping is a single exhaustive `match`, so an unhandled pair is a compile
//! error rather than a runtime condition.

use super::event::TicketEvent;
use super::state::TicketState;

/// Outcome of looking up a (state, event) pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransitionResult {
    /// Text shown to the customer.
    pub message: &'static str,
    /// State to move to, or `None` to stay put.
    pub next: Option<TicketState>,
}

impl TransitionResult {
    const fn stay(message: &'static str) -> Self {
        Self {
            message,
            next: None,
        }
    }

    const fn goto(message: &'static str, next: TicketState) -> Self {
        Self {
            message,
            next: Some(next),
        }
    }

    /// The state the machine is in after applying this result from `current`.
    pub fn resolve(&self, current: TicketState) -> TicketState {
        self.next.unwrap_or(current)
    }
}

/// Look up the transition for `event` in `state` (pure).
///
/// `WaitingForMoney` shares its row with `MoneyReceived`: a selected ticket
/// can be dispensed without money being inserted.
///
/// # Example
///
/// ```rust
/// use ticket_machine::core::{transition, TicketEvent, TicketState};
///
/// let result = transition(TicketState::Idle, TicketEvent::SelectTicket);
/// assert_eq!(result.message, "Ticket selected. Insert money.");
/// assert_eq!(result.next, Some(TicketState::WaitingForMoney));
/// ```
pub fn transition(state: TicketState, event: TicketEvent) -> TransitionResult {
    use TicketEvent::*;
    use TicketState::*;

    match (state, event) {
        (Idle, SelectTicket) => {
            TransitionResult::goto("Ticket selected. Insert money.", WaitingForMoney)
        }
        (Idle, InsertMoney | DispenseTicket) => TransitionResult::stay("Select a ticket first."),
        (Idle, CancelTransaction) => TransitionResult::stay("Nothing to cancel."),

        (WaitingForMoney | MoneyReceived, SelectTicket) => {
            TransitionResult::stay("Ticket already selected.")
        }
        (WaitingForMoney | MoneyReceived, InsertMoney) => {
            TransitionResult::stay("Money already received.")
        }
        (WaitingForMoney | MoneyReceived, DispenseTicket) => TransitionResult::goto(
            "Ticket dispensed. Thank you for your purchase!",
            TicketDispensed,
        ),
        (WaitingForMoney | MoneyReceived, CancelTransaction) => {
            TransitionResult::goto("Transaction canceled.", Idle)
        }

        (TicketDispensed, SelectTicket | InsertMoney) => {
            TransitionResult::stay("Process finished. Start over.")
        }
        (TicketDispensed, DispenseTicket) => TransitionResult::stay("Ticket already dispensed."),
        (TicketDispensed, CancelTransaction) => {
            TransitionResult::stay("Transaction finished. Nothing to cancel.")
        }

        (TransactionCanceled, SelectTicket | InsertMoney) => {
            TransitionResult::stay("Process canceled. Start over.")
        }
        (TransactionCanceled, DispenseTicket) => TransitionResult::stay("Process canceled."),
        (TransactionCanceled, CancelTransaction) => {
            TransitionResult::stay("Transaction already canceled.")
        }
    }
}

/// Every row of the table as `(state, event, result)`, states outermost.
pub fn table() -> impl Iterator<Item = (TicketState, TicketEvent, TransitionResult)> {
    TicketState::ALL.into_iter().flat_map(|state| {
        TicketEvent::ALL
            .into_iter()
            .map(move |event| (state, event, transition(state, event)))
    })
}
