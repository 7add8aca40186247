//! Actions a customer can attempt against the machine.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A user-initiated action.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum TicketEvent {
    SelectTicket,
    InsertMoney,
    DispenseTicket,
    CancelTransaction,
}

impl TicketEvent {
    /// Every event, in declaration order.
    pub const ALL: [TicketEvent; 4] = [
        Self::SelectTicket,
        Self::InsertMoney,
        Self::DispenseTicket,
        Self::CancelTransaction,
    ];

    /// Get the event's name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::SelectTicket => "SelectTicket",
            Self::InsertMoney => "InsertMoney",
            Self::DispenseTicket => "DispenseTicket",
            Self::CancelTransaction => "CancelTransaction",
        }
    }
}

impl fmt::Display for TicketEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
