//! States of the ticket machine.
//!
//! The `State` trait provides pure methods for inspecting a state without
//! side effects. `TicketState` is the machine's concrete state set.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};

/// Trait for state machine states.
///
/// All methods are pure - no side effects.
///
/// # Required Traits
///
/// - `Clone`: States must be cloneable for history tracking
/// - `PartialEq`: States must be comparable for transition logic
/// - `Debug`: States must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: States must be serializable for diagnostics dumps
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is a final (terminal) state.
    ///
    /// No event moves the machine out of a final state.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }
}

/// Position of the ticket machine in the vending process.
///
/// # Example
///
/// ```rust
/// use ticket_machine::core::{State, TicketState};
///
/// assert_eq!(TicketState::default(), TicketState::Idle);
/// assert!(TicketState::TicketDispensed.is_final());
/// assert!(!TicketState::MoneyReceived.is_final());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub enum TicketState {
    #[default]
    Idle,
    WaitingForMoney,
    MoneyReceived,
    TicketDispensed,
    TransactionCanceled,
}

impl TicketState {
    /// Every state, in declaration order.
    pub const ALL: [TicketState; 5] = [
        Self::Idle,
        Self::WaitingForMoney,
        Self::MoneyReceived,
        Self::TicketDispensed,
        Self::TransactionCanceled,
    ];
}

impl State for TicketState {
    fn name(&self) -> &str {
        match self {
            Self::Idle => "Idle",
            Self::WaitingForMoney => "WaitingForMoney",
            Self::MoneyReceived => "MoneyReceived",
            Self::TicketDispensed => "TicketDispensed",
            Self::TransactionCanceled => "TransactionCanceled",
        }
    }

    fn is_final(&self) -> bool {
        matches!(self, Self::TicketDispensed | Self::TransactionCanceled)
    }
}

impl fmt::Display for TicketState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
