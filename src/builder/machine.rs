//! Builder for constructing ticket machines.

use crate::builder::error::BuildError;
use crate::controller::TicketMachine;
use crate::core::TicketState;
use tracing::debug;

/// Builder for constructing a `TicketMachine` with a fluent API.
///
/// # Example
///
/// ```rust
/// use ticket_machine::builder::TicketMachineBuilder;
/// use ticket_machine::core::TicketState;
///
/// let machine = TicketMachineBuilder::new()
///     .initial(TicketState::MoneyReceived)
///     .build()
///     .unwrap();
///
/// assert_eq!(machine.current_state(), TicketState::MoneyReceived);
/// ```
#[derive(Clone, Debug, Default)]
pub struct TicketMachineBuilder {
    initial: Option<TicketState>,
}

impl TicketMachineBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self { initial: None }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: TicketState) -> Self {
        self.initial = Some(state);
        self
    }

    /// Build the machine.
    /// Returns an error if required fields are missing.
    pub fn build(self) -> Result<TicketMachine, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;
        debug!(initial = %initial, "ticket machine built");
        Ok(TicketMachine::starting_at(initial))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_validates_required_fields() {
        let result = TicketMachineBuilder::new().build();

        assert!(matches!(result, Err(BuildError::MissingInitialState)));
    }

    #[test]
    fn fluent_api_builds_machine() {
        let machine = TicketMachineBuilder::new()
            .initial(TicketState::TransactionCanceled)
            .build()
            .unwrap();

        assert_eq!(machine.current_state(), TicketState::TransactionCanceled);
        assert!(machine.is_final());
        assert!(machine.history().is_empty());
    }

    #[test]
    fn last_initial_call_wins() {
        let machine = TicketMachineBuilder::new()
            .initial(TicketState::TicketDispensed)
            .initial(TicketState::Idle)
            .build()
            .unwrap();

        assert_eq!(machine.current_state(), TicketState::Idle);
    }

    #[test]
    fn missing_initial_message_names_the_fix() {
        let err = TicketMachineBuilder::new().build().unwrap_err();
        assert!(err.to_string().contains(".initial(state)"));
    }
}
