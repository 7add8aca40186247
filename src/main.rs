use ticket_machine::{logging, BuildError, TicketMachineBuilder, TicketState};

fn main() -> Result<(), BuildError> {
    logging::init();

    let mut machine = TicketMachineBuilder::new()
        .initial(TicketState::Idle)
        .build()?;

    machine.select_ticket();
    machine.insert_money(100);
    machine.dispense_ticket();
    machine.cancel_transaction();

    if tracing::enabled!(tracing::Level::DEBUG) {
        match serde_json::to_string(machine.history()) {
            Ok(json) => tracing::debug!(history = %json, "session finished"),
            Err(err) => tracing::warn!(error = %err, "could not serialize history"),
        }
    }

    Ok(())
}
