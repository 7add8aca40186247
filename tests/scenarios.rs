//! End-to-end scenarios driven through the public API.

use ticket_machine::{TicketEvent, TicketMachine, TicketMachineBuilder, TicketState};

#[test]
fn demo_script() {
    let mut machine = TicketMachine::new();

    let messages = [
        machine.select_ticket().message,
        machine.insert_money(100).message,
        machine.dispense_ticket().message,
        machine.cancel_transaction().message,
    ];

    assert_eq!(
        messages,
        [
            "Ticket selected. Insert money.",
            "Money already received.",
            "Ticket dispensed. Thank you for your purchase!",
            "Transaction finished. Nothing to cancel.",
        ]
    );
    assert_eq!(machine.current_state(), TicketState::TicketDispensed);

    let events: Vec<_> = machine
        .history()
        .transitions()
        .iter()
        .map(|t| t.event)
        .collect();
    assert_eq!(
        events,
        vec![TicketEvent::SelectTicket, TicketEvent::DispenseTicket]
    );
}

#[test]
fn select_from_idle_waits_for_money() {
    let mut machine = TicketMachine::new();

    let step = machine.handle(TicketEvent::SelectTicket);

    assert_eq!(step.message, "Ticket selected. Insert money.");
    assert_eq!(machine.current_state(), TicketState::WaitingForMoney);
}

#[test]
fn insert_money_while_waiting_reports_money_already_received() {
    let mut machine = TicketMachineBuilder::new()
        .initial(TicketState::WaitingForMoney)
        .build()
        .unwrap();

    let step = machine.insert_money(100);

    assert_eq!(step.message, "Money already received.");
    assert_eq!(machine.current_state(), TicketState::WaitingForMoney);
}

#[test]
fn dispense_after_money_received() {
    let mut machine = TicketMachineBuilder::new()
        .initial(TicketState::MoneyReceived)
        .build()
        .unwrap();

    let step = machine.dispense_ticket();

    assert_eq!(step.message, "Ticket dispensed. Thank you for your purchase!");
    assert_eq!(machine.current_state(), TicketState::TicketDispensed);
}

#[test]
fn cancel_after_dispense_has_nothing_to_cancel() {
    let mut machine = TicketMachineBuilder::new()
        .initial(TicketState::TicketDispensed)
        .build()
        .unwrap();

    let step = machine.cancel_transaction();

    assert_eq!(step.message, "Transaction finished. Nothing to cancel.");
    assert_eq!(machine.current_state(), TicketState::TicketDispensed);
}

#[test]
fn cancel_twice_from_idle_is_idempotent() {
    let mut machine = TicketMachine::new();

    for _ in 0..2 {
        let step = machine.cancel_transaction();
        assert_eq!(step.message, "Nothing to cancel.");
        assert_eq!(machine.current_state(), TicketState::Idle);
    }
    assert!(machine.history().is_empty());
}

#[test]
fn canceled_transaction_can_start_over() {
    let mut machine = TicketMachine::new();
    machine.select_ticket();
    machine.cancel_transaction();

    let step = machine.select_ticket();

    assert_eq!(step.from, TicketState::Idle);
    assert_eq!(machine.current_state(), TicketState::WaitingForMoney);
    assert_eq!(machine.history().len(), 3);
}
