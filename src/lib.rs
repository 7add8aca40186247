//! Ticket Machine: a ticket vending state machine
//!
//! The machine is split into a pure core and an imperative shell. The core
//! is a single transition function mapping every (state, event) pair to a
//! message and an optional next state. The shell holds the current state,
//! prints messages and records history.
//!
//! # Core Concepts
//!
//! - **State**: where the machine is in the vending process (`TicketState`)
//! - **Event**: what the customer attempts (`TicketEvent`)
//! - **Transition table**: the complete (state, event) mapping (`core::transition`)
//! - **History**: immutable record of state changes
//!
//! # Example
//!
//! ```rust
//! use ticket_machine::{TicketMachine, TicketState};
//!
//! let mut machine = TicketMachine::new();
//! machine.select_ticket();
//! machine.insert_money(100);
//! machine.dispense_ticket();
//!
//! assert_eq!(machine.current_state(), TicketState::TicketDispensed);
//! assert_eq!(machine.history().get_path().len(), 3);
//! ```

pub mod builder;
pub mod controller;
pub mod core;
pub mod logging;

// Re-export commonly used types
pub use builder::{BuildError, TicketMachineBuilder};
pub use controller::{Step, TicketMachine};
pub use crate::core::{State, StateHistory, StateTransition, TicketEvent, TicketState};
