//! The imperative shell around the pure core.
//!
//! `TicketMachine` owns the current state, applies the transition table,
//! prints each message to stdout and records state changes in its history.

mod machine;

pub use machine::{Step, TicketMachine};
