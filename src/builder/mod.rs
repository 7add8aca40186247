//! Builder API for configuring a ticket machine.
//!
//! `TicketMachine::new()` always starts in `Idle`. The builder lets callers
//! pick another starting state, which is the only way to observe states that
//! no event sequence reaches.

pub mod error;
pub mod machine;

pub use error::BuildError;
pub use machine::TicketMachineBuilder;
