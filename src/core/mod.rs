//! Core state machine types and logic.
//!
//! This module contains the pure core of the ticket machine:
//! - States and events
//! - The transition table
//! - Immutable history tracking
//!
//! Nothing in here prints, logs or reads the clock on its own.

mod event;
mod history;
mod state;
mod transition;

pub use event::TicketEvent;
pub use history::{StateHistory, StateTransition};
pub use state::{State, TicketState};
pub use transition::{table, transition, TransitionResult};
