//! Errors raised while configuring a ticket machine.

use thiserror::Error;

/// Errors that can occur when building a ticket machine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,
}
