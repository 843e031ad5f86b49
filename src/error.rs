//! Error types for table operations.

use alloc::string::String;
use alloc::vec::Vec;

use thiserror::Error;

use crate::hand::HandStatus;

/// Errors raised while assembling a roster.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    /// A gambler name is empty or only whitespace.
    #[error("gambler names must not be blank, got {name:?}")]
    BlankName {
        /// The name as supplied, before trimming.
        name: String,
    },
    /// A gambler tried to take the dealer's reserved name.
    #[error("`{name}` is reserved for the dealer")]
    ReservedName {
        /// The offending name.
        name: String,
    },
    /// Two or more gamblers share a name.
    #[error("gambler names must be unique, got {names:?}")]
    DuplicateNames {
        /// The names as supplied.
        names: Vec<String>,
    },
    /// The number of gamblers is outside 1 to 6.
    #[error("a table seats 1 to 6 gamblers, got {count}")]
    GamblerCount {
        /// The number of names supplied.
        count: usize,
    },
}

/// Errors raised by mutating a hand that has already finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HandError {
    /// The hand is terminal and can no longer change.
    #[error("hand is already {status:?} and cannot change")]
    Terminal {
        /// The terminal status the hand is in.
        status: HandStatus,
    },
}

/// Errors raised by a card source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// No cards remain.
    #[error("no cards left in the source")]
    ExhaustedSource,
}

/// Errors that can occur while placing wagers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WagerError {
    /// Invalid table state for wagering.
    #[error("invalid table state for wagering")]
    InvalidState,
    /// No gambler with that name is seated.
    #[error("gambler not found")]
    PlayerNotFound,
}

/// Errors that can occur during dealing and turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid table state for this action.
    #[error("invalid table state for this action")]
    InvalidState,
    /// No gambler with that name is seated.
    #[error("gambler not found")]
    PlayerNotFound,
    /// Not this gambler's turn.
    #[error("not this gambler's turn")]
    NotYourTurn,
    /// The hand rejected the mutation.
    #[error(transparent)]
    Hand(#[from] HandError),
    /// The card source ran dry.
    #[error(transparent)]
    Source(#[from] DrawError),
}

/// Errors that can occur when resolving or settling a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShowdownError {
    /// Invalid table state for showdown.
    #[error("invalid table state for showdown")]
    InvalidState,
}
