//! The module contains the errors the engine can throw.
//!
//! All of them are raised at the validation boundary while a group is being
//! mutated (adding members, recording expenses, flipping settlement flags).
//! The balance and transfer computations are total: once a [`Group`] has been
//! built through the validated operations they never fail.
//!
//! [`Group`]: super::Group
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum EngineError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Invalid split: {0}")]
    InvalidSplit(String),
    #[error("\"{0}\" key not found!")]
    KeyNotFound(String),
    #[error("\"{0}\" already present!")]
    ExistingKey(String),
    #[error("Unknown member: {0}")]
    UnknownMember(String),
    #[error("Not a participant: {0}")]
    NotAParticipant(String),
    #[error("Currency mismatch: {0}")]
    CurrencyMismatch(String),
}
