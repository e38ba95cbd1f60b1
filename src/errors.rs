//! Unified application error type.
//! The core returns `TransitionError` for out-of-order actions and
//! `PersistenceError` for storage/cipher failures; both fold into `AppError`
//! at the CLI boundary.

use crate::models::session::SessionStatus;
use std::io;
use thiserror::Error;

/// Raised when a check-in / break / check-out call does not fit the current state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransitionError {
    #[error("Already checked in: check out before checking in again")]
    AlreadyCheckedIn,

    #[error("Not checked in")]
    NotCheckedIn,

    #[error("Cannot {action} while {state}")]
    InvalidState {
        action: &'static str,
        state: SessionStatus,
    },

    #[error("No active break to end")]
    NoActiveBreak,

    #[error("Efficiency must be a finite number")]
    InvalidEfficiency,
}

/// Raised by the storage stack. Recovered inside `SecureStateStore` unless the
/// caller explicitly asks for the checked variants.
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Decryption failed: {0}")]
    Cipher(String),

    #[error("Invalid slot encoding: {0}")]
    Encoding(#[from] base64::DecodeError),

    #[error("Invalid slot payload: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Key file error: {0}")]
    KeyFile(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Core
    // ---------------------------
    #[error("{0}")]
    Transition(#[from] TransitionError),

    #[error("{0}")]
    Persistence(#[from] PersistenceError),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

impl From<rusqlite::Error> for AppError {
    fn from(e: rusqlite::Error) -> Self {
        AppError::Persistence(PersistenceError::Database(e))
    }
}

pub type AppResult<T> = Result<T, AppError>;
pub type PersistResult<T> = Result<T, PersistenceError>;
