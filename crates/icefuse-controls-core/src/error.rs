//! Error types for the Icefuse control library.

use thiserror::Error;

/// The main error type for control library operations.
#[derive(Debug, Error)]
pub enum ControlsError {
    /// Timer-related error.
    #[error("timer error: {0}")]
    Timer(#[from] TimerError),

    /// Signal-related error.
    #[error("signal error: {0}")]
    Signal(#[from] SignalError),
}

/// Timer-specific errors.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TimerError {
    /// The timer ID is invalid, expired, or has already been cancelled.
    #[error("invalid or expired timer id")]
    InvalidTimerId,
}

/// Signal-specific errors.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SignalError {
    /// The connection ID is invalid or has already been disconnected.
    #[error("invalid or disconnected connection id")]
    InvalidConnection,
}

/// A specialized Result type for control library operations.
pub type Result<T> = std::result::Result<T, ControlsError>;
