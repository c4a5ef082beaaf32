//! # Easel Scheduler Errors
//!
//! Defines error types specific to the easel event scheduler.
//!
//! This module includes [`SchedulerError`], the enum covering failures of
//! the shared scheduler handle. Dispatching an event with no listeners and
//! removing an unknown registration are deliberately *not* errors; both
//! are silent no-ops.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchedulerError {
    #[error("scheduler registry lock poisoned during '{operation}'")]
    LockPoisoned { operation: &'static str },

    #[error("internal event scheduler error: {0}")]
    Internal(String),
}

/// Shorthand for Result with the scheduler error type
pub type Result<T> = std::result::Result<T, SchedulerError>;
