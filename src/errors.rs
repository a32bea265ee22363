//! Unified error types for `MessMate`.
//!
//! All fallible operations in the crate return [`Result`], built on a single
//! [`Error`] enum so that callers only need one conversion path.

use thiserror::Error;

/// Crate-wide error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration file or environment problem
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description of what went wrong
        message: String,
    },

    /// A month key that is not of the form `YYYY-MM`
    #[error("Invalid month key: {value:?} (expected YYYY-MM)")]
    InvalidMonthKey {
        /// The rejected input
        value: String,
    },

    /// A monetary amount that is negative or non-finite
    #[error("Invalid amount: {amount}")]
    InvalidAmount {
        /// The rejected amount
        amount: f64,
    },

    /// A meal count that is negative
    #[error("Invalid meal count: {count}")]
    InvalidMealCount {
        /// The rejected count
        count: i32,
    },

    /// Lookup of a member that does not exist (or is inactive)
    #[error("Member not found: {id}")]
    MemberNotFound {
        /// The member id that failed to resolve
        id: i64,
    },

    /// Lookup of a utility bill that does not exist
    #[error("Utility bill not found: {id}")]
    UtilityNotFound {
        /// The utility bill id that failed to resolve
        id: i64,
    },

    /// Attempted write against a locked month
    #[error("Month {month} is locked and cannot be modified")]
    MonthLocked {
        /// The locked month key
        month: String,
    },

    /// Database error from `SeaORM`
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
