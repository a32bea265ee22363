//! Core business logic - The settlement engine and its mutation layer.
//!
//! Everything here is framework-agnostic: the read side is pure computation
//! over a fetched month snapshot, and the write side is a set of validated
//! record mutations. No presentation concerns live in this module.

/// Per-member financial breakdown computation
pub mod balance;
/// Debtor extraction and ordering
pub mod debtor;
/// One-call settlement recomputation and the refresh loop
pub mod engine;
/// Month lock state machine
pub mod lock;
/// Validated `YYYY-MM` month keys
pub mod month;
/// Payment matrix and the optimistic toggle contract
pub mod payments;
/// Per-unit rate calculation
pub mod rates;
/// Record mutations (members, meals, groceries, bills, deposits)
pub mod records;
/// Settlement report text generation
pub mod report;
/// Concurrent month snapshot fetching
pub mod snapshot;
