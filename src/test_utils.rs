//! Shared test utilities for `MessMate`.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test records with sensible defaults. All fixtures default to
//! the month `2025-03` so month-scoping assertions stay readable.

use crate::{
    core::{month::MonthKey, records},
    entities,
    errors::Result,
};
use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// The month every fixture defaults to.
///
/// # Panics
/// Never panics: the key literal is valid.
#[must_use]
pub fn test_month() -> MonthKey {
    #[allow(clippy::unwrap_used)]
    MonthKey::parse("2025-03").unwrap()
}

/// A date inside [`test_month`].
///
/// # Panics
/// Panics for days outside March.
#[must_use]
pub fn test_date(day: u32) -> NaiveDate {
    #[allow(clippy::unwrap_used)]
    NaiveDate::from_ymd_opt(2025, 3, day).unwrap()
}

/// Creates an active test member.
pub async fn create_test_member(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entities::member::Model> {
    records::create_member(db, name).await
}

/// Creates a utility bill in the default test month with no due date.
pub async fn create_test_utility(
    db: &DatabaseConnection,
    kind: &str,
    cost: f64,
) -> Result<entities::utility::Model> {
    records::add_utility_bill(db, kind, cost, &test_month(), None).await
}

/// Sets up a database with three active members (Asha, Borhan, Chitra).
/// Returns (db, members) for multi-member scenarios.
pub async fn setup_with_members()
-> Result<(DatabaseConnection, Vec<entities::member::Model>)> {
    let db = setup_test_db().await?;
    let mut members = Vec::new();
    for name in ["Asha", "Borhan", "Chitra"] {
        members.push(create_test_member(&db, name).await?);
    }
    Ok((db, members))
}
