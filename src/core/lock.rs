//! Month lock state - A two-state machine gating a month's mutability.
//!
//! A month is `Locked` when a `locked_months` row exists for its key and
//! `Unlocked` otherwise; there are no automatic transitions. Both transitions
//! are idempotent, last-write-wins operations: locking a locked month or
//! unlocking an unlocked one is a no-op success. The lock is advisory for the
//! read/report path; the mutation layer ([`crate::core::records`]) is the
//! enforcement point.

use crate::{
    core::month::MonthKey,
    entities::{LockedMonth, locked_month},
    errors::Result,
};
use sea_orm::{DatabaseConnection, Set, prelude::*};
use tracing::info;

/// Whether a lock record exists for the month.
pub async fn is_month_locked(db: &DatabaseConnection, month: &MonthKey) -> Result<bool> {
    let count = LockedMonth::find()
        .filter(locked_month::Column::MonthYear.eq(month.to_string()))
        .count(db)
        .await?;
    Ok(count > 0)
}

/// Locks a month (Unlocked → Locked). Idempotent: locking an already-locked
/// month leaves exactly one lock record and succeeds.
pub async fn lock_month(db: &DatabaseConnection, month: &MonthKey, locked_by: &str) -> Result<()> {
    let existing = LockedMonth::find()
        .filter(locked_month::Column::MonthYear.eq(month.to_string()))
        .one(db)
        .await?;

    if existing.is_some() {
        return Ok(());
    }

    let lock = locked_month::ActiveModel {
        month_year: Set(month.to_string()),
        locked_by: Set(locked_by.to_string()),
        ..Default::default()
    };
    lock.insert(db).await?;
    info!(month = %month, locked_by, "month locked");
    Ok(())
}

/// Unlocks a month (Locked → Unlocked). Idempotent: unlocking an unlocked
/// month is a no-op success.
pub async fn unlock_month(db: &DatabaseConnection, month: &MonthKey) -> Result<()> {
    let result = LockedMonth::delete_many()
        .filter(locked_month::Column::MonthYear.eq(month.to_string()))
        .exec(db)
        .await?;
    if result.rows_affected > 0 {
        info!(month = %month, "month unlocked");
    }
    Ok(())
}
