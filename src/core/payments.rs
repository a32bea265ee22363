//! Payment matrix - The per-bill, per-member paid/unpaid grid for utility bills.
//!
//! Building the matrix is pure; flipping a flag is a write. The optimistic
//! contract for callers lives in [`PaymentView`]: the flip is applied to the
//! in-memory view immediately, the write is issued, and on failure the prior
//! flag value is restored exactly.

use crate::{
    core::snapshot::MonthRecords,
    entities::{Utility, UtilityPayment, utility_payment},
    errors::{Error, Result},
};
use sea_orm::{DatabaseConnection, Set, prelude::*};
use std::collections::HashSet;
use tracing::warn;

/// One utility bill with its equal per-person split.
#[derive(Debug, Clone, PartialEq)]
pub struct BillSplit {
    /// The bill's id
    pub utility_id: i64,
    /// Bill type label
    pub kind: String,
    /// Total bill cost
    pub cost: f64,
    /// cost / active member count (0 when there are no active members)
    pub cost_per_person: f64,
    /// Optional payment deadline
    pub due_date: Option<chrono::NaiveDate>,
}

/// One member's row of the matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberRow {
    /// The member's id
    pub member_id: i64,
    /// The member's display name
    pub name: String,
    /// Paid flags aligned index-for-index with the matrix bill list
    pub paid: Vec<bool>,
    /// How many of the month's bills this member has paid
    pub paid_count: usize,
    /// Total bills this month
    pub bill_count: usize,
}

/// The full paid/unpaid grid for one month.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentMatrix {
    /// The month's bills with per-person splits
    pub bills: Vec<BillSplit>,
    /// One row per active member
    pub rows: Vec<MemberRow>,
}

/// Cross-references the month's bills against the paid flag set. A missing
/// flag record means unpaid.
#[must_use]
pub fn build_payment_matrix(records: &MonthRecords) -> PaymentMatrix {
    let member_count = records.members.len();

    let bills: Vec<BillSplit> = records
        .utilities
        .iter()
        .map(|u| BillSplit {
            utility_id: u.id,
            kind: u.kind.clone(),
            cost: u.cost,
            #[allow(clippy::cast_precision_loss)]
            cost_per_person: if member_count > 0 {
                u.cost / member_count as f64
            } else {
                0.0
            },
            due_date: u.due_date,
        })
        .collect();

    let rows = records
        .members
        .iter()
        .map(|m| {
            let paid: Vec<bool> = bills
                .iter()
                .map(|b| records.paid.contains(&(b.utility_id, m.id)))
                .collect();
            let paid_count = paid.iter().filter(|p| **p).count();
            MemberRow {
                member_id: m.id,
                name: m.name.clone(),
                paid,
                paid_count,
                bill_count: bills.len(),
            }
        })
        .collect();

    PaymentMatrix { bills, rows }
}

/// Flips the stored paid flag for one (bill, member) pair, returning the new
/// state. Upserts: a missing flag row counts as unpaid and is created paid.
///
/// # Errors
/// Fails if the bill does not exist or the write fails; stored state is
/// unchanged on failure.
pub async fn toggle_utility_payment(
    db: &DatabaseConnection,
    utility_id: i64,
    member_id: i64,
) -> Result<bool> {
    Utility::find_by_id(utility_id)
        .one(db)
        .await?
        .ok_or(Error::UtilityNotFound { id: utility_id })?;

    let existing = UtilityPayment::find()
        .filter(utility_payment::Column::UtilityId.eq(utility_id))
        .filter(utility_payment::Column::MemberId.eq(member_id))
        .one(db)
        .await?;

    if let Some(payment) = existing {
        let new_paid = !payment.paid;
        let mut active_model: utility_payment::ActiveModel = payment.into();
        active_model.paid = Set(new_paid);
        active_model.update(db).await?;
        Ok(new_paid)
    } else {
        let new_payment = utility_payment::ActiveModel {
            utility_id: Set(utility_id),
            member_id: Set(member_id),
            paid: Set(true),
            ..Default::default()
        };
        new_payment.insert(db).await?;
        Ok(true)
    }
}

/// An in-memory view of the paid flag set supporting optimistic toggles.
///
/// Callers render from this view; [`PaymentView::toggle`] applies the flip
/// locally before the backing write is confirmed and reverts it if the write
/// fails, so the view never drifts from the store by more than one in-flight
/// toggle.
#[derive(Debug, Clone, Default)]
pub struct PaymentView {
    paid: HashSet<(i64, i64)>,
}

impl PaymentView {
    /// Builds the view from a month snapshot.
    #[must_use]
    pub fn from_records(records: &MonthRecords) -> Self {
        Self {
            paid: records.paid.clone(),
        }
    }

    /// Whether the view currently shows this pair as paid.
    #[must_use]
    pub fn is_paid(&self, utility_id: i64, member_id: i64) -> bool {
        self.paid.contains(&(utility_id, member_id))
    }

    /// Optimistically flips a flag: the local view changes first, then the
    /// write is issued; on write failure the previous value is restored
    /// exactly and the error is returned.
    pub async fn toggle(
        &mut self,
        db: &DatabaseConnection,
        utility_id: i64,
        member_id: i64,
    ) -> Result<bool> {
        let key = (utility_id, member_id);
        let was_paid = self.paid.contains(&key);

        // Apply locally before the write is confirmed
        if was_paid {
            self.paid.remove(&key);
        } else {
            self.paid.insert(key);
        }

        match toggle_utility_payment(db, utility_id, member_id).await {
            Ok(new_paid) => Ok(new_paid),
            Err(e) => {
                warn!(utility_id, member_id, "payment toggle failed, reverting");
                if was_paid {
                    self.paid.insert(key);
                } else {
                    self.paid.remove(&key);
                }
                Err(e)
            }
        }
    }
}
