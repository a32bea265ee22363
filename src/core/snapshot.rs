//! Month snapshot - The read boundary against the record repository.
//!
//! All record sets for one month are fetched concurrently and joined before
//! any computation begins. The eight queries are independent of one another;
//! if any of them fails the whole snapshot fails, so the engine never computes
//! a breakdown from an incomplete record set. The joined fetch is treated as
//! one logical snapshot; no multi-table transactional isolation is provided,
//! so a mutation racing a fetch may be partially reflected.

use crate::{
    core::{
        month::MonthKey,
        rates::{MonthRates, calculate_rates},
    },
    entities::{
        DailyMeal, Grocery, LockedMonth, MealDeposit, Member, Utility, UtilityDeposit,
        UtilityPayment, daily_meal, grocery, locked_month, meal_deposit, member, utility,
        utility_deposit, utility_payment,
    },
    errors::Result,
};
use sea_orm::{DatabaseConnection, QueryOrder, prelude::*};
use std::collections::HashSet;

/// A consistent snapshot of one month's raw records.
#[derive(Debug, Clone)]
pub struct MonthRecords {
    /// The month being computed
    pub month: MonthKey,
    /// Active members, ordered by name
    pub members: Vec<member::Model>,
    /// Per-(member, date) meal counts, ordered by date
    pub daily_meals: Vec<daily_meal::Model>,
    /// Grocery purchases
    pub groceries: Vec<grocery::Model>,
    /// Utility bills
    pub utilities: Vec<utility::Model>,
    /// Meal fund deposits
    pub meal_deposits: Vec<meal_deposit::Model>,
    /// Utility pool deposits
    pub utility_deposits: Vec<utility_deposit::Model>,
    /// Set of (`utility_id`, `member_id`) pairs flagged paid
    pub paid: HashSet<(i64, i64)>,
    /// Whether the month is locked (advisory for the read path)
    pub locked: bool,
}

impl MonthRecords {
    /// Total grocery cost for the month.
    #[must_use]
    pub fn total_groceries(&self) -> f64 {
        self.groceries.iter().map(|g| g.cost).sum()
    }

    /// Total utility cost for the month.
    #[must_use]
    pub fn total_utilities(&self) -> f64 {
        self.utilities.iter().map(|u| u.cost).sum()
    }

    /// Total meal count (regular + guest) over all members and days.
    #[must_use]
    pub fn total_meals(&self) -> i64 {
        self.daily_meals
            .iter()
            .map(|m| i64::from(m.regular_meals) + i64::from(m.guest_meals))
            .sum()
    }

    /// The month's per-unit rates derived from the snapshot totals.
    #[must_use]
    pub fn rates(&self) -> MonthRates {
        calculate_rates(
            self.total_groceries(),
            self.total_meals(),
            self.total_utilities(),
            self.members.len(),
        )
    }
}

/// Aggregate figures for one month, as shown on the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthStats {
    /// Total meal count (regular + guest)
    pub total_meals: i64,
    /// Grocery cost per meal unit
    pub meal_rate: f64,
    /// Total grocery cost
    pub total_groceries: f64,
    /// Total utility cost
    pub total_utilities: f64,
    /// Groceries + utilities
    pub total_expenses: f64,
    /// Sum of meal and utility deposits collected
    pub total_deposits: f64,
    /// Whether the month is locked
    pub is_locked: bool,
}

/// Derives the dashboard figures from an already-fetched snapshot.
#[must_use]
pub fn compute_month_stats(records: &MonthRecords) -> MonthStats {
    let total_groceries = records.total_groceries();
    let total_utilities = records.total_utilities();
    let meal_deposit_total: f64 = records.meal_deposits.iter().map(|d| d.amount).sum();
    let utility_deposit_total: f64 = records.utility_deposits.iter().map(|d| d.amount).sum();

    MonthStats {
        total_meals: records.total_meals(),
        meal_rate: records.rates().meal_rate,
        total_groceries,
        total_utilities,
        total_expenses: total_groceries + total_utilities,
        total_deposits: meal_deposit_total + utility_deposit_total,
        is_locked: records.locked,
    }
}

/// Fetches every record set for one month, fanning the eight independent
/// queries out concurrently and joining them into a single snapshot.
///
/// # Errors
/// Fails as a whole if any individual query fails; a partial snapshot is
/// never returned.
pub async fn fetch_month_records(
    db: &DatabaseConnection,
    month: &MonthKey,
) -> Result<MonthRecords> {
    let key = month.to_string();

    let (members, daily_meals, groceries, utilities, meal_deposits, utility_deposits, payments, locks) =
        tokio::try_join!(
            Member::find()
                .filter(member::Column::IsActive.eq(true))
                .order_by_asc(member::Column::Name)
                .all(db),
            DailyMeal::find()
                .filter(daily_meal::Column::MonthYear.eq(&key))
                .order_by_asc(daily_meal::Column::Date)
                .all(db),
            Grocery::find()
                .filter(grocery::Column::MonthYear.eq(&key))
                .all(db),
            Utility::find()
                .filter(utility::Column::MonthYear.eq(&key))
                .order_by_asc(utility::Column::Id)
                .all(db),
            MealDeposit::find()
                .filter(meal_deposit::Column::MonthYear.eq(&key))
                .all(db),
            UtilityDeposit::find()
                .filter(utility_deposit::Column::MonthYear.eq(&key))
                .all(db),
            UtilityPayment::find()
                .filter(utility_payment::Column::Paid.eq(true))
                .all(db),
            LockedMonth::find()
                .filter(locked_month::Column::MonthYear.eq(&key))
                .all(db),
        )?;

    let paid: HashSet<(i64, i64)> = payments
        .into_iter()
        .map(|p| (p.utility_id, p.member_id))
        .collect();

    Ok(MonthRecords {
        month: *month,
        members,
        daily_meals,
        groceries,
        utilities,
        meal_deposits,
        utility_deposits,
        paid,
        locked: !locks.is_empty(),
    })
}
