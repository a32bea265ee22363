//! Record mutation layer - Writes against the raw record sets.
//!
//! Every operation derives the month key from its date (or takes one
//! explicitly) and refuses to touch a locked month. This is the enforcement
//! point for the month lock: the read/report path never rejects anything.
//! The grocery auto-credit is an explicit two-step transaction (purchase row,
//! then derived deposit row), so the settlement computation can consume the
//! deposit as ordinary input data instead of inferring it.

use crate::{
    core::{lock::is_month_locked, month::MonthKey},
    entities::{
        DailyMeal, Member, Utility, UtilityPayment, daily_meal, grocery, meal_deposit, member,
        utility, utility_payment,
    },
    errors::{Error, Result},
};
use chrono::NaiveDate;
use sea_orm::{DatabaseConnection, Set, TransactionTrait, prelude::*};
use tracing::info;

/// Fails with [`Error::MonthLocked`] when the month has a lock record.
async fn ensure_unlocked(db: &DatabaseConnection, month: &MonthKey) -> Result<()> {
    if is_month_locked(db, month).await? {
        return Err(Error::MonthLocked {
            month: month.to_string(),
        });
    }
    Ok(())
}

fn validate_amount(amount: f64) -> Result<()> {
    if amount < 0.0 || !amount.is_finite() {
        return Err(Error::InvalidAmount { amount });
    }
    Ok(())
}

async fn find_member(db: &DatabaseConnection, member_id: i64) -> Result<member::Model> {
    Member::find_by_id(member_id)
        .one(db)
        .await?
        .ok_or(Error::MemberNotFound { id: member_id })
}

/// Adds a member to the roster, active by default.
pub async fn create_member(db: &DatabaseConnection, name: &str) -> Result<member::Model> {
    if name.trim().is_empty() {
        return Err(Error::Config {
            message: "Member name cannot be empty".to_string(),
        });
    }

    let new_member = member::ActiveModel {
        name: Set(name.trim().to_string()),
        is_active: Set(true),
        ..Default::default()
    };
    let result = new_member.insert(db).await?;
    info!(member = %result.name, id = result.id, "member created");
    Ok(result)
}

/// Activates or deactivates a member. Inactive members keep their historical
/// records but drop out of every future month's denominators.
pub async fn set_member_active(
    db: &DatabaseConnection,
    member_id: i64,
    active: bool,
) -> Result<member::Model> {
    let existing = find_member(db, member_id).await?;
    let mut active_model: member::ActiveModel = existing.into();
    active_model.is_active = Set(active);
    let result = active_model.update(db).await?;
    info!(member = %result.name, active, "member activity changed");
    Ok(result)
}

/// Records (or corrects) one member's meal counts for one day. One row per
/// (member, date): a second call for the same day overwrites the counts.
pub async fn log_daily_meals(
    db: &DatabaseConnection,
    member_id: i64,
    date: NaiveDate,
    regular_meals: i32,
    guest_meals: i32,
) -> Result<daily_meal::Model> {
    if regular_meals < 0 {
        return Err(Error::InvalidMealCount {
            count: regular_meals,
        });
    }
    if guest_meals < 0 {
        return Err(Error::InvalidMealCount { count: guest_meals });
    }

    let month = MonthKey::from_date(date);
    ensure_unlocked(db, &month).await?;
    find_member(db, member_id).await?;

    let existing = DailyMeal::find()
        .filter(daily_meal::Column::MemberId.eq(member_id))
        .filter(daily_meal::Column::Date.eq(date))
        .one(db)
        .await?;

    let result = if let Some(row) = existing {
        let mut active_model: daily_meal::ActiveModel = row.into();
        active_model.regular_meals = Set(regular_meals);
        active_model.guest_meals = Set(guest_meals);
        active_model.update(db).await?
    } else {
        let new_row = daily_meal::ActiveModel {
            member_id: Set(member_id),
            date: Set(date),
            regular_meals: Set(regular_meals),
            guest_meals: Set(guest_meals),
            month_year: Set(month.to_string()),
            ..Default::default()
        };
        new_row.insert(db).await?
    };

    Ok(result)
}

/// Records a grocery purchase and, when a buyer is named, the matching
/// auto-credit meal deposit — both in one database transaction so the
/// purchase and its derived deposit can never diverge.
pub async fn record_grocery_purchase(
    db: &DatabaseConnection,
    date: NaiveDate,
    item_name: &str,
    cost: f64,
    purchased_by: Option<i64>,
) -> Result<grocery::Model> {
    if item_name.trim().is_empty() {
        return Err(Error::Config {
            message: "Grocery item name cannot be empty".to_string(),
        });
    }
    validate_amount(cost)?;

    let month = MonthKey::from_date(date);
    ensure_unlocked(db, &month).await?;
    if let Some(buyer) = purchased_by {
        find_member(db, buyer).await?;
    }

    let txn = db.begin().await?;

    let purchase = grocery::ActiveModel {
        date: Set(date),
        item_name: Set(item_name.trim().to_string()),
        cost: Set(cost),
        month_year: Set(month.to_string()),
        purchased_by: Set(purchased_by),
        ..Default::default()
    };
    let result = purchase.insert(&txn).await?;

    if let Some(buyer) = purchased_by {
        let auto_credit = meal_deposit::ActiveModel {
            member_id: Set(buyer),
            amount: Set(cost),
            date: Set(date),
            month_year: Set(month.to_string()),
            note: Set(Some(format!("Auto-credit: {}", item_name.trim()))),
            ..Default::default()
        };
        auto_credit.insert(&txn).await?;
    }

    txn.commit().await?;
    info!(item = %result.item_name, cost, buyer = ?purchased_by, "grocery recorded");
    Ok(result)
}

/// Adds a utility bill for the month.
pub async fn add_utility_bill(
    db: &DatabaseConnection,
    kind: &str,
    cost: f64,
    month: &MonthKey,
    due_date: Option<NaiveDate>,
) -> Result<utility::Model> {
    if kind.trim().is_empty() {
        return Err(Error::Config {
            message: "Utility type cannot be empty".to_string(),
        });
    }
    validate_amount(cost)?;
    ensure_unlocked(db, month).await?;

    let bill = utility::ActiveModel {
        kind: Set(kind.trim().to_string()),
        cost: Set(cost),
        month_year: Set(month.to_string()),
        due_date: Set(due_date),
        ..Default::default()
    };
    let result = bill.insert(db).await?;
    info!(kind = %result.kind, cost, month = %month, "utility bill added");
    Ok(result)
}

/// Deletes a utility bill and its payment flags.
pub async fn delete_utility_bill(db: &DatabaseConnection, utility_id: i64) -> Result<()> {
    let bill = Utility::find_by_id(utility_id)
        .one(db)
        .await?
        .ok_or(Error::UtilityNotFound { id: utility_id })?;
    let month = MonthKey::parse(&bill.month_year)?;
    ensure_unlocked(db, &month).await?;

    let txn = db.begin().await?;
    UtilityPayment::delete_many()
        .filter(utility_payment::Column::UtilityId.eq(utility_id))
        .exec(&txn)
        .await?;
    Utility::delete_by_id(utility_id).exec(&txn).await?;
    txn.commit().await?;

    info!(kind = %bill.kind, month = %month, "utility bill deleted");
    Ok(())
}

/// Credits a manual meal deposit to a member.
pub async fn add_meal_deposit(
    db: &DatabaseConnection,
    member_id: i64,
    amount: f64,
    date: NaiveDate,
) -> Result<meal_deposit::Model> {
    validate_amount(amount)?;
    let month = MonthKey::from_date(date);
    ensure_unlocked(db, &month).await?;
    find_member(db, member_id).await?;

    let deposit = meal_deposit::ActiveModel {
        member_id: Set(member_id),
        amount: Set(amount),
        date: Set(date),
        month_year: Set(month.to_string()),
        note: Set(None),
        ..Default::default()
    };
    let result = deposit.insert(db).await?;
    info!(member_id, amount, month = %month, "meal deposit credited");
    Ok(result)
}

/// Credits a utility deposit to a member.
pub async fn add_utility_deposit(
    db: &DatabaseConnection,
    member_id: i64,
    amount: f64,
    date: NaiveDate,
) -> Result<crate::entities::utility_deposit::Model> {
    validate_amount(amount)?;
    let month = MonthKey::from_date(date);
    ensure_unlocked(db, &month).await?;
    find_member(db, member_id).await?;

    let deposit = crate::entities::utility_deposit::ActiveModel {
        member_id: Set(member_id),
        amount: Set(amount),
        date: Set(date),
        month_year: Set(month.to_string()),
        ..Default::default()
    };
    let result = deposit.insert(db).await?;
    info!(member_id, amount, month = %month, "utility deposit credited");
    Ok(result)
}
