//! Balance computation - The per-member financial breakdown for one month.
//!
//! Pure functions over a fetched [`MonthRecords`] snapshot. Sign convention:
//! positive balance = credit (member has paid ahead), negative = debt (member
//! owes the pool). Every downstream report depends on this convention.

use crate::core::snapshot::MonthRecords;
use chrono::NaiveDate;

/// A utility bill annotated with one member's payment status.
#[derive(Debug, Clone, PartialEq)]
pub struct BillStatus {
    /// The bill's id
    pub utility_id: i64,
    /// Bill type label
    pub kind: String,
    /// Total bill cost
    pub cost: f64,
    /// Whether this member has paid their share
    pub paid: bool,
    /// Optional payment deadline
    pub due_date: Option<NaiveDate>,
}

/// One day of non-zero meal activity, for audit display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MealLogEntry {
    /// The day
    pub date: NaiveDate,
    /// Regular meals that day
    pub regular: i32,
    /// Guest meals that day
    pub guest: i32,
}

/// The complete financial breakdown for one member and one month.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberBreakdown {
    /// The member's id
    pub member_id: i64,
    /// The member's display name
    pub name: String,
    /// Total meals (regular + guest)
    pub meals: i64,
    /// Regular meals only
    pub regular_meals: i64,
    /// Guest meals only
    pub guest_meals: i64,
    /// Count of distinct days with at least one meal logged
    pub active_days: usize,
    /// meals × meal rate
    pub meal_cost: f64,
    /// The member's equal share of the month's utility cost
    pub utility_cost: f64,
    /// Sum of the member's meal deposits
    pub meal_deposits: f64,
    /// Sum of the member's utility deposits
    pub utility_deposits: f64,
    /// meal deposits − meal cost
    pub meal_balance: f64,
    /// utility deposits − utility share
    pub utility_balance: f64,
    /// meal balance + utility balance
    pub total_balance: f64,
    /// Every bill this month, annotated with this member's paid flag
    pub bill_details: Vec<BillStatus>,
    /// Chronological non-zero meal activity
    pub meal_log: Vec<MealLogEntry>,
}

/// Computes the per-member breakdown for every active member in the snapshot.
///
/// Members with no records at all get a valid all-zero row (minus their
/// utility share, if any bills exist); missing data never errors.
#[must_use]
pub fn compute_breakdown(records: &MonthRecords) -> Vec<MemberBreakdown> {
    let rates = records.rates();

    records
        .members
        .iter()
        .map(|m| {
            let daily: Vec<_> = records
                .daily_meals
                .iter()
                .filter(|r| r.member_id == m.id)
                .collect();

            let regular_meals: i64 = daily.iter().map(|r| i64::from(r.regular_meals)).sum();
            let guest_meals: i64 = daily.iter().map(|r| i64::from(r.guest_meals)).sum();
            let meals = regular_meals + guest_meals;
            let active_days = daily
                .iter()
                .filter(|r| r.regular_meals + r.guest_meals > 0)
                .count();

            let meal_deposits: f64 = records
                .meal_deposits
                .iter()
                .filter(|d| d.member_id == m.id)
                .map(|d| d.amount)
                .sum();
            let utility_deposits: f64 = records
                .utility_deposits
                .iter()
                .filter(|d| d.member_id == m.id)
                .map(|d| d.amount)
                .sum();

            #[allow(clippy::cast_precision_loss)]
            let meal_cost = meals as f64 * rates.meal_rate;
            let meal_balance = meal_deposits - meal_cost;
            let utility_balance = utility_deposits - rates.utility_per_person;

            let bill_details = records
                .utilities
                .iter()
                .map(|bill| BillStatus {
                    utility_id: bill.id,
                    kind: bill.kind.clone(),
                    cost: bill.cost,
                    paid: records.paid.contains(&(bill.id, m.id)),
                    due_date: bill.due_date,
                })
                .collect();

            let meal_log = daily
                .iter()
                .filter(|r| r.regular_meals + r.guest_meals > 0)
                .map(|r| MealLogEntry {
                    date: r.date,
                    regular: r.regular_meals,
                    guest: r.guest_meals,
                })
                .collect();

            MemberBreakdown {
                member_id: m.id,
                name: m.name.clone(),
                meals,
                regular_meals,
                guest_meals,
                active_days,
                meal_cost,
                utility_cost: rates.utility_per_person,
                meal_deposits,
                utility_deposits,
                meal_balance,
                utility_balance,
                total_balance: meal_balance + utility_balance,
                bill_details,
                meal_log,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::core::month::MonthKey;
    use crate::entities::{daily_meal, grocery, meal_deposit, member, utility, utility_deposit};
    use std::collections::HashSet;

    fn month() -> MonthKey {
        MonthKey::parse("2025-03").unwrap()
    }

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, day).unwrap()
    }

    fn test_member(id: i64, name: &str) -> member::Model {
        member::Model {
            id,
            name: name.to_string(),
            is_active: true,
        }
    }

    fn meal_row(id: i64, member_id: i64, day: u32, regular: i32, guest: i32) -> daily_meal::Model {
        daily_meal::Model {
            id,
            member_id,
            date: date(day),
            regular_meals: regular,
            guest_meals: guest,
            month_year: month().to_string(),
        }
    }

    fn grocery_row(id: i64, cost: f64) -> grocery::Model {
        grocery::Model {
            id,
            date: date(1),
            item_name: "Bazaar".to_string(),
            cost,
            month_year: month().to_string(),
            purchased_by: None,
        }
    }

    fn meal_dep(id: i64, member_id: i64, amount: f64) -> meal_deposit::Model {
        meal_deposit::Model {
            id,
            member_id,
            amount,
            date: date(2),
            month_year: month().to_string(),
            note: None,
        }
    }

    fn util_dep(id: i64, member_id: i64, amount: f64) -> utility_deposit::Model {
        utility_deposit::Model {
            id,
            member_id,
            amount,
            date: date(2),
            month_year: month().to_string(),
        }
    }

    fn bill(id: i64, kind: &str, cost: f64) -> utility::Model {
        utility::Model {
            id,
            kind: kind.to_string(),
            cost,
            month_year: month().to_string(),
            due_date: Some(date(25)),
        }
    }

    fn empty_records() -> MonthRecords {
        MonthRecords {
            month: month(),
            members: vec![],
            daily_meals: vec![],
            groceries: vec![],
            utilities: vec![],
            meal_deposits: vec![],
            utility_deposits: vec![],
            paid: HashSet::new(),
            locked: false,
        }
    }

    /// The worked scenario: groceries 3000, meals A=20 B=15 C=15, deposits
    /// 1500/900/600 → balances +300 / 0 / −300.
    #[test]
    fn test_three_member_meal_scenario() {
        let mut records = empty_records();
        records.members = vec![
            test_member(1, "A"),
            test_member(2, "B"),
            test_member(3, "C"),
        ];
        records.daily_meals = vec![
            meal_row(1, 1, 1, 20, 0),
            meal_row(2, 2, 1, 15, 0),
            meal_row(3, 3, 1, 15, 0),
        ];
        records.groceries = vec![grocery_row(1, 3000.0)];
        records.meal_deposits = vec![
            meal_dep(1, 1, 1500.0),
            meal_dep(2, 2, 900.0),
            meal_dep(3, 3, 600.0),
        ];

        assert_eq!(records.rates().meal_rate, 60.0);

        let breakdown = compute_breakdown(&records);
        assert_eq!(breakdown.len(), 3);
        assert_eq!(breakdown[0].meal_balance, 300.0);
        assert_eq!(breakdown[1].meal_balance, 0.0);
        assert_eq!(breakdown[2].meal_balance, -300.0);
        assert_eq!(breakdown[2].total_balance, -300.0);
    }

    /// A 900 bill across 3 members → 300 per person; no deposits → −300.
    #[test]
    fn test_utility_share_scenario() {
        let mut records = empty_records();
        records.members = vec![
            test_member(1, "A"),
            test_member(2, "B"),
            test_member(3, "C"),
        ];
        records.utilities = vec![bill(1, "Electricity", 900.0)];
        records.utility_deposits = vec![util_dep(1, 1, 300.0)];

        let breakdown = compute_breakdown(&records);
        assert_eq!(breakdown[0].utility_cost, 300.0);
        assert_eq!(breakdown[0].utility_balance, 0.0);
        assert_eq!(breakdown[1].utility_balance, -300.0);
        assert_eq!(breakdown[2].utility_balance, -300.0);
    }

    /// Conservation: Σ meal balances = Σ meal deposits − total groceries, and
    /// symmetrically for utilities.
    #[test]
    fn test_conservation() {
        let mut records = empty_records();
        records.members = vec![
            test_member(1, "A"),
            test_member(2, "B"),
            test_member(3, "C"),
        ];
        records.daily_meals = vec![
            meal_row(1, 1, 3, 17, 2),
            meal_row(2, 2, 4, 11, 0),
            meal_row(3, 3, 5, 9, 3),
        ];
        records.groceries = vec![grocery_row(1, 2741.50), grocery_row(2, 333.25)];
        records.meal_deposits = vec![meal_dep(1, 1, 1200.0), meal_dep(2, 2, 750.50)];
        records.utilities = vec![bill(1, "Electricity", 910.33), bill(2, "WiFi", 1200.0)];
        records.utility_deposits = vec![util_dep(1, 1, 700.0), util_dep(2, 3, 703.44)];

        let breakdown = compute_breakdown(&records);

        let meal_sum: f64 = breakdown.iter().map(|b| b.meal_balance).sum();
        let expected_meal = 1200.0 + 750.50 - records.total_groceries();
        assert!((meal_sum - expected_meal).abs() < 1e-6);

        let util_sum: f64 = breakdown.iter().map(|b| b.utility_balance).sum();
        let expected_util = 700.0 + 703.44 - records.total_utilities();
        assert!((util_sum - expected_util).abs() < 1e-6);
    }

    /// Zero meals: rate 0, cost 0 per member, no division-by-zero anywhere.
    #[test]
    fn test_zero_rate_safety() {
        let mut records = empty_records();
        records.members = vec![test_member(1, "A"), test_member(2, "B")];
        records.groceries = vec![grocery_row(1, 500.0)];

        let breakdown = compute_breakdown(&records);
        for b in &breakdown {
            assert_eq!(b.meal_cost, 0.0);
            assert_eq!(b.meals, 0);
        }
    }

    #[test]
    fn test_active_days_counts_nonzero_days_only() {
        let mut records = empty_records();
        records.members = vec![test_member(1, "A")];
        records.daily_meals = vec![
            meal_row(1, 1, 1, 2, 0),
            meal_row(2, 1, 2, 0, 0),
            meal_row(3, 1, 3, 0, 1),
        ];

        let breakdown = compute_breakdown(&records);
        assert_eq!(breakdown[0].active_days, 2);
        assert_eq!(breakdown[0].meals, 3);
        assert_eq!(breakdown[0].meal_log.len(), 2);
        assert_eq!(breakdown[0].meal_log[0].date, date(1));
        assert_eq!(breakdown[0].meal_log[1].guest, 1);
    }

    #[test]
    fn test_bill_details_default_unpaid() {
        let mut records = empty_records();
        records.members = vec![test_member(1, "A"), test_member(2, "B")];
        records.utilities = vec![bill(7, "Gas", 400.0), bill(8, "WiFi", 1000.0)];
        records.paid.insert((7, 1));

        let breakdown = compute_breakdown(&records);
        let a = &breakdown[0];
        assert!(a.bill_details[0].paid);
        assert!(!a.bill_details[1].paid);

        let b = &breakdown[1];
        assert!(!b.bill_details[0].paid);
        assert!(!b.bill_details[1].paid);
    }

    #[test]
    fn test_empty_month_renders_all_zero() {
        let mut records = empty_records();
        records.members = vec![test_member(1, "A")];

        let breakdown = compute_breakdown(&records);
        let b = &breakdown[0];
        assert_eq!(b.total_balance, 0.0);
        assert_eq!(b.active_days, 0);
        assert!(b.bill_details.is_empty());
        assert!(b.meal_log.is_empty());
    }
}
