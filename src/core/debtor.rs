//! Debtor extraction - The subset of members who owe money, largest debt first.
//!
//! The ascending order (most negative balance first) is a design contract:
//! reminder lists must surface the largest debts first.

use crate::core::{balance::MemberBreakdown, rates::SETTLEMENT_TOLERANCE};

/// A member who owes money for the month.
#[derive(Debug, Clone, PartialEq)]
pub struct Debtor {
    /// The member's id
    pub member_id: i64,
    /// The member's display name
    pub name: String,
    /// Combined balance, always below the settlement tolerance (negative)
    pub balance: f64,
}

/// Filters the breakdown to members with `total_balance < -0.01`, sorted
/// ascending so the largest debtor comes first. Members at zero (within
/// tolerance) or in credit are excluded.
#[must_use]
pub fn extract_debtors(breakdown: &[MemberBreakdown]) -> Vec<Debtor> {
    let mut debtors: Vec<Debtor> = breakdown
        .iter()
        .filter(|b| b.total_balance < -SETTLEMENT_TOLERANCE)
        .map(|b| Debtor {
            member_id: b.member_id,
            name: b.name.clone(),
            balance: b.total_balance,
        })
        .collect();

    debtors.sort_by(|a, b| a.balance.total_cmp(&b.balance));
    debtors
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]
    use super::*;

    fn row(id: i64, name: &str, total_balance: f64) -> MemberBreakdown {
        MemberBreakdown {
            member_id: id,
            name: name.to_string(),
            meals: 0,
            regular_meals: 0,
            guest_meals: 0,
            active_days: 0,
            meal_cost: 0.0,
            utility_cost: 0.0,
            meal_deposits: 0.0,
            utility_deposits: 0.0,
            meal_balance: total_balance,
            utility_balance: 0.0,
            total_balance,
            bill_details: vec![],
            meal_log: vec![],
        }
    }

    #[test]
    fn test_largest_debtor_first() {
        let breakdown = vec![
            row(1, "A", -120.0),
            row(2, "B", 50.0),
            row(3, "C", -700.25),
            row(4, "D", -0.5),
        ];

        let debtors = extract_debtors(&breakdown);
        assert_eq!(debtors.len(), 3);
        assert_eq!(debtors[0].name, "C");
        assert_eq!(debtors[1].name, "A");
        assert_eq!(debtors[2].name, "D");
        for pair in debtors.windows(2) {
            assert!(pair[0].balance <= pair[1].balance);
        }
    }

    #[test]
    fn test_tolerance_excludes_near_zero() {
        let breakdown = vec![row(1, "A", -0.01), row(2, "B", -0.009), row(3, "C", 0.0)];
        assert!(extract_debtors(&breakdown).is_empty());

        let breakdown = vec![row(1, "A", -0.011)];
        assert_eq!(extract_debtors(&breakdown).len(), 1);
    }

    #[test]
    fn test_credit_members_excluded() {
        let breakdown = vec![row(1, "A", 300.0), row(2, "B", 0.02)];
        assert!(extract_debtors(&breakdown).is_empty());
    }

    #[test]
    fn test_no_element_at_or_above_tolerance() {
        let breakdown = vec![row(1, "A", -5.0), row(2, "B", -0.02), row(3, "C", -0.005)];
        let debtors = extract_debtors(&breakdown);
        assert!(debtors.iter().all(|d| d.balance < -SETTLEMENT_TOLERANCE));
    }
}
