//! Rate calculation - Derives the two per-unit rates from month totals.
//!
//! Zero denominators degrade to a zero rate rather than erroring: a brand-new
//! month with no activity must still render a valid (all-zero) breakdown.

/// Amounts within one currency-minor-unit of zero are treated as settled,
/// absorbing floating-point drift in balance arithmetic.
pub const SETTLEMENT_TOLERANCE: f64 = 0.01;

/// The per-unit rates for one month.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthRates {
    /// Grocery cost per meal unit
    pub meal_rate: f64,
    /// Equal split of the month's utility cost across active members
    pub utility_per_person: f64,
}

/// Derives the month's rates from aggregate totals.
///
/// `meal_rate` is total grocery cost over total meals; `utility_per_person`
/// is total utility cost over the active member count. Either denominator at
/// zero yields a `0.0` rate.
#[must_use]
pub fn calculate_rates(
    total_grocery_cost: f64,
    total_meals: i64,
    total_utility_cost: f64,
    active_member_count: usize,
) -> MonthRates {
    #[allow(clippy::cast_precision_loss)]
    let meal_rate = if total_meals > 0 {
        total_grocery_cost / total_meals as f64
    } else {
        0.0
    };

    #[allow(clippy::cast_precision_loss)]
    let utility_per_person = if active_member_count > 0 {
        total_utility_cost / active_member_count as f64
    } else {
        0.0
    };

    MonthRates {
        meal_rate,
        utility_per_person,
    }
}
