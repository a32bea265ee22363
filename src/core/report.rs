//! Settlement report generation - The two literal text artifacts.
//!
//! Both documents are pure string formatting over a precomputed breakdown;
//! they never recompute balances. The exact templates matter: the output is
//! user-facing and copy-pasted into group chats verbatim.

use crate::core::{
    balance::MemberBreakdown, debtor::Debtor, month::MonthKey, rates::SETTLEMENT_TOLERANCE,
};
use std::fmt::Write;

/// Deployment branding stamped into the reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportStyle {
    /// App name in headers and footers
    pub app_name: String,
    /// Currency unit suffix
    pub currency: String,
}

impl Default for ReportStyle {
    fn default() -> Self {
        Self {
            app_name: "MessMate".to_string(),
            currency: "Tk".to_string(),
        }
    }
}

const RULE: &str = "---------------------------";

/// The per-category status label: `Owes` below the tolerance, `Credit` above
/// it, `Settled` within it.
#[must_use]
pub fn status_label(balance: f64) -> &'static str {
    if balance < -SETTLEMENT_TOLERANCE {
        "Owes"
    } else if balance > SETTLEMENT_TOLERANCE {
        "Credit"
    } else {
        "Settled"
    }
}

/// Renders the full monthly summary.
///
/// One block per member (name, meal totals, active days, rate, per-category
/// balances with status labels, the bill list with paid/pending markers, and
/// a final combined status line), blocks separated by a fixed-width dashed
/// rule, closed by a fixed footer.
#[must_use]
pub fn format_month_summary(
    month: &MonthKey,
    breakdown: &[MemberBreakdown],
    meal_rate: f64,
    style: &ReportStyle,
) -> String {
    let unit = &style.currency;

    let blocks: Vec<String> = breakdown
        .iter()
        .map(|b| {
            let bill_lines = if b.bill_details.is_empty() {
                "  (No bills this month)".to_string()
            } else {
                b.bill_details
                    .iter()
                    .map(|bill| {
                        format!(
                            "  - {} ({:.0} {unit}): {}",
                            bill.kind,
                            bill.cost,
                            if bill.paid { "✅ Paid" } else { "⏳ Pending" }
                        )
                    })
                    .collect::<Vec<_>>()
                    .join("\n")
            };

            // write! is infallible when writing to String
            #[allow(clippy::unwrap_used)]
            {
                let mut block = String::new();
                writeln!(block, "{}", b.name).unwrap();
                writeln!(
                    block,
                    "Meals: {} (incl. {} Guest) | Active Days: {} | Rate: {meal_rate:.0} {unit}",
                    b.meals, b.guest_meals, b.active_days
                )
                .unwrap();
                writeln!(
                    block,
                    "Meal Balance: {:.2} {unit} ({})",
                    b.meal_balance,
                    status_label(b.meal_balance)
                )
                .unwrap();
                writeln!(block).unwrap();
                writeln!(block, "Utilities (Individual Bills):").unwrap();
                writeln!(block, "{bill_lines}").unwrap();
                writeln!(
                    block,
                    "Utility Balance: {:.2} {unit} ({})",
                    b.utility_balance,
                    status_label(b.utility_balance)
                )
                .unwrap();
                writeln!(block, "{RULE}").unwrap();
                write!(
                    block,
                    "Final Status: {} {:.2} {unit}",
                    status_label(b.total_balance),
                    b.total_balance.abs()
                )
                .unwrap();
                block
            }
        })
        .collect();

    [
        format!("--- {} Summary ---", month.label_long()),
        blocks.join(&format!("\n{RULE}\n")),
        RULE.to_string(),
        "Please settle your dues!".to_string(),
        format!("Generated by {}", style.app_name),
    ]
    .join("\n")
}

/// Renders the due-list reminder: one line per debtor, preceded by a header
/// naming the month and followed by a fixed attribution footer.
#[must_use]
pub fn format_due_list(month: &MonthKey, debtors: &[Debtor], style: &ReportStyle) -> String {
    let lines: Vec<String> = debtors
        .iter()
        .map(|d| {
            format!(
                "⚠️ {} Payment Reminder: {} owes {:.2} {}. Please settle your dues!",
                style.app_name,
                d.name,
                d.balance.abs(),
                style.currency
            )
        })
        .collect();

    format!(
        "--- {} Due List ---\n{}\n---\nGenerated by {}",
        month.label_short(),
        lines.join("\n"),
        style.app_name
    )
}
