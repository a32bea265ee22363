//! Settlement engine - One-call recomputation of a month's full settlement.
//!
//! `recompute` is the pure entry point the presentation layers consume: one
//! snapshot fetch, then pure computation. It has no side effects, so a caller
//! may discard, retry, or abandon a computation freely. Live refresh is
//! decoupled from transport: any change-notification channel that can deliver
//! a month key can drive [`run_refresh_loop`].

use crate::{
    core::{
        balance::{MemberBreakdown, compute_breakdown},
        debtor::{Debtor, extract_debtors},
        month::MonthKey,
        payments::{PaymentMatrix, build_payment_matrix},
        report::{ReportStyle, format_due_list, format_month_summary},
        snapshot::{MonthStats, compute_month_stats, fetch_month_records},
    },
    errors::Result,
};
use sea_orm::DatabaseConnection;
use tokio::sync::mpsc;
use tracing::{info, warn};

/// Everything the presentation layers need for one month, computed from one
/// snapshot.
#[derive(Debug, Clone)]
pub struct MonthSettlement {
    /// The month computed
    pub month: MonthKey,
    /// Aggregate dashboard figures
    pub stats: MonthStats,
    /// Per-member breakdown
    pub breakdown: Vec<MemberBreakdown>,
    /// Members who owe money, largest debt first
    pub debtors: Vec<Debtor>,
    /// The per-bill, per-member paid grid
    pub matrix: PaymentMatrix,
    /// The full monthly summary text
    pub summary_text: String,
    /// The due-list reminder text
    pub due_list_text: String,
    /// Whether the month is locked
    pub locked: bool,
}

/// Recomputes the complete settlement for one month.
///
/// # Errors
/// Fails if the snapshot fetch fails (all-or-nothing); the computation itself
/// cannot fail — empty months yield valid all-zero settlements.
pub async fn recompute(
    db: &DatabaseConnection,
    month: &MonthKey,
    style: &ReportStyle,
) -> Result<MonthSettlement> {
    let records = fetch_month_records(db, month).await?;

    let stats = compute_month_stats(&records);
    let breakdown = compute_breakdown(&records);
    let debtors = extract_debtors(&breakdown);
    let matrix = build_payment_matrix(&records);
    let summary_text = format_month_summary(month, &breakdown, stats.meal_rate, style);
    let due_list_text = format_due_list(month, &debtors, style);

    Ok(MonthSettlement {
        month: *month,
        stats,
        breakdown,
        debtors,
        matrix,
        summary_text,
        due_list_text,
        locked: records.locked,
    })
}

/// Recomputes on every change event and forwards the fresh settlement.
///
/// The loop ends when the event channel closes or every receiver of the
/// output channel is dropped. A failed recomputation is logged and skipped;
/// the next event triggers a fresh attempt.
pub async fn run_refresh_loop(
    db: &DatabaseConnection,
    mut events: mpsc::Receiver<MonthKey>,
    style: ReportStyle,
    output: mpsc::Sender<MonthSettlement>,
) {
    while let Some(month) = events.recv().await {
        match recompute(db, &month, &style).await {
            Ok(settlement) => {
                info!(month = %month, "settlement recomputed");
                if output.send(settlement).await.is_err() {
                    break;
                }
            }
            Err(e) => warn!(month = %month, error = %e, "recompute failed"),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::core::{lock, payments, records};
    use crate::test_utils::{test_date as date, *};

    /// The worked scenario end to end: groceries 3000, meals 20/15/15,
    /// deposits 1500/900/600.
    #[tokio::test]
    async fn test_recompute_full_scenario() -> Result<()> {
        let (db, members) = setup_with_members().await?;
        let month = test_month();
        let (a, b, c) = (&members[0], &members[1], &members[2]);

        records::record_grocery_purchase(&db, date(1), "Bazaar", 3000.0, None).await?;
        records::log_daily_meals(&db, a.id, date(1), 20, 0).await?;
        records::log_daily_meals(&db, b.id, date(1), 15, 0).await?;
        records::log_daily_meals(&db, c.id, date(1), 15, 0).await?;
        records::add_meal_deposit(&db, a.id, 1500.0, date(2)).await?;
        records::add_meal_deposit(&db, b.id, 900.0, date(2)).await?;
        records::add_meal_deposit(&db, c.id, 600.0, date(2)).await?;

        let settlement = recompute(&db, &month, &ReportStyle::default()).await?;

        assert_eq!(settlement.stats.meal_rate, 60.0);
        assert_eq!(settlement.stats.total_meals, 50);

        let asha = &settlement.breakdown[0];
        assert_eq!(asha.meal_balance, 300.0);
        let chitra = &settlement.breakdown[2];
        assert_eq!(chitra.meal_balance, -300.0);

        assert_eq!(settlement.debtors.len(), 1);
        assert_eq!(settlement.debtors[0].name, "Chitra");
        assert_eq!(settlement.debtors[0].balance, -300.0);

        assert!(settlement.summary_text.contains("--- March 2025 Summary ---"));
        assert!(settlement.summary_text.contains("Rate: 60 Tk"));
        assert!(
            settlement.due_list_text.contains(
                "⚠️ MessMate Payment Reminder: Chitra owes 300.00 Tk. Please settle your dues!"
            )
        );
        assert!(!settlement.locked);
        Ok(())
    }

    #[tokio::test]
    async fn test_recompute_empty_month_renders() -> Result<()> {
        let db = setup_test_db().await?;
        let settlement = recompute(&db, &test_month(), &ReportStyle::default()).await?;

        assert!(settlement.breakdown.is_empty());
        assert!(settlement.debtors.is_empty());
        assert_eq!(settlement.stats.total_expenses, 0.0);
        assert!(settlement.summary_text.starts_with("--- March 2025 Summary ---"));
        Ok(())
    }

    #[tokio::test]
    async fn test_recompute_locked_month_still_works() -> Result<()> {
        let db = setup_test_db().await?;
        let month = test_month();
        let member = create_test_member(&db, "Asha").await?;
        records::log_daily_meals(&db, member.id, date(3), 2, 0).await?;
        lock::lock_month(&db, &month, "admin@example.com").await?;

        let settlement = recompute(&db, &month, &ReportStyle::default()).await?;
        assert!(settlement.locked);
        assert_eq!(settlement.breakdown[0].meals, 2);
        Ok(())
    }

    #[tokio::test]
    async fn test_recompute_is_repeatable() -> Result<()> {
        let db = setup_test_db().await?;
        let month = test_month();
        let member = create_test_member(&db, "Asha").await?;
        let bill = create_test_utility(&db, "Electricity", 900.0).await?;
        payments::toggle_utility_payment(&db, bill.id, member.id).await?;

        let first = recompute(&db, &month, &ReportStyle::default()).await?;
        let second = recompute(&db, &month, &ReportStyle::default()).await?;
        assert_eq!(first.summary_text, second.summary_text);
        assert_eq!(first.breakdown, second.breakdown);
        Ok(())
    }

    #[tokio::test]
    async fn test_refresh_loop_recomputes_on_event() -> Result<()> {
        let db = setup_test_db().await?;
        let month = test_month();
        create_test_member(&db, "Asha").await?;

        let (event_tx, event_rx) = mpsc::channel(4);
        let (out_tx, mut out_rx) = mpsc::channel(4);

        event_tx.send(month).await.unwrap();
        drop(event_tx); // close the channel so the loop ends

        run_refresh_loop(&db, event_rx, ReportStyle::default(), out_tx).await;

        let settlement = out_rx.recv().await.unwrap();
        assert_eq!(settlement.month, month);
        assert_eq!(settlement.breakdown.len(), 1);
        assert!(out_rx.recv().await.is_none());
        Ok(())
    }
}
