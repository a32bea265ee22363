//! Prints the current month's settlement report to stdout.

use dotenvy::dotenv;
use messmate::{
    config,
    core::{engine, month::MonthKey},
    errors::Result,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file (non-fatal, env vars can be set externally)
    dotenv().ok();

    // 3. Load application settings
    let settings = config::settings::load_default_settings()?;
    let style = settings.report_style();

    // 4. Initialize database
    let db = config::database::create_connection(settings.database_url.as_deref())
        .await
        .inspect(|_| info!("Database connection established."))
        .inspect_err(|e| error!("Failed to connect to database: {}", e))?;
    config::database::create_tables(&db).await?;

    // 5. Compute and print the current month's settlement
    let month = MonthKey::current();
    let settlement = engine::recompute(&db, &month, &style)
        .await
        .inspect_err(|e| error!("Failed to compute settlement for {}: {}", month, e))?;

    if settlement.locked {
        info!("{} is locked - read-only archive.", month.label_long());
    }
    println!("{}", settlement.summary_text);
    if !settlement.debtors.is_empty() {
        println!();
        println!("{}", settlement.due_list_text);
    }

    Ok(())
}
