//! Database configuration module for `MessMate`.
//!
//! This module handles `SQLite` database connection and table creation using `SeaORM`.
//! It provides functions for establishing database connections and creating all necessary
//! tables based on the entity definitions. The module uses `SeaORM`'s
//! `Schema::create_table_from_entity` method to generate SQL statements from the entity
//! models, so the database schema always matches the Rust struct definitions without
//! requiring manual SQL.

use crate::entities::{
    DailyMeal, Grocery, LockedMonth, MealDeposit, Member, Utility, UtilityDeposit, UtilityPayment,
};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};

/// Gets the database URL from environment variable or returns default `SQLite` path.
///
/// This function looks for `DATABASE_URL` in the environment and falls back to
/// a default local `SQLite` file if not found.
pub fn get_database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://data/messmate.sqlite".to_string())
}

/// Establishes a connection to the `SQLite` database. An explicit URL (from
/// config.toml) wins; otherwise the `DATABASE_URL` environment variable is
/// used, falling back to a default local `SQLite` file.
pub async fn create_connection(url_override: Option<&str>) -> Result<DatabaseConnection> {
    let url = url_override.map_or_else(get_database_url, ToString::to_string);
    Database::connect(url).await.map_err(Into::into)
}

/// Creates all necessary database tables using `SeaORM`'s schema generation from
/// entity definitions.
///
/// Creates tables for members, daily meals, groceries, utilities, the two deposit
/// ledgers, per-bill payment flags, and month locks.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let member_table = schema.create_table_from_entity(Member);
    let daily_meal_table = schema.create_table_from_entity(DailyMeal);
    let grocery_table = schema.create_table_from_entity(Grocery);
    let utility_table = schema.create_table_from_entity(Utility);
    let meal_deposit_table = schema.create_table_from_entity(MealDeposit);
    let utility_deposit_table = schema.create_table_from_entity(UtilityDeposit);
    let utility_payment_table = schema.create_table_from_entity(UtilityPayment);
    let locked_month_table = schema.create_table_from_entity(LockedMonth);

    db.execute(builder.build(&member_table)).await?;
    db.execute(builder.build(&daily_meal_table)).await?;
    db.execute(builder.build(&grocery_table)).await?;
    db.execute(builder.build(&utility_table)).await?;
    db.execute(builder.build(&meal_deposit_table)).await?;
    db.execute(builder.build(&utility_deposit_table)).await?;
    db.execute(builder.build(&utility_payment_table)).await?;
    db.execute(builder.build(&locked_month_table)).await?;

    Ok(())
}
