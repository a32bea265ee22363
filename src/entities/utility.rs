//! Utility entity - A monthly utility bill (electricity, gas, wifi, ...).
//!
//! Bills are split equally across active members; per-member payment status
//! lives in the `utility_payments` table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Utility bill database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "utilities")]
pub struct Model {
    /// Unique identifier for the bill
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Bill type label (e.g. "Electricity", "WiFi")
    #[sea_orm(column_name = "type")]
    pub kind: String,
    /// Total bill cost for the month
    pub cost: f64,
    /// Aggregation month key (`YYYY-MM`)
    pub month_year: String,
    /// Optional payment deadline
    pub due_date: Option<Date>,
}

/// Defines relationships between Utility and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One bill has many per-member payment flags
    #[sea_orm(has_many = "super::utility_payment::Entity")]
    UtilityPayments,
}

impl Related<super::utility_payment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UtilityPayments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
