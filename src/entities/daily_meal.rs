//! Daily meal entity - One row per (member, date) holding that day's meal counts.
//!
//! Absence of a row means zero meals. Counts are non-negative integers; the
//! `month_year` key (`YYYY-MM`) is the unit of aggregation and is derived from
//! `date` at write time.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Daily meal database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "daily_meals")]
pub struct Model {
    /// Unique identifier for the record
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Member this record belongs to
    pub member_id: i64,
    /// Calendar day the meals were taken
    pub date: Date,
    /// Regular meals eaten by the member that day
    pub regular_meals: i32,
    /// Extra meals served to the member's guests that day
    pub guest_meals: i32,
    /// Aggregation month key (`YYYY-MM`)
    pub month_year: String,
}

/// Defines relationships between DailyMeal and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each daily meal record belongs to one member
    #[sea_orm(
        belongs_to = "super::member::Entity",
        from = "Column::MemberId",
        to = "super::member::Column::Id"
    )]
    Member,
}

impl Related<super::member::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Member.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
