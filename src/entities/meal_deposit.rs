//! Meal deposit entity - Money a member has paid into the shared meal fund.
//!
//! Deposits are either credited manually by the admin or auto-credited when a
//! grocery purchase names a buyer (`note` starts with `"Auto-credit:"`).

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Meal deposit database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "meal_deposits")]
pub struct Model {
    /// Unique identifier for the deposit
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Member the deposit is credited to
    pub member_id: i64,
    /// Deposited amount
    pub amount: f64,
    /// Day the deposit was made
    pub date: Date,
    /// Aggregation month key (`YYYY-MM`)
    pub month_year: String,
    /// Optional free-text note (set for auto-credits)
    pub note: Option<String>,
}

/// Defines relationships between MealDeposit and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each deposit belongs to one member
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
