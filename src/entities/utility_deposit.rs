//! Utility deposit entity - Money a member has paid toward the utility pool.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Utility deposit database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "utility_deposits")]
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
}

/// Defines relationships between UtilityDeposit and other entities
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
