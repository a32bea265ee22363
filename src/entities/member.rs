//! Member entity - Represents a household member on the roster.
//!
//! Only active members participate in the current month's computation;
//! inactive members are retained for historical integrity but excluded from
//! per-month denominators.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Member database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "members")]
pub struct Model {
    /// Unique identifier for the member
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Display name of the member
    pub name: String,
    /// Whether the member currently shares in the month's costs
    pub is_active: bool,
}

/// Defines relationships between Member and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One member has many daily meal records
    #[sea_orm(has_many = "super::daily_meal::Entity")]
    DailyMeals,
    /// One member has many meal deposits
    #[sea_orm(has_many = "super::meal_deposit::Entity")]
    MealDeposits,
    /// One member has many utility deposits
    #[sea_orm(has_many = "super::utility_deposit::Entity")]
    UtilityDeposits,
    /// One member has many per-bill payment flags
    #[sea_orm(has_many = "super::utility_payment::Entity")]
    UtilityPayments,
}

impl Related<super::daily_meal::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DailyMeals.def()
    }
}

impl Related<super::meal_deposit::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MealDeposits.def()
    }
}

impl Related<super::utility_deposit::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UtilityDeposits.def()
    }
}

impl Related<super::utility_payment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UtilityPayments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
