//! Grocery entity - A single grocery (bazaar) purchase for the shared meal fund.
//!
//! When `purchased_by` is set, the mutation layer also inserts a matching
//! auto-credit meal deposit for that member; the engine consumes the resulting
//! deposit like any other and never infers it.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Grocery purchase database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "groceries")]
pub struct Model {
    /// Unique identifier for the purchase
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Day the purchase was made
    pub date: Date,
    /// What was bought
    pub item_name: String,
    /// Purchase cost
    pub cost: f64,
    /// Aggregation month key (`YYYY-MM`)
    pub month_year: String,
    /// Member who fronted the money, if any
    pub purchased_by: Option<i64>,
}

/// Defines relationships between Grocery and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// A purchase may be attributed to one member
    #[sea_orm(
        belongs_to = "super::member::Entity",
        from = "Column::PurchasedBy",
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
