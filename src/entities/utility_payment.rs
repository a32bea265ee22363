//! Utility payment entity - Per-(bill, member) paid flag.
//!
//! Keyed logically by (`utility_id`, `member_id`); absence of a row means the
//! member has not paid their share of that bill.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Utility payment flag database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "utility_payments")]
pub struct Model {
    /// Unique identifier for the flag row
    #[sea_orm(primary_key)]
    pub id: i64,
    /// The bill this flag refers to
    pub utility_id: i64,
    /// The member this flag refers to
    pub member_id: i64,
    /// Whether this member has paid their share of the bill
    pub paid: bool,
}

/// Defines relationships between UtilityPayment and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each flag belongs to one bill
    #[sea_orm(
        belongs_to = "super::utility::Entity",
        from = "Column::UtilityId",
        to = "super::utility::Column::Id"
    )]
    Utility,
    /// Each flag belongs to one member
    #[sea_orm(
        belongs_to = "super::member::Entity",
        from = "Column::MemberId",
        to = "super::member::Column::Id"
    )]
    Member,
}

impl Related<super::utility::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Utility.def()
    }
}

impl Related<super::member::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Member.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
