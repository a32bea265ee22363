//! Locked month entity - Presence of a row means the month is locked.
//!
//! The lock is a signal honored by the write path; the read/report path only
//! surfaces it. No automatic transitions exist (end-of-month does not lock).

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Month lock database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "locked_months")]
pub struct Model {
    /// Unique identifier for the lock record
    #[sea_orm(primary_key)]
    pub id: i64,
    /// The locked month key (`YYYY-MM`)
    pub month_year: String,
    /// Identity of whoever locked the month
    pub locked_by: String,
}

/// `LockedMonth` has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
