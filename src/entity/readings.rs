use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One persisted temperature observation.
///
/// Rows are created once and never updated; `temperature_c` is range-checked
/// at the HTTP boundary only.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "readings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub temperature_c: f64,
    pub created_at_utc: DateTimeUtc,
    pub location: Option<String>,
    pub notes: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
