//! Source entity (collection vocabulary)

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "sources")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(column_type = "Text", unique)]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::hadith_source::Entity")]
    HadithSources,
}

impl Related<super::hadith::Entity> for Entity {
    fn to() -> RelationDef {
        super::hadith_source::Relation::Hadith.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::hadith_source::Relation::Source.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
