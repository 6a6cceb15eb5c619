//! Companion entity (narrator vocabulary)

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "companions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(column_type = "Text", unique)]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::hadith_companion::Entity")]
    HadithCompanions,
}

impl Related<super::hadith::Entity> for Entity {
    fn to() -> RelationDef {
        super::hadith_companion::Relation::Hadith.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::hadith_companion::Relation::Companion.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
