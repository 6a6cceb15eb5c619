//! Hadith entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "hadiths")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(column_type = "Text")]
    pub text: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::hadith_companion::Entity")]
    HadithCompanions,

    #[sea_orm(has_many = "super::hadith_source::Entity")]
    HadithSources,
}

impl Related<super::companion::Entity> for Entity {
    fn to() -> RelationDef {
        super::hadith_companion::Relation::Companion.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::hadith_companion::Relation::Hadith.def().rev())
    }
}

impl Related<super::source::Entity> for Entity {
    fn to() -> RelationDef {
        super::hadith_source::Relation::Source.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::hadith_source::Relation::Hadith.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
