//! Hadith <-> source link table

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "hadith_sources")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub hadith_id: i32,

    #[sea_orm(primary_key, auto_increment = false)]
    pub source_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::hadith::Entity",
        from = "Column::HadithId",
        to = "super::hadith::Column::Id",
        on_delete = "Cascade"
    )]
    Hadith,

    #[sea_orm(
        belongs_to = "super::source::Entity",
        from = "Column::SourceId",
        to = "super::source::Column::Id",
        on_delete = "Cascade"
    )]
    Source,
}

impl Related<super::hadith::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Hadith.def()
    }
}

impl Related<super::source::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Source.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
