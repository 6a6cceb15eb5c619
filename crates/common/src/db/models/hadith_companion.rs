//! Hadith <-> companion link table

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "hadith_companions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub hadith_id: i32,

    #[sea_orm(primary_key, auto_increment = false)]
    pub companion_id: i32,
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
        belongs_to = "super::companion::Entity",
        from = "Column::CompanionId",
        to = "super::companion::Column::Id",
        on_delete = "Cascade"
    )]
    Companion,
}

impl Related<super::hadith::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Hadith.def()
    }
}

impl Related<super::companion::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Companion.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
