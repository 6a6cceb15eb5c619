//! SeaORM entity models
//!
//! Database entities for the hadith quiz

mod hadith;
mod companion;
mod source;
mod hadith_companion;
mod hadith_source;

pub use hadith::{
    Entity as HadithEntity,
    Model as Hadith,
    ActiveModel as HadithActiveModel,
    Column as HadithColumn,
};

pub use companion::{
    Entity as CompanionEntity,
    Model as Companion,
    ActiveModel as CompanionActiveModel,
    Column as CompanionColumn,
};

pub use source::{
    Entity as SourceEntity,
    Model as Source,
    ActiveModel as SourceActiveModel,
    Column as SourceColumn,
};

pub use hadith_companion::{
    Entity as HadithCompanionEntity,
    ActiveModel as HadithCompanionActiveModel,
};

pub use hadith_source::{
    Entity as HadithSourceEntity,
    ActiveModel as HadithSourceActiveModel,
};
