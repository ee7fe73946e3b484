//! Profession database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::Profession;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "professions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::professional_profile::Entity")]
    ProfessionalProfile,
}

impl Related<super::professional_profile::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProfessionalProfile.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Profession {
    fn from(model: Model) -> Self {
        Profession {
            id: model.id,
            name: model.name,
        }
    }
}
