//! Professional profile database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::ProfessionalProfile;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "professional_profiles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub user_id: Uuid,
    pub profession_id: Uuid,
    pub description: Option<String>,
    pub location: Option<String>,
    pub phone: Option<String>,
    pub instagram_link: Option<String>,
    pub facebook_link: Option<String>,
    pub extra_link: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::profession::Entity",
        from = "Column::ProfessionId",
        to = "super::profession::Column::Id"
    )]
    Profession,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::profession::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Profession.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for ProfessionalProfile {
    fn from(model: Model) -> Self {
        ProfessionalProfile {
            id: model.id,
            user_id: model.user_id,
            profession_id: model.profession_id,
            description: model.description,
            location: model.location,
            phone: model.phone,
            instagram_link: model.instagram_link,
            facebook_link: model.facebook_link,
            extra_link: model.extra_link,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
