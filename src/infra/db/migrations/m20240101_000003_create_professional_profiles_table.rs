//! Migration: Create professional_profiles table.

use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_users_table::Users;
use super::m20240101_000002_create_professions_table::Professions;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProfessionalProfiles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProfessionalProfiles::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ProfessionalProfiles::UserId)
                            .uuid()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(ProfessionalProfiles::ProfessionId)
                            .uuid()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ProfessionalProfiles::Description).text().null())
                    .col(ColumnDef::new(ProfessionalProfiles::Location).string().null())
                    .col(ColumnDef::new(ProfessionalProfiles::Phone).string().null())
                    .col(ColumnDef::new(ProfessionalProfiles::InstagramLink).string().null())
                    .col(ColumnDef::new(ProfessionalProfiles::FacebookLink).string().null())
                    .col(ColumnDef::new(ProfessionalProfiles::ExtraLink).string().null())
                    .col(
                        ColumnDef::new(ProfessionalProfiles::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProfessionalProfiles::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_professional_profiles_user_id")
                            .from(ProfessionalProfiles::Table, ProfessionalProfiles::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_professional_profiles_profession_id")
                            .from(ProfessionalProfiles::Table, ProfessionalProfiles::ProfessionId)
                            .to(Professions::Table, Professions::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // Listing by profession is the hot read path
        manager
            .create_index(
                Index::create()
                    .name("idx_professional_profiles_profession_id")
                    .table(ProfessionalProfiles::Table)
                    .col(ProfessionalProfiles::ProfessionId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_professional_profiles_profession_id")
                    .table(ProfessionalProfiles::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ProfessionalProfiles::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum ProfessionalProfiles {
    Table,
    Id,
    UserId,
    ProfessionId,
    Description,
    Location,
    Phone,
    InstagramLink,
    FacebookLink,
    ExtraLink,
    CreatedAt,
    UpdatedAt,
}
