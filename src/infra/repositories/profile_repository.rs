//! Professional profile repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Unchanged, ColumnTrait, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use super::entities::professional_profile::{self, ActiveModel, Entity as ProfileEntity};
use super::entities::user::{self, Entity as UserEntity};
use crate::domain::{ProfessionalProfile, User};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Professional profile repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Find the profile owned by a user
    async fn find_by_user_id(&self, user_id: Uuid) -> AppResult<Option<ProfessionalProfile>>;

    /// Create an empty profile linking a user to a profession
    async fn create(&self, user_id: Uuid, profession_id: Uuid) -> AppResult<ProfessionalProfile>;

    /// Persist every mutable field of the profile
    async fn update(&self, profile: ProfessionalProfile) -> AppResult<ProfessionalProfile>;

    /// All profiles of a profession, each with its owner, in one query
    async fn list_by_profession_with_user(
        &self,
        profession_id: Uuid,
    ) -> AppResult<Vec<(ProfessionalProfile, User)>>;

    /// A profile by its own id, with its owner, in one query
    async fn find_by_id_with_user(&self, id: Uuid) -> AppResult<Option<(ProfessionalProfile, User)>>;
}

/// Concrete implementation of ProfileRepository
pub struct ProfileStore {
    db: DatabaseConnection,
}

impl ProfileStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Pair a profile with its eagerly loaded owner. A missing owner means
/// the row violates the foreign key; it is logged and skipped.
fn with_owner(
    (profile, owner): (professional_profile::Model, Option<user::Model>),
) -> Option<(ProfessionalProfile, User)> {
    match owner {
        Some(owner) => Some((ProfessionalProfile::from(profile), User::from(owner))),
        None => {
            tracing::warn!(profile_id = %profile.id, "Professional profile has no owning user");
            None
        }
    }
}

#[async_trait]
impl ProfileRepository for ProfileStore {
    async fn find_by_user_id(&self, user_id: Uuid) -> AppResult<Option<ProfessionalProfile>> {
        let result = ProfileEntity::find()
            .filter(professional_profile::Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(ProfessionalProfile::from))
    }

    async fn create(&self, user_id: Uuid, profession_id: Uuid) -> AppResult<ProfessionalProfile> {
        query::create(&self.db, user_id, profession_id).await
    }

    async fn update(&self, profile: ProfessionalProfile) -> AppResult<ProfessionalProfile> {
        let active = ActiveModel {
            id: Unchanged(profile.id),
            user_id: Unchanged(profile.user_id),
            profession_id: Unchanged(profile.profession_id),
            description: Set(profile.description),
            location: Set(profile.location),
            phone: Set(profile.phone),
            instagram_link: Set(profile.instagram_link),
            facebook_link: Set(profile.facebook_link),
            extra_link: Set(profile.extra_link),
            created_at: Unchanged(profile.created_at),
            updated_at: Set(profile.updated_at),
        };

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Ok(ProfessionalProfile::from(model))
    }

    async fn list_by_profession_with_user(
        &self,
        profession_id: Uuid,
    ) -> AppResult<Vec<(ProfessionalProfile, User)>> {
        let rows = ProfileEntity::find()
            .filter(professional_profile::Column::ProfessionId.eq(profession_id))
            .find_also_related(UserEntity)
            .order_by_asc(professional_profile::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(rows.into_iter().filter_map(with_owner).collect())
    }

    async fn find_by_id_with_user(&self, id: Uuid) -> AppResult<Option<(ProfessionalProfile, User)>> {
        let row = ProfileEntity::find_by_id(id)
            .find_also_related(UserEntity)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(row.and_then(with_owner))
    }
}

pub(crate) mod query {
    use chrono::Utc;
    use sea_orm::{ActiveModelTrait, ConnectionTrait, Set};
    use uuid::Uuid;

    use super::super::entities::professional_profile::ActiveModel;
    use crate::domain::ProfessionalProfile;
    use crate::errors::{AppError, AppResult};

    pub async fn create<C: ConnectionTrait>(
        db: &C,
        user_id: Uuid,
        profession_id: Uuid,
    ) -> AppResult<ProfessionalProfile> {
        let now = Utc::now();
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            profession_id: Set(profession_id),
            description: Set(None),
            location: Set(None),
            phone: Set(None),
            instagram_link: Set(None),
            facebook_link: Set(None),
            extra_link: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active_model.insert(db).await.map_err(AppError::from)?;
        Ok(ProfessionalProfile::from(model))
    }
}
