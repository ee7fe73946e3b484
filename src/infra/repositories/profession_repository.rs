//! Profession repository implementation.

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};

use super::entities::profession::{self, Entity as ProfessionEntity};
use crate::domain::Profession;
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Profession repository trait for dependency injection.
///
/// Names passed in must already be normalized.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ProfessionRepository: Send + Sync {
    /// Find profession by its exact (normalized) name
    async fn find_by_name(&self, name: &str) -> AppResult<Option<Profession>>;

    /// List all professions ordered by name
    async fn list(&self) -> AppResult<Vec<Profession>>;

    /// Insert a new profession
    async fn create(&self, name: String) -> AppResult<Profession>;
}

/// Concrete implementation of ProfessionRepository
pub struct ProfessionStore {
    db: DatabaseConnection,
}

impl ProfessionStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProfessionRepository for ProfessionStore {
    async fn find_by_name(&self, name: &str) -> AppResult<Option<Profession>> {
        query::find_by_name(&self.db, name).await
    }

    async fn list(&self) -> AppResult<Vec<Profession>> {
        let models = ProfessionEntity::find()
            .order_by_asc(profession::Column::Name)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Profession::from).collect())
    }

    async fn create(&self, name: String) -> AppResult<Profession> {
        use sea_orm::{ActiveModelTrait, Set};

        let active_model = profession::ActiveModel {
            id: Set(uuid::Uuid::new_v4()),
            name: Set(name),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(Profession::from(model))
    }
}

pub(crate) mod query {
    use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter};

    use super::super::entities::profession::{self, Entity as ProfessionEntity};
    use crate::domain::Profession;
    use crate::errors::{AppError, AppResult};

    pub async fn find_by_name<C: ConnectionTrait>(
        db: &C,
        name: &str,
    ) -> AppResult<Option<Profession>> {
        let result = ProfessionEntity::find()
            .filter(profession::Column::Name.eq(name))
            .one(db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Profession::from))
    }
}
