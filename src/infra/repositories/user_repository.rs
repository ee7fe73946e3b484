//! User repository implementation.

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};
use uuid::Uuid;

use super::entities::user::Entity as UserEntity;
use crate::domain::{NewUserRecord, User};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;

    /// Find user by username
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    /// Find user by email address
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// True if any user already holds this email or this username
    async fn exists_by_email_or_username(&self, email: &str, username: &str) -> AppResult<bool>;

    /// Insert a new user
    async fn create(&self, record: NewUserRecord) -> AppResult<User>;

    /// Number of stored users
    async fn count(&self) -> AppResult<u64>;
}

/// Concrete implementation of UserRepository
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        query::find_by_id(&self.db, id).await
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        query::find_by_username(&self.db, username).await
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        query::find_by_email(&self.db, email).await
    }

    async fn exists_by_email_or_username(&self, email: &str, username: &str) -> AppResult<bool> {
        query::exists_by_email_or_username(&self.db, email, username).await
    }

    async fn create(&self, record: NewUserRecord) -> AppResult<User> {
        query::create(&self.db, record).await
    }

    async fn count(&self) -> AppResult<u64> {
        UserEntity::find()
            .count(&self.db)
            .await
            .map_err(AppError::from)
    }
}

/// Queries shared by the pooled store and transaction-scoped repositories.
pub(crate) mod query {
    use chrono::Utc;
    use sea_orm::{ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, EntityTrait, QueryFilter, Set};
    use uuid::Uuid;

    use super::super::entities::user::{self, ActiveModel, Entity as UserEntity};
    use crate::domain::{NewUserRecord, User};
    use crate::errors::{AppError, AppResult};

    pub async fn find_by_id<C: ConnectionTrait>(db: &C, id: Uuid) -> AppResult<Option<User>> {
        let result = UserEntity::find_by_id(id)
            .one(db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    pub async fn find_by_username<C: ConnectionTrait>(
        db: &C,
        username: &str,
    ) -> AppResult<Option<User>> {
        let result = UserEntity::find()
            .filter(user::Column::Username.eq(username))
            .one(db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    pub async fn find_by_email<C: ConnectionTrait>(db: &C, email: &str) -> AppResult<Option<User>> {
        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    pub async fn exists_by_email_or_username<C: ConnectionTrait>(
        db: &C,
        email: &str,
        username: &str,
    ) -> AppResult<bool> {
        let result = UserEntity::find()
            .filter(
                Condition::any()
                    .add(user::Column::Email.eq(email))
                    .add(user::Column::Username.eq(username)),
            )
            .one(db)
            .await
            .map_err(AppError::from)?;

        Ok(result.is_some())
    }

    pub async fn create<C: ConnectionTrait>(db: &C, record: NewUserRecord) -> AppResult<User> {
        let now = Utc::now();
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            full_name: Set(record.full_name),
            birth_date: Set(record.birth_date),
            national_id: Set(record.national_id),
            phone: Set(record.phone),
            email: Set(record.email),
            username: Set(record.username),
            password_hash: Set(record.password_hash),
            role: Set(record.role.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active_model.insert(db).await.map_err(AppError::from)?;
        Ok(User::from(model))
    }
}
