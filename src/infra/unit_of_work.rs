//! Unit of Work pattern implementation.
//!
//! Centralizes repository access and owns transaction lifecycle. Work
//! that must be atomic runs inside `transaction`, which hands the
//! closure a `TransactionContext` and commits on `Ok` or rolls back on
//! `Err`.

use async_trait::async_trait;
use sea_orm::{
    AccessMode, ConnectionTrait, DatabaseBackend, DatabaseConnection, DatabaseTransaction,
    IsolationLevel, TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use super::repositories::{
    profession_query, profile_query, user_query, ProfessionRepository, ProfessionStore,
    ProfileRepository, ProfileStore, UserRepository, UserStore,
};
use crate::domain::{NewUserRecord, Profession, ProfessionalProfile, User};
use crate::errors::{AppError, AppResult};

/// Unit of Work trait for dependency injection.
///
/// Note: This trait is not mockable directly due to the generic
/// `transaction` method. Tests implement it by hand around mocked
/// repositories, or run against an in-memory SQLite `Persistence`.
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    /// Get user repository
    fn users(&self) -> Arc<dyn UserRepository>;

    /// Get profession repository
    fn professions(&self) -> Arc<dyn ProfessionRepository>;

    /// Get professional profile repository
    fn profiles(&self) -> Arc<dyn ProfileRepository>;

    /// Execute a closure within a transaction.
    ///
    /// The transaction is committed when the closure returns `Ok` and
    /// rolled back when it returns `Err`.
    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> std::pin::Pin<
                Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>,
            > + Send,
        T: Send;
}

/// Transaction context providing repository access within a transaction.
///
/// All repository operations performed through this context are part
/// of the same database transaction.
pub struct TransactionContext<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TransactionContext<'a> {
    fn new(txn: &'a DatabaseTransaction) -> Self {
        Self { txn }
    }

    pub fn users(&self) -> TxUserRepository<'a> {
        TxUserRepository { txn: self.txn }
    }

    pub fn professions(&self) -> TxProfessionRepository<'a> {
        TxProfessionRepository { txn: self.txn }
    }

    pub fn profiles(&self) -> TxProfileRepository<'a> {
        TxProfileRepository { txn: self.txn }
    }
}

/// Concrete implementation of UnitOfWork over a SeaORM connection
pub struct Persistence {
    db: DatabaseConnection,
    user_repo: Arc<UserStore>,
    profession_repo: Arc<ProfessionStore>,
    profile_repo: Arc<ProfileStore>,
}

impl Persistence {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            user_repo: Arc::new(UserStore::new(db.clone())),
            profession_repo: Arc::new(ProfessionStore::new(db.clone())),
            profile_repo: Arc::new(ProfileStore::new(db.clone())),
            db,
        }
    }

    async fn begin(&self) -> AppResult<DatabaseTransaction> {
        let txn = match self.db.get_database_backend() {
            // SQLite has no per-transaction isolation level or access mode
            DatabaseBackend::Sqlite => self.db.begin().await,
            _ => {
                self.db
                    .begin_with_config(
                        Some(IsolationLevel::ReadCommitted),
                        Some(AccessMode::ReadWrite),
                    )
                    .await
            }
        };
        txn.map_err(AppError::from)
    }
}

#[async_trait]
impl UnitOfWork for Persistence {
    fn users(&self) -> Arc<dyn UserRepository> {
        self.user_repo.clone()
    }

    fn professions(&self) -> Arc<dyn ProfessionRepository> {
        self.profession_repo.clone()
    }

    fn profiles(&self) -> Arc<dyn ProfileRepository> {
        self.profile_repo.clone()
    }

    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> std::pin::Pin<
                Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>,
            > + Send,
        T: Send,
    {
        let txn = self.begin().await?;

        let outcome = f(TransactionContext::new(&txn)).await;

        match outcome {
            Ok(result) => {
                txn.commit().await.map_err(AppError::from)?;
                Ok(result)
            }
            Err(e) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!("Transaction rollback failed: {}", rollback_err);
                } else {
                    tracing::debug!(reason = %e, "Transaction rolled back");
                }
                Err(e)
            }
        }
    }
}

/// Transaction-scoped user repository.
pub struct TxUserRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TxUserRepository<'a> {
    pub async fn exists_by_email_or_username(&self, email: &str, username: &str) -> AppResult<bool> {
        user_query::exists_by_email_or_username(self.txn, email, username).await
    }

    pub async fn create(&self, record: NewUserRecord) -> AppResult<User> {
        user_query::create(self.txn, record).await
    }
}

/// Transaction-scoped profession repository.
pub struct TxProfessionRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TxProfessionRepository<'a> {
    pub async fn find_by_name(&self, name: &str) -> AppResult<Option<Profession>> {
        profession_query::find_by_name(self.txn, name).await
    }
}

/// Transaction-scoped professional profile repository.
pub struct TxProfileRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TxProfileRepository<'a> {
    pub async fn create(&self, user_id: Uuid, profession_id: Uuid) -> AppResult<ProfessionalProfile> {
        profile_query::create(self.txn, user_id, profession_id).await
    }
}

/// Simpler API for executing transactional operations.
///
/// This helper macro reduces boilerplate when using transactions.
#[macro_export]
macro_rules! with_transaction {
    ($uow:expr, |$ctx:ident| $body:expr) => {
        $uow.transaction(|$ctx| Box::pin(async move { $body })).await
    };
}
