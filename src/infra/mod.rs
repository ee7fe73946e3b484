//! Infrastructure layer - Persistence
//!
//! This module handles all storage concerns:
//! - Database connection and migrations
//! - SeaORM entities and repositories
//! - Unit of Work for transaction management

pub mod db;
pub mod repositories;
pub mod unit_of_work;

pub use db::{Database, Migrator};
pub use repositories::{
    ProfessionRepository, ProfessionStore, ProfileRepository, ProfileStore, UserRepository,
    UserStore,
};
pub use unit_of_work::{
    Persistence, TransactionContext, TxProfessionRepository, TxProfileRepository,
    TxUserRepository, UnitOfWork,
};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{MockProfessionRepository, MockProfileRepository, MockUserRepository};
